//! Noyau pur (aucun état, aucune E/S)
//!
//! Organisation interne :
//! - erreur.rs        : erreurs typées (évaluateur, triangle)
//! - jetons.rs        : tokenisation + moins unaire
//! - rpn.rs           : shunting-yard + évaluation RPN
//! - eval.rs          : pipeline complet de l’évaluateur
//! - saisie.rs        : normalisation des champs numériques (curseur stable)
//! - format.rs        : affichage des nombres
//! - interpolation.rs : répartition linéaire, multiples
//! - triangle.rs      : triangle rectangle

pub mod erreur;
pub mod eval;
pub mod format;
pub mod interpolation;
pub mod jetons;
pub mod rpn;
pub mod saisie;
pub mod triangle;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use eval::{evaluer, evaluer_avec_demarche, Demarche, ResultatEval};
pub use saisie::{formater_insertion, normaliser, vers_nombre, Separateur};
