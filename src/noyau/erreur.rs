// src/noyau/erreur.rs
//
// Erreurs du noyau (évaluateur + triangle)
// ----------------------------------------
// - Une variante = un genre d’erreur, message court pour l’UI.
// - Les positions sont des index de caractères dans l’entrée d’origine.

use thiserror::Error;

/// Échec d’évaluation d’une expression. Jamais de valeur partielle avec.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErreurEval {
    #[error("caractère invalide '{car}' (position {position})")]
    CaractereInvalide { car: char, position: usize },

    #[error("parenthèses déséquilibrées (position {position})")]
    ParenthesesDesequilibrees { position: usize },

    #[error("erreur de syntaxe")]
    Syntaxe,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("opérateur invalide")]
    OperateurInvalide,
}

/// Résolution impossible du triangle rectangle.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ErreurTriangle {
    #[error("trop de valeurs saisies (2 au maximum)")]
    TropDeValeurs,

    #[error("un côté doit être strictement positif")]
    CoteNonPositif,

    #[error("un angle doit être compris entre 0° et 90° (exclus)")]
    AngleHorsDomaine,

    #[error("l’hypoténuse doit être plus longue que chaque côté")]
    HypotenuseTropCourte,
}
