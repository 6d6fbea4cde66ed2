//! Noyau : évaluation (pipeline réel)
//!
//! glyphes (× ÷) -> jetons -> moins unaire -> RPN -> valeur f64
//!
//! Entrée vide (ou seulement des espaces) : `Ok(None)`, c.-à-d. « pas encore
//! de résultat ». Ce n’est ni une erreur ni zéro.

use super::erreur::ErreurEval;
use super::jetons::{format_tokens, moins_unaire, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// Résultat d’évaluation : `None` = rien à afficher.
pub type ResultatEval = Result<Option<f64>, ErreurEval>;

/// Trace textuelle du pipeline (panneau « Démarche »).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression arithmétique.
pub fn evaluer(expr: &str) -> ResultatEval {
    evaluer_avec_demarche(expr).0
}

/// Comme [`evaluer`], mais retourne aussi la démarche (jetons + RPN).
/// La démarche est remplie aussi loin que le pipeline a pu aller.
pub fn evaluer_avec_demarche(expr: &str) -> (ResultatEval, Demarche) {
    let mut d = Demarche::default();

    if expr.trim().is_empty() {
        return (Ok(None), d);
    }

    let r = pipeline(expr, &mut d).map(Some);

    match &r {
        Ok(v) => tracing::trace!(expr, ?v, "expression évaluée"),
        Err(e) => tracing::trace!(expr, %e, "expression refusée"),
    }

    (r, d)
}

fn pipeline(expr: &str, d: &mut Demarche) -> Result<f64, ErreurEval> {
    // 1) Jetons (+ moins unaire)
    let jetons = moins_unaire(tokenize(expr)?);
    d.jetons = format_tokens(&jetons);

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    d.rpn = format_tokens(&rpn);

    // 3) Valeur
    eval_rpn(&rpn)
}
