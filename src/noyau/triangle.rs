// src/noyau/triangle.rs
//
// Triangle rectangle (page « Diagonale »)
// ---------------------------------------
// Conventions :
// - angle droit entre a et b, c = hypoténuse
// - α est opposé à a (tan α = a/b), β = 90° - α
// - angles en DEGRÉS
//
// Au plus deux valeurs saisies. Un angle suffit à fixer l’autre ; un angle + un
// côté, ou deux côtés, fixent tout le triangle.

use super::erreur::ErreurTriangle;

/// Valeurs saisies (None = champ vide).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Entrees {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
}

impl Entrees {
    fn nb_fournis(&self) -> usize {
        [self.a, self.b, self.c, self.alpha, self.beta]
            .iter()
            .filter(|v| v.is_some())
            .count()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resolution {
    /// Pas assez de données : seuls les angles sont éventuellement connus.
    Incomplet {
        alpha: Option<f64>,
        beta: Option<f64>,
    },
    Complet(Triangle),
}

pub fn resoudre(e: &Entrees) -> Result<Resolution, ErreurTriangle> {
    if e.nb_fournis() > 2 {
        return Err(ErreurTriangle::TropDeValeurs);
    }
    if [e.a, e.b, e.c].into_iter().flatten().any(|v| v <= 0.0) {
        return Err(ErreurTriangle::CoteNonPositif);
    }
    if [e.alpha, e.beta]
        .into_iter()
        .flatten()
        .any(|v| v <= 0.0 || v >= 90.0)
    {
        return Err(ErreurTriangle::AngleHorsDomaine);
    }

    // α prioritaire si les deux angles sont saisis
    let angle = e.alpha.or(e.beta.map(|beta| 90.0 - beta));

    if let Some(alpha) = angle {
        let beta = 90.0 - alpha;
        let r = alpha.to_radians();

        let (a, b, c) = if let Some(a) = e.a {
            (a, a / r.tan(), a / r.sin())
        } else if let Some(b) = e.b {
            (b * r.tan(), b, b / r.cos())
        } else if let Some(c) = e.c {
            (c * r.sin(), c * r.cos(), c)
        } else {
            return Ok(Resolution::Incomplet {
                alpha: Some(alpha),
                beta: Some(beta),
            });
        };

        return Ok(Resolution::Complet(Triangle {
            a,
            b,
            c,
            alpha,
            beta,
        }));
    }

    let (a, b, c) = match (e.a, e.b, e.c) {
        (Some(a), Some(b), None) => (a, b, a.hypot(b)),
        (Some(a), None, Some(c)) => {
            if c <= a {
                return Err(ErreurTriangle::HypotenuseTropCourte);
            }
            (a, (c * c - a * a).sqrt(), c)
        }
        (None, Some(b), Some(c)) => {
            if c <= b {
                return Err(ErreurTriangle::HypotenuseTropCourte);
            }
            ((c * c - b * b).sqrt(), b, c)
        }
        _ => {
            return Ok(Resolution::Incomplet {
                alpha: None,
                beta: None,
            })
        }
    };

    let alpha = a.atan2(b).to_degrees();
    Ok(Resolution::Complet(Triangle {
        a,
        b,
        c,
        alpha,
        beta: 90.0 - alpha,
    }))
}
