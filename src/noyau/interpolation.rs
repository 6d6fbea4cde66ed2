// src/noyau/interpolation.rs
//
// Suites de valeurs (pages « Répartir » et « Multiples »)
// - repartir  : n échantillons de x0 à x1 inclus (pas = (x1-x0)/(n-1))
// - multiples : debut + pas*i, i = 0..n
// - lire_nombre_pas : saisie -> nombre d’échantillons borné

use num_traits::ToPrimitive;

use super::saisie::vers_nombre;

/// Garde-fou : au-delà, la liste devient illisible (et coûteuse à afficher).
pub const PAS_MAX_REPARTIR: usize = 10_000;

/// Borne de la page « Multiples ».
pub const PAS_MAX_MULTIPLES: usize = 999;

/// Répartition linéaire, bornes incluses. `n == 1` => `[x0]`.
pub fn repartir(x0: f64, x1: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![x0],
        _ => {
            let pas = (x1 - x0) / (n - 1) as f64;
            (0..n).map(|i| x0 + pas * i as f64).collect()
        }
    }
}

/// `n` valeurs à pas constant à partir de `debut`.
pub fn multiples(debut: f64, pas: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| debut + pas * i as f64).collect()
}

/// Nombre d’échantillons saisi : partie entière, ramenée dans `1..=max`.
/// Texte illisible => None.
pub fn lire_nombre_pas(texte: &str, max: usize) -> Option<usize> {
    let n = vers_nombre(texte)?.floor();
    if n < 1.0 {
        return Some(1);
    }
    Some(n.to_usize().map_or(max, |n| n.min(max)))
}
