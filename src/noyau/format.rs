// src/noyau/format.rs
//
// Affichage des nombres (jamais relu par le noyau)
// - formater_affichage : nombre fixe de décimales + séparateur choisi
// - formater_compact   : chiffres significatifs, zéros finaux retirés (listes de valeurs)

use super::saisie::Separateur;

/// Nombre fixe de décimales. Valeur non finie => "".
pub fn formater_affichage(valeur: f64, chiffres: usize, sep: Separateur) -> String {
    if !valeur.is_finite() {
        return String::new();
    }
    let s = format!("{:.*}", chiffres, valeur);
    avec_separateur(sans_moins_zero(s), sep)
}

/// Chiffres significatifs (au moins 1), sans zéros inutiles.
///
/// Entiers affichés tels quels ; pas de notation exponentielle.
pub fn formater_compact(valeur: f64, significatifs: usize, sep: Separateur) -> String {
    if !valeur.is_finite() {
        return String::new();
    }
    if valeur.fract() == 0.0 {
        return avec_separateur(sans_moins_zero(format!("{valeur:.0}")), sep);
    }

    let significatifs = significatifs.max(1) as i32;
    let exposant = valeur.abs().log10().floor() as i32;
    let decimales = (significatifs - 1 - exposant).max(0) as usize;

    let mut s = format!("{:.*}", decimales, valeur);
    if s.contains('.') {
        let garde = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(garde);
    }
    avec_separateur(sans_moins_zero(s), sep)
}

/// "-0", "-0.00" … deviennent "0", "0.00".
fn sans_moins_zero(s: String) -> String {
    match s.strip_prefix('-') {
        Some(reste) if reste.chars().all(|c| c == '0' || c == '.') => reste.to_string(),
        _ => s,
    }
}

fn avec_separateur(s: String, sep: Separateur) -> String {
    match sep {
        Separateur::Point => s,
        Separateur::Virgule => s.replace('.', ","),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affichage_decimales_fixes() {
        assert_eq!(formater_affichage(1234.56789, 4, Separateur::Point), "1234.5679");
        assert_eq!(formater_affichage(1234.56789, 2, Separateur::Virgule), "1234,57");
        assert_eq!(formater_affichage(3.0, 0, Separateur::Virgule), "3");
        assert_eq!(formater_affichage(-0.00001, 2, Separateur::Point), "0.00");
        assert_eq!(formater_affichage(f64::INFINITY, 2, Separateur::Point), "");
    }

    #[test]
    fn compact_significatifs() {
        assert_eq!(formater_compact(2.5, 3, Separateur::Point), "2.5");
        assert_eq!(formater_compact(1.0 / 3.0, 3, Separateur::Point), "0.333");
        assert_eq!(formater_compact(123.456, 3, Separateur::Virgule), "123");
        assert_eq!(formater_compact(12345.678, 3, Separateur::Point), "12346");
        assert_eq!(formater_compact(0.1 + 0.2, 12, Separateur::Point), "0.3");
        assert_eq!(formater_compact(-7.0, 3, Separateur::Point), "-7");
    }
}
