//! src/app/memoire.rs
//!
//! Barre mémoire : valeurs produites, la plus récente en tête.
//!
//! Contrats :
//! - insertion en tête, ignorée si la valeur est déjà en tête
//! - longueur bornée : on coupe par la queue
//! - valeurs non finies refusées (rien à réinsérer ensuite)

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Memoire {
    valeurs: Vec<f64>,
    max: usize,
}

impl Memoire {
    pub fn new(max: usize) -> Self {
        Self {
            valeurs: Vec::new(),
            max: max.max(1),
        }
    }

    pub fn valeurs(&self) -> &[f64] {
        &self.valeurs
    }

    pub fn is_empty(&self) -> bool {
        self.valeurs.is_empty()
    }

    /// Retourne false si rien n’a été ajouté (doublon de tête, non fini).
    pub fn inserer(&mut self, valeur: f64) -> bool {
        if !valeur.is_finite() || self.valeurs.first() == Some(&valeur) {
            return false;
        }
        self.valeurs.insert(0, valeur);
        self.valeurs.truncate(self.max);
        tracing::debug!(valeur, taille = self.valeurs.len(), "mémoire: ajout");
        true
    }

    pub fn retirer(&mut self, index: usize) -> Option<f64> {
        (index < self.valeurs.len()).then(|| self.valeurs.remove(index))
    }

    pub fn vider(&mut self) {
        self.valeurs.clear();
    }

    pub fn set_max(&mut self, max: usize) {
        self.max = max.max(1);
        self.valeurs.truncate(self.max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_recent_en_tete() {
        let mut m = Memoire::new(10);
        m.inserer(1.0);
        m.inserer(2.0);
        assert_eq!(m.valeurs(), &[2.0, 1.0]);
    }

    #[test]
    fn doublon_de_tete_ignore() {
        let mut m = Memoire::new(10);
        assert!(m.inserer(3.0));
        assert!(!m.inserer(3.0));
        assert!(m.inserer(4.0));
        // doublon non adjacent accepté
        assert!(m.inserer(3.0));
        assert_eq!(m.valeurs(), &[3.0, 4.0, 3.0]);
    }

    #[test]
    fn longueur_bornee_par_la_queue() {
        let mut m = Memoire::new(3);
        for v in 1..=5 {
            m.inserer(v as f64);
        }
        assert_eq!(m.valeurs(), &[5.0, 4.0, 3.0]);

        m.set_max(2);
        assert_eq!(m.valeurs(), &[5.0, 4.0]);
    }

    #[test]
    fn non_fini_refuse() {
        let mut m = Memoire::new(3);
        assert!(!m.inserer(f64::NAN));
        assert!(!m.inserer(f64::INFINITY));
        assert!(m.is_empty());
    }

    #[test]
    fn retirer_et_vider() {
        let mut m = Memoire::new(5);
        m.inserer(1.0);
        m.inserer(2.0);
        assert_eq!(m.retirer(1), Some(1.0));
        assert_eq!(m.retirer(7), None);
        m.vider();
        assert!(m.is_empty());
    }
}
