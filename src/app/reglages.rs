//! src/app/reglages.rs
//!
//! Réglages persistants : séparateur décimal, décimales affichées, taille de
//! la barre mémoire, thème.
//!
//! Les bornes sont appliquées ici (garde-fous), la vue ne fait que proposer.

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::noyau::format::formater_affichage;
use crate::noyau::Separateur;

/// Décimales affichées par défaut.
const CHIFFRES_DEFAUT: usize = 4;

/// Garde-fou affichage : au-delà, f64 n’a plus rien à dire.
pub const CHIFFRES_MAX: usize = 12;

/// Taille par défaut de la barre mémoire.
const MEMOIRE_DEFAUT: usize = 100;

/// Garde-fou : on borne la barre mémoire (anti-abus / stockage).
pub const MEMOIRE_MAX: usize = 500;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Sombre,
    Clair,
}

impl Theme {
    pub fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Sombre => egui::Visuals::dark(),
            Theme::Clair => egui::Visuals::light(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reglages {
    pub separateur: Separateur,
    pub chiffres: usize,
    pub memoire_max: usize,
    pub theme: Theme,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            separateur: Separateur::Virgule,
            chiffres: CHIFFRES_DEFAUT,
            memoire_max: MEMOIRE_DEFAUT,
            theme: Theme::Sombre,
        }
    }
}

impl Reglages {
    /// Affichage d’une valeur calculée selon les réglages.
    pub fn formater(&self, valeur: f64) -> String {
        formater_affichage(valeur, self.chiffres, self.separateur)
    }

    pub fn set_chiffres(&mut self, chiffres: usize) {
        self.chiffres = chiffres.min(CHIFFRES_MAX);
    }

    pub fn set_memoire_max(&mut self, max: usize) {
        self.memoire_max = max.clamp(1, MEMOIRE_MAX);
    }

    /// Valeurs bornées après lecture du stockage (fichier édité à la main, ancienne version…).
    pub fn bornes(mut self) -> Self {
        self.set_chiffres(self.chiffres);
        self.set_memoire_max(self.memoire_max);
        self
    }
}
