// src/app.rs
//
// Outils Calc : module App (racine)
// ---------------------------------
// Rôle:
// - Déclarer les sous-modules (état, mémoire, réglages, champ, vues)
// - Ré-exporter AppOutils (pour main.rs: use crate::app::AppOutils;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB) + persistance
//
// Important:
// - Enter est géré dans vue.rs (seulement quand le champ d’expression a le focus).
// - Persistance : eframe Storage, clé eframe::APP_KEY (réglages, mémoire, saisies).

pub mod champ;
pub mod etat;
pub mod memoire;
pub mod pages;
pub mod reglages;
pub mod vue;

// Ré-export pratique : `use crate::app::AppOutils;`
pub use etat::AppOutils;

use eframe::egui;

use etat::Page;

impl AppOutils {
    /// État relu du stockage si présent, sinon état par défaut.
    pub fn nouveau(cc: &eframe::CreationContext<'_>) -> Self {
        let app = cc
            .storage
            .and_then(|s| eframe::get_value::<AppOutils>(s, eframe::APP_KEY))
            .unwrap_or_default()
            .apres_chargement();
        tracing::info!(page = ?app.page, memoire = app.memoire.valeurs().len(), "état chargé");
        app
    }
}

impl eframe::App for AppOutils {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(self.reglages.theme.visuals());

        // ESC = effacer l’expression (comme bouton "C"), page Calcul seulement.
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc && self.page == Page::Calcul {
            self.vider_calcul();
        }

        self.ui(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
        tracing::debug!("état sauvegardé");
    }
}
