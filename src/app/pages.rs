// src/app/pages.rs
//
// Pages outils : Répartir, Multiples, Diagonale, Réglages
// -------------------------------------------------------
// - Saisies = champs numériques (normalisés, cibles possibles de la mémoire)
// - Valeurs produites = puces cliquables (clic => mémoire)
// - Rien de calculé ici : lecture des saisies + appel au noyau (via etat.rs)

use eframe::egui;

use super::champ::{champ_saisie, Mode};
use super::etat::{AppOutils, ChampId};
use super::reglages::{Theme, CHIFFRES_MAX, MEMOIRE_MAX};
use super::vue::champ_monospace;
use crate::noyau::format::formater_compact;
use crate::noyau::triangle::{resoudre, Resolution, Triangle};
use crate::noyau::Separateur;

/// Chiffres significatifs des puces.
const SIGNIFICATIFS_REPARTIR: usize = 12;
const SIGNIFICATIFS_MULTIPLES: usize = 3;

impl AppOutils {
    /// Champ numérique lié à l’état ; la chaîne est sortie le temps du widget.
    fn champ_numerique(&mut self, ui: &mut egui::Ui, champ: ChampId) {
        let mode = Mode::Numerique(self.reglages.separateur);
        let mut texte = std::mem::take(self.texte_champ_mut(champ));
        champ_saisie(ui, champ, &mut texte, mode, &mut self.cible, &mut self.focus);
        *self.texte_champ_mut(champ) = texte;
    }

    fn grille_champs(&mut self, ui: &mut egui::Ui, id: &str, lignes: &[(&str, ChampId)]) {
        egui::Grid::new(id)
            .num_columns(2)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                for &(titre, champ) in lignes {
                    ui.label(titre);
                    self.champ_numerique(ui, champ);
                    ui.end_row();
                }
            });
    }

    /// Valeurs cliquables ; un clic les met en mémoire.
    fn puces(&mut self, ui: &mut egui::Ui, valeurs: &[f64], significatifs: usize) {
        let sep = self.reglages.separateur;
        ui.horizontal_wrapped(|ui| {
            for &v in valeurs {
                let resp = ui.button(formater_compact(v, significatifs, sep));
                if resp.clicked() {
                    self.memoire.inserer(v);
                }
            }
        });
    }

    /* ------------------------ Répartir ------------------------ */

    pub(super) fn page_repartir(&mut self, ui: &mut egui::Ui) {
        ui.heading("Répartir");
        ui.label("Valeurs régulièrement espacées, bornes comprises.");
        ui.add_space(6.0);

        self.grille_champs(
            ui,
            "grille_repartir",
            &[
                ("De", ChampId::RepartirDebut),
                ("À", ChampId::RepartirFin),
                ("Nombre de valeurs", ChampId::RepartirNombre),
            ],
        );

        ui.add_space(8.0);
        match self.repartir.valeurs() {
            Some(valeurs) => self.puces(ui, &valeurs, SIGNIFICATIFS_REPARTIR),
            None => {
                ui.weak("saisie incomplète");
            }
        }
    }

    /* ------------------------ Multiples ------------------------ */

    pub(super) fn page_multiples(&mut self, ui: &mut egui::Ui) {
        ui.heading("Multiples");
        ui.label("Début, début + pas, début + 2 × pas…");
        ui.add_space(6.0);

        self.grille_champs(
            ui,
            "grille_multiples",
            &[
                ("Début", ChampId::MultiplesDebut),
                ("Pas", ChampId::MultiplesPas),
                ("Nombre de valeurs", ChampId::MultiplesNombre),
            ],
        );

        ui.add_space(8.0);
        match self.multiples.valeurs() {
            Some(valeurs) => self.puces(ui, &valeurs, SIGNIFICATIFS_MULTIPLES),
            None => {
                ui.weak("saisie incomplète");
            }
        }
    }

    /* ------------------------ Diagonale ------------------------ */

    pub(super) fn page_diagonale(&mut self, ui: &mut egui::Ui) {
        const LIGNES: [(&str, ChampId); 5] = [
            ("a (côté vertical)", ChampId::CoteA),
            ("b (côté horizontal)", ChampId::CoteB),
            ("c (hypoténuse)", ChampId::CoteC),
            ("α (°, opposé à a)", ChampId::Alpha),
            ("β (°)", ChampId::Beta),
        ];

        ui.heading("Diagonale");
        ui.label("Triangle rectangle : deux valeurs au plus, dont au moins un côté.");
        ui.add_space(6.0);

        let calcul: Result<Resolution, String> = match self.diagonale.entrees() {
            Ok(e) => resoudre(&e).map_err(|e| e.to_string()),
            Err(champ) => Err(format!("{} : nombre illisible", titre_champ(&LIGNES, champ))),
        };

        egui::Grid::new("grille_diagonale")
            .num_columns(2)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                for (titre, champ) in LIGNES {
                    ui.label(titre);
                    let vide = self.texte_champ_mut(champ).trim().is_empty();
                    match valeur_calculee(&calcul, champ).filter(|_| vide) {
                        // champ verrouillé : valeur calculée, clic => mémoire
                        Some(v) => {
                            let texte = egui::RichText::new(self.reglages.formater(v)).strong();
                            let bouton = egui::Button::new(texte)
                                .min_size(egui::vec2(ui.available_width(), 0.0));
                            let resp = ui
                                .add(bouton)
                                .on_hover_text("valeur calculée : clic = mémoire");
                            if resp.clicked() {
                                self.memoire.inserer(v);
                            }
                        }
                        None => {
                            self.champ_numerique(ui, champ);
                        }
                    }
                    ui.end_row();
                }
            });

        ui.add_space(6.0);
        if let Err(msg) = &calcul {
            ui.colored_label(ui.visuals().error_fg_color, msg.as_str());
        }

        if ui.button("Effacer").clicked() {
            self.diagonale.vider();
            self.cible = None;
        }

        if let Ok(Resolution::Complet(t)) = &calcul {
            ui.add_space(8.0);
            dessiner_triangle(ui, t);
        }
    }

    /* ------------------------ Réglages ------------------------ */

    pub(super) fn page_reglages(&mut self, ui: &mut egui::Ui) {
        ui.heading("Réglages");
        ui.add_space(6.0);

        egui::Grid::new("grille_reglages")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("Séparateur décimal");
                ui.horizontal(|ui| {
                    for sep in [Separateur::Virgule, Separateur::Point] {
                        let choisi = self.reglages.separateur == sep;
                        if ui.radio(choisi, sep.car().to_string()).clicked() && !choisi {
                            self.set_separateur(sep);
                        }
                    }
                });
                ui.end_row();

                ui.label("Décimales affichées");
                let mut chiffres = self.reglages.chiffres;
                if ui
                    .add(egui::DragValue::new(&mut chiffres).range(0..=CHIFFRES_MAX))
                    .changed()
                {
                    self.reglages.set_chiffres(chiffres);
                }
                ui.end_row();

                ui.label("Taille de la mémoire");
                let mut max = self.reglages.memoire_max;
                if ui
                    .add(egui::DragValue::new(&mut max).range(1..=MEMOIRE_MAX))
                    .changed()
                {
                    self.set_memoire_max(max);
                }
                ui.end_row();

                ui.label("Thème");
                ui.horizontal(|ui| {
                    ui.radio_value(&mut self.reglages.theme, Theme::Sombre, "Sombre");
                    ui.radio_value(&mut self.reglages.theme, Theme::Clair, "Clair");
                });
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.label("Aperçu :");
        champ_monospace(ui, "apercu_reglages", &self.reglages.formater(1234.56789), 1);

        ui.add_space(8.0);
        if ui.button("Réglages par défaut").clicked() {
            self.reinitialiser_reglages();
        }
    }
}

fn titre_champ(lignes: &[(&'static str, ChampId)], champ: ChampId) -> &'static str {
    lignes
        .iter()
        .find(|(_, c)| *c == champ)
        .map_or("?", |&(titre, _)| titre)
}

fn valeur_calculee(calcul: &Result<Resolution, String>, champ: ChampId) -> Option<f64> {
    match calcul {
        Ok(Resolution::Complet(t)) => match champ {
            ChampId::CoteA => Some(t.a),
            ChampId::CoteB => Some(t.b),
            ChampId::CoteC => Some(t.c),
            ChampId::Alpha => Some(t.alpha),
            ChampId::Beta => Some(t.beta),
            _ => None,
        },
        Ok(Resolution::Incomplet { alpha, beta }) => match champ {
            ChampId::Alpha => *alpha,
            ChampId::Beta => *beta,
            _ => None,
        },
        Err(_) => None,
    }
}

/// Croquis à l’échelle : angle droit en bas à gauche, a vertical, b horizontal.
fn dessiner_triangle(ui: &mut egui::Ui, t: &Triangle) {
    let (resp, painter) = ui.allocate_painter(
        egui::vec2(ui.available_width(), 180.0),
        egui::Sense::hover(),
    );
    let zone = resp.rect.shrink(24.0);
    let echelle = (zone.width() / t.b as f32).min(zone.height() / t.a as f32);
    if !echelle.is_finite() || echelle <= 0.0 {
        return;
    }

    let o = zone.left_bottom();
    let pb = o + egui::vec2(t.b as f32 * echelle, 0.0);
    let pa = o - egui::vec2(0.0, t.a as f32 * echelle);

    let couleur = ui.visuals().text_color();
    let trait_plein = egui::Stroke::new(2.0, couleur);
    painter.add(egui::Shape::closed_line(vec![o, pb, pa], trait_plein));

    // marque de l’angle droit
    let m = 10.0;
    let fin = egui::Stroke::new(1.0, couleur);
    painter.line_segment([o - egui::vec2(0.0, m), o + egui::vec2(m, -m)], fin);
    painter.line_segment([o + egui::vec2(m, -m), o + egui::vec2(m, 0.0)], fin);

    let police = egui::FontId::proportional(14.0);
    let milieu = |p: egui::Pos2, q: egui::Pos2| p + (q - p) * 0.5;
    painter.text(
        milieu(o, pa) - egui::vec2(6.0, 0.0),
        egui::Align2::RIGHT_CENTER,
        "a",
        police.clone(),
        couleur,
    );
    painter.text(
        milieu(o, pb) + egui::vec2(0.0, 4.0),
        egui::Align2::CENTER_TOP,
        "b",
        police.clone(),
        couleur,
    );
    painter.text(
        milieu(pa, pb) + egui::vec2(6.0, -6.0),
        egui::Align2::LEFT_BOTTOM,
        "c",
        police.clone(),
        couleur,
    );
    painter.text(
        pb + egui::vec2(-22.0, -4.0),
        egui::Align2::RIGHT_BOTTOM,
        "α",
        police.clone(),
        couleur,
    );
    painter.text(
        pa + egui::vec2(4.0, 20.0),
        egui::Align2::LEFT_TOP,
        "β",
        police,
        couleur,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn champs_verrouilles_selon_la_resolution() {
        let t = Triangle {
            a: 3.0,
            b: 4.0,
            c: 5.0,
            alpha: 36.87,
            beta: 53.13,
        };
        let complet = Ok(Resolution::Complet(t));
        assert_eq!(valeur_calculee(&complet, ChampId::CoteC), Some(5.0));
        assert_eq!(valeur_calculee(&complet, ChampId::Expression), None);

        let incomplet = Ok(Resolution::Incomplet {
            alpha: Some(30.0),
            beta: Some(60.0),
        });
        assert_eq!(valeur_calculee(&incomplet, ChampId::Beta), Some(60.0));
        assert_eq!(valeur_calculee(&incomplet, ChampId::CoteA), None);

        assert_eq!(valeur_calculee(&Err("x".into()), ChampId::Alpha), None);
    }
}
