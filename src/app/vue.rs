// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// - Onglets en haut, barre mémoire en bas, page active au centre
// - Page Calcul ici (champ + résultat + pavé + démarche) ; autres pages dans pages.rs
// - Tactile : gros boutons, focus redonné au champ après un clic (FocusDemande)
// - Mémoire : clic = dépôt dans le champ visé (sinon presse-papiers), clic droit = retirer

use eframe::egui;

use super::champ::{champ_saisie, Mode};
use super::etat::{AppOutils, ChampId, Depot, Page};

impl AppOutils {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("onglets").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                for page in Page::TOUTES {
                    if ui.selectable_label(self.page == page, page.titre()).clicked() {
                        self.changer_page(page);
                    }
                }
            });
        });

        egui::TopBottomPanel::bottom("barre_memoire").show(ctx, |ui| {
            self.ui_memoire(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            // Densité “calc”
            ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.page {
                    Page::Calcul => self.page_calcul(ui),
                    Page::Repartir => self.page_repartir(ui),
                    Page::Multiples => self.page_multiples(ui),
                    Page::Diagonale => self.page_diagonale(ui),
                    Page::Reglages => self.page_reglages(ui),
                });
        });
    }

    /* ------------------------ Barre mémoire ------------------------ */

    fn ui_memoire(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("Mémoire :");
            let vider = ui.add_enabled(!self.memoire.is_empty(), egui::Button::new("Vider"));
            if vider.clicked() {
                self.memoire.vider();
            }
        });

        if self.memoire.is_empty() {
            ui.weak("vide : cliquer un résultat pour l’y mettre");
            ui.add_space(4.0);
            return;
        }

        // copie : les clics modifient la mémoire pendant le parcours
        let valeurs = self.memoire.valeurs().to_vec();
        let mut a_retirer = None;

        egui::ScrollArea::horizontal()
            .id_salt("defilement_memoire")
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    for (i, v) in valeurs.iter().copied().enumerate() {
                        let bouton = egui::Button::new(self.reglages.formater(v))
                            .min_size(egui::vec2(0.0, 28.0));
                        let resp = ui
                            .add(bouton)
                            .on_hover_text("clic : insérer, clic droit : retirer");

                        if resp.clicked() {
                            if let Depot::PressePapiers(texte) = self.deposer_valeur(v) {
                                ui.ctx().copy_text(texte);
                            }
                        }
                        if resp.secondary_clicked() {
                            a_retirer = Some(i);
                        }
                    }
                });
            });

        if let Some(i) = a_retirer {
            self.memoire.retirer(i);
        }
        ui.add_space(4.0);
    }

    /* ------------------------ Page Calcul ------------------------ */

    fn page_calcul(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");
        let resp = champ_saisie(
            ui,
            ChampId::Expression,
            &mut self.calcul.expr,
            Mode::Expression,
            &mut self.cible,
            &mut self.focus,
        );

        // Enter (clavier PC, “Enter” virtuel mobile) : comme “=”
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.egal();
        }

        ui.add_space(6.0);
        self.ui_resultat(ui);

        ui.add_space(8.0);
        self.ui_pave(ui);

        ui.add_space(8.0);
        ui.separator();
        self.ui_demarche(ui);
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        let (texte, erreur) = match self.calcul.resultat().0 {
            Ok(Some(v)) => (self.reglages.formater(*v), false),
            Ok(None) => (String::new(), false),
            Err(e) => (e.to_string(), true),
        };

        if erreur {
            ui.colored_label(ui.visuals().error_fg_color, texte);
            return;
        }

        let etiquette = egui::RichText::new(format!("= {texte}")).monospace().size(20.0);
        let bouton = egui::Button::new(etiquette).min_size(egui::vec2(ui.available_width(), 36.0));
        let resp = ui
            .add_enabled(!texte.is_empty(), bouton)
            .on_hover_text("clic : mettre en mémoire");
        if resp.clicked() {
            self.memoriser_resultat();
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        // (étiquette, touche)
        const LIGNES: [[(&str, Touche); 5]; 4] = [
            [
                ("7", Touche::Texte("7")),
                ("8", Touche::Texte("8")),
                ("9", Touche::Texte("9")),
                ("÷", Touche::Texte("÷")),
                ("DEL", Touche::Effacer),
            ],
            [
                ("4", Touche::Texte("4")),
                ("5", Touche::Texte("5")),
                ("6", Touche::Texte("6")),
                ("×", Touche::Texte("*")),
                ("(", Touche::Texte("(")),
            ],
            [
                ("1", Touche::Texte("1")),
                ("2", Touche::Texte("2")),
                ("3", Touche::Texte("3")),
                ("−", Touche::Texte("-")),
                (")", Touche::Texte(")")),
            ],
            [
                ("0", Touche::Texte("0")),
                (".", Touche::Texte(".")),
                ("C", Touche::Vider),
                ("+", Touche::Texte("+")),
                ("=", Touche::Egal),
            ],
        ];

        egui::Grid::new("pave_calcul")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in LIGNES {
                    for (etiquette, touche) in ligne {
                        let resp = ui.add_sized([52.0, 36.0], egui::Button::new(etiquette));
                        if resp.clicked() {
                            match touche {
                                Touche::Texte(t) => self.inserer_calcul(t),
                                Touche::Effacer => self.effacer_arriere(),
                                Touche::Vider => self.vider_calcul(),
                                Touche::Egal => self.egal(),
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        let demarche = self.calcul.resultat().1;
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                champ_demarche(ui, "Jetons", "demarche_jetons", &demarche.jetons);
                champ_demarche(ui, "RPN", "demarche_rpn", &demarche.rpn);
            });
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Texte(&'static str),
    Effacer,
    Vider,
    Egal,
}

fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
    ui.add_space(4.0);
    ui.label(format!("{titre} :"));
    champ_monospace(ui, id, contenu, 2);
}

/// Lecture seule “stable” : cadre + label monospace (pas de TextEdit).
pub(super) fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
    egui::Frame::group(ui.style())
        .fill(ui.visuals().extreme_bg_color)
        .show(ui, |ui| {
            ui.push_id(id, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(
                    rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                );
                ui.monospace(contenu);
            });
        });
}
