// src/app/champ.rs
//
// Champ de saisie branché sur le noyau
// ------------------------------------
// - Pré-filtre : caractères hors classe retirés (le curseur suit)
// - Champs numériques : normalisation à chaque édition, curseur recalé
// - Focus : le champ devient la cible de la mémoire
// - Demande de focus (après pavé / dépôt mémoire) : focus + curseur placé

use eframe::egui;
use egui::text::{CCursor, CCursorRange};
use egui::text_edit::TextEditState;

use super::etat::{ChampId, Cible, FocusDemande};
use crate::noyau::{normaliser, Separateur};

#[derive(Clone, Copy, Debug)]
pub enum Mode {
    /// Nombre seul, affiché avec ce séparateur.
    Numerique(Separateur),
    /// Expression du calcul (toujours avec '.').
    Expression,
}

impl Mode {
    fn autorise(self, c: char) -> bool {
        match self {
            Mode::Numerique(_) => c.is_ascii_digit() || matches!(c, '.' | ',' | '-'),
            Mode::Expression => {
                c.is_ascii_digit()
                    || c.is_whitespace()
                    || matches!(c, '+' | '-' | '*' | '/' | '^' | '(' | ')' | '.' | '×' | '÷')
            }
        }
    }
}

/// Retire les caractères refusés ; le curseur recule d’autant qu’il y en avait avant lui.
pub fn filtrer(texte: &str, curseur: usize, garder: impl Fn(char) -> bool) -> (String, usize) {
    let mut out = String::with_capacity(texte.len());
    let mut retires_avant = 0;
    for (i, c) in texte.chars().enumerate() {
        if garder(c) {
            out.push(c);
        } else if i < curseur {
            retires_avant += 1;
        }
    }
    let longueur = out.chars().count();
    (out, curseur.saturating_sub(retires_avant).min(longueur))
}

fn placer_curseur(ctx: &egui::Context, id: egui::Id, mut state: TextEditState, index: usize) {
    state
        .cursor
        .set_char_range(Some(CCursorRange::one(CCursor::new(index))));
    state.store(ctx, id);
}

/// Champ une ligne, pleine largeur.
pub fn champ_saisie(
    ui: &mut egui::Ui,
    champ: ChampId,
    texte: &mut String,
    mode: Mode,
    cible: &mut Option<Cible>,
    focus: &mut Option<FocusDemande>,
) -> egui::Response {
    let id = egui::Id::new(("champ_saisie", champ));
    let precedent = texte.clone();

    let mut edit = egui::TextEdit::singleline(texte)
        .id(id)
        .desired_width(ui.available_width());
    if let Mode::Expression = mode {
        edit = edit.code_editor().hint_text("Ex: (2+3)×4, 2^3^2, -5+2");
    }
    let sortie = edit.show(ui);
    let response = sortie.response;
    let state = sortie.state;

    let mut curseur = state
        .cursor
        .char_range()
        .map_or_else(|| texte.chars().count(), |r| r.primary.index);

    if response.changed() {
        let (filtre, c) = filtrer(texte, curseur, |ch| mode.autorise(ch));
        match mode {
            Mode::Numerique(sep) => {
                let n = normaliser(&precedent, c, &filtre, sep);
                *texte = n.texte;
                curseur = n.curseur;
            }
            Mode::Expression => {
                *texte = filtre;
                curseur = c;
            }
        }
        placer_curseur(ui.ctx(), id, state.clone(), curseur);
    }

    if response.has_focus() {
        *cible = Some(Cible { champ, curseur });
    }

    if let Some(f) = focus.take_if(|f| f.champ == champ) {
        response.request_focus();
        placer_curseur(ui.ctx(), id, state, f.curseur);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtre_numerique() {
        let m = Mode::Numerique(Separateur::Point);
        assert_eq!(filtrer("1a2", 3, |c| m.autorise(c)), ("12".to_string(), 2));
        assert_eq!(filtrer("1a2", 1, |c| m.autorise(c)), ("12".to_string(), 1));
        assert_eq!(filtrer("-1,5", 4, |c| m.autorise(c)), ("-1,5".to_string(), 4));
    }

    #[test]
    fn filtre_expression() {
        let m = Mode::Expression;
        assert_eq!(
            filtrer("(2+x)×3", 5, |c| m.autorise(c)),
            ("(2+)×3".to_string(), 4)
        );
        // la virgule n’a rien à faire dans une expression
        assert_eq!(filtrer("1,5", 3, |c| m.autorise(c)), ("15".to_string(), 2));
    }
}
