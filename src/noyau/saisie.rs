// src/noyau/saisie.rs
//
// Normalisation d’un champ numérique à chaque frappe
// --------------------------------------------------
// Entrée : texte APRÈS l’édition + position du curseur (index de caractère).
// Sortie : texte canonique  -?[0-9]*(SEP[0-9]*)?  + curseur recalé.
//
// Passes (ordre fixe, le décalage du curseur s’accumule) :
// 1) ',' -> '.'                               (même longueur)
// 2) premier point gagne : les points suivants sont supprimés
// 3) séparateur ',' choisi : le point restant redevient ','
// 4) parité des '-' : impair => négatif, tous retirés puis un seul en tête
// 5) curseur = max(0, curseur - retirés_avant + (1 si négatif)), borné à la longueur
//
// Aucun rejet : la saisie est seulement remise en forme. Un caractère inattendu
// (hors [0-9.,-]) est conservé tel quel et n’est jamais interprété.

use serde::{Deserialize, Serialize};

/// Séparateur décimal d’affichage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Separateur {
    Point,
    #[default]
    Virgule,
}

impl Separateur {
    pub fn car(self) -> char {
        match self {
            Separateur::Point => '.',
            Separateur::Virgule => ',',
        }
    }
}

/// Texte canonique + curseur (index de caractère, `curseur <= longueur`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaisieNormalisee {
    pub texte: String,
    pub curseur: usize,
}

/// Normalise le contenu d’un champ numérique après une édition.
///
/// `precedent` est le contenu avant l’édition : il ne sert qu’à la trace,
/// les passes ne lisent que `brut`.
pub fn normaliser(
    precedent: &str,
    curseur: usize,
    brut: &str,
    sep: Separateur,
) -> SaisieNormalisee {
    // 1) virgules -> points
    let mut chars: Vec<char> = brut
        .chars()
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    let mut retires_avant: usize = 0;

    // 2) premier point gagne
    if let Some(premier) = chars.iter().position(|&c| c == '.') {
        let mut garde = Vec::with_capacity(chars.len());
        for (i, c) in chars.into_iter().enumerate() {
            if c == '.' && i > premier {
                if i <= curseur {
                    retires_avant += 1;
                }
                continue;
            }
            garde.push(c);
        }
        chars = garde;
    }

    // 3) affichage avec ',' si demandé (un seul point possible ici)
    if sep == Separateur::Virgule {
        for c in chars.iter_mut() {
            if *c == '.' {
                *c = ',';
            }
        }
    }

    // 4) signe : parité des '-' ; on compte ceux à gauche du curseur (déjà recalé par 2)
    let curseur_apres_points = curseur.saturating_sub(retires_avant);
    let mut nb_moins: usize = 0;
    for (i, &c) in chars.iter().enumerate() {
        if c == '-' {
            nb_moins += 1;
            if i <= curseur_apres_points {
                retires_avant += 1;
            }
        }
    }
    let negatif = nb_moins % 2 == 1;

    let mut texte = String::with_capacity(chars.len() + 1);
    if negatif {
        texte.push('-');
    }
    texte.extend(chars.into_iter().filter(|&c| c != '-'));

    // 5) curseur final
    let longueur = texte.chars().count();
    let curseur_final = (curseur + usize::from(negatif))
        .saturating_sub(retires_avant)
        .min(longueur);

    tracing::trace!(
        precedent,
        brut,
        curseur,
        resultat = %texte,
        curseur_final,
        "saisie normalisée"
    );

    SaisieNormalisee {
        texte,
        curseur: curseur_final,
    }
}

/// Texte à insérer pour une valeur (mémoire, résultat) selon le séparateur.
///
/// Forme décimale la plus courte qui relit la même valeur, jamais d’exposant.
/// Valeur non finie => chaîne vide.
pub fn formater_insertion(valeur: f64, sep: Separateur) -> String {
    if !valeur.is_finite() {
        return String::new();
    }
    // -0 s’affiche "0"
    let v = if valeur == 0.0 { 0.0 } else { valeur };
    let s = format!("{v}");
    match sep {
        Separateur::Point => s,
        Separateur::Virgule => s.replace('.', ","),
    }
}

/// Insère `ajout` au curseur ; le curseur avance de la longueur insérée.
pub fn epissure(texte: &str, curseur: usize, ajout: &str) -> (String, usize) {
    let curseur = curseur.min(texte.chars().count());
    let octet = texte
        .char_indices()
        .nth(curseur)
        .map_or(texte.len(), |(o, _)| o);

    let mut out = String::with_capacity(texte.len() + ajout.len());
    out.push_str(&texte[..octet]);
    out.push_str(ajout);
    out.push_str(&texte[octet..]);

    (out, curseur + ajout.chars().count())
}

/// Insère une valeur dans un champ numérique puis renormalise.
pub fn inserer_valeur(
    texte: &str,
    curseur: usize,
    valeur: f64,
    sep: Separateur,
) -> SaisieNormalisee {
    let ajout = formater_insertion(valeur, sep);
    let (brut, c) = epissure(texte, curseur, &ajout);
    normaliser(texte, c, &brut, sep)
}

/// Lecture d’un champ : accepte ',' ou '.' comme séparateur.
/// Vide, illisible ou non fini => None.
pub fn vers_nombre(texte: &str) -> Option<f64> {
    let s = texte.trim().replacen(',', ".", 1);
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
