// src/noyau/jetons.rs
//
// Tokenisation de l’expression (une seule passe, gauche -> droite)
// ----------------------------------------------------------------
// Reconnaît :
// - nombres décimaux : [0-9]*\.?[0-9]+  (ex: 12, .5, 3.25 ; "1." n’est PAS un nombre)
// - opérateurs + - * / ^
// - parenthèses ( )
// - glyphes jolis × ÷ (ramenés à * /)
// Les espaces entre jetons sont ignorés.

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    /// Texte décimal tel que saisi (parsé en f64 à l’évaluation).
    Num(String),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    LPar,
    RPar,
}

impl Tok {
    pub fn est_operateur(&self) -> bool {
        matches!(
            self,
            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret
        )
    }
}

/// Jeton + position (index de caractère) dans la chaîne d’origine.
#[derive(Clone, Debug, PartialEq)]
pub struct Jeton {
    pub tok: Tok,
    pub pos: usize,
}

/// Ramène les glyphes du pavé (× ÷) aux opérateurs ASCII.
/// Remplacement caractère pour caractère : les positions restent valides.
fn glyphes_ascii(c: char) -> char {
    match c {
        '×' => '*',
        '÷' => '/',
        c => c,
    }
}

/// Tokenize une chaîne en jetons.
///
/// Tout caractère non reconnu (lettre, virgule, point orphelin, …) donne
/// `CaractereInvalide` avec sa position.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurEval> {
    let chars: Vec<char> = s.chars().map(glyphes_ascii).collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let tok = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '^' => Some(Tok::Caret),
            _ => None,
        };
        if let Some(tok) = tok {
            out.push(Jeton { tok, pos: i });
            i += 1;
            continue;
        }

        if let Some(fin) = fin_nombre(&chars, i) {
            let texte: String = chars[i..fin].iter().collect();
            out.push(Jeton {
                tok: Tok::Num(texte),
                pos: i,
            });
            i = fin;
            continue;
        }

        return Err(ErreurEval::CaractereInvalide { car: c, position: i });
    }

    Ok(out)
}

/// Fin (exclue) du nombre qui commence en `debut`, ou None.
///
/// Même résultat que le motif `[0-9]*\.?[0-9]+` : la partie fractionnaire
/// n’est prise que si le point est suivi d’au moins un chiffre.
fn fin_nombre(chars: &[char], debut: usize) -> Option<usize> {
    let chiffre = |k: usize| chars.get(k).is_some_and(|c| c.is_ascii_digit());

    let mut i = debut;
    while chiffre(i) {
        i += 1;
    }

    if chars.get(i) == Some(&'.') && chiffre(i + 1) {
        i += 1;
        while chiffre(i) {
            i += 1;
        }
    }

    (i > debut).then_some(i)
}

/// Moins unaire : réécrit "-x" en "0 - x" sur la suite de jetons.
///
/// Un '-' est unaire s’il est en tête, juste après '(' ou juste après un
/// opérateur binaire. On insère alors un `0` (même position) devant lui.
pub fn moins_unaire(jetons: Vec<Jeton>) -> Vec<Jeton> {
    let mut out: Vec<Jeton> = Vec::with_capacity(jetons.len() + 2);

    for j in jetons {
        let unaire = j.tok == Tok::Minus
            && match out.last() {
                None => true,
                Some(prev) => prev.tok == Tok::LPar || prev.tok.est_operateur(),
            };
        if unaire {
            out.push(Jeton {
                tok: Tok::Num("0".to_string()),
                pos: j.pos,
            });
        }
        out.push(j);
    }

    out
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Jeton]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for j in tokens {
        let s = match &j.tok {
            Tok::Num(n) => n.as_str(),

            Tok::Plus => "+",
            Tok::Minus => "-",
            Tok::Star => "*",
            Tok::Slash => "/",
            Tok::Caret => "^",

            Tok::LPar => "(",
            Tok::RPar => ")",
        };
        out.push(s);
    }
    out.join(" ")
}
