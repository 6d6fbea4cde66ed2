// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur f64
// Objectif:
// - Convertir une suite de jetons (moins unaire déjà réécrit) en RPN (postfix)
// - Puis évaluer la RPN avec une pile de valeurs
//
// Règles:
// - Précédence: + - = 1 ; * / = 2 ; ^ = 3
// - Dépilement "gauche" pour TOUS les opérateurs, y compris ^ :
//   2^3^2 = (2^3)^2 = 64 (comportement calculatrice, voulu)
// - Division: diviseur exactement nul => erreur (jamais inf/NaN)

use num_traits::Zero;

use super::erreur::ErreurEval;
use super::jetons::{Jeton, Tok};

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Caret => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: 2 + 3 * 4
///   rpn:    2 3 4 * +
pub fn to_rpn(tokens: &[Jeton]) -> Result<Vec<Jeton>, ErreurEval> {
    let mut out: Vec<Jeton> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Jeton> = Vec::new();

    for j in tokens.iter().cloned() {
        match j.tok {
            Tok::Num(_) => out.push(j),

            Tok::LPar => ops.push(j),

            Tok::RPar => {
                // dépile jusqu’à '(' ; pile vide avant => ')' orpheline
                loop {
                    match ops.pop() {
                        Some(top) if top.tok == Tok::LPar => break,
                        Some(top) => out.push(top),
                        None => {
                            return Err(ErreurEval::ParenthesesDesequilibrees { position: j.pos })
                        }
                    }
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                let p_tok = precedence(&j.tok);
                // '(' n’est pas un opérateur : il bloque le dépilement
                while ops
                    .last()
                    .is_some_and(|top| top.tok.est_operateur() && precedence(&top.tok) >= p_tok)
                {
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }
                ops.push(j);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if op.tok == Tok::LPar {
            return Err(ErreurEval::ParenthesesDesequilibrees { position: op.pos });
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN.
///
/// Pile `[.., a, b]` : on dépile `b` puis `a`, on calcule `a OP b`.
pub fn eval_rpn(rpn: &[Jeton]) -> Result<f64, ErreurEval> {
    let mut st: Vec<f64> = Vec::new();

    for j in rpn {
        match &j.tok {
            Tok::Num(texte) => {
                let v: f64 = texte.parse().map_err(|_| ErreurEval::Syntaxe)?;
                st.push(v);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                let b = st.pop().ok_or(ErreurEval::Syntaxe)?;
                let a = st.pop().ok_or(ErreurEval::Syntaxe)?;

                let v = match j.tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => {
                        if b.is_zero() {
                            return Err(ErreurEval::DivisionParZero);
                        }
                        a / b
                    }
                    // puissance IEEE 754 (exposants fractionnaires/négatifs acceptés tels quels)
                    _ => a.powf(b),
                };

                st.push(v);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurEval::OperateurInvalide),
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurEval::Syntaxe),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::jetons::{format_tokens, moins_unaire, tokenize};

    fn rpn_txt(s: &str) -> String {
        let j = moins_unaire(tokenize(s).unwrap());
        format_tokens(&to_rpn(&j).unwrap())
    }

    #[test]
    fn precedence_et_parentheses() {
        assert_eq!(rpn_txt("2+3*4"), "2 3 4 * +");
        assert_eq!(rpn_txt("(2+3)*4"), "2 3 + 4 *");
        assert_eq!(rpn_txt("8-2-1"), "8 2 - 1 -");
    }

    #[test]
    fn puissance_associee_a_gauche() {
        assert_eq!(rpn_txt("2^3^2"), "2 3 ^ 2 ^");
    }

    #[test]
    fn parenthese_fermante_orpheline() {
        let j = tokenize("1+2)").unwrap();
        assert_eq!(
            to_rpn(&j),
            Err(ErreurEval::ParenthesesDesequilibrees { position: 3 })
        );
    }

    #[test]
    fn parenthese_ouvrante_non_fermee() {
        let j = tokenize("(1+2").unwrap();
        assert_eq!(
            to_rpn(&j),
            Err(ErreurEval::ParenthesesDesequilibrees { position: 0 })
        );
    }

    #[test]
    fn parenthese_dans_la_rpn_refusee() {
        let rpn = vec![Jeton {
            tok: Tok::LPar,
            pos: 0,
        }];
        assert_eq!(eval_rpn(&rpn), Err(ErreurEval::OperateurInvalide));
    }

    #[test]
    fn pile_trop_courte() {
        let j = tokenize("2+").unwrap();
        let rpn = to_rpn(&j).unwrap();
        assert_eq!(eval_rpn(&rpn), Err(ErreurEval::Syntaxe));
    }
}
