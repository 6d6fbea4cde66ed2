//! Tests de propriétés : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l’évaluateur et la normalisation sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - tailles bornées
//! - budget temps global
//! - invariants clés :
//!   * normaliser(normaliser(s)) == normaliser(s), sans décalage du curseur
//!   * curseur toujours dans [0, longueur]
//!   * evaluer ne panique jamais et renvoie toujours la même chose

use std::time::{Duration, Instant};

use super::erreur::ErreurEval;
use super::saisie::{normaliser, Separateur};
use super::{evaluer, ResultatEval};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Générateurs (bornés) ------------------------ */

/// Chaîne qui passe le pré-filtre des champs numériques : [0-9.,-]*
fn gen_saisie(rng: &mut Rng, max_len: u32) -> String {
    const ALPHABET: &[char] = &['0', '1', '5', '9', '.', ',', '-'];
    let n = rng.pick(max_len + 1);
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

fn gen_sep(rng: &mut Rng) -> Separateur {
    if rng.coin() {
        Separateur::Point
    } else {
        Separateur::Virgule
    }
}

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(5) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(100)),
        2 => format!("{}.{}", rng.pick(10), rng.pick(100)),
        3 => format!(".{}", rng.pick(10)),
        _ => format!("{}", rng.pick(10)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }
    let a = gen_expr(rng, depth - 1);
    let b = gen_expr(rng, depth - 1);
    match rng.pick(8) {
        0 => gen_nombre(rng),
        1 => format!("{a}+{b}"),
        2 => format!("{a}-{b}"),
        3 => format!("({a})×{b}"),
        4 => format!("{a}÷({b})"),
        5 => format!("({a})^{}", rng.pick(3)),
        6 => format!("-({a})"),
        _ => format!("{a} * {b}"),
    }
}

/// Bruit : caractères valides et invalides mélangés.
fn gen_bruit(rng: &mut Rng, max_len: u32) -> String {
    const ALPHABET: &[char] = &[
        '0', '7', '.', '+', '-', '*', '/', '^', '(', ')', ' ', '×', '÷', ',', 'x', 'é',
    ];
    let n = rng.pick(max_len + 1);
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/// Égalité stricte, NaN compris (bit à bit).
fn meme_resultat(a: &ResultatEval, b: &ResultatEval) -> bool {
    match (a, b) {
        (Ok(Some(x)), Ok(Some(y))) => x.to_bits() == y.to_bits(),
        _ => a == b,
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn normalisation_idempotente_et_curseur_borne() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..2000 {
        budget(t0, max);

        let brut = gen_saisie(&mut rng, 12);
        let longueur = brut.chars().count() as u32;
        let curseur = rng.pick(longueur + 1) as usize;
        let sep = gen_sep(&mut rng);

        let n1 = normaliser("", curseur, &brut, sep);
        assert!(
            n1.curseur <= n1.texte.chars().count(),
            "curseur hors texte: brut={brut:?} curseur={curseur} => {n1:?}"
        );

        let n2 = normaliser(&n1.texte, n1.curseur, &n1.texte, sep);
        assert_eq!(n2, n1, "non idempotent: brut={brut:?} curseur={curseur}");
    }
}

#[test]
fn normalisation_produit_un_texte_canonique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..2000 {
        budget(t0, max);

        let brut = gen_saisie(&mut rng, 12);
        let sep = gen_sep(&mut rng);
        let autre = if sep == Separateur::Point { ',' } else { '.' };

        let n = normaliser("", 0, &brut, sep);
        let t = n.texte.as_str();

        let corps = t.strip_prefix('-').unwrap_or(t);
        assert!(!corps.contains('-'), "signe mal placé: {brut:?} => {t:?}");
        assert!(!t.contains(autre), "mauvais séparateur: {brut:?} => {t:?}");
        assert!(
            t.matches(sep.car()).count() <= 1,
            "plusieurs séparateurs: {brut:?} => {t:?}"
        );

        // parité des '-'
        let negatif = brut.matches('-').count() % 2 == 1;
        assert_eq!(t.starts_with('-'), negatif, "parité: {brut:?} => {t:?}");
    }
}

#[test]
fn evaluation_deterministe_sur_expressions_generees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0x5EED_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let r1 = evaluer(&expr);
        let r2 = evaluer(&expr);
        assert!(meme_resultat(&r1, &r2), "non déterministe: expr={expr:?}");

        match r1 {
            Ok(Some(_)) => seen_ok += 1,
            Ok(None) => panic!("sentinelle vide inattendue: expr={expr:?}"),
            Err(e) => {
                // seule erreur possible sur une grammaire bien formée
                assert_eq!(e, ErreurEval::DivisionParZero, "expr={expr:?}");
                seen_err += 1;
            }
        }
    }

    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune division par zéro vue: génération trop “sage”");
}

#[test]
fn evaluation_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..2000 {
        budget(t0, max);

        let expr = gen_bruit(&mut rng, 16);
        let r = evaluer(&expr);

        if expr.trim().is_empty() {
            assert_eq!(r, Ok(None), "expr={expr:?}");
        }
        if let Err(ErreurEval::CaractereInvalide { car, position }) = r {
            assert_eq!(
                expr.chars().nth(position),
                Some(car),
                "position fausse: expr={expr:?}"
            );
        }
    }
}

#[test]
fn somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("0.5", 800);
    budget(t0, max);

    // 800 * 0.5 = 400 (0.5 exact en binaire)
    assert_eq!(evaluer(&expr), Ok(Some(400.0)));
}
