//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état des outils (page active, saisies, réglages, mémoire)
//! et offrir les actions (pavé, mémoire, remises à zéro) sans logique
//! d’affichage.
//!
//! Contrats :
//! - Le calcul passe par le noyau (pur) ; ici on ne fait que câbler.
//! - Cible mémoire = une référence optionnelle explicite (`cible`), remplacée au
//!   focus d’un autre champ, effacée au changement de page.
//! - Tout ce qui est transitoire (cible, focus, cache) n’est pas persisté.

use serde::{Deserialize, Serialize};

use super::memoire::Memoire;
use super::reglages::Reglages;
use crate::noyau::interpolation::{
    lire_nombre_pas, multiples, repartir, PAS_MAX_MULTIPLES, PAS_MAX_REPARTIR,
};
use crate::noyau::saisie::{epissure, inserer_valeur};
use crate::noyau::triangle::Entrees;
use crate::noyau::{
    evaluer, evaluer_avec_demarche, formater_insertion, normaliser, vers_nombre, Demarche,
    ResultatEval, Separateur,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Calcul,
    Repartir,
    Multiples,
    Diagonale,
    Reglages,
}

impl Page {
    pub const TOUTES: [Page; 5] = [
        Page::Calcul,
        Page::Repartir,
        Page::Multiples,
        Page::Diagonale,
        Page::Reglages,
    ];

    pub fn titre(self) -> &'static str {
        match self {
            Page::Calcul => "Calcul",
            Page::Repartir => "Répartir",
            Page::Multiples => "Multiples",
            Page::Diagonale => "Diagonale",
            Page::Reglages => "Réglages",
        }
    }
}

/// Champs de saisie pouvant recevoir une valeur de la mémoire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChampId {
    Expression,
    RepartirDebut,
    RepartirFin,
    RepartirNombre,
    MultiplesDebut,
    MultiplesPas,
    MultiplesNombre,
    CoteA,
    CoteB,
    CoteC,
    Alpha,
    Beta,
}

impl ChampId {
    const NUMERIQUES: [ChampId; 11] = [
        ChampId::RepartirDebut,
        ChampId::RepartirFin,
        ChampId::RepartirNombre,
        ChampId::MultiplesDebut,
        ChampId::MultiplesPas,
        ChampId::MultiplesNombre,
        ChampId::CoteA,
        ChampId::CoteB,
        ChampId::CoteC,
        ChampId::Alpha,
        ChampId::Beta,
    ];
}

/// Champ visé par la mémoire + dernière position connue du curseur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cible {
    pub champ: ChampId,
    pub curseur: usize,
}

/// Demande à la vue : redonner le focus à un champ, curseur placé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusDemande {
    pub champ: ChampId,
    pub curseur: usize,
}

/// Où est allée une valeur sortie de la mémoire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Depot {
    /// Valeur insérée dans le champ visé (qui reprend le focus).
    Champ,
    /// Aucun champ visé : texte à copier dans le presse-papiers.
    PressePapiers(String),
}

/* ------------------------ États des pages ------------------------ */

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EtatCalcul {
    pub expr: String,

    // cache clé = expression (évalue une fois par changement, pas à chaque frame)
    #[serde(skip)]
    cache: Option<(String, ResultatEval, Demarche)>,
}

impl EtatCalcul {
    pub fn resultat(&mut self) -> (&ResultatEval, &Demarche) {
        if !matches!(&self.cache, Some(c) if c.0 == self.expr) {
            let (r, d) = evaluer_avec_demarche(&self.expr);
            self.cache = Some((self.expr.clone(), r, d));
        }
        let (_, r, d) = self.cache.as_ref().expect("cache rempli ci-dessus");
        (r, d)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EtatRepartir {
    pub debut: String,
    pub fin: String,
    pub nombre: String,
}

impl Default for EtatRepartir {
    fn default() -> Self {
        Self {
            debut: "0".into(),
            fin: "10".into(),
            nombre: "5".into(),
        }
    }
}

impl EtatRepartir {
    /// None si une saisie est illisible.
    pub fn valeurs(&self) -> Option<Vec<f64>> {
        let x0 = vers_nombre(&self.debut)?;
        let x1 = vers_nombre(&self.fin)?;
        let n = lire_nombre_pas(&self.nombre, PAS_MAX_REPARTIR)?;
        Some(repartir(x0, x1, n))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EtatMultiples {
    pub debut: String,
    pub pas: String,
    pub nombre: String,
}

impl Default for EtatMultiples {
    fn default() -> Self {
        Self {
            debut: "2,5".into(),
            pas: "1,125".into(),
            nombre: "123".into(),
        }
    }
}

impl EtatMultiples {
    pub fn valeurs(&self) -> Option<Vec<f64>> {
        let debut = vers_nombre(&self.debut)?;
        let pas = vers_nombre(&self.pas)?;
        let n = lire_nombre_pas(&self.nombre, PAS_MAX_MULTIPLES)?;
        Some(multiples(debut, pas, n))
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EtatDiagonale {
    pub a: String,
    pub b: String,
    pub c: String,
    pub alpha: String,
    pub beta: String,
}

impl EtatDiagonale {
    /// Champs remplis -> valeurs ; Err(champ) si un champ rempli est illisible.
    pub fn entrees(&self) -> Result<Entrees, ChampId> {
        let lire = |texte: &str, champ: ChampId| -> Result<Option<f64>, ChampId> {
            if texte.trim().is_empty() {
                Ok(None)
            } else {
                vers_nombre(texte).map(Some).ok_or(champ)
            }
        };
        Ok(Entrees {
            a: lire(&self.a, ChampId::CoteA)?,
            b: lire(&self.b, ChampId::CoteB)?,
            c: lire(&self.c, ChampId::CoteC)?,
            alpha: lire(&self.alpha, ChampId::Alpha)?,
            beta: lire(&self.beta, ChampId::Beta)?,
        })
    }

    pub fn vider(&mut self) {
        *self = Self::default();
    }
}

/* ------------------------ État global ------------------------ */

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOutils {
    pub page: Page,
    pub reglages: Reglages,
    pub memoire: Memoire,

    pub calcul: EtatCalcul,
    pub repartir: EtatRepartir,
    pub multiples: EtatMultiples,
    pub diagonale: EtatDiagonale,

    // --- transitoire ---
    #[serde(skip)]
    pub cible: Option<Cible>,
    #[serde(skip)]
    pub focus: Option<FocusDemande>,
}

impl Default for AppOutils {
    fn default() -> Self {
        let reglages = Reglages::default();
        Self {
            page: Page::default(),
            memoire: Memoire::new(reglages.memoire_max),
            reglages,
            calcul: EtatCalcul::default(),
            repartir: EtatRepartir::default(),
            multiples: EtatMultiples::default(),
            diagonale: EtatDiagonale::default(),
            cible: None,
            focus: None,
        }
    }
}

impl AppOutils {
    /// Remet les bornes après lecture du stockage.
    pub fn apres_chargement(mut self) -> Self {
        self.reglages = self.reglages.bornes();
        self.memoire.set_max(self.reglages.memoire_max);
        self
    }

    pub fn changer_page(&mut self, page: Page) {
        if self.page != page {
            tracing::debug!(?page, "changement de page");
            self.page = page;
            self.cible = None;
            self.focus = None;
        }
    }

    pub fn texte_champ_mut(&mut self, champ: ChampId) -> &mut String {
        match champ {
            ChampId::Expression => &mut self.calcul.expr,
            ChampId::RepartirDebut => &mut self.repartir.debut,
            ChampId::RepartirFin => &mut self.repartir.fin,
            ChampId::RepartirNombre => &mut self.repartir.nombre,
            ChampId::MultiplesDebut => &mut self.multiples.debut,
            ChampId::MultiplesPas => &mut self.multiples.pas,
            ChampId::MultiplesNombre => &mut self.multiples.nombre,
            ChampId::CoteA => &mut self.diagonale.a,
            ChampId::CoteB => &mut self.diagonale.b,
            ChampId::CoteC => &mut self.diagonale.c,
            ChampId::Alpha => &mut self.diagonale.alpha,
            ChampId::Beta => &mut self.diagonale.beta,
        }
    }

    fn viser(&mut self, champ: ChampId, curseur: usize) {
        self.cible = Some(Cible { champ, curseur });
        self.focus = Some(FocusDemande { champ, curseur });
    }

    /* ------------------------ Mémoire ------------------------ */

    /// Envoie une valeur de la mémoire vers le champ visé, sinon vers le presse-papiers.
    ///
    /// L’expression reçoit toujours un '.', les champs numériques le séparateur choisi.
    pub fn deposer_valeur(&mut self, valeur: f64) -> Depot {
        let sep = self.reglages.separateur;
        let Some(Cible { champ, curseur }) = self.cible else {
            return Depot::PressePapiers(formater_insertion(valeur, sep));
        };

        let texte = self.texte_champ_mut(champ);
        let (nouveau, c) = if champ == ChampId::Expression {
            epissure(texte, curseur, &formater_insertion(valeur, Separateur::Point))
        } else {
            let n = inserer_valeur(texte, curseur, valeur, sep);
            (n.texte, n.curseur)
        };
        *texte = nouveau;

        tracing::debug!(valeur, ?champ, curseur = c, "mémoire: dépôt");
        self.viser(champ, c);
        Depot::Champ
    }

    pub fn set_memoire_max(&mut self, max: usize) {
        self.reglages.set_memoire_max(max);
        self.memoire.set_max(self.reglages.memoire_max);
    }

    /// Change le séparateur et remet en forme les champs numériques existants.
    pub fn set_separateur(&mut self, sep: Separateur) {
        self.reglages.separateur = sep;
        for champ in ChampId::NUMERIQUES {
            let texte = self.texte_champ_mut(champ);
            let n = normaliser(texte.as_str(), 0, texte.as_str(), sep);
            *texte = n.texte;
        }
    }

    /// Réglages par défaut (séparateur compris, champs remis en forme).
    pub fn reinitialiser_reglages(&mut self) {
        let defaut = Reglages::default();
        self.set_separateur(defaut.separateur);
        self.set_memoire_max(defaut.memoire_max);
        self.reglages = defaut;
    }

    /* ------------------------ Calcul (pavé) ------------------------ */

    fn curseur_expression(&self) -> usize {
        match self.cible {
            Some(Cible {
                champ: ChampId::Expression,
                curseur,
            }) => curseur,
            _ => self.calcul.expr.chars().count(),
        }
    }

    /// Touche du pavé : insertion au curseur.
    pub fn inserer_calcul(&mut self, ajout: &str) {
        let (expr, c) = epissure(&self.calcul.expr, self.curseur_expression(), ajout);
        self.calcul.expr = expr;
        self.viser(ChampId::Expression, c);
    }

    /// DEL : retire le caractère avant le curseur.
    pub fn effacer_arriere(&mut self) {
        let mut chars: Vec<char> = self.calcul.expr.chars().collect();
        let curseur = self.curseur_expression().min(chars.len());
        if curseur == 0 {
            self.viser(ChampId::Expression, 0);
            return;
        }
        chars.remove(curseur - 1);
        self.calcul.expr = chars.into_iter().collect();
        self.viser(ChampId::Expression, curseur - 1);
    }

    /// C : efface l’expression.
    pub fn vider_calcul(&mut self) {
        self.calcul.expr.clear();
        self.viser(ChampId::Expression, 0);
    }

    /// = : remplace l’expression par son résultat (si résultat il y a).
    pub fn egal(&mut self) {
        if let Ok(Some(v)) = evaluer(&self.calcul.expr) {
            let texte = formater_insertion(v, Separateur::Point);
            let c = texte.chars().count();
            self.calcul.expr = texte;
            self.viser(ChampId::Expression, c);
        }
    }

    /// Résultat courant -> mémoire.
    pub fn memoriser_resultat(&mut self) -> bool {
        match self.calcul.resultat() {
            (Ok(Some(v)), _) => {
                let v = *v;
                self.memoire.inserer(v)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppOutils {
        AppOutils::default()
    }

    #[test]
    fn depot_sans_cible_va_au_presse_papiers() {
        let mut a = app();
        a.reglages.separateur = Separateur::Virgule;
        assert_eq!(
            a.deposer_valeur(2.5),
            Depot::PressePapiers("2,5".to_string())
        );
    }

    #[test]
    fn depot_dans_un_champ_numerique_renormalise() {
        let mut a = app();
        a.reglages.separateur = Separateur::Point;
        a.diagonale.a = "1.5".into();
        a.cible = Some(Cible {
            champ: ChampId::CoteA,
            curseur: 3,
        });

        assert_eq!(a.deposer_valeur(0.25), Depot::Champ);
        assert_eq!(a.diagonale.a, "1.5025");
        assert_eq!(
            a.focus,
            Some(FocusDemande {
                champ: ChampId::CoteA,
                curseur: 6
            })
        );
    }

    #[test]
    fn depot_dans_l_expression_toujours_avec_point() {
        let mut a = app();
        a.reglages.separateur = Separateur::Virgule;
        a.calcul.expr = "1+".into();
        a.cible = Some(Cible {
            champ: ChampId::Expression,
            curseur: 2,
        });

        a.deposer_valeur(0.5);
        assert_eq!(a.calcul.expr, "1+0.5");
        assert_eq!(a.calcul.resultat().0, &Ok(Some(1.5)));
    }

    #[test]
    fn changer_de_page_efface_la_cible() {
        let mut a = app();
        a.cible = Some(Cible {
            champ: ChampId::Expression,
            curseur: 0,
        });
        a.changer_page(Page::Diagonale);
        assert_eq!(a.cible, None);
    }

    #[test]
    fn pave_insertion_et_effacement_au_curseur() {
        let mut a = app();
        a.inserer_calcul("1");
        a.inserer_calcul("2");
        a.cible = Some(Cible {
            champ: ChampId::Expression,
            curseur: 1,
        });
        a.inserer_calcul("+");
        assert_eq!(a.calcul.expr, "1+2");

        a.effacer_arriere();
        assert_eq!(a.calcul.expr, "12");
        assert_eq!(a.cible.map(|c| c.curseur), Some(1));
    }

    #[test]
    fn del_sur_expression_vide_avec_curseur_perime() {
        let mut a = app();
        a.cible = Some(Cible {
            champ: ChampId::Expression,
            curseur: 4,
        });
        a.effacer_arriere();
        assert_eq!(a.calcul.expr, "");
        assert_eq!(a.focus.map(|f| f.curseur), Some(0));
    }

    #[test]
    fn egal_remplace_par_le_resultat() {
        let mut a = app();
        a.calcul.expr = "2^3^2".into();
        a.egal();
        assert_eq!(a.calcul.expr, "64");

        a.calcul.expr = "1/0".into();
        a.egal();
        assert_eq!(a.calcul.expr, "1/0");
    }

    #[test]
    fn resultat_memorise() {
        let mut a = app();
        a.calcul.expr = "(2+3)*4".into();
        assert!(a.memoriser_resultat());
        assert!(!a.memoriser_resultat());
        assert_eq!(a.memoire.valeurs(), &[20.0]);
    }

    #[test]
    fn separateur_change_les_champs() {
        let mut a = app();
        a.set_separateur(Separateur::Point);
        assert_eq!(a.multiples.debut, "2.5");
        a.set_separateur(Separateur::Virgule);
        assert_eq!(a.multiples.pas, "1,125");
        // l’expression n’est pas touchée
        a.calcul.expr = "1.5".into();
        a.set_separateur(Separateur::Virgule);
        assert_eq!(a.calcul.expr, "1.5");
    }

    #[test]
    fn pages_lisent_les_saisies() {
        let a = app();
        assert_eq!(
            a.repartir.valeurs(),
            Some(vec![0.0, 2.5, 5.0, 7.5, 10.0])
        );
        assert_eq!(a.multiples.valeurs().map(|v| v.len()), Some(123));

        let d = EtatDiagonale {
            a: "3".into(),
            b: "-".into(),
            ..Default::default()
        };
        assert_eq!(d.entrees(), Err(ChampId::CoteB));
    }
}
