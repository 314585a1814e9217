// src/noyau/coefficients.rs
//
// Jeu de coefficients de la z-expansion : {K_max, T0, Tcut, a_0 … a_Kmax}
// ----------------------------------------------------------------------
// Contrats :
// - K_max > 0 (strict, K_max = 0 refusé)
// - exactement K_max + 1 coefficients, tous explicites (aucune valeur par défaut)
// - immuable après construction

use tracing::info;

use super::erreurs::ErreurConfig;
use super::registre::{entier, reel, SourceParametres};

/// Préfixe des clés utilisé par la configuration quasi-élastique.
pub const PREFIXE_DEFAUT: &str = "QEL";

/// Nommage des clés de configuration : `<prefixe>-Kmax`, `<prefixe>-Z_A<n>`, …
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClesZExp {
    pub prefixe: String,
}

impl Default for ClesZExp {
    fn default() -> Self {
        Self {
            prefixe: PREFIXE_DEFAUT.to_string(),
        }
    }
}

impl ClesZExp {
    pub fn new(prefixe: impl Into<String>) -> Self {
        Self {
            prefixe: prefixe.into(),
        }
    }

    pub fn kmax(&self) -> String {
        format!("{}-Kmax", self.prefixe)
    }

    pub fn t0(&self) -> String {
        format!("{}-T0", self.prefixe)
    }

    pub fn tcut(&self) -> String {
        format!("{}-Tcut", self.prefixe)
    }

    pub fn coefficient(&self, puissance: usize) -> String {
        format!("{}-Z_A{}", self.prefixe, puissance)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CoefficientSet {
    kmax: usize,
    t0: f64,
    tcut: f64,
    a: Box<[f64]>,
}

impl CoefficientSet {
    /// Construction programmatique, mêmes invariants que le chargement.
    ///
    /// Aucune clé ici : une valeur non finie est désignée par son argument (`T0`, `Tcut`, `a_<k>`).
    pub fn new(kmax: i64, t0: f64, tcut: f64, a: Vec<f64>) -> Result<Self, ErreurConfig> {
        let kmax = valider_kmax(kmax)?;
        if a.len() != kmax + 1 {
            return Err(ErreurConfig::NombreCoefficients {
                attendu: kmax + 1,
                recu: a.len(),
            });
        }

        let non_fini = |argument: String| ErreurConfig::ArgumentNonFini { argument };
        if !t0.is_finite() {
            return Err(non_fini("T0".into()));
        }
        if !tcut.is_finite() {
            return Err(non_fini("Tcut".into()));
        }
        if let Some(k) = a.iter().position(|v| !v.is_finite()) {
            return Err(non_fini(format!("a_{k}")));
        }

        Ok(Self {
            kmax,
            t0,
            tcut,
            a: a.into_boxed_slice(),
        })
    }

    /// Chargement depuis une source de paramètres.
    ///
    /// Ordre : K_max, T0, Tcut, puis a_0 … a_Kmax (inclus).
    /// Toute clé absente interrompt la configuration (l’erreur nomme la clé).
    pub fn charger(src: &dyn SourceParametres, cles: &ClesZExp) -> Result<Self, ErreurConfig> {
        let kmax = valider_kmax(entier(src, &cles.kmax())?)?;
        let t0 = reel(src, &cles.t0())?;
        let tcut = reel(src, &cles.tcut())?;

        let mut a = Vec::with_capacity(kmax + 1);
        for puissance in 0..=kmax {
            let cle = cles.coefficient(puissance);
            let valeur = reel(src, &cle)?;
            info!(key = %cle, index = puissance, value = valeur, "loaded z-expansion coefficient");
            a.push(valeur);
        }

        Ok(Self {
            kmax,
            t0,
            tcut,
            a: a.into_boxed_slice(),
        })
    }

    pub fn kmax(&self) -> usize {
        self.kmax
    }

    pub fn t0(&self) -> f64 {
        self.t0
    }

    pub fn tcut(&self) -> f64 {
        self.tcut
    }

    /// a_0 … a_Kmax, par puissance croissante.
    pub fn coefficients(&self) -> &[f64] {
        &self.a
    }

    /// a_k (None hors 0..=K_max).
    pub fn a(&self, k: usize) -> Option<f64> {
        self.a.get(k).copied()
    }
}

fn valider_kmax(kmax: i64) -> Result<usize, ErreurConfig> {
    if kmax <= 0 {
        return Err(ErreurConfig::KmaxInvalide { kmax });
    }
    usize::try_from(kmax).map_err(|_| ErreurConfig::KmaxInvalide { kmax })
}
