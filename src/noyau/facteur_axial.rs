// src/noyau/facteur_axial.rs
//
// Facteur de forme axial F_A(q²) par z-expansion directe
// -----------------------------------------------------
//   F_A(q²) = Σ_{k=0}^{K_max} a_k · z(q²)^k
//
// Politique de domaine : z indéfini => avertissement + 0.0 (jamais NaN, jamais panic).
// F_A(0) : même chemin, q² = 0 substitué ; calculé une fois à la configuration.

use num_traits::Float;
use tracing::{info, warn};

use super::coefficients::{ClesZExp, CoefficientSet};
use super::erreurs::ErreurConfig;
use super::expansion_z::{calcul_z, ZOutcome};
use super::registre::SourceParametres;

/* ------------------------ Interfaces ------------------------ */

/// Accès cinématique : le seul champ consommé est q².
pub trait Cinematique {
    fn q2(&self) -> f64;
}

impl Cinematique for f64 {
    fn q2(&self) -> f64 {
        *self
    }
}

/// Point cinématique minimal (tabulation, tests).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointCinematique {
    pub q2: f64,
}

impl Cinematique for PointCinematique {
    fn q2(&self) -> f64 {
        self.q2
    }
}

/// Modèle de facteur de forme axial interchangeable.
///
/// Implémentations : appelables de plusieurs threads après configuration.
pub trait ModeleFacteurAxial: Send + Sync {
    fn evaluer(&self, q2: f64) -> f64;

    fn fa(&self, interaction: &dyn Cinematique) -> f64 {
        self.evaluer(interaction.q2())
    }
}

/* ------------------------ Polynôme ------------------------ */

/// Σ a_k z^k (Horner), tous les termes k = 0 … a.len() − 1.
pub fn somme_polynome<F: Float>(a: &[F], z: F) -> F {
    a.iter().rev().fold(F::zero(), |acc, &ak| acc * z + ak)
}

/* ------------------------ Modèle z-expansion ------------------------ */

#[derive(Clone, Debug)]
pub struct ZExpAxialFF {
    coeffs: CoefficientSet,
    fa0: f64,
}

impl ZExpAxialFF {
    /// Construit le modèle et calcule F_A(0) (diagnostic seulement).
    pub fn new(coeffs: CoefficientSet) -> Self {
        let mut modele = Self { coeffs, fa0: 0.0 };
        modele.fa0 = modele.evaluer(0.0);
        info!(fa0 = modele.fa0, "FA0 = {}", modele.fa0);
        modele
    }

    /// Charge les coefficients depuis un registre puis construit le modèle.
    pub fn configurer(
        src: &dyn SourceParametres,
        cles: &ClesZExp,
    ) -> Result<Self, ErreurConfig> {
        Ok(Self::new(CoefficientSet::charger(src, cles)?))
    }

    pub fn z(&self, q2: f64) -> ZOutcome<f64> {
        calcul_z(q2, self.coeffs.t0(), self.coeffs.tcut())
    }

    /// F_A(0) calculé à la configuration.
    pub fn fa0(&self) -> f64 {
        self.fa0
    }

    pub fn coefficients(&self) -> &CoefficientSet {
        &self.coeffs
    }

    /// F_A à partir d’un z déjà calculé pour ce q² (repli 0.0 si indéfini).
    fn fa_depuis_z(&self, q2: f64, z: ZOutcome<f64>) -> f64 {
        match z {
            ZOutcome::Valeur(z) => somme_polynome(self.coeffs.coefficients(), z),
            ZOutcome::Indefini(raison) => {
                warn!(q2, %raison, "Undefined expansion parameter");
                0.0
            }
        }
    }
}

impl ModeleFacteurAxial for ZExpAxialFF {
    fn evaluer(&self, q2: f64) -> f64 {
        self.fa_depuis_z(q2, self.z(q2))
    }
}

/* ------------------------ Tabulation ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LigneTable {
    pub q2: f64,
    pub z: ZOutcome<f64>,
    pub fa: f64,
}

/// Évalue z et F_A sur une suite de q² (z calculé une seule fois par point).
pub fn tabuler(modele: &ZExpAxialFF, grille: &[f64]) -> Vec<LigneTable> {
    grille
        .iter()
        .map(|&q2| {
            let z = modele.z(q2);
            LigneTable {
                q2,
                z,
                fa: modele.fa_depuis_z(q2, z),
            }
        })
        .collect()
}
