//! Noyau z-expansion du facteur de forme axial
//!
//! Organisation interne :
//! - erreurs.rs       : erreurs de configuration (fatales)
//! - jetons.rs        : lecture exacte des littéraux numériques
//! - registre.rs      : recherche clé -> valeur (registre, fichier, empilement)
//! - coefficients.rs  : CoefficientSet {K_max, T0, Tcut, a_k} + chargement
//! - expansion_z.rs   : q² -> z (résultat étiqueté, domaine vérifié)
//! - facteur_axial.rs : F_A(q²), F_A(0), interface de modèle, tabulation

pub mod coefficients;
pub mod erreurs;
pub mod expansion_z;
pub mod facteur_axial;
pub mod jetons;
pub mod registre;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use coefficients::{ClesZExp, CoefficientSet};
pub use erreurs::ErreurConfig;
pub use expansion_z::{calcul_z, RaisonIndefini, ZOutcome};
pub use facteur_axial::{
    tabuler, Cinematique, LigneTable, ModeleFacteurAxial, PointCinematique, ZExpAxialFF,
};
pub use registre::{Parametre, Registre, RegistreEmpile, SourceParametres};
