// src/noyau/erreurs.rs
//
// Erreurs de configuration (fatales : l’évaluateur n’est jamais construit).
// Les erreurs de domaine cinématique ne passent PAS par ici (voir expansion_z.rs).

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ErreurConfig {
    #[error("paramètre manquant: {cle}")]
    CleManquante { cle: String },

    #[error("K_max doit être strictement positif (reçu {kmax})")]
    KmaxInvalide { kmax: i64 },

    #[error("paramètre {cle}: entier attendu, réel reçu ({valeur})")]
    EntierAttendu { cle: String, valeur: f64 },

    #[error("paramètre {cle}: valeur non finie")]
    ValeurNonFinie { cle: String },

    #[error("argument {argument}: valeur non finie")]
    ArgumentNonFini { argument: String },

    #[error("nombre de coefficients incorrect: {attendu} attendus (K_max + 1), {recu} reçus")]
    NombreCoefficients { attendu: usize, recu: usize },

    #[error("ligne {ligne}: {raison}")]
    Syntaxe { ligne: usize, raison: String },

    #[error("lecture de {chemin:?}: {source}")]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ErreurConfig {
    /// Clé fautive, si l’erreur en désigne une.
    pub fn cle(&self) -> Option<&str> {
        match self {
            ErreurConfig::CleManquante { cle }
            | ErreurConfig::EntierAttendu { cle, .. }
            | ErreurConfig::ValeurNonFinie { cle } => Some(cle),
            _ => None,
        }
    }
}
