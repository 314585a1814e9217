// src/noyau/registre.rs
//
// Registre de paramètres (clé -> valeur)
// --------------------------------------
// - SourceParametres : la seule capacité consommée par le chargeur (get)
// - Registre         : table en mémoire, lue depuis un texte "CLÉ = valeur"
// - RegistreEmpile   : config propre d’abord, puis liste globale par défaut
//
// Les valeurs passent par jetons::lire_nombre (lecture exacte, arrondi f64 unique).

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use num_traits::ToPrimitive;
use tracing::debug;

use super::erreurs::ErreurConfig;
use super::jetons::{lire_nombre, Nombre};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Parametre {
    Entier(i64),
    Reel(f64),
}

/// Recherche d’un paramètre nommé. `None` = introuvable.
pub trait SourceParametres {
    fn get(&self, cle: &str) -> Option<Parametre>;
}

impl SourceParametres for HashMap<String, Parametre> {
    fn get(&self, cle: &str) -> Option<Parametre> {
        HashMap::get(self, cle).copied()
    }
}

/// Paramètre entier obligatoire.
pub fn entier(src: &dyn SourceParametres, cle: &str) -> Result<i64, ErreurConfig> {
    match src.get(cle) {
        Some(Parametre::Entier(n)) => Ok(n),
        Some(Parametre::Reel(valeur)) => Err(ErreurConfig::EntierAttendu {
            cle: cle.to_string(),
            valeur,
        }),
        None => Err(ErreurConfig::CleManquante {
            cle: cle.to_string(),
        }),
    }
}

/// Paramètre réel obligatoire (un entier est accepté).
pub fn reel(src: &dyn SourceParametres, cle: &str) -> Result<f64, ErreurConfig> {
    let v = match src.get(cle) {
        Some(Parametre::Reel(v)) => v,
        Some(Parametre::Entier(n)) => n as f64,
        None => {
            return Err(ErreurConfig::CleManquante {
                cle: cle.to_string(),
            })
        }
    };
    if !v.is_finite() {
        return Err(ErreurConfig::ValeurNonFinie {
            cle: cle.to_string(),
        });
    }
    Ok(v)
}

/* ------------------------ Registre en mémoire ------------------------ */

#[derive(Clone, Debug, Default)]
pub struct Registre {
    valeurs: HashMap<String, Parametre>,
}

impl Registre {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insère (ou remplace) une valeur.
    pub fn set(&mut self, cle: impl Into<String>, valeur: Parametre) -> &mut Self {
        self.valeurs.insert(cle.into(), valeur);
        self
    }

    pub fn retirer(&mut self, cle: &str) -> Option<Parametre> {
        self.valeurs.remove(cle)
    }

    pub fn len(&self) -> usize {
        self.valeurs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valeurs.is_empty()
    }

    /// Lit un texte "CLÉ = valeur" (une entrée par ligne).
    ///
    /// - `#` ouvre un commentaire jusqu’à la fin de ligne
    /// - lignes vides ignorées
    /// - clé dupliquée = erreur (pas de “dernier gagne” silencieux)
    pub fn lire(texte: &str) -> Result<Self, ErreurConfig> {
        let mut reg = Registre::new();

        for (idx, brute) in texte.lines().enumerate() {
            let ligne = idx + 1;
            let utile = brute.split('#').next().unwrap_or("").trim();
            if utile.is_empty() {
                continue;
            }

            let syntaxe = |raison: String| ErreurConfig::Syntaxe { ligne, raison };

            let (cle, valeur) = utile
                .split_once('=')
                .ok_or_else(|| syntaxe("'=' attendu".into()))?;
            let cle = cle.trim();
            if cle.is_empty() || cle.chars().any(char::is_whitespace) {
                return Err(syntaxe(format!("clé invalide: '{cle}'")));
            }
            if reg.valeurs.contains_key(cle) {
                return Err(syntaxe(format!("clé dupliquée: {cle}")));
            }

            let nombre = lire_nombre(valeur).map_err(|e| syntaxe(format!("{cle}: {e}")))?;
            let p = match nombre {
                Nombre::Entier(n) => Parametre::Entier(
                    n.to_i64()
                        .ok_or_else(|| syntaxe(format!("{cle}: entier hors bornes")))?,
                ),
                exact => Parametre::Reel(exact.vers_f64().ok_or_else(|| {
                    syntaxe(format!("{cle}: valeur non représentable en f64"))
                })?),
            };
            reg.valeurs.insert(cle.to_string(), p);
        }

        Ok(reg)
    }

    /// Lit un fichier de paramètres.
    pub fn charger(chemin: impl AsRef<Path>) -> Result<Self, ErreurConfig> {
        let chemin = chemin.as_ref();
        let texte = fs::read_to_string(chemin).map_err(|source| ErreurConfig::Lecture {
            chemin: chemin.to_path_buf(),
            source,
        })?;
        let reg = Self::lire(&texte)?;
        debug!(chemin = %chemin.display(), entrees = reg.len(), "parameter file loaded");
        Ok(reg)
    }
}

impl SourceParametres for Registre {
    fn get(&self, cle: &str) -> Option<Parametre> {
        self.valeurs.get(cle).copied()
    }
}

/* ------------------------ Recherche empilée ------------------------ */

/// Couches consultées dans l’ordre : la première qui connaît la clé gagne.
#[derive(Default)]
pub struct RegistreEmpile<'a> {
    couches: Vec<&'a dyn SourceParametres>,
}

impl<'a> RegistreEmpile<'a> {
    pub fn new() -> Self {
        Self { couches: Vec::new() }
    }

    /// Ajoute une couche de priorité plus basse que les précédentes.
    pub fn puis(mut self, couche: &'a dyn SourceParametres) -> Self {
        self.couches.push(couche);
        self
    }
}

impl SourceParametres for RegistreEmpile<'_> {
    fn get(&self, cle: &str) -> Option<Parametre> {
        self.couches.iter().find_map(|c| c.get(cle))
    }
}
