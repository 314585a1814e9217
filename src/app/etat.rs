//! src/app/etat.rs
//!
//! État de la ligne de commande (sans vue, sans noyau).
//!
//! Rôle : options de tabulation (fichiers de paramètres, préfixe, points q²)
//! et construction de la grille q², sans logique d’affichage.
//!
//! Garde-fous : nombre de points borné, bornes finies.

use std::path::PathBuf;

use clap::Parser;

/// Nombre de points par défaut de la grille.
const POINTS_DEFAUT: usize = 21;

/// Garde-fou : on borne la grille (anti-abus / anti-gel).
const POINTS_MAX: usize = 100_000;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "zexp-fa",
    version,
    about = "Tabule le facteur de forme axial F_A(q²) par z-expansion"
)]
pub struct Options {
    /// Fichier de paramètres du modèle (CLÉ = valeur)
    #[arg(long)]
    pub config: PathBuf,

    /// Liste globale consultée si une clé manque dans --config
    #[arg(long)]
    pub defauts: Option<PathBuf>,

    /// Préfixe des clés (<prefixe>-Kmax, <prefixe>-Z_A<n>, …)
    #[arg(long, default_value = "QEL")]
    pub prefixe: String,

    /// Points q² explicites (remplacent la grille)
    #[arg(long, num_args = 1.., allow_negative_numbers = true)]
    pub q2: Vec<f64>,

    /// Borne basse de la grille q²
    #[arg(long, default_value_t = -2.0, allow_negative_numbers = true)]
    pub q2_min: f64,

    /// Borne haute de la grille q²
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub q2_max: f64,

    /// Nombre de points de la grille
    #[arg(long, default_value_t = POINTS_DEFAUT)]
    pub points: usize,
}

impl Options {
    /// Points q² à évaluer : liste explicite, sinon grille régulière.
    pub fn grille(&self) -> Result<Vec<f64>, String> {
        if !self.q2.is_empty() {
            if self.q2.len() > POINTS_MAX {
                return Err(format!("trop de points (max {POINTS_MAX})"));
            }
            return Ok(self.q2.clone());
        }
        grille_reguliere(self.q2_min, self.q2_max, self.points)
    }
}

/// `n` points régulièrement espacés de `min` à `max` (inclus).
pub fn grille_reguliere(min: f64, max: f64, n: usize) -> Result<Vec<f64>, String> {
    if !(min.is_finite() && max.is_finite()) {
        return Err("bornes de grille non finies".into());
    }
    if min > max {
        return Err(format!("q2-min ({min}) > q2-max ({max})"));
    }
    match n {
        0 => Err("au moins un point requis".into()),
        n if n > POINTS_MAX => Err(format!("trop de points (max {POINTS_MAX})")),
        1 => Ok(vec![min]),
        n => {
            let pas = (max - min) / (n - 1) as f64;
            // dernier point forcé à max (pas d’erreur d’arrondi cumulée)
            Ok((0..n)
                .map(|i| if i + 1 == n { max } else { min + pas * i as f64 })
                .collect())
        }
    }
}
