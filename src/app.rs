// src/app.rs
//
// zexp-fa — module App (racine)
// -----------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter Options (pour main.rs: use crate::app::Options;)
// - Enchaîner: registres -> modèle -> grille -> table
//
// La configuration est fatale : aucune table n’est produite si elle échoue.

pub mod etat;
pub mod vue;

pub use etat::Options;

use anyhow::{anyhow, Context};

use zexp_axial_ff::noyau::{tabuler, ClesZExp, Registre, RegistreEmpile, ZExpAxialFF};

/// Exécute une tabulation complète et retourne le texte à afficher.
pub fn executer(opts: &Options) -> anyhow::Result<String> {
    let propre = Registre::charger(&opts.config)
        .with_context(|| format!("configuration du modèle ({})", opts.config.display()))?;

    let defauts = match &opts.defauts {
        Some(chemin) => Registre::charger(chemin)
            .with_context(|| format!("paramètres globaux ({})", chemin.display()))?,
        None => Registre::new(),
    };

    let pile = RegistreEmpile::new().puis(&propre).puis(&defauts);
    let modele = ZExpAxialFF::configurer(&pile, &ClesZExp::new(opts.prefixe.as_str()))
        .context("chargement des coefficients de la z-expansion")?;

    let grille = opts.grille().map_err(|e| anyhow!(e))?;
    let lignes = tabuler(&modele, &grille);

    Ok(vue::rendre_table(modele.fa0(), &lignes))
}
