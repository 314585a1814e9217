// src/app/vue.rs
//
// Vue (texte) — table q², z, F_A
// ------------------------------
// - une ligne d’en-tête, F_A(0) en tête de sortie
// - z hors domaine affiché "indéfini" (F_A = 0 par repli)
// - largeur fixe : la table reste lisible et “greppable”

use std::fmt::Write as _;

use zexp_axial_ff::noyau::facteur_axial::LigneTable;
use zexp_axial_ff::noyau::ZOutcome;

const LARGEUR: usize = 16;
const PRECISION: usize = 8;

fn cellule(v: f64) -> String {
    format!("{v:>LARGEUR$.PRECISION$e}")
}

fn cellule_z(z: &ZOutcome<f64>) -> String {
    match z {
        ZOutcome::Valeur(v) => cellule(*v),
        ZOutcome::Indefini(_) => format!("{:>LARGEUR$}", "indéfini"),
    }
}

/// Rend la table complète (F_A(0) + en-tête + lignes).
pub fn rendre_table(fa0: f64, lignes: &[LigneTable]) -> String {
    let mut out = String::new();

    // Écrire dans une String ne peut pas échouer.
    let _ = writeln!(out, "# F_A(0) = {fa0:.PRECISION$e}");
    let _ = writeln!(out, "{:>LARGEUR$}{:>LARGEUR$}{:>LARGEUR$}", "q2", "z", "FA");

    for l in lignes {
        let _ = writeln!(out, "{}{}{}", cellule(l.q2), cellule_z(&l.z), cellule(l.fa));
    }
    out
}
