//! Tests scientifiques (campagne) : propriétés de la z-expansion.
//!
//! - z(T0) = 0 exactement, donc F_A(T0) = a_0
//! - monotonie de z sous T0, |z| < 1
//! - hors domaine : F_A = 0.0, jamais NaN
//! - contrat K_max + 1 coefficients, K_max > 0 strict
//! - appels concurrents après configuration

use std::thread;

use super::{
    calcul_z, ClesZExp, CoefficientSet, ErreurConfig, ModeleFacteurAxial, Registre, ZExpAxialFF,
    ZOutcome,
};

const CONFIG_EXEMPLE: &str = "\
QEL-Kmax = 2
QEL-T0 = -0.1
QEL-Tcut = 0.6
QEL-Z_A0 = -1.0
QEL-Z_A1 = 2.0
QEL-Z_A2 = -0.5
";

fn modele(texte: &str) -> ZExpAxialFF {
    let reg = Registre::lire(texte).unwrap_or_else(|e| panic!("registre: {e}"));
    ZExpAxialFF::configurer(&reg, &ClesZExp::default()).unwrap_or_else(|e| panic!("config: {e}"))
}

fn z_val(m: &ZExpAxialFF, q2: f64) -> f64 {
    m.z(q2)
        .valeur()
        .unwrap_or_else(|| panic!("z({q2}) devrait être défini"))
}

/* ------------------------ Exemple de bout en bout ------------------------ */

#[test]
fn sci_exemple_bout_en_bout() {
    let m = modele(CONFIG_EXEMPLE);
    assert_eq!(m.z(-0.1), ZOutcome::Valeur(0.0));
    assert_eq!(m.evaluer(-0.1), -1.0);

    // Tcut est la borne fermée du domaine (radicande nul, pas NaN) : z = -1 et
    // F_A fini. Choix voulu, voir DESIGN.md « q² = Tcut » ; ne pas remplacer par 0.0.
    assert_eq!(z_val(&m, 0.6), -1.0);
    assert_eq!(m.evaluer(0.6), -3.5);

    // au-delà de Tcut : repli
    assert!(m.z(0.6000001).est_indefini());
    assert_eq!(m.evaluer(0.6000001), 0.0);
}

/* ------------------------ Variable conforme ------------------------ */

#[test]
fn sci_z_nul_en_t0() {
    assert_eq!(calcul_z(-0.1, -0.1, 1.0), ZOutcome::Valeur(0.0));
}

#[test]
fn sci_z_decroissant_sous_t0() {
    let (t0, tcut): (f64, f64) = (-0.1, 1.0);
    let mut precedent = 0.0;
    let mut q2 = t0;
    for _ in 0..200 {
        q2 -= 0.25 + q2.abs() * 0.1;
        let z = calcul_z(q2, t0, tcut)
            .valeur()
            .unwrap_or_else(|| panic!("z({q2}) indéfini"));
        assert!(z > precedent, "q2={q2} z={z} précédent={precedent}");
        assert!(z < 1.0, "q2={q2} z={z}");
        precedent = z;
    }
    // loin sous T0, z s’approche de 1
    assert!(precedent > 0.99, "z final = {precedent}");
}

#[test]
fn sci_z_vers_moins_un_pres_de_tcut() {
    let (t0, tcut): (f64, f64) = (-0.1, 1.0);
    let mut precedent = 0.0;
    for q2 in [0.0, 0.5, 0.9, 0.99, 0.9999, 1.0] {
        let z = calcul_z(q2, t0, tcut).valeur().unwrap();
        assert!(z < precedent, "q2={q2}");
        assert!(z >= -1.0, "q2={q2} z={z}");
        precedent = z;
    }
    assert_eq!(precedent, -1.0);
}

/* ------------------------ Domaine ------------------------ */

#[test]
fn sci_hors_domaine_jamais_nan() {
    let m = ZExpAxialFF::new(CoefficientSet::new(3, -0.1, 1.0, vec![1.0, -2.0, 3.0, 0.5]).unwrap());
    for q2 in [1.0000001, 1.5, 2.0, 10.0, 1e10, f64::MAX, f64::INFINITY, f64::NAN] {
        let fa = m.evaluer(q2);
        assert_eq!(fa, 0.0, "q2={q2}");
    }
}

/* ------------------------ Contrat de configuration ------------------------ */

#[test]
fn sci_kmax3_exige_quatre_coefficients() {
    let complet = "QEL-Kmax = 3\nQEL-T0 = -0.1\nQEL-Tcut = 1.0\n\
                   QEL-Z_A0 = 1\nQEL-Z_A1 = 2\nQEL-Z_A2 = 3\nQEL-Z_A3 = 4\n";
    let m = modele(complet);
    assert_eq!(m.coefficients().coefficients().len(), 4);

    let sans_a3 = complet.replace("QEL-Z_A3 = 4\n", "");
    let reg = Registre::lire(&sans_a3).unwrap();
    match ZExpAxialFF::configurer(&reg, &ClesZExp::default()) {
        Err(ErreurConfig::CleManquante { cle }) => assert_eq!(cle, "QEL-Z_A3"),
        Err(e) => panic!("erreur inattendue: {e}"),
        Ok(_) => panic!("a_3 absent : la configuration aurait dû échouer"),
    }
}

#[test]
fn sci_kmax_zero_refuse() {
    let texte = "QEL-Kmax = 0\nQEL-T0 = -0.1\nQEL-Tcut = 1.0\nQEL-Z_A0 = 1\n";
    let reg = Registre::lire(texte).unwrap();
    assert!(matches!(
        ZExpAxialFF::configurer(&reg, &ClesZExp::default()),
        Err(ErreurConfig::KmaxInvalide { kmax: 0 })
    ));
}

/* ------------------------ Déterminisme + concurrence ------------------------ */

#[test]
fn sci_deterministe() {
    let m = modele(CONFIG_EXEMPLE);
    for i in 0..100 {
        let q2 = -3.0 + 0.035 * f64::from(i);
        let a = m.evaluer(q2);
        let b = m.evaluer(q2);
        assert_eq!(a.to_bits(), b.to_bits(), "q2={q2}");
    }
}

#[test]
fn sci_appels_concurrents() {
    let m = modele(CONFIG_EXEMPLE);
    let grille: Vec<f64> = (0..64).map(|i| -2.0 + 0.04 * f64::from(i)).collect();
    let reference: Vec<f64> = grille.iter().map(|&q2| m.evaluer(q2)).collect();

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let modele: &dyn ModeleFacteurAxial = &m;
                for (q2, attendu) in grille.iter().zip(&reference) {
                    assert_eq!(modele.evaluer(*q2).to_bits(), attendu.to_bits());
                }
            });
        }
    });
}
