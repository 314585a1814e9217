// src/noyau/expansion_z.rs
//
// Variable conforme de la z-expansion
// -----------------------------------
//   z(q²) = (√(Tcut − q²) − √(Tcut − T0)) / (√(Tcut − q²) + √(Tcut − T0))
//
// - Domaine vérifié AVANT la division (radicandes ≥ 0, dénominateur ≠ 0)
// - Résultat étiqueté : Valeur(z) ou Indefini(raison), jamais NaN en sortie
// - q² = 0 passe par la même formule (aucune branche spéciale)

use std::fmt;

use num_traits::Float;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaisonIndefini {
    /// q², T0 ou Tcut non fini.
    EntreeNonFinie,
    /// Tcut − q² < 0 (point cinématiquement inaccessible).
    RadicandeQ2Negatif,
    /// Tcut − T0 < 0 (seuils incohérents).
    RadicandeT0Negatif,
    /// q² = T0 = Tcut : 0/0.
    DenominateurNul,
    /// Débordement flottant dans la différence.
    Debordement,
}

impl fmt::Display for RaisonIndefini {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RaisonIndefini::EntreeNonFinie => "entrée non finie",
            RaisonIndefini::RadicandeQ2Negatif => "Tcut - q2 < 0",
            RaisonIndefini::RadicandeT0Negatif => "Tcut - T0 < 0",
            RaisonIndefini::DenominateurNul => "dénominateur nul",
            RaisonIndefini::Debordement => "débordement",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZOutcome<F> {
    Valeur(F),
    Indefini(RaisonIndefini),
}

impl<F: Copy> ZOutcome<F> {
    pub fn valeur(&self) -> Option<F> {
        match self {
            ZOutcome::Valeur(z) => Some(*z),
            ZOutcome::Indefini(_) => None,
        }
    }

    pub fn est_indefini(&self) -> bool {
        matches!(self, ZOutcome::Indefini(_))
    }
}

/// Calcule z(q²) pour les seuils (T0, Tcut).
pub fn calcul_z<F: Float>(q2: F, t0: F, tcut: F) -> ZOutcome<F> {
    use RaisonIndefini::*;

    if !(q2.is_finite() && t0.is_finite() && tcut.is_finite()) {
        return ZOutcome::Indefini(EntreeNonFinie);
    }

    let r_q2 = tcut - q2;
    let r_t0 = tcut - t0;
    if !(r_q2.is_finite() && r_t0.is_finite()) {
        return ZOutcome::Indefini(Debordement);
    }
    if r_q2 < F::zero() {
        return ZOutcome::Indefini(RadicandeQ2Negatif);
    }
    if r_t0 < F::zero() {
        return ZOutcome::Indefini(RadicandeT0Negatif);
    }

    let s_q2 = r_q2.sqrt();
    let s_t0 = r_t0.sqrt();

    let den = s_q2 + s_t0;
    if den == F::zero() {
        return ZOutcome::Indefini(DenominateurNul);
    }

    ZOutcome::Valeur((s_q2 - s_t0) / den)
}
