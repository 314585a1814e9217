//! z-expansion du facteur de forme axial du nucléon
//!
//! - `noyau`  : coefficients, variable conforme z(q²), F_A(q²) / F_A(0)
//! - `traces` : initialisation du journal (tracing)

pub mod noyau;
pub mod traces;

pub use noyau::{
    ClesZExp, CoefficientSet, ErreurConfig, ModeleFacteurAxial, Registre, ZExpAxialFF, ZOutcome,
};
