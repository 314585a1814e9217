// src/noyau/jetons.rs
//
// Lecture des littéraux numériques (valeurs de configuration)
// -----------------------------------------------------------
// - entiers (ex: 4, -12)                  -> Nombre::Entier
// - décimaux + exposant (ex: -0.28, 2e-3) -> Nombre::Exact (rationnel exact)
// - fractions littérales (ex: 9/50)       -> Nombre::Exact
//
// L’arrondi vers f64 se fait une seule fois, à la fin (vers_f64).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

/// Garde-fou : au-delà, f64 déborde de toute façon (et BigInt::pow coûte cher).
const EXPOSANT_MAX: u32 = 400;

#[derive(Clone, Debug, PartialEq)]
pub enum Nombre {
    Entier(BigInt),
    Exact(BigRational),
}

impl Nombre {
    /// Arrondi f64 (None si hors bornes / non fini).
    pub fn vers_f64(&self) -> Option<f64> {
        let v = match self {
            Nombre::Entier(n) => n.to_f64()?,
            Nombre::Exact(r) => r.to_f64()?,
        };
        v.is_finite().then_some(v)
    }
}

fn pow10(n: u32) -> BigInt {
    BigInt::from(10).pow(n)
}

/// Avance tant qu’il y a des chiffres ; retourne (chiffres, nouvel index).
fn lire_chiffres(chars: &[char], mut i: usize) -> (String, usize) {
    let start = i;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    (chars[start..i].iter().collect(), i)
}

fn lire_signe(chars: &[char], i: usize) -> (bool, usize) {
    match chars.get(i) {
        Some('-') => (true, i + 1),
        Some('+') => (false, i + 1),
        _ => (false, i),
    }
}

/// Lit un littéral numérique complet (espaces de bord tolérés).
pub fn lire_nombre(s: &str) -> Result<Nombre, String> {
    let chars: Vec<char> = s.trim().chars().collect();
    if chars.is_empty() {
        return Err("valeur vide".into());
    }

    let (neg, mut i) = lire_signe(&chars, 0);

    // 1) Partie entière (+ partie décimale éventuelle)
    let (mut chiffres, apres) = lire_chiffres(&chars, i);
    i = apres;

    let mut exact = false;
    let mut decimales: usize = 0;

    if i < chars.len() && chars[i] == '.' {
        exact = true;
        let (frac, apres) = lire_chiffres(&chars, i + 1);
        i = apres;
        decimales = frac.len();
        chiffres.push_str(&frac);
    }

    if chiffres.is_empty() {
        return Err(format!("nombre invalide: '{}'", s.trim()));
    }

    let mut n = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or("nombre invalide")?;
    if neg {
        n = -n;
    }

    // 2) Fraction littérale a/b (numérateur entier seulement, sans espaces)
    if i < chars.len() && chars[i] == '/' {
        if exact {
            return Err("fraction : numérateur entier attendu".into());
        }
        let (d_str, apres) = lire_chiffres(&chars, i + 1);
        if d_str.is_empty() {
            return Err("dénominateur invalide".into());
        }
        if apres < chars.len() {
            return Err(format!("caractère inattendu: '{}'", chars[apres]));
        }
        let d = BigInt::parse_bytes(d_str.as_bytes(), 10).ok_or("dénominateur invalide")?;
        if d.is_zero() {
            return Err("division par zéro dans une fraction".into());
        }
        return Ok(Nombre::Exact(BigRational::new(n, d)));
    }

    // 3) Exposant décimal
    let mut exposant: i64 = 0;
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        exact = true;
        let (neg_e, j) = lire_signe(&chars, i + 1);
        let (e_str, apres) = lire_chiffres(&chars, j);
        i = apres;
        if e_str.is_empty() {
            return Err("exposant invalide".into());
        }
        let e = e_str
            .parse::<u32>()
            .ok()
            .filter(|e| *e <= EXPOSANT_MAX)
            .ok_or("exposant hors bornes")?;
        exposant = if neg_e { -i64::from(e) } else { i64::from(e) };
    }

    if i < chars.len() {
        return Err(format!("caractère inattendu: '{}'", chars[i]));
    }

    if !exact {
        return Ok(Nombre::Entier(n));
    }

    // mantisse * 10^(exposant - decimales), sans passer par f64
    let e10 = exposant - decimales as i64;
    let echelle = u32::try_from(e10.unsigned_abs()).map_err(|_| "exposant hors bornes")?;
    let r = if e10 >= 0 {
        BigRational::from_integer(n * pow10(echelle))
    } else {
        BigRational::new(n, pow10(echelle))
    };
    Ok(Nombre::Exact(r))
}
