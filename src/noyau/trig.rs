// src/noyau/trig.rs
//
// Trigonométrie flottante + marqueur `deg`
// ----------------------------------------
// - sin/cos/tan : `deg` décrit l’ARGUMENT (degrés -> radians avant calcul)
// - asin/acos/atan : `deg` décrit le RÉSULTAT (radians -> degrés après calcul)
//
// Conversions : x·π/180 et y·180/π, dans cet ordre (pas f64::to_radians,
// dont l’arrondi diffère).

use num_traits::FloatConst;

use super::jetons::Fonction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
}

impl TrigFn {
    /// `None` pour sqrt / pi (pas des fonctions trigonométriques).
    pub fn depuis(f: Fonction) -> Option<TrigFn> {
        Some(match f {
            Fonction::Sin => TrigFn::Sin,
            Fonction::Cos => TrigFn::Cos,
            Fonction::Tan => TrigFn::Tan,
            Fonction::Asin => TrigFn::Asin,
            Fonction::Acos => TrigFn::Acos,
            Fonction::Atan => TrigFn::Atan,
            Fonction::Sqrt | Fonction::Pi => return None,
        })
    }

    pub fn est_inverse(self) -> bool {
        matches!(self, TrigFn::Asin | TrigFn::Acos | TrigFn::Atan)
    }

    /// Message « attendu » quand la parenthèse ouvrante manque.
    pub fn parenthese_attendue(self) -> &'static str {
        match self {
            TrigFn::Sin => "'(' après sin",
            TrigFn::Cos => "'(' après cos",
            TrigFn::Tan => "'(' après tan",
            TrigFn::Asin => "'(' après asin",
            TrigFn::Acos => "'(' après acos",
            TrigFn::Atan => "'(' après atan",
        }
    }

    /// Applique la fonction ; `deg` suit l’asymétrie directe / inverse.
    pub fn applique(self, x: f64, deg: bool) -> f64 {
        if self.est_inverse() {
            let y = match self {
                TrigFn::Asin => x.asin(),
                TrigFn::Acos => x.acos(),
                _ => x.atan(),
            };
            return if deg { vers_degres(y) } else { y };
        }

        let x = if deg { vers_radians(x) } else { x };
        match self {
            TrigFn::Sin => x.sin(),
            TrigFn::Cos => x.cos(),
            _ => x.tan(),
        }
    }
}

pub fn vers_radians(degres: f64) -> f64 {
    degres * f64::PI() / 180.0
}

pub fn vers_degres(radians: f64) -> f64 {
    radians * 180.0 / f64::PI()
}
