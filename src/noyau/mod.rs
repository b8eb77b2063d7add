//! Noyau flottant
//!
//! Organisation interne :
//! - jetons.rs   : lexeur paresseux (un jeton par appel) + trait SourceJetons
//! - eval.rs     : descente récursive, valeur calculée au fil des règles
//! - trig.rs     : sin/cos/tan/asin/acos/atan + marqueur `deg`
//! - erreur.rs   : EvalError
//! - format.rs   : affichage façon `%g`

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::EvalError;
pub use eval::evaluate;
pub use format::format_resultat;
pub use jetons::format_jetons;
