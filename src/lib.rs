//! Calculatrice arithmétique flottante.
//!
//! - `noyau` : lexeur + évaluateur par descente récursive (une ligne -> f64)
//! - `app`   : session console (réglages, boucle de lecture, affichage)

pub mod app;
pub mod noyau;
