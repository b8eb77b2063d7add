// src/app.rs
//
// Calculatrice console — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter Session / Reglages et la boucle de lecture (pour main.rs)
//
// Le noyau ne connaît pas cette couche : il reçoit une ligne, rend un f64 ou
// une EvalError.

pub mod etat;
pub mod vue;

pub use etat::{Reglages, Session};
pub use vue::lance_session;
