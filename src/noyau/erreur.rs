// src/noyau/erreur.rs

use thiserror::Error;

use super::jetons::Tok;

/// Erreurs du noyau : détectées au point de violation, propagées telles quelles.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("caractère invalide '{caractere}' (position {position})")]
    InvalidCharacter { caractere: char, position: usize },

    #[error("nombre mal formé \"{texte}\" (position {position})")]
    MalformedNumber { texte: String, position: usize },

    #[error("attendu {attendu}, trouvé {trouve}")]
    UnexpectedToken { attendu: &'static str, trouve: Tok },

    #[error("division par zéro")]
    DivisionByZero,

    #[error("factorielle d’un nombre négatif")]
    NegativeFactorial,

    #[error("racine carrée d’un nombre négatif")]
    NegativeSquareRoot,
}
