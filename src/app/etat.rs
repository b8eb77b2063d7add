//! src/app/etat.rs
//!
//! État de la session console (sans vue, sans noyau).
//!
//! Rôle : contenir les réglages, la dernière entrée, le dernier résultat ou la
//! dernière erreur, et les compteurs de la session.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Bornes sur la précision d’affichage (chiffres).

use clap::Parser;

use crate::noyau::format::{CHIFFRES_MAX, CHIFFRES_MIN};

/// Précision d’affichage par défaut (celle de `%g`).
const CHIFFRES_DEFAUT: usize = 6;

/// Mot-clé de sortie par défaut.
const MOT_FIN_DEFAUT: &str = "END";

/// Réglages de la console : ligne de commande, puis variables d’environnement.
#[derive(Parser, Clone, Debug, PartialEq, Eq)]
#[command(
    name = "calculatrice",
    version,
    about = "Calculatrice arithmétique, une expression par ligne"
)]
pub struct Reglages {
    /// Mot-clé qui termine la session (comparé à la ligne brute)
    #[arg(long, env = "CALC_FIN", default_value = MOT_FIN_DEFAUT)]
    pub fin: String,

    /// Chiffres significatifs à l’affichage (borné à 1..=17)
    #[arg(long, env = "CALC_CHIFFRES", default_value_t = CHIFFRES_DEFAUT)]
    pub chiffres: usize,

    /// Affiche aussi les jetons de chaque ligne
    #[arg(long)]
    pub jetons: bool,

    /// Ni bannière ni invite (entrée par tube)
    #[arg(long)]
    pub silencieux: bool,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            fin: MOT_FIN_DEFAUT.to_string(),
            chiffres: CHIFFRES_DEFAUT,
            jetons: false,
            silencieux: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Session {
    pub reglages: Reglages,

    // --- dernière ligne ---
    pub entree: String,
    pub resultat: Option<f64>,
    pub erreur: String,

    // --- compteurs ---
    pub lignes: usize,
    pub echecs: usize,
}

impl Session {
    pub fn new(mut reglages: Reglages) -> Self {
        reglages.chiffres = reglages.chiffres.clamp(CHIFFRES_MIN, CHIFFRES_MAX);
        Self {
            reglages,
            entree: String::new(),
            resultat: None,
            erreur: String::new(),
            lignes: 0,
            echecs: 0,
        }
    }

    /// La ligne brute (sans fin de ligne) est-elle le mot-clé de sortie ?
    pub fn est_fin(&self, ligne: &str) -> bool {
        ligne == self.reglages.fin
    }

    /// Nouvelle ligne : on oublie le résultat précédent.
    pub fn set_entree(&mut self, ligne: impl Into<String>) {
        self.entree = ligne.into();
        self.resultat = None;
        self.erreur.clear();
    }

    pub fn set_resultat(&mut self, valeur: f64) {
        self.erreur.clear();
        self.resultat = Some(valeur);
        self.lignes += 1;
    }

    /// Une erreur ne termine jamais la session : elle est comptée, c’est tout.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.resultat = None;
        self.lignes += 1;
        self.echecs += 1;
    }
}
