// src/main.rs
//
// Calculatrice console — point d’entrée
// -------------------------------------
// - Journalisation : RUST_LOG (défaut "warn"), toujours sur stderr
// - Réglages       : ligne de commande + CALC_FIN / CALC_CHIFFRES
// - Boucle         : stdin -> noyau -> stdout (résultats) / stderr (erreurs)

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use calculatrice_console::app::{lance_session, Reglages, Session};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let reglages = Reglages::parse();
    tracing::debug!(?reglages, "réglages chargés");

    let mut session = Session::new(reglages);
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    // Seule une erreur d’E/S termine le programme en échec.
    match lance_session(&mut session, stdin, &mut stdout, &mut stderr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(erreur = %e, "entrée/sortie");
            eprintln!("Erreur d’entrée/sortie : {e}");
            ExitCode::FAILURE
        }
    }
}
