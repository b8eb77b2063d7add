// src/app/vue.rs
//
// Vue console
// -----------
// Objectifs :
// - une ligne lue = une évaluation (le noyau ne voit jamais le mot-clé de fin)
// - Résultat sur la sortie standard, Erreur sur la sortie d’erreur
// - une erreur n’arrête jamais la boucle ; EOF termine comme le mot-clé
//
// Les flux sont passés en paramètres : les tests branchent des tampons.

use std::io::{self, BufRead, Write};

use super::etat::Session;
use crate::noyau;

impl Session {
    fn banniere(&self, sortie: &mut impl Write) -> io::Result<()> {
        if self.reglages.silencieux {
            return Ok(());
        }
        writeln!(sortie, "Tapez '{}' pour quitter.", self.reglages.fin)
    }

    fn invite(&self, sortie: &mut impl Write) -> io::Result<()> {
        if self.reglages.silencieux {
            return Ok(());
        }
        writeln!(sortie, "\nEntrez une expression arithmétique :")?;
        sortie.flush()
    }

    /// Évalue l’entrée via le noyau, puis dépose résultat ou erreur dans l’état.
    fn eval_via_noyau(&mut self) {
        match noyau::evaluate(&self.entree) {
            Ok(valeur) => self.set_resultat(valeur),
            Err(e) => self.set_erreur(e.to_string()),
        }
    }

    fn affiche(&self, sortie: &mut impl Write, erreurs: &mut impl Write) -> io::Result<()> {
        match self.resultat {
            Some(valeur) => writeln!(
                sortie,
                "Résultat : {}",
                noyau::format_resultat(valeur, self.reglages.chiffres)
            ),
            None => writeln!(erreurs, "Erreur : {}", self.erreur),
        }
    }

    /// Démarche : jetons de la ligne (rien si la ligne ne se découpe pas,
    /// l’erreur sera de toute façon affichée par l’évaluation).
    fn affiche_jetons(&self, sortie: &mut impl Write) -> io::Result<()> {
        if !self.reglages.jetons {
            return Ok(());
        }
        match noyau::format_jetons(&self.entree) {
            Ok(jetons) => writeln!(sortie, "Jetons : {jetons}"),
            Err(_) => Ok(()),
        }
    }
}

/// Retire la fin de ligne ("\n" ou "\r\n") et rien d’autre.
fn sans_fin_de_ligne(ligne: &str) -> &str {
    let ligne = ligne.strip_suffix('\n').unwrap_or(ligne);
    ligne.strip_suffix('\r').unwrap_or(ligne)
}

/// Boucle de lecture : jusqu’au mot-clé de fin ou à la fin de l’entrée.
pub fn lance_session(
    session: &mut Session,
    mut entree: impl BufRead,
    sortie: &mut impl Write,
    erreurs: &mut impl Write,
) -> io::Result<()> {
    session.banniere(sortie)?;

    let mut tampon = String::new();
    loop {
        session.invite(sortie)?;

        tampon.clear();
        if entree.read_line(&mut tampon)? == 0 {
            tracing::debug!("fin de l’entrée");
            break;
        }

        let ligne = sans_fin_de_ligne(&tampon);
        if session.est_fin(ligne) {
            break;
        }

        session.set_entree(ligne);
        session.affiche_jetons(sortie)?;
        session.eval_via_noyau();
        session.affiche(sortie, erreurs)?;
    }

    tracing::debug!(
        lignes = session.lignes,
        echecs = session.echecs,
        "session terminée"
    );
    sortie.flush()
}
