//! Noyau — évaluation (descente récursive, une seule passe)
//!
//! expression -> terme -> facteur (!) -> puissance (^) -> unaire -> primaire
//!
//! Aucun arbre n’est construit : chaque règle rend directement sa valeur f64.
//! L’évaluateur ne garde qu’un jeton d’avance (`courant`).

use num_traits::{FloatConst, ToPrimitive};

use super::erreur::EvalError;
use super::jetons::{Fonction, Lexeur, Op, SourceJetons, Tok};
use super::trig::TrigFn;

const ATTENDU_PRIMAIRE: &str = "un nombre, '(' ou une fonction";
const ATTENDU_FERMANTE: &str = "')'";

/// API publique : évalue une ligne de texte.
///
/// Les jetons restants après l’expression sont ignorés (`"2 3"` vaut 2).
pub fn evaluate(ligne: &str) -> Result<f64, EvalError> {
    tracing::debug!(ligne, "évaluation");

    let resultat = Evaluateur::new(Lexeur::new(ligne))?.evaluer();

    match &resultat {
        Ok(valeur) => tracing::debug!(valeur, "résultat"),
        Err(e) => tracing::debug!(erreur = %e, "échec"),
    }
    resultat
}

pub struct Evaluateur<S> {
    source: S,
    courant: Tok,
}

impl<S: SourceJetons> Evaluateur<S> {
    /// Lit le premier jeton (peut déjà échouer).
    pub fn new(mut source: S) -> Result<Self, EvalError> {
        let courant = source.next_token()?;
        Ok(Self { source, courant })
    }

    /// Consomme l’évaluateur : une évaluation par paire lexeur/évaluateur.
    pub fn evaluer(mut self) -> Result<f64, EvalError> {
        let valeur = self.expression()?;
        if self.courant != Tok::Fin {
            tracing::debug!(jeton = %self.courant, "jetons restants ignorés");
        }
        Ok(valeur)
    }

    fn avance(&mut self) -> Result<(), EvalError> {
        self.courant = self.source.next_token()?;
        Ok(())
    }

    fn attend(&mut self, op: Op, attendu: &'static str) -> Result<(), EvalError> {
        if self.courant != Tok::Op(op) {
            return Err(EvalError::UnexpectedToken {
                attendu,
                trouve: self.courant,
            });
        }
        self.avance()
    }

    /* ------------------------ Règles ------------------------ */

    fn expression(&mut self) -> Result<f64, EvalError> {
        let mut valeur = self.terme()?;
        loop {
            match self.courant {
                Tok::Op(Op::Plus) => {
                    self.avance()?;
                    valeur += self.terme()?;
                }
                Tok::Op(Op::Minus) => {
                    self.avance()?;
                    valeur -= self.terme()?;
                }
                _ => return Ok(valeur),
            }
        }
    }

    fn terme(&mut self) -> Result<f64, EvalError> {
        let mut valeur = self.facteur()?;
        loop {
            match self.courant {
                Tok::Op(Op::Star) => {
                    self.avance()?;
                    valeur *= self.facteur()?;
                }
                Tok::Op(Op::Slash) => {
                    self.avance()?;
                    let diviseur = self.facteur()?;
                    if diviseur == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    valeur /= diviseur;
                }
                _ => return Ok(valeur),
            }
        }
    }

    /// Factorielle postfixée : au plus un `!` par facteur.
    fn facteur(&mut self) -> Result<f64, EvalError> {
        let valeur = self.puissance()?;
        if self.courant == Tok::Op(Op::Bang) {
            self.avance()?;
            return factorielle(valeur);
        }
        Ok(valeur)
    }

    /// `^` associatif à droite : l’exposant redescend dans `facteur`.
    fn puissance(&mut self) -> Result<f64, EvalError> {
        let base = self.unaire()?;
        if self.courant == Tok::Op(Op::Caret) {
            self.avance()?;
            let exposant = self.facteur()?;
            return Ok(base.powf(exposant));
        }
        Ok(base)
    }

    /// Un seul préfixe, appliqué au primaire (pas de `--x`, pas de `-%x`).
    fn unaire(&mut self) -> Result<f64, EvalError> {
        match self.courant {
            Tok::Op(Op::Plus) => {
                self.avance()?;
                self.primaire()
            }
            Tok::Op(Op::Minus) => {
                self.avance()?;
                Ok(-self.primaire()?)
            }
            Tok::Op(Op::Percent) => {
                self.avance()?;
                Ok(self.primaire()? / 100.0)
            }
            _ => self.primaire(),
        }
    }

    fn primaire(&mut self) -> Result<f64, EvalError> {
        match self.courant {
            Tok::Num(valeur) => {
                self.avance()?;
                Ok(valeur)
            }
            Tok::Op(Op::LPar) => {
                self.avance()?;
                let valeur = self.expression()?;
                self.attend(Op::RPar, ATTENDU_FERMANTE)?;
                Ok(valeur)
            }
            Tok::Fonction(Fonction::Pi) => {
                self.avance()?;
                Ok(f64::PI())
            }
            Tok::Fonction(Fonction::Sqrt) => {
                self.avance()?;
                self.attend(Op::LPar, "'(' après sqrt")?;
                let valeur = self.expression()?;
                self.attend(Op::RPar, ATTENDU_FERMANTE)?;
                if valeur < 0.0 {
                    return Err(EvalError::NegativeSquareRoot);
                }
                Ok(valeur.sqrt())
            }
            Tok::Fonction(f) => match TrigFn::depuis(f) {
                Some(trig) => self.trigo(trig),
                None => Err(EvalError::UnexpectedToken {
                    attendu: ATTENDU_PRIMAIRE,
                    trouve: self.courant,
                }),
            },
            trouve => Err(EvalError::UnexpectedToken {
                attendu: ATTENDU_PRIMAIRE,
                trouve,
            }),
        }
    }

    /// TrigFn '(' Expression 'deg'? ')'
    fn trigo(&mut self, trig: TrigFn) -> Result<f64, EvalError> {
        self.avance()?;
        self.attend(Op::LPar, trig.parenthese_attendue())?;
        let valeur = self.expression()?;

        let deg = self.courant == Tok::Deg;
        if deg {
            self.avance()?;
        }

        self.attend(Op::RPar, ATTENDU_FERMANTE)?;
        Ok(trig.applique(valeur, deg))
    }
}

/// Produit 2..=floor(x) : troncature, pas d’arrondi (2.9! = 2).
///
/// NaN! = NaN ; un opérande hors u64 (ou +inf) donne +inf. La boucle s’arrête
/// dès que le produit déborde (171! et au-delà).
fn factorielle(x: f64) -> Result<f64, EvalError> {
    if x < 0.0 {
        return Err(EvalError::NegativeFactorial);
    }

    let n = match x.floor().to_u64() {
        Some(n) => n,
        None if x.is_nan() => return Ok(f64::NAN),
        None => return Ok(f64::INFINITY),
    };

    let mut produit = 1.0_f64;
    let mut i: u64 = 2;
    while i <= n && produit.is_finite() {
        produit *= i as f64;
        i += 1;
    }
    Ok(produit)
}
