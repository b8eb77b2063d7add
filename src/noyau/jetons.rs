// src/noyau/jetons.rs

use std::fmt;

use super::erreur::EvalError;

/// Opérateurs et délimiteurs à un seul caractère.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Caret,   // ^
    Percent, // %
    Bang,    // !
    LPar,
    RPar,
}

impl Op {
    fn depuis_char(c: char) -> Option<Op> {
        Some(match c {
            '+' => Op::Plus,
            '-' => Op::Minus,
            '*' => Op::Star,
            '/' => Op::Slash,
            '^' => Op::Caret,
            '%' => Op::Percent,
            '!' => Op::Bang,
            '(' => Op::LPar,
            ')' => Op::RPar,
            _ => return None,
        })
    }

    fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
            Op::Caret => '^',
            Op::Percent => '%',
            Op::Bang => '!',
            Op::LPar => '(',
            Op::RPar => ')',
        }
    }
}

/// Mots-clés fonctions (et la constante `pi`, lue au même endroit).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sqrt,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Pi,
}

impl Fonction {
    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sqrt => "sqrt",
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Asin => "asin",
            Fonction::Acos => "acos",
            Fonction::Atan => "atan",
            Fonction::Pi => "pi",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Op),
    Fonction(Fonction),
    Deg,
    Fin,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(v) => write!(f, "{v}"),
            Tok::Op(op) => write!(f, "'{}'", op.symbole()),
            Tok::Fonction(fct) => write!(f, "'{}'", fct.nom()),
            Tok::Deg => f.write_str("'deg'"),
            Tok::Fin => f.write_str("fin de ligne"),
        }
    }
}

/// Mots-clés testés dans cet ordre (aucun n’est préfixe d’un autre).
const MOTS_CLES: [(&str, Tok); 9] = [
    ("pi", Tok::Fonction(Fonction::Pi)),
    ("sin", Tok::Fonction(Fonction::Sin)),
    ("cos", Tok::Fonction(Fonction::Cos)),
    ("tan", Tok::Fonction(Fonction::Tan)),
    ("asin", Tok::Fonction(Fonction::Asin)),
    ("acos", Tok::Fonction(Fonction::Acos)),
    ("atan", Tok::Fonction(Fonction::Atan)),
    ("sqrt", Tok::Fonction(Fonction::Sqrt)),
    ("deg", Tok::Deg),
];

/// Capacité « produire le jeton suivant ».
///
/// L’évaluateur ne connaît que ce trait : les tests peuvent le piloter avec une
/// suite de jetons scriptée, sans passer par le texte.
pub trait SourceJetons {
    fn next_token(&mut self) -> Result<Tok, EvalError>;
}

/// Lexeur paresseux : un jeton par appel, aucun tampon.
///
/// - `pos` est un offset en octets dans `entree`, qui ne recule jamais.
/// - une fois `Tok::Fin` rendu, tous les appels suivants rendent `Tok::Fin`.
pub struct Lexeur<'a> {
    entree: &'a str,
    pos: usize,
}

impl<'a> Lexeur<'a> {
    pub fn new(entree: &'a str) -> Self {
        Self { entree, pos: 0 }
    }

    /// Offset courant (octets).
    pub fn position(&self) -> usize {
        self.pos
    }

    fn reste(&self) -> &'a str {
        &self.entree[self.pos..]
    }

    fn saute_espaces(&mut self) {
        let reste = self.reste();
        let saut = reste.len() - reste.trim_start().len();
        self.pos += saut;
    }

    /// Chiffres et points consommés goulûment, puis parse f64.
    /// "1.2.3" => MalformedNumber (le parse Rust refuse), "5." => 5.
    fn lit_nombre(&mut self) -> Result<Tok, EvalError> {
        let debut = self.pos;
        let longueur = self
            .reste()
            .bytes()
            .take_while(|b| b.is_ascii_digit() || *b == b'.')
            .count();
        self.pos += longueur;

        let texte = &self.entree[debut..self.pos];
        texte
            .parse::<f64>()
            .map(Tok::Num)
            .map_err(|_| EvalError::MalformedNumber {
                texte: texte.to_string(),
                position: debut,
            })
    }

    fn lit_mot_cle(&mut self) -> Option<Tok> {
        let reste = self.reste();
        let (mot, tok) = MOTS_CLES.iter().find(|(mot, _)| reste.starts_with(mot))?;
        self.pos += mot.len();
        Some(*tok)
    }
}

impl SourceJetons for Lexeur<'_> {
    fn next_token(&mut self) -> Result<Tok, EvalError> {
        self.saute_espaces();

        let Some(c) = self.reste().chars().next() else {
            return Ok(Tok::Fin);
        };

        let tok = if c.is_ascii_digit() {
            self.lit_nombre()?
        } else if let Some(op) = Op::depuis_char(c) {
            self.pos += c.len_utf8();
            Tok::Op(op)
        } else if let Some(tok) = self.lit_mot_cle() {
            tok
        } else {
            return Err(EvalError::InvalidCharacter {
                caractere: c,
                position: self.pos,
            });
        };

        tracing::trace!(jeton = %tok, position = self.pos, "jeton lu");
        Ok(tok)
    }
}

/// Format utilitaire (debug / “démarche”) : jetons d’une ligne en texte.
///
/// Indépendant de l’évaluation : la ligne est relue par un lexeur à part.
pub fn format_jetons(ligne: &str) -> Result<String, EvalError> {
    let mut lexeur = Lexeur::new(ligne);
    let mut out = Vec::new();

    loop {
        let s = match lexeur.next_token()? {
            Tok::Fin => break,
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::Fonction(f) => f.nom().to_string(),
            Tok::Deg => "deg".to_string(),
        };
        out.push(s);
    }

    Ok(out.join(" "))
}
