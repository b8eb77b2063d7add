//! Tests scientifiques (campagne) : propriétés du noyau, ligne par ligne.
//!
//! - précédence / associativité / groupement
//! - factorielle, division, racine, pourcentage
//! - trigonométrie et asymétrie du marqueur `deg`
//! - bizarreries conservées (jetons en trop ignorés, nombres à plusieurs points)

use std::f64::consts::{FRAC_PI_2, PI};

use super::erreur::EvalError;
use super::evaluate;
use super::jetons::{Op, Tok};

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() < 1e-9,
        "expr={expr:?} valeur={v} attendu={attendu}"
    );
}

fn assert_erreur(expr: &str, attendu: EvalError) {
    assert_eq!(evaluate(expr), Err(attendu), "expr={expr:?}");
}

fn est_inattendu(expr: &str) -> bool {
    matches!(evaluate(expr), Err(EvalError::UnexpectedToken { .. }))
}

/* ------------------------ Littéraux ------------------------ */

#[test]
fn sci_litteraux() {
    for lit in ["0", "7", "42", "3.25", "0.1", "1000000", "5.", "007", "2.50"] {
        assert_eq!(eval_ok(lit), lit.parse::<f64>().unwrap(), "lit={lit:?}");
    }
}

/* ------------------------ Précédence ------------------------ */

#[test]
fn sci_precedence_et_groupement() {
    assert_eq!(eval_ok("2+3*4"), 14.0);
    assert_eq!(eval_ok("(2+3)*4"), 20.0);
    assert_eq!(eval_ok("8/4/2"), 1.0);
    assert_eq!(eval_ok("2*3^2"), 18.0);
    assert_eq!(eval_ok(" ( ( 1 ) ) "), 1.0);
}

#[test]
fn sci_puissance_associative_a_droite() {
    assert_eq!(eval_ok("2^3^2"), 512.0);
    assert_eq!(eval_ok("(2^3)^2"), 64.0);
}

/* ------------------------ Factorielle ------------------------ */

#[test]
fn sci_factorielle() {
    assert_eq!(eval_ok("5!"), 120.0);
    assert_eq!(eval_ok("0!"), 1.0);
    assert_eq!(eval_ok("2.9!"), 2.0);
    assert_eq!(eval_ok("(2+1)!"), 6.0);
    assert_eq!(eval_ok("2^3!"), 64.0); // l’exposant est un facteur : 2^(3!)
    assert_erreur("-1!", EvalError::NegativeFactorial);
}

/* ------------------------ Division / racine ------------------------ */

#[test]
fn sci_division_par_zero() {
    assert_erreur("1/0", EvalError::DivisionByZero);
    assert_erreur("1/(2-2)", EvalError::DivisionByZero);
    assert_erreur("1/-0", EvalError::DivisionByZero);
    // pas de tolérance : un diviseur minuscule reste un diviseur
    assert!(eval_ok("1/(0.1+0.2-0.3)").is_finite());
}

#[test]
fn sci_racine() {
    assert_eq!(eval_ok("sqrt(16)"), 4.0);
    assert_eq!(eval_ok("sqrt(0)"), 0.0);
    assert_erreur("sqrt(-4)", EvalError::NegativeSquareRoot);
    assert!(est_inattendu("sqrt16"));
}

/* ------------------------ Pourcentage / signes ------------------------ */

#[test]
fn sci_pourcentage() {
    assert_eq!(eval_ok("%50"), 0.5);
    assert_eq!(eval_ok("%5"), 0.05);
    assert_proche("200*%10", 20.0);
    // le pourcentage ne porte que sur le primaire
    assert_proche("%2^2", 0.0004);
    assert!(est_inattendu("-%5"));
    assert!(est_inattendu("%-5"));
}

#[test]
fn sci_signes() {
    assert_eq!(eval_ok("+3"), 3.0);
    assert_eq!(eval_ok("-3+5"), 2.0);
    assert_eq!(eval_ok("-(2+3)"), -5.0);
}

/* ------------------------ Trigonométrie ------------------------ */

#[test]
fn sci_pi() {
    assert_eq!(eval_ok("pi"), PI);
    assert_proche("pi", 3.14159265358979);
    assert_proche("2*pi", 2.0 * PI);
}

#[test]
fn sci_trig_degres_sur_argument() {
    assert_proche("sin(90 deg)", 1.0);
    assert_proche("cos(60 deg)", 0.5);
    assert_proche("tan(45 deg)", 1.0);
    assert_proche("sin(pi/2)", 1.0);
    assert_proche("cos(0)", 1.0);
}

#[test]
fn sci_trig_degres_sur_resultat_des_inverses() {
    assert_proche("asin(1 deg)", 90.0);
    assert_proche("asin(1)", FRAC_PI_2);
    assert_proche("acos(0 deg)", 90.0);
    assert_proche("atan(1 deg)", 45.0);
    assert_proche("atan(1)", PI / 4.0);
}

#[test]
fn sci_trig_argument_complet() {
    assert_proche("sin(45 + 45 deg)", 1.0);
    assert_proche("cos(2*pi)", 1.0);
    assert_proche("sin(asin(0.5))", 0.5);
}

#[test]
fn sci_trig_hors_domaine_donne_nan() {
    assert!(eval_ok("asin(2)").is_nan());
    assert!(eval_ok("acos(-2 deg)").is_nan());
}

#[test]
fn sci_deg_mal_place() {
    // deg après la parenthèse fermante : jeton en trop, ignoré
    assert_proche("asin(1) deg", FRAC_PI_2);
    assert_erreur(
        "sin(90 deg deg)",
        EvalError::UnexpectedToken {
            attendu: "')'",
            trouve: Tok::Deg,
        },
    );
    assert!(est_inattendu("sqrt(4 deg)"));
}

/* ------------------------ Entrées mal formées ------------------------ */

#[test]
fn sci_fin_prematuree() {
    assert_erreur(
        "2+",
        EvalError::UnexpectedToken {
            attendu: "un nombre, '(' ou une fonction",
            trouve: Tok::Fin,
        },
    );
    assert!(est_inattendu(""));
    assert!(est_inattendu("   "));
    assert!(est_inattendu("sin("));
    assert!(est_inattendu(")"));
}

#[test]
fn sci_caractere_invalide() {
    assert_erreur(
        "2 & 3",
        EvalError::InvalidCharacter {
            caractere: '&',
            position: 2,
        },
    );
    assert_erreur(
        "sinus(1)",
        EvalError::InvalidCharacter {
            caractere: 'u',
            position: 3,
        },
    );
}

#[test]
fn sci_nombre_a_plusieurs_points() {
    assert_erreur(
        "1.2.3",
        EvalError::MalformedNumber {
            texte: "1.2.3".into(),
            position: 0,
        },
    );
    assert_erreur(
        "1..",
        EvalError::MalformedNumber {
            texte: "1..".into(),
            position: 0,
        },
    );
}

/// Bizarrerie conservée : rien ne vérifie que la ligne est entièrement lue.
#[test]
fn sci_bizarrerie_jetons_en_trop_ignores() {
    assert_eq!(eval_ok("2 3"), 2.0);
    assert_eq!(eval_ok("(1+1) (5)"), 2.0);
    assert_eq!(eval_ok("4)"), 4.0);
    assert_eq!(eval_ok("7 deg"), 7.0);
    // mais le lexeur reste strict sur ce qu’il lit avant de s’arrêter
    assert_erreur(
        "2 $",
        EvalError::InvalidCharacter {
            caractere: '$',
            position: 2,
        },
    );
}

#[test]
fn sci_lexeur_lit_un_jeton_d_avance() {
    // le caractère invalide est au-delà du jeton d’avance : jamais lu
    assert_eq!(eval_ok("2 3 $"), 2.0);
}

/* ------------------------ Indépendance des lignes ------------------------ */

#[test]
fn sci_idempotence() {
    for expr in ["sin(33 deg)/7", "2^0.5", "5!/3", "pi*pi", "%7+asin(0.3 deg)"] {
        let a = eval_ok(expr);
        let b = eval_ok(expr);
        assert_eq!(a.to_bits(), b.to_bits(), "expr={expr:?}");
    }
}

#[test]
fn sci_message_operateur() {
    let e = evaluate("(2*3").unwrap_err();
    assert!(e.to_string().contains("')'"));
    assert_eq!(
        evaluate("2*"),
        Err(EvalError::UnexpectedToken {
            attendu: "un nombre, '(' ou une fonction",
            trouve: Tok::Fin,
        })
    );
    assert_eq!(
        evaluate("*2"),
        Err(EvalError::UnexpectedToken {
            attendu: "un nombre, '(' ou une fonction",
            trouve: Tok::Op(Op::Star),
        })
    );
}
