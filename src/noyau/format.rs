// src/noyau/format.rs
//
// Affichage d’un résultat f64 façon `%g` de printf (6 chiffres par défaut).
// - arrondi à `chiffres` chiffres significatifs
// - notation fixe si -4 <= exposant < chiffres, sinon scientifique (1.5e+07)
// - zéros de queue retirés (et le point s’il ne reste rien derrière)

/// Bornes des chiffres significatifs (17 suffit à relire un f64 à l’identique).
pub const CHIFFRES_MIN: usize = 1;
pub const CHIFFRES_MAX: usize = 17;

pub fn format_resultat(x: f64, chiffres: usize) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let p = chiffres.clamp(CHIFFRES_MIN, CHIFFRES_MAX);

    // L’exposant se lit APRÈS arrondi (999999.7 -> 1.00000e6 à 6 chiffres).
    let sci = format!("{:.*e}", p - 1, x);
    let (mantisse, exposant) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exposant < -4 || exposant >= p as i32 {
        let signe = if exposant < 0 { '-' } else { '+' };
        return format!(
            "{}e{signe}{:02}",
            retire_zeros(mantisse),
            exposant.unsigned_abs()
        );
    }

    let decimales = (p as i32 - 1 - exposant) as usize;
    retire_zeros(&format!("{:.*}", decimales, x))
}

fn retire_zeros(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
