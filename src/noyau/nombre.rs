// src/noyau/nombre.rs
//
// Passage texte <-> f64.
//
// L’affichage est stocké en texte ; chaque opération relit ce texte en f64
// puis réécrit le résultat en texte. Les deux conversions suivent les règles
// d’un navigateur (parseFloat / String(nombre)) pour que l’écran affiche
// exactement ce qu’une calculatrice web afficherait, artefacts flottants compris.

/// Lecture “parseFloat” : plus long préfixe décimal valide, NaN sinon.
///
/// - espaces de tête ignorés
/// - signe optionnel, littéral `Infinity` accepté
/// - `"7."` -> 7, `"1e+21"` -> 1e21, `"Error"` -> NaN
pub fn lire_nombre(texte: &str) -> f64 {
    let s = texte.trim_start();

    let (signe, reste) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };

    if reste.starts_with("Infinity") {
        return signe * f64::INFINITY;
    }

    let prefixe = prefixe_decimal(reste);
    if prefixe.is_empty() {
        return f64::NAN;
    }

    match prefixe.parse::<f64>() {
        Ok(v) => signe * v,
        Err(_) => f64::NAN,
    }
}

/// Écriture “String(nombre)” : chiffres les plus courts qui relisent la même valeur.
///
/// Notation simple si l’exposant décimal n vérifie -6 < n <= 21,
/// notation exponentielle sinon (`1e+21`, `1.5e-7`). ±0 s’écrit `"0"`.
pub fn nombre_en_texte(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return (if x > 0.0 { "Infinity" } else { "-Infinity" }).to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let signe = if x < 0.0 { "-" } else { "" };

    // `{:e}` donne déjà la représentation la plus courte : "1.2345e3", "5e-7"
    let sci = format!("{:e}", x.abs());
    let Some((mantisse, exposant)) = sci.split_once('e') else {
        return format!("{signe}{sci}");
    };
    let exposant: i32 = exposant.parse().unwrap_or(0);

    let chiffres: String = mantisse.chars().filter(|c| *c != '.').collect();
    let k = chiffres.len() as i32;
    let n = exposant + 1;

    let corps = if k <= n && n <= 21 {
        // entier : chiffres + zéros
        format!("{chiffres}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (ent, frac) = chiffres.split_at(n as usize);
        format!("{ent}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{chiffres}", "0".repeat((-n) as usize))
    } else {
        let e = n - 1;
        let signe_e = if e >= 0 { '+' } else { '-' };
        let (tete, queue) = chiffres.split_at(1);
        if queue.is_empty() {
            format!("{tete}e{signe_e}{}", e.abs())
        } else {
            format!("{tete}.{queue}e{signe_e}{}", e.abs())
        }
    };

    format!("{signe}{corps}")
}

/* ------------------------ Helpers ------------------------ */

fn fin_chiffres(b: &[u8], mut i: usize) -> usize {
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// Préfixe `chiffres [. chiffres] [e[±]chiffres]` (au moins un chiffre de mantisse).
fn prefixe_decimal(s: &str) -> &str {
    let b = s.as_bytes();

    let fin_entier = fin_chiffres(b, 0);
    let mut fin = fin_entier;
    let mut nb_chiffres = fin_entier;

    if fin < b.len() && b[fin] == b'.' {
        let fin_frac = fin_chiffres(b, fin + 1);
        nb_chiffres += fin_frac - (fin + 1);
        fin = fin_frac;
    }

    if nb_chiffres == 0 {
        return "";
    }

    // exposant : seulement s’il est complet (sinon "2e" -> 2)
    if fin < b.len() && (b[fin] == b'e' || b[fin] == b'E') {
        let mut j = fin + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let fin_exp = fin_chiffres(b, j);
        if fin_exp > j {
            fin = fin_exp;
        }
    }

    &s[..fin]
}
