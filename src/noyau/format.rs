// src/noyau/format.rs
//
// Affichage “joli” de la valeur brute (lecture seule, ne touche jamais l’état).
// - "Error" / "NaN"      -> "Error"
// - partie entière       -> séparateurs de milliers ","
// - partie décimale      -> recopiée telle quelle (y compris "12." en cours de frappe)

/// Texte d’erreur unique (état et écran).
pub const TEXTE_ERREUR: &str = "Error";

pub fn formater_affichage(brut: &str) -> String {
    if brut == TEXTE_ERREUR || brut == "NaN" {
        return TEXTE_ERREUR.to_string();
    }

    let mut parties = brut.split('.');
    let entier = inserer_separateurs(parties.next().unwrap_or(""));

    match parties.next() {
        // "12." donne une partie décimale vide : le point reste visible
        Some(decimales) => format!("{entier}.{decimales}"),
        None => entier,
    }
}

/// Virgule avant chaque groupe de 3 chiffres terminant une suite de chiffres,
/// seulement à l’intérieur d’un “mot” (jamais juste après un signe).
fn inserer_separateurs(partie: &str) -> String {
    let car: Vec<char> = partie.chars().collect();
    let mut sortie = String::with_capacity(partie.len() + partie.len() / 3);

    for (i, &c) in car.iter().enumerate() {
        if i > 0 && c.is_ascii_digit() && est_mot(car[i - 1]) {
            let restants = car[i..].iter().take_while(|c| c.is_ascii_digit()).count();
            if restants % 3 == 0 {
                sortie.push(',');
            }
        }
        sortie.push(c);
    }

    sortie
}

fn est_mot(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/* ------------------------ Taille de police ------------------------ */

/// Paliers de taille selon la longueur du texte affiché.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaillePolice {
    Minuscule,
    Petite,
    Moyenne,
    Grande,
    Geante,
}

impl TaillePolice {
    /// Hauteur de police (points egui).
    pub fn points(self) -> f32 {
        match self {
            TaillePolice::Minuscule => 36.0,
            TaillePolice::Petite => 48.0,
            TaillePolice::Moyenne => 60.0,
            TaillePolice::Grande => 72.0,
            TaillePolice::Geante => 96.0,
        }
    }
}

/// Palier pour un texte DÉJÀ formaté (virgules comprises).
pub fn taille_police(formate: &str) -> TaillePolice {
    match formate.chars().count() {
        n if n > 15 => TaillePolice::Minuscule,
        n if n > 12 => TaillePolice::Petite,
        n if n > 9 => TaillePolice::Moyenne,
        n if n > 6 => TaillePolice::Grande,
        _ => TaillePolice::Geante,
    }
}
