//! Noyau — évaluation binaire
//!
//! Une seule opération à deux opérandes, sans priorité ni parenthèses :
//! la calculatrice enchaîne de gauche à droite.
//!
//! Division par zéro : pas de panique, pas de Result. Le résultat est NaN,
//! que la saisie traduit ensuite en "Error" à l’écran.

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Symbole affiché sur la touche.
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("symbole d’opérateur inconnu : {0:?}")]
pub struct ErreurSymbole(pub String);

impl FromStr for Operateur {
    type Err = ErreurSymbole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operateur::Plus),
            "-" | "−" => Ok(Operateur::Moins),
            "×" | "*" => Ok(Operateur::Fois),
            "÷" | "/" => Ok(Operateur::Divise),
            autre => Err(ErreurSymbole(autre.to_string())),
        }
    }
}

/// a op b en flottant IEEE.
///
/// - ÷ 0 -> NaN (signalé, jamais fatal)
/// - opérateur absent -> b inchangé
pub fn evaluer(a: f64, b: f64, op: Option<Operateur>) -> f64 {
    match op {
        Some(Operateur::Plus) => a + b,
        Some(Operateur::Moins) => a - b,
        Some(Operateur::Fois) => a * b,
        Some(Operateur::Divise) => {
            if b == 0.0 {
                f64::NAN
            } else {
                a / b
            }
        }
        None => b,
    }
}
