//! Noyau de la calculatrice enchaînée
//!
//! Organisation interne :
//! - nombre.rs   : texte <-> f64 (lecture “parseFloat”, écriture la plus courte)
//! - eval.rs     : opérateurs + opération binaire (÷0 -> NaN)
//! - saisie.rs   : machine à états (chiffres, opérateurs, =, C/AC, ±, %)
//! - format.rs   : écran (milliers, "Error") + paliers de police

pub mod eval;
pub mod format;
pub mod nombre;
pub mod saisie;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::Operateur;
pub use format::{formater_affichage, taille_police, TaillePolice};
pub use saisie::{Evenement, Saisie};
