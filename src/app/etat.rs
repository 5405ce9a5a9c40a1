//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la saisie du noyau et dériver, à chaque image, la liste
//! ordonnée des touches (étiquette, catégorie, événement, style).
//!
//! Contrats :
//! - Aucun calcul ici : tout passe par `Saisie::appliquer`.
//! - Les touches sont recalculées depuis l’état, jamais mémorisées.

use crate::noyau::{formater_affichage, taille_police, Evenement, Saisie, TaillePolice};

/// Grille 4 colonnes, ligne par ligne. La première case est l’effacement
/// (son étiquette dépend de l’état, voir `AppCalc::boutons`).
const GRILLE: [&str; 19] = [
    "AC", "+/-", "%", "÷", //
    "7", "8", "9", "×", //
    "4", "5", "6", "-", //
    "1", "2", "3", "+", //
    "0", ".", "=",
];

/// Famille visuelle d’une touche.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Categorie {
    Chiffre,
    Operateur,
    Fonction,
}

impl Categorie {
    fn de(evenement: Evenement) -> Self {
        match evenement {
            Evenement::Chiffre(_) | Evenement::Decimale => Categorie::Chiffre,
            Evenement::Operateur(_) | Evenement::Egal => Categorie::Operateur,
            Evenement::Effacer
            | Evenement::ToutEffacer
            | Evenement::ChangerSigne
            | Evenement::Pourcentage => Categorie::Fonction,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bouton {
    pub etiquette: &'static str,
    pub categorie: Categorie,
    pub evenement: Evenement,
    /// Touche double largeur (le zéro).
    pub large: bool,
    /// Opérateur en attente du second opérande (style inversé).
    pub actif: bool,
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub saisie: Saisie,
}

impl AppCalc {
    /// Applique un appui de touche.
    pub fn appuyer(&mut self, evenement: Evenement) {
        self.saisie.appliquer(evenement);
    }

    /// Texte de l’écran (formaté).
    pub fn ecran(&self) -> String {
        formater_affichage(self.saisie.affichage())
    }

    pub fn taille_ecran(&self) -> TaillePolice {
        taille_police(&self.ecran())
    }

    /// Les 19 touches, dans l’ordre de la grille.
    pub fn boutons(&self) -> Vec<Bouton> {
        let effacement = if self.saisie.a_une_saisie_non_validee() {
            "C"
        } else {
            "AC"
        };

        GRILLE
            .iter()
            .enumerate()
            .filter_map(|(i, &etiquette)| {
                let etiquette = if i == 0 { effacement } else { etiquette };
                match etiquette.parse::<Evenement>() {
                    Ok(evenement) => Some(self.bouton(etiquette, evenement)),
                    Err(e) => {
                        tracing::error!(%e, "touche ignorée");
                        None
                    }
                }
            })
            .collect()
    }

    fn bouton(&self, etiquette: &'static str, evenement: Evenement) -> Bouton {
        let actif = match evenement {
            Evenement::Operateur(op) => {
                self.saisie.attente_second_operande() && self.saisie.operateur() == Some(op)
            }
            _ => false,
        };

        Bouton {
            etiquette,
            categorie: Categorie::de(evenement),
            evenement,
            large: etiquette == "0",
            actif,
        }
    }
}
