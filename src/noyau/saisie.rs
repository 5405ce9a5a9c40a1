//! Noyau — saisie (machine à états)
//!
//! Quatre champs, huit événements. Chaque événement est traité en entier
//! avant le suivant : aucune concurrence, aucun état caché.
//!
//! Contrats :
//! - `affichage` vaut "Error" ou un nombre décimal (un seul ".", "-" optionnel en tête).
//! - Un chiffre ne prolonge jamais un affichage de 20 caractères ou plus.
//! - L’erreur est portée par l’affichage ; elle vide le premier opérande.

use std::str::FromStr;

use super::eval::{evaluer, Operateur};
use super::format::TEXTE_ERREUR;
use super::nombre::{lire_nombre, nombre_en_texte};

/// Longueur maximale de l’affichage pendant la frappe.
pub const LONGUEUR_MAX_SAISIE: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Evenement {
    /// Chiffre 0..=9 (hors bornes : ignoré).
    Chiffre(u8),
    Decimale,
    Operateur(Operateur),
    Egal,
    /// Effacement contextuel (un niveau).
    Effacer,
    /// Remise à zéro totale.
    ToutEffacer,
    ChangerSigne,
    Pourcentage,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("étiquette de touche inconnue : {0:?}")]
pub struct ErreurEtiquette(pub String);

impl FromStr for Evenement {
    type Err = ErreurEtiquette;

    /// Étiquette de touche -> événement ("7", ".", "÷", "=", "C", "AC", "+/-", "%").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "." => Ok(Evenement::Decimale),
            "=" => Ok(Evenement::Egal),
            "C" => Ok(Evenement::Effacer),
            "AC" => Ok(Evenement::ToutEffacer),
            "+/-" => Ok(Evenement::ChangerSigne),
            "%" => Ok(Evenement::Pourcentage),
            _ => {
                let mut car = s.chars();
                if let (Some(c), None) = (car.next(), car.next()) {
                    if let Some(d) = c.to_digit(10) {
                        return Ok(Evenement::Chiffre(d as u8));
                    }
                }
                s.parse::<Operateur>()
                    .map(Evenement::Operateur)
                    .map_err(|_| ErreurEtiquette(s.to_string()))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Saisie {
    affichage: String,
    premier_operande: Option<f64>,
    operateur: Option<Operateur>,
    attente_second_operande: bool,
}

impl Default for Saisie {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            premier_operande: None,
            operateur: None,
            attente_second_operande: false,
        }
    }
}

impl Saisie {
    /* ------------------------ Lecture ------------------------ */

    /// Valeur brute (non formatée) : entrée courante ou dernier résultat.
    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn premier_operande(&self) -> Option<f64> {
        self.premier_operande
    }

    pub fn operateur(&self) -> Option<Operateur> {
        self.operateur
    }

    pub fn attente_second_operande(&self) -> bool {
        self.attente_second_operande
    }

    pub fn est_en_erreur(&self) -> bool {
        self.affichage == TEXTE_ERREUR
    }

    /// Une entrée tapée mais pas encore engagée dans un calcul.
    ///
    /// Vrai => la touche d’effacement est "C" (Effacer), sinon "AC" (ToutEffacer).
    pub fn a_une_saisie_non_validee(&self) -> bool {
        self.affichage != "0" && !self.attente_second_operande
    }

    /* ------------------------ Écriture ------------------------ */

    pub fn appliquer(&mut self, evenement: Evenement) {
        match evenement {
            Evenement::Chiffre(d) => self.chiffre(d),
            Evenement::Decimale => self.decimale(),
            Evenement::Operateur(op) => self.operateur_suivant(op),
            Evenement::Egal => self.egal(),
            Evenement::Effacer => self.effacer(),
            Evenement::ToutEffacer => self.tout_effacer(),
            Evenement::ChangerSigne => self.changer_signe(),
            Evenement::Pourcentage => self.pourcentage(),
        }

        tracing::debug!(
            ?evenement,
            affichage = %self.affichage,
            premier = ?self.premier_operande,
            operateur = ?self.operateur,
            attente = self.attente_second_operande,
            "événement appliqué"
        );
    }

    fn chiffre(&mut self, d: u8) {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            tracing::warn!(chiffre = d, "chiffre hors 0..=9 ignoré");
            return;
        };

        if self.affichage.len() >= LONGUEUR_MAX_SAISIE {
            return;
        }

        if self.attente_second_operande {
            self.affichage = c.to_string();
            self.attente_second_operande = false;
        } else if self.affichage == "0" {
            // pas de zéros de tête
            self.affichage = c.to_string();
        } else {
            self.affichage.push(c);
        }
    }

    fn decimale(&mut self) {
        if self.attente_second_operande {
            self.affichage = "0.".to_string();
            self.attente_second_operande = false;
            return;
        }

        if !self.affichage.contains('.') {
            self.affichage.push('.');
        }
    }

    fn operateur_suivant(&mut self, suivant: Operateur) {
        let entree = lire_nombre(&self.affichage);

        // Changement d’avis : on remplace l’opérateur, rien d’autre.
        if self.operateur.is_some() && self.attente_second_operande {
            self.operateur = Some(suivant);
            return;
        }

        match self.premier_operande {
            None => self.premier_operande = Some(entree),
            Some(premier) => self.deposer_resultat(evaluer(premier, entree, self.operateur)),
        }

        self.attente_second_operande = true;
        self.operateur = Some(suivant);
    }

    fn egal(&mut self) {
        // Il faut un second opérande fraîchement tapé : sinon “=” ne fait rien.
        let (Some(premier), Some(op)) = (self.premier_operande, self.operateur) else {
            return;
        };
        if self.attente_second_operande {
            return;
        }

        let entree = lire_nombre(&self.affichage);
        self.deposer_resultat(evaluer(premier, entree, Some(op)));
        self.attente_second_operande = true;
    }

    fn effacer(&mut self) {
        // Premier appui : seule l’entrée part, le calcul en attente reste intact.
        if self.affichage != "0" {
            self.affichage = "0".to_string();
        } else {
            self.premier_operande = None;
            self.operateur = None;
            self.attente_second_operande = false;
        }
    }

    fn tout_effacer(&mut self) {
        *self = Self::default();
    }

    fn changer_signe(&mut self) {
        if self.est_en_erreur() {
            return;
        }
        self.affichage = nombre_en_texte(-lire_nombre(&self.affichage));
    }

    fn pourcentage(&mut self) {
        if self.est_en_erreur() {
            return;
        }
        self.affichage = nombre_en_texte(lire_nombre(&self.affichage) / 100.0);
    }

    /// Résultat -> affichage + premier opérande ; NaN -> "Error" + opérande vidé.
    fn deposer_resultat(&mut self, resultat: f64) {
        if resultat.is_nan() {
            tracing::info!("calcul indéfini, affichage en erreur");
            self.affichage = TEXTE_ERREUR.to_string();
            self.premier_operande = None;
        } else {
            self.affichage = nombre_en_texte(resultat);
            self.premier_operande = Some(resultat);
        }
    }
}
