// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran noir, texte aligné à droite, police selon la longueur
// - Pavé 4 colonnes, zéro double largeur, couleurs par catégorie
// - Opérateur en attente : style inversé (fond blanc, texte orange)
//
// Note :
// - Aucune logique ici : un clic = un `Evenement` remis à `AppCalc::appuyer`.

use eframe::egui;
use egui::{Color32, RichText};

use super::etat::{AppCalc, Bouton, Categorie};

/// Côté d’une touche ronde.
const TOUCHE: f32 = 80.0;
const ESPACE: f32 = 12.0;
const HAUTEUR_ECRAN: f32 = 120.0;
const COLONNES: usize = 4;

const GRIS_FONCE: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
const GRIS_CLAIR: Color32 = Color32::from_rgb(0xAF, 0xAF, 0xAF);
const ORANGE: Color32 = Color32::from_rgb(0xF9, 0x73, 0x16);

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

        self.ui_ecran(ui);
        ui.add_space(ESPACE);
        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let texte = self.ecran();
        let points = self.taille_ecran().points();

        egui::Frame::new()
            .fill(Color32::BLACK)
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_min_height(HAUTEUR_ECRAN);
                ui.set_width(COLONNES as f32 * TOUCHE + (COLONNES - 1) as f32 * ESPACE - 32.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Max), |ui| {
                    ui.add(
                        egui::Label::new(RichText::new(texte).size(points).color(Color32::WHITE))
                            .wrap(),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let mut appui = None;

        for rangee in rangees(self.boutons()) {
            ui.horizontal(|ui| {
                for b in &rangee {
                    if Self::touche(ui, b) {
                        appui = Some(b.evenement);
                    }
                }
            });
        }

        if let Some(evenement) = appui {
            self.appuyer(evenement);
        }
    }

    /// Dessine une touche ; vrai si cliquée.
    fn touche(ui: &mut egui::Ui, b: &Bouton) -> bool {
        let (fond, texte) = couleurs(b);
        let largeur = if b.large {
            2.0 * TOUCHE + ESPACE
        } else {
            TOUCHE
        };

        let bouton = egui::Button::new(RichText::new(b.etiquette).size(30.0).color(texte))
            .fill(fond)
            .corner_radius(egui::CornerRadius::same(40))
            .min_size(egui::vec2(largeur, TOUCHE));

        ui.add(bouton)
            .on_hover_text(format!("calculator button {}", b.etiquette))
            .clicked()
    }
}

/// (fond, texte) selon la catégorie ; l’opérateur actif est inversé.
fn couleurs(b: &Bouton) -> (Color32, Color32) {
    if b.actif {
        return (Color32::WHITE, ORANGE);
    }
    match b.categorie {
        Categorie::Chiffre => (GRIS_FONCE, Color32::WHITE),
        Categorie::Operateur => (ORANGE, Color32::WHITE),
        Categorie::Fonction => (GRIS_CLAIR, Color32::BLACK),
    }
}

/// Découpe la liste en rangées de 4 colonnes (le zéro en occupe 2).
fn rangees(boutons: Vec<Bouton>) -> Vec<Vec<Bouton>> {
    let mut toutes = Vec::new();
    let mut rangee = Vec::with_capacity(COLONNES);
    let mut colonnes = 0;

    for b in boutons {
        colonnes += if b.large { 2 } else { 1 };
        rangee.push(b);
        if colonnes >= COLONNES {
            toutes.push(std::mem::take(&mut rangee));
            colonnes = 0;
        }
    }
    if !rangee.is_empty() {
        toutes.push(rangee);
    }

    toutes
}
