//! Tests fuzz safe : suites d’appuis aléatoires, déterministes et bornées.
//!
//! - RNG déterministe (seed fixe)
//! - longueur de suite bornée
//! - budget temps global
//! - invariants vérifiés après CHAQUE événement (état + écran)

use std::time::{Duration, Instant};

use super::eval::Operateur;
use super::format::formater_affichage;
use super::nombre::lire_nombre;
use super::saisie::{Evenement, Saisie, LONGUEUR_MAX_SAISIE};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’événements ------------------------ */

fn gen_operateur(rng: &mut Rng) -> Operateur {
    match rng.pick(4) {
        0 => Operateur::Plus,
        1 => Operateur::Moins,
        2 => Operateur::Fois,
        _ => Operateur::Divise,
    }
}

fn gen_evenement(rng: &mut Rng) -> Evenement {
    // chiffres majoritaires, sinon l’écran reste presque toujours à "0"
    match rng.pick(20) {
        0..=9 => Evenement::Chiffre(rng.pick(10) as u8),
        10 => Evenement::Decimale,
        11..=13 => Evenement::Operateur(gen_operateur(rng)),
        14 | 15 => Evenement::Egal,
        16 => Evenement::Effacer,
        17 => Evenement::ChangerSigne,
        18 => Evenement::Pourcentage,
        _ => {
            // ToutEffacer rare : laisse les calculs s’allonger
            if rng.pick(4) == 0 {
                Evenement::ToutEffacer
            } else {
                Evenement::Chiffre(0)
            }
        }
    }
}

/* ------------------------ Invariants ------------------------ */

fn check_affichage(s: &Saisie, trace: &[Evenement]) {
    let a = s.affichage();
    if s.est_en_erreur() {
        return;
    }
    assert!(
        !lire_nombre(a).is_nan(),
        "affichage non numérique {a:?} trace={trace:?}"
    );
    assert!(
        a.matches('.').count() <= 1,
        "plusieurs points {a:?} trace={trace:?}"
    );
    assert!(
        !a.starts_with("--"),
        "double signe {a:?} trace={trace:?}"
    );
}

fn check_ecran(s: &Saisie, trace: &[Evenement]) {
    let ecran = formater_affichage(s.affichage());
    if s.est_en_erreur() {
        assert_eq!(ecran, "Error", "trace={trace:?}");
        return;
    }

    // sans les virgules, l’écran redonne la valeur brute
    let sans_virgules: String = ecran.chars().filter(|c| *c != ',').collect();
    assert_eq!(sans_virgules, s.affichage(), "trace={trace:?}");

    // virgules seulement dans la partie entière
    if let Some((_, decimales)) = ecran.split_once('.') {
        assert!(!decimales.contains(','), "ecran={ecran:?} trace={trace:?}");
    }
}

fn check_erreur(s: &Saisie, trace: &[Evenement]) {
    if s.est_en_erreur() {
        assert_eq!(s.premier_operande(), None, "trace={trace:?}");
        assert!(s.attente_second_operande(), "trace={trace:?}");
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_invariants_par_evenement() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..400 {
        budget(start, max);

        let mut s = Saisie::default();
        let mut trace = Vec::with_capacity(64);

        for _ in 0..(8 + rng.pick(56)) {
            let ev = gen_evenement(&mut rng);
            let avant = s.clone();
            trace.push(ev);
            s.appliquer(ev);

            // frappe bornée : un chiffre sur un affichage plein ne change rien
            if matches!(ev, Evenement::Chiffre(_))
                && avant.affichage().len() >= LONGUEUR_MAX_SAISIE
            {
                assert_eq!(s.affichage(), avant.affichage(), "trace={trace:?}");
            }

            check_affichage(&s, &trace);
            check_ecran(&s, &trace);
            check_erreur(&s, &trace);
        }
    }
}

#[test]
fn fuzz_tout_effacer_idempotent() {
    let start = Instant::now();
    let max = Duration::from_secs(3);
    let mut rng = Rng::new(42);

    for _ in 0..300 {
        budget(start, max);

        let mut s = Saisie::default();
        for _ in 0..rng.pick(40) {
            s.appliquer(gen_evenement(&mut rng));
        }

        s.appliquer(Evenement::ToutEffacer);
        assert_eq!(s, Saisie::default());
        s.appliquer(Evenement::ToutEffacer);
        assert_eq!(s, Saisie::default());
    }
}

#[test]
fn fuzz_chiffres_depuis_zero() {
    // Depuis un état neuf, l’affichage = la suite tapée sans zéros de tête.
    let start = Instant::now();
    let max = Duration::from_secs(3);
    let mut rng = Rng::new(7);

    for _ in 0..500 {
        budget(start, max);

        let n = 1 + rng.pick(LONGUEUR_MAX_SAISIE as u32) as usize;
        let chiffres: Vec<u8> = (0..n).map(|_| rng.pick(10) as u8).collect();

        let mut s = Saisie::default();
        for d in &chiffres {
            s.appliquer(Evenement::Chiffre(*d));
        }

        let tape: String = chiffres.iter().map(|d| char::from(b'0' + d)).collect();
        let attendu = tape.trim_start_matches('0');
        let attendu = if attendu.is_empty() { "0" } else { attendu };
        assert_eq!(s.affichage(), attendu, "chiffres={chiffres:?}");
    }
}
