//! Hand-maintained per-species tables. These win over anything guessed from
//! page text.

use nerithys_core::Difficulty;

const COMMON_NAMES: &[(&str, &str)] = &[
  ("Ancistrus cirrhosus", "Ancistrus"),
  ("Ancistrus dolichopterus", "Ancistrus étoilé"),
  ("Apistogramma cacatuoides", "Apistogramma cacatoès"),
  ("Corydoras aeneus", "Corydoras bronze"),
  ("Corydoras paleatus", "Corydoras poivré"),
  ("Corydoras sterbai", "Corydoras de Sterba"),
  ("Corydoras panda", "Corydoras panda"),
  ("Corydoras pygmaeus", "Corydoras pygmée"),
  ("Carassius auratus", "Poisson rouge"),
  ("Chromobotia macracanthus", "Loche clown"),
  ("Crossocheilus oblongus", "Mangeur d'algues siamois"),
  ("Crossocheilus langei", "Barbeau de Langei"),
  ("Danio rerio", "Danio zébré"),
  ("Gyrinocheilus aymonieri", "Mangeur d'algues chinois"),
  ("Hyphessobrycon herbertaxelrodi", "Néon noir"),
  ("Hyphessobrycon erythrostigma", "Tétra cœur saignant"),
  ("Hyphessobrycon amandae", "Tétra amande"),
  ("Hemigrammus bleheri", "Nez-rouge"),
  ("Hemigrammus rhodostomus", "Rummy-nose"),
  ("Mikrogeophagus ramirezi", "Ramirezi"),
  ("Melanotaenia boesemani", "Arc-en-ciel de Boeseman"),
  ("Nannacara anomala", "Nannacara"),
  ("Nematobrycon palmeri", "Tétra empereur"),
  ("Otocinclus affinis", "Otocinclus"),
  ("Otocinclus vittatus", "Otocinclus vitté"),
  ("Poecilia reticulata", "Guppy"),
  ("Pangio kuhlii", "Loche Kuhli"),
  ("Pristella maxillaris", "Pristella"),
  ("Trigonostigma heteromorpha", "Rasbora arlequin"),
  ("Trigonostigma espei", "Rasbora d'Espei"),
  ("Symphysodon aequifasciatus", "Discus"),
  ("Symphysodon discus", "Discus de Heckel"),
  ("Sewellia lineolata", "Loche à selle"),
  ("Trichogaster lalius", "Gourami nain"),
  ("Trichopodus leerii", "Gourami perlé"),
  ("Trichopodus trichopterus", "Gourami bleu"),
  ("Tanichthys albonubes", "Néon du pauvre"),
  ("Xiphophorus hellerii", "Xipho"),
  ("Betta splendens", "Combattant"),
];

const EASY: &[&str] = &[
  "Poecilia reticulata",
  "Betta splendens",
  "Danio rerio",
  "Tanichthys albonubes",
  "Corydoras paleatus",
  "Corydoras aeneus",
  "Xiphophorus hellerii",
  "Ancistrus cirrhosus",
  "Ancistrus dolichopterus",
];

const MEDIUM: &[&str] = &[
  "Corydoras sterbai",
  "Corydoras panda",
  "Hemigrammus bleheri",
  "Trigonostigma heteromorpha",
  "Nematobrycon palmeri",
  "Melanotaenia boesemani",
  "Trichogaster lalius",
  "Trichopodus leerii",
  "Pristella maxillaris",
  "Hyphessobrycon herbertaxelrodi",
  "Hyphessobrycon amandae",
];

const HARD: &[&str] = &[
  "Symphysodon aequifasciatus",
  "Symphysodon discus",
  "Carassius auratus",
  "Chromobotia macracanthus",
];

pub fn common_name(scientific_name: &str) -> Option<&'static str> {
  COMMON_NAMES
    .iter()
    .find(|(sci, _)| *sci == scientific_name)
    .map(|(_, name)| *name)
}

pub fn difficulty_override(scientific_name: &str) -> Option<Difficulty> {
  [
    (EASY, Difficulty::Easy),
    (MEDIUM, Difficulty::Medium),
    (HARD, Difficulty::Hard),
  ]
  .into_iter()
  .find(|(list, _)| list.contains(&scientific_name))
  .map(|(_, d)| d)
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  #[test]
  fn override_lists_do_not_overlap() {
    let mut seen = HashSet::new();
    for sci in EASY.iter().chain(MEDIUM).chain(HARD) {
      assert!(seen.insert(sci), "{sci} listed twice");
    }
  }

  #[test]
  fn lookups() {
    assert_eq!(common_name("Danio rerio"), Some("Danio zébré"));
    assert_eq!(common_name("Danio margaritatus"), None);
    assert_eq!(difficulty_override("Symphysodon discus"), Some(Difficulty::Hard));
    assert_eq!(difficulty_override("Danio margaritatus"), None);
  }
}
