//! Freshwater region refinement.
//!
//! A curated genus table is authoritative. Otherwise the narrative fields are
//! scored against per-region keyword lists and only a strict winner counts.

use std::{collections::HashMap, sync::LazyLock};

use nerithys_core::{Biotope, FicheRecord};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::tables::{genera, keywords};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Region {
  #[strum(serialize = "Asie")]
  Asia,
  #[strum(serialize = "Amazonie")]
  Amazonia,
  #[strum(serialize = "Afrique")]
  Africa,
}

impl Region {
  pub fn biotope(self) -> Biotope {
    match self {
      Self::Asia => Biotope::FreshwaterAsia,
      Self::Amazonia => Biotope::FreshwaterAmazonia,
      Self::Africa => Biotope::FreshwaterAfrica,
    }
  }

  pub fn genera(self) -> &'static [&'static str] {
    match self {
      Self::Asia => genera::ASIAN,
      Self::Amazonia => genera::AMAZONIAN,
      Self::Africa => genera::AFRICAN,
    }
  }

  pub fn keywords(self) -> &'static [&'static str] {
    match self {
      Self::Asia => keywords::ASIAN,
      Self::Amazonia => keywords::AMAZONIAN,
      Self::Africa => keywords::AFRICAN,
    }
  }
}

static GENUS_REGION: LazyLock<HashMap<&'static str, Region>> =
  LazyLock::new(|| {
    Region::iter()
      .flat_map(|r| r.genera().iter().map(move |g| (*g, r)))
      .collect()
  });

/// What decided a refinement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evidence {
  Genus(String),
  /// Keyword hits for the winning region and for the runner-up.
  Keywords { hits: usize, runner_up: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refinement {
  pub region:   Region,
  pub evidence: Evidence,
}

impl Refinement {
  pub fn biotope(&self) -> Biotope { self.region.biotope() }
}

pub fn region_of_genus(genus: &str) -> Option<Region> {
  GENUS_REGION.get(genus).copied()
}

/// Occurrences of `keyword` in `text` that start a word. Both are expected
/// lowercase.
pub fn keyword_hits(text: &str, keyword: &str) -> usize {
  if keyword.is_empty() {
    return 0;
  }
  text
    .match_indices(keyword)
    .filter(|(at, _)| {
      text[..*at]
        .chars()
        .next_back()
        .is_none_or(|c| !c.is_alphanumeric())
    })
    .count()
}

/// Per-region keyword score over already lowercased text, in [`Region`]
/// order.
pub fn keyword_scores(text: &str) -> Vec<(Region, usize)> {
  Region::iter()
    .map(|r| {
      let hits = r.keywords().iter().map(|k| keyword_hits(text, k)).sum();
      (r, hits)
    })
    .collect()
}

/// The region a record should be relabelled to, if any.
///
/// Only unqualified freshwater records are considered: marine, brackish and
/// already refined records yield `None`, as do ties and all-zero scores.
pub fn classify_region(record: &FicheRecord) -> Option<Refinement> {
  if record.biotope != Biotope::Freshwater {
    return None;
  }

  let genus = record.genus();
  if let Some(region) = region_of_genus(genus) {
    return Some(Refinement {
      region,
      evidence: Evidence::Genus(genus.to_owned()),
    });
  }

  let mut scores = keyword_scores(&record.narrative_text());
  scores.sort_by(|a, b| b.1.cmp(&a.1));
  match scores.as_slice() {
    [(region, hits), (_, runner_up), ..] if *hits > *runner_up => {
      Some(Refinement {
        region:   *region,
        evidence: Evidence::Keywords {
          hits:      *hits,
          runner_up: *runner_up,
        },
      })
    }
    _ => None,
  }
}
