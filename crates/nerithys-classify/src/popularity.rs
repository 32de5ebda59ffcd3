//! Keep/drop decision for the published species set.

use std::{collections::HashSet, sync::LazyLock};

use nerithys_core::{Biotope, FicheRecord};
use strum::Display;

use crate::tables::popular;

fn set(items: &'static [&'static str]) -> HashSet<&'static str> {
  items.iter().copied().collect()
}

static SPECIES: LazyLock<HashSet<&'static str>> =
  LazyLock::new(|| set(popular::SPECIES));
static FRESHWATER_GENERA: LazyLock<HashSet<&'static str>> =
  LazyLock::new(|| set(popular::FRESHWATER_GENERA));
static MARINE_GENERA: LazyLock<HashSet<&'static str>> =
  LazyLock::new(|| set(popular::MARINE_GENERA));
static BRACKISH_GENERA: LazyLock<HashSet<&'static str>> =
  LazyLock::new(|| set(popular::BRACKISH_GENERA));

/// Which allow-list kept a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Keep {
  Species,
  FreshwaterGenus,
  MarineGenus,
  BrackishGenus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
  Keep(Keep),
  Drop,
}

impl Verdict {
  pub fn is_keep(self) -> bool { matches!(self, Self::Keep(_)) }
}

/// Genus lists are checked whatever the record's biotope, since mis-tagged
/// biotopes are common. The brackish list only applies to brackish records.
pub fn assess(record: &FicheRecord) -> Verdict {
  let sci = record.scientific_name.trim();
  if SPECIES.contains(sci) {
    return Verdict::Keep(Keep::Species);
  }
  let genus = record.genus();
  if FRESHWATER_GENERA.contains(genus) {
    return Verdict::Keep(Keep::FreshwaterGenus);
  }
  if MARINE_GENERA.contains(genus) {
    return Verdict::Keep(Keep::MarineGenus);
  }
  if record.biotope == Biotope::Brackish && BRACKISH_GENERA.contains(genus) {
    return Verdict::Keep(Keep::BrackishGenus);
  }
  Verdict::Drop
}

pub fn is_popular(record: &FicheRecord) -> bool { assess(record).is_keep() }
