//! Cross-reference every fiche against the trusted secondary source.

use nerithys_core::FicheRecord;
use nerithys_sources::{
  Lookup,
  seriouslyfish::{CrossRef, SeriouslyFish},
};

use crate::{
  Tolerances,
  engine::{Outcome, Pass},
  merge::{Corrections, apply_corrections},
};

#[derive(Debug, Clone)]
pub struct CrossRefPass {
  source:     SeriouslyFish,
  tolerances: Tolerances,
}

impl CrossRefPass {
  pub fn new(source: SeriouslyFish, tolerances: Tolerances) -> Self {
    Self { source, tolerances }
  }
}

impl Pass for CrossRefPass {
  type Item = FicheRecord;
  type Found = CrossRef;

  fn name(&self) -> &'static str { "crossref" }

  /// Every record with a scientific name, in slug order.
  fn select(&self, existing: Vec<FicheRecord>) -> Vec<FicheRecord> {
    let mut items: Vec<_> = existing
      .into_iter()
      .filter(|r| !r.scientific_name.trim().is_empty())
      .collect();
    items.sort_by(|a, b| a.slug.cmp(&b.slug));
    items
  }

  fn label<'a>(&self, item: &'a FicheRecord) -> &'a str { &item.scientific_name }

  async fn fetch(&self, item: &FicheRecord) -> Lookup<CrossRef> {
    self.source.fetch(&item.scientific_name).await
  }

  fn apply(&self, mut record: FicheRecord, found: CrossRef) -> Outcome {
    let changes =
      apply_corrections(&mut record, &Corrections::from(&found), &self.tolerances);
    if changes.is_empty() {
      Outcome::Unchanged
    } else {
      Outcome::Update { record, changes }
    }
  }
}
