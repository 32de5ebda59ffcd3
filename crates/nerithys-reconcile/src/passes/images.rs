//! Hero images for fiches that have none.

use nerithys_core::FicheRecord;
use nerithys_sources::{
  Lookup,
  images::{ImageChain, ImageHit},
};

use crate::{
  engine::{Outcome, Pass},
  merge::set_primary_image,
};

#[derive(Debug, Clone)]
pub struct ImagePass {
  chain: ImageChain,
}

impl ImagePass {
  pub fn new(chain: ImageChain) -> Self { Self { chain } }
}

impl Pass for ImagePass {
  type Item = FicheRecord;
  type Found = ImageHit;

  fn name(&self) -> &'static str { "images" }

  /// Only records without a usable first image, so a re-run picks up
  /// exactly the previous misses.
  fn select(&self, existing: Vec<FicheRecord>) -> Vec<FicheRecord> {
    let mut items: Vec<_> = existing
      .into_iter()
      .filter(|r| !r.has_primary_image() && !r.scientific_name.trim().is_empty())
      .collect();
    items.sort_by(|a, b| a.slug.cmp(&b.slug));
    items
  }

  fn label<'a>(&self, item: &'a FicheRecord) -> &'a str { &item.scientific_name }

  async fn fetch(&self, item: &FicheRecord) -> Lookup<ImageHit> {
    self.chain.fetch(&item.scientific_name).await
  }

  fn provider(&self, found: &ImageHit) -> Option<String> {
    Some(found.provider.to_string())
  }

  fn apply(&self, mut record: FicheRecord, hit: ImageHit) -> Outcome {
    match set_primary_image(&mut record, &hit.url) {
      Some(change) => Outcome::Update {
        record,
        changes: vec![change],
      },
      None => Outcome::Unchanged,
    }
  }
}
