//! Primary scrape: create fiches for targets with no file yet.

use std::collections::{HashMap, HashSet};

use nerithys_core::{FicheRecord, slugify};
use nerithys_sources::{
  Lookup,
  baqua::{BaquaScraper, ScrapeTarget, has_useful_data},
};

use crate::{
  engine::{Outcome, Pass},
  merge::fill_missing,
};

#[derive(Debug, Clone)]
pub struct ScrapeItem {
  pub target:   ScrapeTarget,
  /// Present only when re-scraping to fill gaps.
  pub existing: Option<FicheRecord>,
}

#[derive(Debug, Clone)]
pub struct ScrapePass {
  scraper:       BaquaScraper,
  targets:       Vec<ScrapeTarget>,
  fill_existing: bool,
}

impl ScrapePass {
  pub fn new(scraper: BaquaScraper, targets: Vec<ScrapeTarget>) -> Self {
    Self {
      scraper,
      targets,
      fill_existing: false,
    }
  }

  /// Also re-scrape targets that already have a fiche, null-filling them.
  pub fn fill_existing(mut self, yes: bool) -> Self {
    self.fill_existing = yes;
    self
  }
}

impl Pass for ScrapePass {
  type Item = ScrapeItem;
  type Found = FicheRecord;

  fn name(&self) -> &'static str { "scrape" }

  /// One item per distinct slug; the first target wins on duplicates.
  fn select(&self, existing: Vec<FicheRecord>) -> Vec<ScrapeItem> {
    let mut by_slug: HashMap<String, FicheRecord> =
      existing.into_iter().map(|r| (r.slug.clone(), r)).collect();
    let mut seen = HashSet::new();

    self
      .targets
      .iter()
      .filter(|t| !t.scientific_name.trim().is_empty())
      .filter_map(|t| {
        let slug = slugify(&t.scientific_name);
        if !seen.insert(slug.clone()) {
          return None;
        }
        match by_slug.remove(&slug) {
          None => Some(ScrapeItem {
            target:   t.clone(),
            existing: None,
          }),
          Some(record) if self.fill_existing => Some(ScrapeItem {
            target:   t.clone(),
            existing: Some(record),
          }),
          Some(_) => None,
        }
      })
      .collect()
  }

  fn label<'a>(&self, item: &'a ScrapeItem) -> &'a str {
    &item.target.scientific_name
  }

  async fn fetch(&self, item: &ScrapeItem) -> Lookup<FicheRecord> {
    self.scraper.fetch(&item.target).await
  }

  fn apply(&self, item: ScrapeItem, scraped: FicheRecord) -> Outcome {
    match item.existing {
      None if has_useful_data(&scraped) => Outcome::Create(scraped),
      None => Outcome::Skip,
      Some(mut record) => {
        let changes = fill_missing(&mut record, &scraped);
        if changes.is_empty() {
          Outcome::Unchanged
        } else {
          Outcome::Update { record, changes }
        }
      }
    }
  }
}
