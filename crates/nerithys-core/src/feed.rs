//! The aggregate feed: every fiche in one JSON document.
//!
//! Consumers accept both a bare array and a `{ "fiches": [...] }` wrapper;
//! [`Feed::parse`] does the same. [`Feed::render`] always writes the bare
//! array, sorted by display name.

use serde::Deserialize;

use crate::{Result, fiche::FicheRecord};

#[derive(Deserialize)]
#[serde(untagged)]
enum FeedShape {
  Bare(Vec<FicheRecord>),
  Wrapped { fiches: Vec<FicheRecord> },
}

/// An ordered collection of fiches as published to the site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feed {
  pub fiches: Vec<FicheRecord>,
}

impl Feed {
  /// Build a feed, sorted case-insensitively by display name (slug breaks
  /// ties so output is deterministic).
  pub fn new(mut fiches: Vec<FicheRecord>) -> Self {
    fiches.sort_by(|a, b| {
      a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.slug.cmp(&b.slug))
    });
    Self { fiches }
  }

  pub fn parse(input: &str) -> Result<Self> {
    let fiches = match serde_json::from_str::<FeedShape>(input)? {
      FeedShape::Bare(v) => v,
      FeedShape::Wrapped { fiches } => fiches,
    };
    Ok(Self { fiches })
  }

  pub fn render(&self) -> Result<String> {
    Ok(serde_json::to_string_pretty(&self.fiches)?)
  }

  pub fn len(&self) -> usize { self.fiches.len() }

  pub fn is_empty(&self) -> bool { self.fiches.is_empty() }
}
