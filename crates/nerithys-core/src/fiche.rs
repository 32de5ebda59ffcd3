//! The fiche: one species, one JSON document.
//!
//! Field names on disk are camelCase and must stay compatible with the
//! aggregate feed consumed by the site. Fields this crate does not know about
//! are carried through untouched in [`FicheRecord::extra`].

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::{Biotope, Error, Result};

/// Sentinel written by the scraper when a source had no diet information.
/// The cross-reference corrector may replace it; nothing else may.
pub const DIET_UNSET: &str = "Non renseigné";

// ─── Difficulty ──────────────────────────────────────────────────────────────

/// Husbandry difficulty, stored as its ordinal (1–4).
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumIter,
)]
#[serde(from = "u8", into = "u8")]
pub enum Difficulty {
  #[strum(serialize = "Facile")]
  Easy,
  #[default]
  #[strum(serialize = "Moyen")]
  Medium,
  #[strum(serialize = "Difficile")]
  Hard,
  #[strum(serialize = "Expert")]
  Expert,
}

impl Difficulty {
  pub fn ordinal(self) -> u8 {
    match self {
      Self::Easy => 1,
      Self::Medium => 2,
      Self::Hard => 3,
      Self::Expert => 4,
    }
  }
}

/// Out-of-range ordinals clamp into 1..=4.
impl From<u8> for Difficulty {
  fn from(n: u8) -> Self {
    match n {
      0 | 1 => Self::Easy,
      2 => Self::Medium,
      3 => Self::Hard,
      _ => Self::Expert,
    }
  }
}

impl From<Difficulty> for u8 {
  fn from(d: Difficulty) -> Self { d.ordinal() }
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// One species. `slug` is the repository key and file name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FicheRecord {
  #[serde(default)]
  pub name:            String,
  #[serde(default)]
  pub scientific_name: String,
  #[serde(default)]
  pub slug:            String,
  #[serde(default)]
  pub biotope:         Biotope,
  #[serde(default)]
  pub difficulty:      Difficulty,

  #[serde(default, with = "compact_num")]
  pub temp_min:        Option<f64>,
  #[serde(default, with = "compact_num")]
  pub temp_max:        Option<f64>,
  #[serde(default, with = "compact_num")]
  pub ph_min:          Option<f64>,
  #[serde(default, with = "compact_num")]
  pub ph_max:          Option<f64>,
  #[serde(default, with = "compact_num")]
  pub gh_min:          Option<f64>,
  #[serde(default, with = "compact_num")]
  pub gh_max:          Option<f64>,
  #[serde(default, with = "compact_num")]
  pub kh_min:          Option<f64>,
  #[serde(default, with = "compact_num")]
  pub kh_max:          Option<f64>,

  #[serde(default, rename = "minVolumeL", with = "compact_num")]
  pub min_volume_l:    Option<f64>,
  #[serde(default, with = "compact_num")]
  pub min_length_cm:   Option<f64>,

  #[serde(default)]
  pub behavior:        Option<String>,
  #[serde(default)]
  pub compatibility:   Option<String>,
  #[serde(default)]
  pub diet:            Option<String>,
  #[serde(default)]
  pub breeding:        Option<String>,
  #[serde(default)]
  pub notes:           Option<String>,

  /// Legacy provenance; removed once a record has been cross-referenced.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sources:         Option<Vec<String>>,

  /// First entry is the hero image.
  #[serde(default)]
  pub images:          Vec<String>,
  #[serde(default)]
  pub gallery:         Vec<String>,
  #[serde(default)]
  pub tags:            Vec<String>,

  #[serde(flatten)]
  pub extra:           serde_json::Map<String, serde_json::Value>,
}

impl FicheRecord {
  /// A blank record keyed on `scientific_name`.
  pub fn new(scientific_name: impl Into<String>) -> Self {
    let scientific_name = scientific_name.into();
    Self {
      slug: slugify(&scientific_name),
      name: scientific_name.clone(),
      scientific_name,
      ..Self::default()
    }
  }

  /// Derive `slug` from the scientific name when it is missing.
  pub fn ensure_slug(&mut self) {
    if self.slug.trim().is_empty() {
      self.slug = slugify(&self.scientific_name);
    }
  }

  /// Reject records that cannot be stored: both identity fields must be
  /// present and the slug must be usable as a file name.
  pub fn validate(&self) -> Result<()> {
    if self.slug.trim().is_empty() {
      return Err(Error::invalid(&self.slug, "missing slug"));
    }
    if self.scientific_name.trim().is_empty() {
      return Err(Error::invalid(&self.slug, "missing scientificName"));
    }
    if !self
      .slug
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
      return Err(Error::invalid(&self.slug, "slug is not URL-safe"));
    }
    Ok(())
  }

  /// First token of the scientific name.
  pub fn genus(&self) -> &str {
    self.scientific_name.split_whitespace().next().unwrap_or("")
  }

  pub fn primary_image(&self) -> Option<&str> {
    self
      .images
      .first()
      .map(String::as_str)
      .filter(|s| !s.trim().is_empty())
  }

  pub fn has_primary_image(&self) -> bool { self.primary_image().is_some() }

  /// Lowercased concatenation of the free-text fields, for keyword scoring.
  pub fn narrative_text(&self) -> String {
    [
      &self.notes,
      &self.behavior,
      &self.compatibility,
      &self.breeding,
      &self.diet,
    ]
    .into_iter()
    .filter_map(|f| f.as_deref())
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase()
  }

  pub fn diet_is_unset(&self) -> bool {
    match self.diet.as_deref().map(str::trim) {
      None | Some("") => true,
      Some(d) => d == DIET_UNSET,
    }
  }
}

/// `"Corydoras aeneus"` → `"corydoras-aeneus"`.
pub fn slugify(scientific_name: &str) -> String {
  scientific_name
    .to_lowercase()
    .split_whitespace()
    .collect::<Vec<_>>()
    .join("-")
    .chars()
    .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
    .collect()
}

/// Whole numbers are written as JSON integers (`24`, not `24.0`).
mod compact_num {
  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S: Serializer>(
    value: &Option<f64>,
    s: S,
  ) -> Result<S::Ok, S::Error> {
    match value {
      Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => s.serialize_i64(*v as i64),
      Some(v) => s.serialize_f64(*v),
      None => s.serialize_none(),
    }
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(
    d: D,
  ) -> Result<Option<f64>, D::Error> {
    Option::<f64>::deserialize(d)
  }
}
