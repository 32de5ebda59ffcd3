//! Field-level merge policy.
//!
//! Two entry points: [`apply_corrections`] for trusted cross-reference data
//! and [`fill_missing`] for a re-scraped record. Both mutate in place and
//! return the list of changes; an empty list means the record must not be
//! rewritten.

use std::fmt;

use nerithys_core::{DIET_UNSET, FicheRecord};
use nerithys_sources::seriouslyfish::CrossRef;
use tracing::debug;

use crate::Tolerances;

// ─── Change log ──────────────────────────────────────────────────────────────

/// One field transition, rendered as `field: old → new`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
  pub field: &'static str,
  pub old:   Option<String>,
  pub new:   String,
}

impl Change {
  fn new(field: &'static str, old: Option<String>, new: String) -> Self {
    Self { field, old, new }
  }
}

impl fmt::Display for Change {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}: {} → {}",
      self.field,
      self.old.as_deref().unwrap_or("null"),
      self.new
    )
  }
}

/// Long narrative values are abbreviated in the change log.
fn preview(s: &str) -> String {
  const MAX: usize = 40;
  match s.char_indices().nth(MAX) {
    Some((cut, _)) => format!("{}…", &s[..cut]),
    None => s.to_owned(),
  }
}

// ─── Cross-reference corrections ─────────────────────────────────────────────

/// Candidate values from a trusted secondary source. Every field is optional
/// and independent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corrections {
  pub temp_min:  Option<f64>,
  pub temp_max:  Option<f64>,
  pub ph_min:    Option<f64>,
  pub ph_max:    Option<f64>,
  pub gh_min:    Option<f64>,
  pub gh_max:    Option<f64>,
  pub length_cm: Option<f64>,
  pub volume_l:  Option<f64>,
  pub diet:      Option<String>,
}

impl From<&CrossRef> for Corrections {
  fn from(x: &CrossRef) -> Self {
    Self {
      temp_min:  x.temp.map(|r| r.min),
      temp_max:  x.temp.map(|r| r.max),
      ph_min:    x.ph.map(|r| r.min),
      ph_max:    x.ph.map(|r| r.max),
      gh_min:    x.gh.map(|r| r.min),
      gh_max:    x.gh.map(|r| r.max),
      length_cm: x.size_cm,
      volume_l:  x.tank_l,
      diet:      x.diet.map(|d| d.to_string()),
    }
  }
}

/// One bound of a range: its wire name, its slot and the incoming value.
struct Bound<'a> {
  field:    &'static str,
  slot:     &'a mut Option<f64>,
  incoming: Option<f64>,
}

impl Bound<'_> {
  fn fills(&self) -> bool { self.slot.is_none() && self.incoming.is_some() }

  fn drifts(&self, band: Option<f64>) -> bool {
    match (*self.slot, self.incoming, band) {
      (Some(old), Some(new), Some(band)) => (old - new).abs() > band,
      _ => false,
    }
  }

  fn set(self, changes: &mut Vec<Change>, value: Option<f64>) {
    if let Some(new) = value
      && *self.slot != value
    {
      changes.push(Change::new(self.field, self.slot.map(|v| v.to_string()), new.to_string()));
      *self.slot = value;
    }
  }
}

/// Correct a `(min, max)` pair as a unit.
///
/// Empty bounds are filled. When either bound drifts beyond `band`, every
/// incoming bound is taken together. A result with `min > max` is refused
/// and the pair stays as it was.
fn banded_range(changes: &mut Vec<Change>, min: Bound<'_>, max: Bound<'_>, band: Option<f64>) {
  let overwrite = min.drifts(band) || max.drifts(band);
  let take = |b: &Bound<'_>| (overwrite && b.incoming.is_some()) || b.fills();
  let next_min = if take(&min) { min.incoming } else { *min.slot };
  let next_max = if take(&max) { max.incoming } else { *max.slot };

  if let (Some(lo), Some(hi)) = (next_min, next_max)
    && lo > hi
  {
    debug!(min = min.field, lo, hi, "refusing inverted range");
    return;
  }
  min.set(changes, next_min);
  max.set(changes, next_max);
}

/// Null-fill, or overwrite when `|existing - incoming| > ratio × incoming`.
/// Non-positive estimates are ignored.
fn proportional(
  changes: &mut Vec<Change>,
  field: &'static str,
  slot: &mut Option<f64>,
  incoming: Option<f64>,
  ratio: f64,
) {
  let Some(new) = incoming.filter(|v| *v > 0.0) else { return };
  let replace = match *slot {
    None => true,
    Some(old) => (old - new).abs() > new * ratio,
  };
  if replace {
    changes.push(Change::new(field, slot.map(|v| v.to_string()), new.to_string()));
    *slot = Some(new);
  }
}

/// Apply cross-reference candidates under the tolerance policy.
///
/// Diet is only written over the unset sentinel. Any change drops the legacy
/// `sources` list.
pub fn apply_corrections(
  record: &mut FicheRecord,
  incoming: &Corrections,
  tol: &Tolerances,
) -> Vec<Change> {
  let mut changes = Vec::new();
  let c = &mut changes;

  banded_range(
    c,
    Bound { field: "tempMin", slot: &mut record.temp_min, incoming: incoming.temp_min },
    Bound { field: "tempMax", slot: &mut record.temp_max, incoming: incoming.temp_max },
    tol.temp,
  );
  banded_range(
    c,
    Bound { field: "phMin", slot: &mut record.ph_min, incoming: incoming.ph_min },
    Bound { field: "phMax", slot: &mut record.ph_max, incoming: incoming.ph_max },
    tol.ph,
  );
  banded_range(
    c,
    Bound { field: "ghMin", slot: &mut record.gh_min, incoming: incoming.gh_min },
    Bound { field: "ghMax", slot: &mut record.gh_max, incoming: incoming.gh_max },
    tol.gh,
  );

  proportional(
    c,
    "minLengthCm",
    &mut record.min_length_cm,
    incoming.length_cm,
    tol.size_ratio,
  );
  proportional(
    c,
    "minVolumeL",
    &mut record.min_volume_l,
    incoming.volume_l,
    tol.volume_ratio,
  );

  if let Some(diet) = incoming.diet.as_deref().filter(|d| !d.trim().is_empty())
    && record.diet_is_unset()
  {
    c.push(Change::new("diet", record.diet.clone(), diet.to_owned()));
    record.diet = Some(diet.to_owned());
  }

  if !changes.is_empty() {
    record.sources = None;
  }
  changes
}

// ─── Re-scrape null-fill ─────────────────────────────────────────────────────

fn is_blank(value: &Option<String>) -> bool {
  match value.as_deref().map(str::trim) {
    None | Some("") => true,
    Some(v) => v == DIET_UNSET,
  }
}

fn fill_number(
  changes: &mut Vec<Change>,
  field: &'static str,
  slot: &mut Option<f64>,
  incoming: Option<f64>,
) {
  if slot.is_none()
    && let Some(v) = incoming
  {
    changes.push(Change::new(field, None, v.to_string()));
    *slot = Some(v);
  }
}

fn fill_text(
  changes: &mut Vec<Change>,
  field: &'static str,
  slot: &mut Option<String>,
  incoming: &Option<String>,
) {
  if is_blank(slot) && !is_blank(incoming) {
    let new = incoming.clone().unwrap_or_default();
    changes.push(Change::new(field, slot.as_deref().map(preview), preview(&new)));
    *slot = Some(new);
  }
}

fn fill_list(
  changes: &mut Vec<Change>,
  field: &'static str,
  slot: &mut Vec<String>,
  incoming: &[String],
) {
  if slot.iter().all(|s| s.trim().is_empty()) && !incoming.is_empty() {
    changes.push(Change::new(field, None, incoming.join(", ")));
    *slot = incoming.to_vec();
  }
}

/// Adopt every value `scraped` has where `record` has nothing. Populated
/// fields are never touched, nor are identity, biotope or difficulty.
pub fn fill_missing(record: &mut FicheRecord, scraped: &FicheRecord) -> Vec<Change> {
  let mut changes = Vec::new();
  let c = &mut changes;

  if record.name.trim().is_empty() && !scraped.name.trim().is_empty() {
    c.push(Change::new("name", None, scraped.name.clone()));
    record.name = scraped.name.clone();
  }

  fill_number(c, "tempMin", &mut record.temp_min, scraped.temp_min);
  fill_number(c, "tempMax", &mut record.temp_max, scraped.temp_max);
  fill_number(c, "phMin", &mut record.ph_min, scraped.ph_min);
  fill_number(c, "phMax", &mut record.ph_max, scraped.ph_max);
  fill_number(c, "ghMin", &mut record.gh_min, scraped.gh_min);
  fill_number(c, "ghMax", &mut record.gh_max, scraped.gh_max);
  fill_number(c, "khMin", &mut record.kh_min, scraped.kh_min);
  fill_number(c, "khMax", &mut record.kh_max, scraped.kh_max);
  fill_number(c, "minVolumeL", &mut record.min_volume_l, scraped.min_volume_l);
  fill_number(c, "minLengthCm", &mut record.min_length_cm, scraped.min_length_cm);

  fill_text(c, "behavior", &mut record.behavior, &scraped.behavior);
  fill_text(c, "compatibility", &mut record.compatibility, &scraped.compatibility);
  fill_text(c, "diet", &mut record.diet, &scraped.diet);
  fill_text(c, "breeding", &mut record.breeding, &scraped.breeding);
  fill_text(c, "notes", &mut record.notes, &scraped.notes);

  fill_list(c, "images", &mut record.images, &scraped.images);
  fill_list(c, "gallery", &mut record.gallery, &scraped.gallery);
  fill_list(c, "tags", &mut record.tags, &scraped.tags);

  changes
}

/// Install `url` as the hero image, keeping any further entries.
pub fn set_primary_image(record: &mut FicheRecord, url: &str) -> Option<Change> {
  if record.primary_image() == Some(url) {
    return None;
  }
  let old = record.primary_image().map(str::to_owned);
  match record.images.first_mut() {
    Some(first) => *first = url.to_owned(),
    None => record.images.push(url.to_owned()),
  }
  Some(Change::new("images[0]", old, url.to_owned()))
}
