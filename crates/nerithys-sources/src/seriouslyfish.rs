//! Cross-reference corrector backed by seriouslyfish.com.
//!
//! Species pages are English prose with labelled paragraphs ("Water
//! Conditions", "Maximum Standard Length", "Aquarium Size", "Diet"). Each
//! label anchors a short window that is searched with unit-aware patterns.
//! The result is a set of correction candidates; applying them is the
//! reconciliation engine's job.

use std::sync::LazyLock;

use nerithys_extract::{Range, decode_entities, strip_tags, window_after};
use regex::Regex;
use strum::Display;

use crate::{HttpClient, Lookup, Result};

pub const DEFAULT_BASE_URL: &str = "https://www.seriouslyfish.com";
pub const USER_AGENT: &str = "Mozilla/5.0";

const WATER_WINDOW: usize = 500;
const SIZE_WINDOW: usize = 200;
const TANK_WINDOW: usize = 300;
const DIET_WINDOW: usize = 300;

const CM_PER_INCH: f64 = 2.54;
const LITRES_PER_GALLON: f64 = 3.785;

static TEMP_C: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:to|-|–)\s*(\d+(?:\.\d+)?)\s*°?\s*C")
    .expect("static regex")
});
static TEMP_F: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:to|-|–)\s*(\d+(?:\.\d+)?)\s*°?\s*F")
    .expect("static regex")
});
static PH: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)pH[:\s]*(\d+(?:\.\d+)?)\s*(?:to|-|–)\s*(\d+(?:\.\d+)?)")
    .expect("static regex")
});
static HARDNESS: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)(?:Hardness|GH|dGH|dH)[:\s]*(\d+(?:\.\d+)?)\s*(?:to|-|–)\s*(\d+(?:\.\d+)?)")
    .expect("static regex")
});
static SIZE_CM: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*cm").expect("static regex"));
static SIZE_IN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"(?i)(\d+(?:\.\d+)?)\s*(?:″|inch(?:es)?|")"#).expect("static regex")
});
static TANK_L: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*lit").expect("static regex"));
static TANK_GAL: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*gal").expect("static regex"));

/// Coarse diet class, written verbatim into `diet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DietCategory {
  Omnivore,
  Carnivore,
  Herbivore,
}

/// Correction candidates for one species. Every field is independent; a
/// missing one means the page did not say.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrossRef {
  pub temp:    Option<Range>,
  pub ph:      Option<Range>,
  pub gh:      Option<Range>,
  pub size_cm: Option<f64>,
  pub tank_l:  Option<f64>,
  pub diet:    Option<DietCategory>,
}

#[derive(Debug, Clone)]
pub struct SeriouslyFish {
  http:     HttpClient,
  base_url: String,
}

impl SeriouslyFish {
  pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
    Self {
      http,
      base_url: base_url.into(),
    }
  }

  pub fn species_url(&self, scientific_name: &str) -> String {
    let slug = scientific_name
      .trim()
      .to_lowercase()
      .split_whitespace()
      .collect::<Vec<_>>()
      .join("-");
    format!("{}/species/{slug}/", self.base_url.trim_end_matches('/'))
  }

  /// Never fails; see [`Lookup`].
  pub async fn fetch(&self, scientific_name: &str) -> Lookup<CrossRef> {
    let result = self.try_fetch(scientific_name).await;
    Lookup::settle("seriouslyfish", scientific_name, result)
  }

  async fn try_fetch(&self, scientific_name: &str) -> Result<Option<CrossRef>> {
    let html = self.http.get_text(&self.species_url(scientific_name)).await?;
    Ok(parse_page(&html))
  }
}

fn section(html: &str, marker: &str, len: usize) -> Option<String> {
  window_after(html, marker, len).map(|w| decode_entities(&strip_tags(w)))
}

fn capture_pair(re: &Regex, text: &str) -> Option<(f64, f64)> {
  let c = re.captures(text)?;
  Some((c[1].parse().ok()?, c[2].parse().ok()?))
}

fn capture_one(re: &Regex, text: &str) -> Option<f64> {
  re.captures(text)?[1].parse().ok()
}

fn round1(v: f64) -> f64 { (v * 10.0).round() / 10.0 }

fn fahrenheit_to_celsius(f: f64) -> f64 { round1((f - 32.0) * 5.0 / 9.0) }

/// Candidates from a species page, or `None` when the page has no water
/// conditions paragraph (not a species page, or an empty stub).
pub fn parse_page(html: &str) -> Option<CrossRef> {
  let water = section(html, "Water Conditions", WATER_WINDOW)?;

  let temp = capture_pair(&TEMP_C, &water)
    .or_else(|| {
      capture_pair(&TEMP_F, &water)
        .map(|(lo, hi)| (fahrenheit_to_celsius(lo), fahrenheit_to_celsius(hi)))
    })
    .map(|(lo, hi)| Range::new(lo, hi));
  let ph = capture_pair(&PH, &water).map(|(lo, hi)| Range::new(lo, hi));
  let gh = capture_pair(&HARDNESS, &water).map(|(lo, hi)| Range::new(lo, hi));

  let size_cm = section(html, "Maximum Standard Length", SIZE_WINDOW).and_then(|s| {
    capture_one(&SIZE_CM, &s)
      .or_else(|| capture_one(&SIZE_IN, &s).map(|i| round1(i * CM_PER_INCH)))
  });

  let tank_l = section(html, "Aquarium Size", TANK_WINDOW).and_then(|s| {
    capture_one(&TANK_L, &s)
      .or_else(|| capture_one(&TANK_GAL, &s).map(|g| g * LITRES_PER_GALLON))
      .map(f64::round)
  });

  let diet = section(html, "Diet", DIET_WINDOW).and_then(|s| classify_diet(&s));

  Some(CrossRef {
    temp,
    ph,
    gh,
    size_cm,
    tank_l,
    diet,
  })
}

fn classify_diet(text: &str) -> Option<DietCategory> {
  let text = text.to_lowercase();
  if text.contains("omnivor") {
    Some(DietCategory::Omnivore)
  } else if text.contains("carnivor") || text.contains("predator") {
    Some(DietCategory::Carnivore)
  } else if ["herbivor", "aufwuchs", "algae"].iter().any(|k| text.contains(k)) {
    Some(DietCategory::Herbivore)
  } else {
    None
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const PAGE: &str = r#"
    <h3>Maximum Standard Length</h3><p>2.6&#8243; (6.5 cm).</p>
    <h3>Aquarium Size</h3><p>Base dimensions of 60 ∗ 30 cm or equivalent, 42.5 litres.</p>
    <h3>Water Conditions</h3>
    <p><strong>Temperature</strong>: 75 to 82 &deg;F (24 to 28 &deg;C)</p>
    <p><strong>pH</strong>: 6.0 to 8.0</p>
    <p><strong>Hardness</strong>: 2 to 25 &deg;H</p>
    <h3>Diet</h3><p>Omnivorous and easily fed.</p>
  "#;

  #[test]
  fn full_page() {
    let x = parse_page(PAGE).unwrap();
    assert_eq!(x.temp, Some(Range::new(24.0, 28.0)));
    assert_eq!(x.ph, Some(Range::new(6.0, 8.0)));
    assert_eq!(x.gh, Some(Range::new(2.0, 25.0)));
    assert_eq!(x.size_cm, Some(6.5));
    assert_eq!(x.tank_l, Some(43.0));
    assert_eq!(x.diet, Some(DietCategory::Omnivore));
  }

  #[test]
  fn fahrenheit_only_is_converted() {
    let html = "<p>Water Conditions</p><p>Temperature: 68 to 77 °F</p>";
    let x = parse_page(html).unwrap();
    assert_eq!(x.temp, Some(Range::new(20.0, 25.0)));
  }

  #[test]
  fn imperial_units_are_converted() {
    let html = "Maximum Standard Length 4 inches. Aquarium Size 20 gallons. \
                Water Conditions none listed";
    let x = parse_page(html).unwrap();
    assert_eq!(x.size_cm, Some(10.2));
    assert_eq!(x.tank_l, Some(76.0));
    assert_eq!(x.temp, None);
  }

  #[test]
  fn page_without_water_conditions_is_no_match() {
    assert_eq!(parse_page("<h1>Page not found</h1>"), None);
  }

  #[test]
  fn diet_categories() {
    assert_eq!(classify_diet("a micropredator"), Some(DietCategory::Carnivore));
    assert_eq!(classify_diet("grazes aufwuchs"), Some(DietCategory::Herbivore));
    assert_eq!(classify_diet("unknown"), None);
    assert_eq!(DietCategory::Herbivore.to_string(), "Herbivore");
  }
}
