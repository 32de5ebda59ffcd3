//! Numeric extraction: bare numbers, parameter ranges, adult size.

use std::sync::LazyLock;

use regex::Regex;

use crate::html::{decode_entities, strip_tags, window_after};

static NUMBER: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[0-9]+[.,]?[0-9]*").expect("static regex"));

// `:&nbsp;3,5 à 4 cm SL`. Every occurrence on the page counts.
static SIZE_SL_TL: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i):(?:&nbsp;|\s)*([0-9][0-9,.\s]*(?:à\s*[0-9][0-9,.]*\s*)?)cm\s*(?:SL|TL)")
    .expect("static regex")
});

static SIZE_LOOSE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)([0-9]+[.,]?[0-9]*)\s*(?:à\s*([0-9]+[.,]?[0-9]*)\s*)?cm")
    .expect("static regex")
});

const SIZE_FALLBACK_WINDOW: usize = 600;

fn parse_number(token: &str) -> Option<f64> {
  token
    .trim()
    .trim_end_matches(['.', ','])
    .replace(',', ".")
    .parse()
    .ok()
}

/// Every numeric token in `text`, in order. Both `.` and `,` are accepted
/// as the decimal separator.
pub fn extract_numbers(text: &str) -> Vec<f64> {
  NUMBER
    .find_iter(text)
    .filter_map(|m| parse_number(m.as_str()))
    .collect()
}

// ─── Ranges ──────────────────────────────────────────────────────────────────

/// A closed numeric interval. A range exists as a whole or not at all;
/// there is no lone bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
  pub min: f64,
  pub max: f64,
}

impl Range {
  pub fn new(min: f64, max: f64) -> Self { Self { min, max } }

  /// The parameter-block policy:
  ///
  /// - four or more numbers are a tolerance bar (absolute min, comfort min,
  ///   comfort max, absolute max): keep the outer pair, indices 0 and 3;
  /// - two or three numbers: first and last;
  /// - one number: a degenerate range;
  /// - none: absent.
  pub fn from_numbers(nums: &[f64]) -> Option<Self> {
    match nums {
      [] => None,
      [only] => Some(Self::new(*only, *only)),
      [a, .., b] if nums.len() < 4 => Some(Self::new(*a, *b)),
      [a, _, _, d, ..] => Some(Self::new(*a, *d)),
      _ => None,
    }
  }

  /// Split into the `(min, max)` pair stored on a fiche.
  pub fn bounds(range: Option<Self>) -> (Option<f64>, Option<f64>) {
    match range {
      Some(r) => (Some(r.min), Some(r.max)),
      None => (None, None),
    }
  }
}

/// Range from the value column (`col-sm-9`) of the parameter block anchored
/// at `id="{block_id}"`.
pub fn extract_param_range(html: &str, block_id: &str) -> Option<Range> {
  let re = Regex::new(&format!(
    r#"(?is)id="{}".*?<div[^>]*class="col-sm-9[^"]*"[^>]*>(.*?)</div>"#,
    regex::escape(block_id)
  ))
  .ok()?;
  let caps = re.captures(html)?;
  let text = decode_entities(&strip_tags(&caps[1]));
  Range::from_numbers(&extract_numbers(&text))
}

// ─── Size ────────────────────────────────────────────────────────────────────

/// Adult size in cm: the largest value across every `N (à M) cm SL|TL`
/// occurrence on the page, since juvenile and adult sizes are listed
/// separately. When none is present, fall back to the first `N (à M) cm`
/// shortly after the "Taille" heading.
pub fn extract_max_size(html: &str) -> Option<f64> {
  let all: Vec<f64> = SIZE_SL_TL
    .captures_iter(html)
    .flat_map(|c| extract_numbers(&c[1]))
    .collect();
  if let Some(max) = all.into_iter().reduce(f64::max) {
    return Some(max);
  }

  let block = window_after(html, "Taille", SIZE_FALLBACK_WINDOW)?;
  let caps = SIZE_LOOSE.captures(block)?;
  let first = parse_number(&caps[1])?;
  let second = caps.get(2).and_then(|m| parse_number(m.as_str()));
  Some(second.map_or(first, |s| first.max(s)))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn numbers_accept_both_separators() {
    assert_eq!(extract_numbers("pH 6,5 à 7.5"), vec![6.5, 7.5]);
    assert_eq!(extract_numbers("5. puis 12"), vec![5.0, 12.0]);
    assert!(extract_numbers("aucune valeur").is_empty());
  }

  #[test]
  fn four_numbers_take_outer_bounds() {
    let r = Range::from_numbers(&[20.0, 22.0, 26.0, 28.0]).unwrap();
    assert_eq!((r.min, r.max), (20.0, 28.0));
  }

  #[test]
  fn five_numbers_still_take_index_three() {
    let r = Range::from_numbers(&[20.0, 22.0, 26.0, 28.0, 30.0]).unwrap();
    assert_eq!((r.min, r.max), (20.0, 28.0));
  }

  #[test]
  fn two_and_three_numbers_take_first_and_last() {
    let r = Range::from_numbers(&[6.0, 7.5]).unwrap();
    assert_eq!((r.min, r.max), (6.0, 7.5));
    let r = Range::from_numbers(&[6.0, 6.8, 7.5]).unwrap();
    assert_eq!((r.min, r.max), (6.0, 7.5));
  }

  #[test]
  fn single_number_is_degenerate_range() {
    let r = Range::from_numbers(&[25.0]).unwrap();
    assert_eq!(r.min, r.max);
    assert_eq!(Range::bounds(Some(r)), (Some(25.0), Some(25.0)));
  }

  #[test]
  fn no_numbers_no_range() {
    assert_eq!(Range::from_numbers(&[]), None);
    assert_eq!(Range::bounds(None), (None, None));
  }

  #[test]
  fn param_block_tolerance_bar() {
    let html = r#"
      <div class="row" id="ContentPlaceHolder1_div_TEMP_MAINT">
        <div class="col-sm-3">Température</div>
        <div class="col-sm-9 bar"><span>20</span>&nbsp;<b>22</b> <b>26</b>&nbsp;<span>28</span> °C</div>
      </div>
      <div id="ContentPlaceHolder1_div_PH_MAINT">
        <div class="col-sm-9">6,0 - 7,5</div>
      </div>"#;
    assert_eq!(
      extract_param_range(html, "ContentPlaceHolder1_div_TEMP_MAINT"),
      Some(Range::new(20.0, 28.0))
    );
    assert_eq!(
      extract_param_range(html, "ContentPlaceHolder1_div_PH_MAINT"),
      Some(Range::new(6.0, 7.5))
    );
    assert_eq!(extract_param_range(html, "ContentPlaceHolder1_div_GH_MAINT"), None);
  }

  #[test]
  fn size_is_max_over_all_occurrences() {
    let html = "Mâle :&nbsp;4 cm SL<br/>Femelle :&nbsp;5,5 à 7 cm SL\
                <p>Juvénile :&nbsp;2 cm TL</p>";
    assert_eq!(extract_max_size(html), Some(7.0));
  }

  #[test]
  fn size_falls_back_to_taille_section() {
    let html = "<h3>Taille</h3><p>Adulte 4 à 6 cm environ</p>";
    assert_eq!(extract_max_size(html), Some(6.0));
    assert_eq!(extract_max_size("<p>rien</p>"), None);
  }
}
