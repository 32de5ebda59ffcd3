//! Field tolerances for the cross-reference merge.

use serde::{Deserialize, Serialize};

/// How far an existing value may drift from a trusted one before it is
/// overwritten.
///
/// `temp`, `ph` and `gh` are absolute bands on each range bound; `None`
/// means the field is only ever null-filled. The ratios apply to adult size
/// and tank volume: a value is replaced when it differs from the incoming
/// one by more than `ratio × incoming`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
  pub temp:         Option<f64>,
  pub ph:           Option<f64>,
  pub gh:           Option<f64>,
  pub size_ratio:   f64,
  pub volume_ratio: f64,
}

impl Default for Tolerances {
  fn default() -> Self {
    Self {
      temp:         Some(3.0),
      ph:           Some(1.5),
      gh:           None,
      size_ratio:   0.5,
      volume_ratio: 0.5,
    }
  }
}
