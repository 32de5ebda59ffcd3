//! Error type for `nerithys-sources`.
//!
//! These never leave the crate through a public `fetch`: every adapter folds
//! them into a [`Miss`](crate::Miss) at its boundary.

use thiserror::Error;

use crate::lookup::Miss;

#[derive(Debug, Error)]
pub enum SourceError {
  #[error("request timed out: {0}")]
  Timeout(#[source] reqwest::Error),

  #[error("request failed: {0}")]
  Request(#[source] reqwest::Error),

  #[error("{url} answered {status}")]
  Status { status: u16, url: String },

  #[error("malformed payload: {0}")]
  Payload(String),

  /// The provider answered, but about a different taxon.
  #[error("expected {expected:?}, provider returned {got:?}")]
  LowConfidence { expected: String, got: String },
}

impl SourceError {
  pub(crate) fn low_confidence(
    expected: impl Into<String>,
    got: impl Into<String>,
  ) -> Self {
    Self::LowConfidence {
      expected: expected.into(),
      got:      got.into(),
    }
  }

  pub fn miss(&self) -> Miss {
    match self {
      Self::Timeout(_) => Miss::Timeout,
      Self::Request(_) | Self::Payload(_) => Miss::Failed,
      Self::Status { .. } => Miss::Status,
      Self::LowConfidence { .. } => Miss::LowConfidence,
    }
  }
}

impl From<reqwest::Error> for SourceError {
  fn from(e: reqwest::Error) -> Self {
    if e.is_timeout() {
      Self::Timeout(e)
    } else if e.is_decode() {
      Self::Payload(e.to_string())
    } else {
      Self::Request(e)
    }
  }
}

pub type Result<T, E = SourceError> = std::result::Result<T, E>;
