//! Error types for `nerithys-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("fiche not found: {0}")]
  NotFound(String),

  #[error("invalid fiche {slug:?}: {reason}")]
  InvalidRecord { slug: String, reason: String },

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

impl Error {
  pub(crate) fn invalid(slug: &str, reason: impl Into<String>) -> Self {
    Self::InvalidRecord {
      slug:   slug.to_owned(),
      reason: reason.into(),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
