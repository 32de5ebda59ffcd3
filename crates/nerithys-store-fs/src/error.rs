//! Error type for `nerithys-store-fs`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] nerithys_core::Error),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("fiche introuvable: {0}")]
  NotFound(String),

  #[error("{file} holds fiche {slug}")]
  SlugMismatch { file: String, slug: String },
}

impl Error {
  pub fn is_not_found(&self) -> bool {
    matches!(
      self,
      Self::NotFound(_) | Self::Core(nerithys_core::Error::NotFound(_))
    )
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
