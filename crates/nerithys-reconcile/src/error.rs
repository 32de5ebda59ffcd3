//! Run-level failures. Per-record problems never end up here; they are
//! counted in the [`RunReport`](crate::RunReport) instead.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("cannot write audit trail {path}: {source}")]
  Audit {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },
}

impl Error {
  pub(crate) fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
