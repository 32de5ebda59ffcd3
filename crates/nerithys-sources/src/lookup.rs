//! The adapter result type.

use strum::Display;
use tracing::debug;

use crate::Result;

/// Why an adapter produced nothing. All of these mean "no data for this
/// record on this pass"; none of them aborts a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Miss {
  Timeout,
  Failed,
  Status,
  /// The provider has no entry, or an expected pattern was absent.
  NoMatch,
  /// The provider's best match named a different taxon.
  LowConfidence,
}

/// Outcome of one adapter call.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
  Found(T),
  Missing(Miss),
}

impl<T> Lookup<T> {
  /// Fold an internal result into a lookup, logging misses at `debug`.
  pub(crate) fn settle(
    source: &str,
    key: &str,
    result: Result<Option<T>>,
  ) -> Self {
    match result {
      Ok(Some(v)) => Self::Found(v),
      Ok(None) => {
        debug!(source, key, "no match");
        Self::Missing(Miss::NoMatch)
      }
      Err(e) => {
        let miss = e.miss();
        debug!(source, key, %miss, error = %e, "lookup failed");
        Self::Missing(miss)
      }
    }
  }

  pub fn is_found(&self) -> bool { matches!(self, Self::Found(_)) }

  pub fn found(self) -> Option<T> {
    match self {
      Self::Found(v) => Some(v),
      Self::Missing(_) => None,
    }
  }

  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
    match self {
      Self::Found(v) => Lookup::Found(f(v)),
      Self::Missing(m) => Lookup::Missing(m),
    }
  }
}
