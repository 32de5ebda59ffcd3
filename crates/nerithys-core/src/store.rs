//! The `FicheStore` trait.
//!
//! Implemented by storage backends (e.g. `nerithys-store-fs`). The
//! reconciliation engine and the CLI depend on this abstraction, not on any
//! concrete backend, so an embedded database could replace the directory of
//! JSON files without touching the merge logic.

use std::future::Future;

use crate::fiche::FicheRecord;

/// Abstraction over a key-value store of fiches keyed by slug.
///
/// Writers must see their own writes immediately; readers must never observe
/// a partially written record.
pub trait FicheStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Every readable record. Order is unspecified. Records that fail to
  /// decode or validate are skipped by the backend and logged.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<FicheRecord>, Self::Error>> + Send + '_;

  /// Slugs currently present, without decoding the records.
  fn list_slugs(
    &self,
  ) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send + '_;

  /// Fetch one record. Unknown slugs are an error, not `None`.
  fn get<'a>(
    &'a self,
    slug: &'a str,
  ) -> impl Future<Output = Result<FicheRecord, Self::Error>> + Send + 'a;

  /// Full overwrite. The record is validated before any I/O happens.
  fn put<'a>(
    &'a self,
    record: &'a FicheRecord,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Remove one record. Unknown slugs are an error.
  fn delete<'a>(
    &'a self,
    slug: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
