//! Directory-of-JSON backend for the fiche repository.
//!
//! Each record lives in `<dir>/<slug>.json`, pretty-printed. Writes go to a
//! hidden temporary file first and are renamed into place, so a reader sees
//! either the old document or the new one, never a torn write.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::{FsStore, ScanEntry};

#[cfg(test)]
mod tests;
