//! Source adapters: the primary scraper, the cross-reference corrector and
//! the image providers.
//!
//! Every adapter exposes an infallible `fetch` returning a [`Lookup`]:
//! network errors, timeouts, non-2xx answers, malformed payloads and
//! off-topic matches all become [`Lookup::Missing`] with a [`Miss`] reason.
//! Nothing here writes to the repository.

mod error;
mod matching;

pub mod baqua;
pub mod http;
pub mod images;
pub mod lookup;
pub mod seriouslyfish;

pub use error::{Result, SourceError};
pub use http::{HttpClient, HttpConfig};
pub use lookup::{Lookup, Miss};

#[cfg(test)]
mod tests;
