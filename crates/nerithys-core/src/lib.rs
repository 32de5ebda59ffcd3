//! Core types and trait definitions for the Nerithys species store.
//!
//! This crate is deliberately free of HTTP and filesystem dependencies.
//! Every other crate depends on it; it depends on nothing in the workspace.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod biotope;
pub mod error;
pub mod feed;
pub mod fiche;
pub mod store;

pub use biotope::Biotope;
pub use error::{Error, Result};
pub use feed::Feed;
pub use fiche::{DIET_UNSET, Difficulty, FicheRecord, slugify};
pub use store::FicheStore;
