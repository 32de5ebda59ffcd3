//! Reconciliation engine for the fiche repository.
//!
//! Passes call the source adapters over the stored species in bounded
//! batches, merge the results under the field-level policy in [`merge`] and
//! write back only records that changed. The engine is the sole writer of the
//! repository.
//!
//! ```rust,ignore
//! let engine = Engine::new(store, BatchConfig::default());
//! let report = engine.run_pass(&CrossRefPass::new(sf, Tolerances::default())).await?;
//! report.log_summary();
//! ```

#![allow(async_fn_in_trait)]

pub mod engine;
pub mod error;
pub mod merge;
pub mod passes;
pub mod report;
pub mod tolerance;

pub use engine::{BatchConfig, Engine, Outcome, Pass};
pub use error::{Error, Result};
pub use merge::{Change, Corrections};
pub use passes::{CrossRefPass, FilterOptions, ImagePass, ScrapeItem, ScrapePass};
pub use report::{RecordChanges, RunReport};
pub use tolerance::Tolerances;
