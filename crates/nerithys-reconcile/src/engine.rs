//! Batch orchestration.
//!
//! A run loads every record once, lets the [`Pass`] pick its working set,
//! then walks that set in fixed-size batches. All adapter calls of a batch are
//! polled together on the current task and their results are matched back to
//! items by position. Batches run strictly in sequence with a courtesy delay
//! in between, so no record is ever touched by two in-flight calls.

use std::{future::Future, time::Duration};

use futures::future::join_all;
use nerithys_core::{FicheRecord, FicheStore};
use nerithys_sources::Lookup;
use tracing::{debug, info, warn};

use crate::{Error, Result, RunReport, merge::Change};

/// Batch size and inter-batch delay for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
  pub concurrency: usize,
  pub delay:       Duration,
}

impl Default for BatchConfig {
  fn default() -> Self {
    Self {
      concurrency: 5,
      delay:       Duration::from_millis(400),
    }
  }
}

/// What a pass wants done with one item after its lookup succeeded.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
  Create(FicheRecord),
  Update {
    record:  FicheRecord,
    changes: Vec<Change>,
  },
  Unchanged,
  /// Found, but not worth keeping.
  Skip,
}

/// One network-backed step of the pipeline.
pub trait Pass: Send + Sync {
  type Item: Send + Sync;
  type Found: Send;

  fn name(&self) -> &'static str;

  /// Working set, from every readable record in the store.
  fn select(&self, existing: Vec<FicheRecord>) -> Vec<Self::Item>;

  /// Scientific name or other label used in logs and the change log.
  fn label<'a>(&self, item: &'a Self::Item) -> &'a str;

  fn fetch<'a>(
    &'a self,
    item: &'a Self::Item,
  ) -> impl Future<Output = Lookup<Self::Found>> + Send + 'a;

  /// Provider credited in the report, for passes with several.
  fn provider(&self, _found: &Self::Found) -> Option<String> { None }

  /// Merge a successful lookup. Must be pure: persistence is the engine's
  /// job.
  fn apply(&self, item: Self::Item, found: Self::Found) -> Outcome;
}

/// Runs passes against a store. The engine is the only writer.
#[derive(Debug, Clone)]
pub struct Engine<S> {
  store:  S,
  config: BatchConfig,
}

impl<S: FicheStore> Engine<S> {
  pub fn new(store: S, config: BatchConfig) -> Self { Self { store, config } }

  pub fn store(&self) -> &S { &self.store }

  pub fn config(&self) -> BatchConfig { self.config }

  pub fn with_config(mut self, config: BatchConfig) -> Self {
    self.config = config;
    self
  }

  /// Select, dispatch, merge, persist, throttle. Only a failure to list the
  /// store aborts the run; everything else is counted.
  pub async fn run_pass<P: Pass>(&self, pass: &P) -> Result<RunReport> {
    let existing = self.store.list_all().await.map_err(Error::store)?;
    let items = pass.select(existing);
    let mut report = RunReport::start(pass.name(), items.len());
    info!(pass = pass.name(), total = items.len(), "starting pass");

    let size = self.config.concurrency.max(1);
    let mut pending = items.into_iter().peekable();
    let mut batch_no = 0usize;

    while pending.peek().is_some() {
      let batch: Vec<P::Item> = pending.by_ref().take(size).collect();
      let lookups = join_all(batch.iter().map(|item| pass.fetch(item))).await;

      for (item, lookup) in batch.into_iter().zip(lookups) {
        report.checked += 1;
        let found = match lookup {
          Lookup::Found(found) => found,
          Lookup::Missing(miss) => {
            report.miss(miss);
            continue;
          }
        };
        report.found += 1;
        if let Some(provider) = pass.provider(&found) {
          report.tally(provider);
        }

        let label = pass.label(&item).to_owned();
        match pass.apply(item, found) {
          Outcome::Create(record) => {
            if self.persist(&record).await {
              report.created += 1;
            } else {
              report.failed += 1;
            }
          }
          Outcome::Update { record, changes } => {
            if self.persist(&record).await {
              debug!(pass = pass.name(), slug = %record.slug, n = changes.len(), "updated");
              report.corrected += 1;
              report.record_changes(&label, changes);
            } else {
              report.failed += 1;
            }
          }
          Outcome::Unchanged => report.unchanged += 1,
          Outcome::Skip => report.skipped += 1,
        }
      }

      if batch_no % 10 == 0 || pending.peek().is_none() {
        report.log_progress();
      }
      batch_no += 1;

      if pending.peek().is_some() && !self.config.delay.is_zero() {
        tokio::time::sleep(self.config.delay).await;
      }
    }

    report.finish();
    Ok(report)
  }

  /// A failed write is fatal for that record only.
  pub(crate) async fn persist(&self, record: &FicheRecord) -> bool {
    match self.store.put(record).await {
      Ok(()) => true,
      Err(e) => {
        warn!(slug = %record.slug, error = %e, "cannot write fiche");
        false
      }
    }
  }
}
