//! Per-run counters and change log.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::merge::Change;

/// Changes applied to one record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordChanges {
  pub scientific_name: String,
  pub changes:         Vec<Change>,
}

/// Summary of one pass. Advisory only: the counters are logged, never
/// consumed by another component.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
  pub pass:        String,
  pub started_at:  DateTime<Utc>,
  pub finished_at: Option<DateTime<Utc>>,
  pub total:       usize,

  pub checked:   usize,
  pub found:     usize,
  pub created:   usize,
  pub corrected: usize,
  pub unchanged: usize,
  pub skipped:   usize,
  pub failed:    usize,
  pub deleted:   usize,

  /// Misses by reason (`timeout`, `no_match`, ...).
  pub misses:      BTreeMap<String, usize>,
  /// Hits by image provider, new region or keep reason.
  pub breakdown:   BTreeMap<String, usize>,
  pub changes:     Vec<RecordChanges>,
}

impl RunReport {
  pub fn start(pass: impl Into<String>, total: usize) -> Self {
    Self {
      pass: pass.into(),
      started_at: Utc::now(),
      finished_at: None,
      total,
      checked: 0,
      found: 0,
      created: 0,
      corrected: 0,
      unchanged: 0,
      skipped: 0,
      failed: 0,
      deleted: 0,
      misses: BTreeMap::new(),
      breakdown: BTreeMap::new(),
      changes: Vec::new(),
    }
  }

  pub(crate) fn miss(&mut self, reason: impl ToString) {
    self.failed += 1;
    *self.misses.entry(reason.to_string()).or_default() += 1;
  }

  pub(crate) fn tally(&mut self, key: impl Into<String>) {
    *self.breakdown.entry(key.into()).or_default() += 1;
  }

  pub(crate) fn record_changes(&mut self, scientific_name: &str, changes: Vec<Change>) {
    self.changes.push(RecordChanges {
      scientific_name: scientific_name.to_owned(),
      changes,
    });
  }

  /// Records written by the pass, created or updated.
  pub fn written(&self) -> usize { self.created + self.corrected }

  pub fn percent_done(&self) -> f64 {
    if self.total == 0 {
      100.0
    } else {
      self.checked as f64 * 100.0 / self.total as f64
    }
  }

  pub(crate) fn log_progress(&self) {
    info!(
      pass = %self.pass,
      "[{:.1}%] checked {} | found {} | created {} | corrected {} | failed {} | skipped {}",
      self.percent_done(),
      self.checked,
      self.found,
      self.created,
      self.corrected,
      self.failed,
      self.skipped,
    );
  }

  pub(crate) fn finish(&mut self) { self.finished_at = Some(Utc::now()); }

  pub fn elapsed_secs(&self) -> Option<f64> {
    self
      .finished_at
      .map(|end| (end - self.started_at).num_milliseconds() as f64 / 1000.0)
  }

  /// Final summary plus the change log, one line per record.
  pub fn log_summary(&self) {
    info!(
      pass = %self.pass,
      total = self.total,
      checked = self.checked,
      found = self.found,
      created = self.created,
      corrected = self.corrected,
      unchanged = self.unchanged,
      skipped = self.skipped,
      failed = self.failed,
      deleted = self.deleted,
      elapsed_secs = self.elapsed_secs().unwrap_or_default(),
      "pass finished"
    );
    for (key, count) in &self.breakdown {
      info!(pass = %self.pass, %key, count, "breakdown");
    }
    for (reason, count) in &self.misses {
      info!(pass = %self.pass, %reason, count, "misses");
    }
    for entry in &self.changes {
      let line = entry
        .changes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
      info!(pass = %self.pass, "{}: {line}", entry.scientific_name);
    }
  }
}
