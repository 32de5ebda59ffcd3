//! Passes that need no network: region refinement and the popularity filter.

use std::path::PathBuf;

use chrono::Utc;
use nerithys_classify::{Verdict, assess, classify_region};
use nerithys_core::FicheStore;
use tracing::{debug, info, warn};

use crate::{Engine, Error, Result, RunReport, merge::Change};

#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
  /// Dropped scientific names are written here, one per line.
  pub audit_path: Option<PathBuf>,
  /// Decide and report, but delete nothing.
  pub dry_run:    bool,
}

impl<S: FicheStore> Engine<S> {
  /// Relabel unqualified freshwater fiches with their region. Only the
  /// `biotope` field is ever rewritten.
  pub async fn classify_regions(&self) -> Result<RunReport> {
    let mut records = self.store().list_all().await.map_err(Error::store)?;
    records.sort_by(|a, b| a.slug.cmp(&b.slug));
    let mut report = RunReport::start("classify", records.len());

    for mut record in records {
      report.checked += 1;
      let Some(refined) = classify_region(&record) else {
        report.unchanged += 1;
        continue;
      };
      debug!(slug = %record.slug, region = %refined.region, evidence = ?refined.evidence, "refined");

      let change = Change {
        field: "biotope",
        old:   Some(record.biotope.to_string()),
        new:   refined.biotope().to_string(),
      };
      record.biotope = refined.biotope();
      if self.persist(&record).await {
        report.corrected += 1;
        report.tally(refined.region.to_string());
        report.record_changes(&record.scientific_name, vec![change]);
      } else {
        report.failed += 1;
      }
    }

    report.finish();
    Ok(report)
  }

  /// Delete every fiche no allow-list keeps, then write the audit trail.
  pub async fn filter_popular(&self, options: &FilterOptions) -> Result<RunReport> {
    let mut records = self.store().list_all().await.map_err(Error::store)?;
    records.sort_by(|a, b| a.slug.cmp(&b.slug));
    let mut report = RunReport::start("filter", records.len());
    let mut dropped = Vec::new();

    for record in &records {
      report.checked += 1;
      match assess(record) {
        Verdict::Keep(reason) => {
          report.unchanged += 1;
          report.tally(reason.to_string());
        }
        Verdict::Drop if options.dry_run => {
          report.deleted += 1;
          dropped.push(record.scientific_name.clone());
        }
        Verdict::Drop => match self.store().delete(&record.slug).await {
          Ok(()) => {
            report.deleted += 1;
            dropped.push(record.scientific_name.clone());
          }
          Err(e) => {
            warn!(slug = %record.slug, error = %e, "cannot delete fiche");
            report.failed += 1;
          }
        },
      }
    }

    if let Some(path) = &options.audit_path
      && !options.dry_run
    {
      let header = format!(
        "# removed by the popularity filter on {} ({} species)\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        dropped.len()
      );
      let body = dropped.join("\n");
      tokio::fs::write(path, format!("{header}{body}\n"))
        .await
        .map_err(|source| Error::Audit {
          path: path.clone(),
          source,
        })?;
      info!(path = %path.display(), n = dropped.len(), "audit trail written");
    }

    report.finish();
    Ok(report)
  }
}
