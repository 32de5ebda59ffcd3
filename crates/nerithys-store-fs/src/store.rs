//! [`FsStore`]: the directory implementation of [`FicheStore`].

use std::{
  io::ErrorKind,
  path::{Path, PathBuf},
};

use nerithys_core::{FicheRecord, store::FicheStore};
use tracing::{debug, warn};

use crate::{Error, Result};

const EXTENSION: &str = "json";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A fiche repository backed by one JSON file per slug.
#[derive(Debug, Clone)]
pub struct FsStore {
  dir: PathBuf,
}

/// One file seen by [`FsStore::scan`], decoded or not.
#[derive(Debug)]
pub struct ScanEntry {
  pub path:   PathBuf,
  pub record: Result<FicheRecord>,
}

impl FsStore {
  /// Open (or create) a store rooted at `dir`.
  pub async fn open(dir: impl Into<PathBuf>) -> Result<Self> {
    let dir = dir.into();
    tokio::fs::create_dir_all(&dir).await?;
    Ok(Self { dir })
  }

  pub fn dir(&self) -> &Path { &self.dir }

  /// Lookups use the slug as a file name; anything that could escape the
  /// directory is rejected up front.
  fn check_slug(slug: &str) -> Result<()> {
    let safe = !slug.is_empty()
      && slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if safe {
      Ok(())
    } else {
      Err(Error::Core(nerithys_core::Error::InvalidRecord {
        slug:   slug.to_owned(),
        reason: "slug is not URL-safe".into(),
      }))
    }
  }

  fn path_for(&self, slug: &str) -> PathBuf {
    self.dir.join(format!("{slug}.{EXTENSION}"))
  }

  fn tmp_path_for(&self, slug: &str) -> PathBuf {
    self.dir.join(format!(".{slug}.{EXTENSION}.tmp"))
  }

  /// Paths of every visible `*.json` file, sorted for stable iteration.
  async fn json_files(&self) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(&self.dir).await?;
    let mut paths = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
      let path = entry.path();
      let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_none_or(|n| n.starts_with('.'));
      if !hidden && path.extension().is_some_and(|e| e == EXTENSION) {
        paths.push(path);
      }
    }
    paths.sort();
    Ok(paths)
  }

  /// Decode every file, keeping per-file failures instead of aborting.
  pub async fn scan(&self) -> Result<Vec<ScanEntry>> {
    let mut out = Vec::new();
    for path in self.json_files().await? {
      let record = read_record(&path).await;
      out.push(ScanEntry { path, record });
    }
    Ok(out)
  }
}

/// The file name is the key: a record whose slug disagrees with it is
/// rejected.
async fn read_record(path: &Path) -> Result<FicheRecord> {
  let text = tokio::fs::read_to_string(path).await?;
  let mut record: FicheRecord = serde_json::from_str(&text)?;
  record.ensure_slug();
  record.validate()?;
  let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
  if record.slug != stem {
    return Err(Error::SlugMismatch {
      file: stem.to_owned(),
      slug: record.slug,
    });
  }
  Ok(record)
}

impl FicheStore for FsStore {
  type Error = Error;

  async fn list_all(&self) -> Result<Vec<FicheRecord>> {
    let mut records = Vec::new();
    for entry in self.scan().await? {
      match entry.record {
        Ok(r) => records.push(r),
        Err(e) => warn!(path = %entry.path.display(), error = %e, "skipping unreadable fiche"),
      }
    }
    Ok(records)
  }

  async fn list_slugs(&self) -> Result<Vec<String>> {
    Ok(
      self
        .json_files()
        .await?
        .iter()
        .filter_map(|p| p.file_stem()?.to_str().map(str::to_owned))
        .collect(),
    )
  }

  async fn get(&self, slug: &str) -> Result<FicheRecord> {
    Self::check_slug(slug)?;
    let path = self.path_for(slug);
    match tokio::fs::metadata(&path).await {
      Ok(_) => read_record(&path).await,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        Err(Error::NotFound(slug.to_owned()))
      }
      Err(e) => Err(e.into()),
    }
  }

  async fn put(&self, record: &FicheRecord) -> Result<()> {
    record.validate()?;
    let body = serde_json::to_string_pretty(record)?;

    let tmp = self.tmp_path_for(&record.slug);
    let dst = self.path_for(&record.slug);
    tokio::fs::write(&tmp, body).await?;
    if let Err(e) = tokio::fs::rename(&tmp, &dst).await {
      let _ = tokio::fs::remove_file(&tmp).await;
      return Err(e.into());
    }
    debug!(slug = %record.slug, "wrote fiche");
    Ok(())
  }

  async fn delete(&self, slug: &str) -> Result<()> {
    Self::check_slug(slug)?;
    match tokio::fs::remove_file(self.path_for(slug)).await {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == ErrorKind::NotFound => {
        Err(Error::NotFound(slug.to_owned()))
      }
      Err(e) => Err(e.into()),
    }
  }
}
