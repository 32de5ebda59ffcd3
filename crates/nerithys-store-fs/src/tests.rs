//! Integration tests for `FsStore` against a temporary directory.

use nerithys_core::{Biotope, Difficulty, FicheRecord, store::FicheStore};
use tempfile::TempDir;

use crate::{Error, FsStore};

async fn store() -> (TempDir, FsStore) {
  let dir = tempfile::tempdir().expect("tempdir");
  let store = FsStore::open(dir.path().join("fiches"))
    .await
    .expect("open store");
  (dir, store)
}

fn corydoras() -> FicheRecord {
  let mut r = FicheRecord::new("Corydoras aeneus");
  r.name = "Corydoras bronze".into();
  r.biotope = Biotope::FreshwaterAmazonia;
  r.difficulty = Difficulty::Easy;
  r.temp_min = Some(22.0);
  r.temp_max = Some(26.5);
  r.ph_min = Some(6.0);
  r.ph_max = Some(8.0);
  r.min_volume_l = Some(60.0);
  r.min_length_cm = Some(7.0);
  r.diet = Some("Omnivore".into());
  r.sources = Some(vec!["https://www.b-aqua.com/pages/fiche.aspx?id=1209".into()]);
  r.images = vec!["https://img.example/corydoras.jpg".into()];
  r.tags = vec!["fond".into(), "banc".into()];
  r
}

// ─── Round trip ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn put_then_get_is_identical() {
  let (_dir, s) = store().await;
  let record = corydoras();
  s.put(&record).await.unwrap();

  let back = s.get("corydoras-aeneus").await.unwrap();
  assert_eq!(back, record);
}

#[tokio::test]
async fn put_overwrites_whole_file() {
  let (_dir, s) = store().await;
  let mut record = corydoras();
  s.put(&record).await.unwrap();

  record.sources = None;
  record.notes = Some("Bac planté.".into());
  s.put(&record).await.unwrap();

  let back = s.get("corydoras-aeneus").await.unwrap();
  assert_eq!(back.sources, None);
  assert_eq!(back.notes.as_deref(), Some("Bac planté."));
}

#[tokio::test]
async fn put_leaves_no_temporary_file() {
  let (_dir, s) = store().await;
  s.put(&corydoras()).await.unwrap();

  let names: Vec<String> = std::fs::read_dir(s.dir())
    .unwrap()
    .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
    .collect();
  assert_eq!(names, ["corydoras-aeneus.json"]);
}

#[tokio::test]
async fn written_file_is_pretty_camel_case() {
  let (_dir, s) = store().await;
  s.put(&corydoras()).await.unwrap();

  let text =
    std::fs::read_to_string(s.dir().join("corydoras-aeneus.json")).unwrap();
  assert!(text.contains("\n  \"scientificName\": \"Corydoras aeneus\""));
  assert!(text.contains("\"tempMin\": 22,"));
  assert!(text.contains("\"tempMax\": 26.5,"));
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn put_rejects_record_without_identity() {
  let (_dir, s) = store().await;
  let mut record = corydoras();
  record.scientific_name.clear();

  let err = s.put(&record).await.unwrap_err();
  assert!(matches!(
    err,
    Error::Core(nerithys_core::Error::InvalidRecord { .. })
  ));
  assert!(s.list_slugs().await.unwrap().is_empty());
}

#[tokio::test]
async fn put_rejects_path_like_slug() {
  let (_dir, s) = store().await;
  let mut record = corydoras();
  record.slug = "../escape".into();
  assert!(s.put(&record).await.is_err());
  assert!(s.get("../escape").await.is_err());
}

// ─── Misses ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_unknown_slug_is_not_found() {
  let (_dir, s) = store().await;
  let err = s.get("danio-rerio").await.unwrap_err();
  assert!(err.is_not_found());
}

#[tokio::test]
async fn delete_removes_and_then_misses() {
  let (_dir, s) = store().await;
  s.put(&corydoras()).await.unwrap();

  s.delete("corydoras-aeneus").await.unwrap();
  assert!(s.get("corydoras-aeneus").await.unwrap_err().is_not_found());
  assert!(s.delete("corydoras-aeneus").await.unwrap_err().is_not_found());
}

// ─── Listing ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_all_skips_invalid_files() {
  let (_dir, s) = store().await;
  s.put(&corydoras()).await.unwrap();
  s.put(&FicheRecord::new("Danio rerio")).await.unwrap();
  std::fs::write(s.dir().join("broken.json"), "{ not json").unwrap();
  std::fs::write(s.dir().join("anonymous.json"), r#"{"name":"?"}"#).unwrap();
  std::fs::write(s.dir().join("README.txt"), "ignored").unwrap();

  let mut slugs: Vec<String> = s
    .list_all()
    .await
    .unwrap()
    .into_iter()
    .map(|r| r.slug)
    .collect();
  slugs.sort();
  assert_eq!(slugs, ["corydoras-aeneus", "danio-rerio"]);

  let scan = s.scan().await.unwrap();
  assert_eq!(scan.len(), 4);
  assert_eq!(scan.iter().filter(|e| e.record.is_err()).count(), 2);
}

#[tokio::test]
async fn list_all_derives_missing_slug() {
  let (_dir, s) = store().await;
  std::fs::write(
    s.dir().join("betta-splendens.json"),
    r#"{"scientificName":"Betta splendens","name":"Combattant"}"#,
  )
  .unwrap();

  let all = s.list_all().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].slug, "betta-splendens");
}

#[tokio::test]
async fn renamed_file_is_rejected() {
  let (_dir, s) = store().await;
  s.put(&corydoras()).await.unwrap();
  std::fs::rename(
    s.dir().join("corydoras-aeneus.json"),
    s.dir().join("corydoras-paleatus.json"),
  )
  .unwrap();

  let err = s.get("corydoras-paleatus").await.unwrap_err();
  assert!(!err.is_not_found());
  assert!(matches!(
    err,
    Error::SlugMismatch { ref file, ref slug }
      if file == "corydoras-paleatus" && slug == "corydoras-aeneus"
  ));
  assert!(s.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_slugs_matches_file_names() {
  let (_dir, s) = store().await;
  s.put(&corydoras()).await.unwrap();
  s.put(&FicheRecord::new("Danio rerio")).await.unwrap();

  let slugs = s.list_slugs().await.unwrap();
  assert_eq!(slugs, ["corydoras-aeneus", "danio-rerio"]);
}
