//! GBIF species media.

use serde::Deserialize;

use super::{ImageProvider, ProviderKind};
use crate::{HttpClient, Result, SourceError, matching::same_taxon};

pub const DEFAULT_BASE_URL: &str = "https://api.gbif.org";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Match {
  usage_key:      Option<u64>,
  match_type:     Option<String>,
  canonical_name: Option<String>,
}

#[derive(Deserialize)]
struct MediaPage {
  #[serde(default)]
  results: Vec<Media>,
}

#[derive(Deserialize)]
struct Media {
  #[serde(rename = "type")]
  kind:       Option<String>,
  identifier: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Gbif {
  http:     HttpClient,
  base_url: String,
}

impl Gbif {
  pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
    Self {
      http,
      base_url: base_url.into(),
    }
  }
}

impl ImageProvider for Gbif {
  fn kind(&self) -> ProviderKind { ProviderKind::Gbif }

  /// Strict backbone match, then the first still image attached to it.
  async fn find(&self, scientific_name: &str) -> Result<Option<String>> {
    let base = self.base_url.trim_end_matches('/');
    let matched: Match = self
      .http
      .get_json(
        &format!("{base}/v1/species/match"),
        &[("name", scientific_name), ("strict", "true")],
      )
      .await?;

    let Some(key) = matched.usage_key else {
      return Ok(None);
    };
    if matched.match_type.as_deref() == Some("NONE") {
      return Ok(None);
    }
    let canonical = matched.canonical_name.unwrap_or_default();
    if !same_taxon(&canonical, scientific_name) {
      return Err(SourceError::low_confidence(scientific_name, canonical));
    }

    let media: MediaPage = self
      .http
      .get_json(&format!("{base}/v1/species/{key}/media"), &[("limit", "3")])
      .await?;
    Ok(
      media
        .results
        .into_iter()
        .find(|m| m.kind.as_deref() == Some("StillImage"))
        .and_then(|m| m.identifier)
        .filter(|u| !u.is_empty()),
    )
  }
}
