//! iNaturalist taxon photos.

use serde::Deserialize;

use super::{ImageProvider, ProviderKind};
use crate::{HttpClient, Result, SourceError, matching::same_taxon};

pub const DEFAULT_BASE_URL: &str = "https://api.inaturalist.org";

#[derive(Deserialize)]
struct TaxaResponse {
  #[serde(default)]
  results: Vec<Taxon>,
}

#[derive(Deserialize)]
struct Taxon {
  name:          Option<String>,
  default_photo: Option<Photo>,
}

#[derive(Deserialize)]
struct Photo {
  medium_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct INaturalist {
  http:     HttpClient,
  base_url: String,
}

impl INaturalist {
  pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
    Self {
      http,
      base_url: base_url.into(),
    }
  }
}

impl ImageProvider for INaturalist {
  fn kind(&self) -> ProviderKind { ProviderKind::INaturalist }

  /// Top species-rank hit; its name must equal the query exactly.
  async fn find(&self, scientific_name: &str) -> Result<Option<String>> {
    let url = format!("{}/v1/taxa", self.base_url.trim_end_matches('/'));
    let resp: TaxaResponse = self
      .http
      .get_json(
        &url,
        &[("q", scientific_name), ("rank", "species"), ("per_page", "1")],
      )
      .await?;

    let Some(taxon) = resp.results.into_iter().next() else {
      return Ok(None);
    };
    let name = taxon.name.unwrap_or_default();
    if !same_taxon(&name, scientific_name) {
      return Err(SourceError::low_confidence(scientific_name, name));
    }
    Ok(
      taxon
        .default_photo
        .and_then(|p| p.medium_url)
        .filter(|u| !u.is_empty()),
    )
  }
}
