//! FishBase preferred pictures, via the rOpenSci mirror of its tables.

use serde::Deserialize;

use super::{ImageProvider, ProviderKind};
use crate::{HttpClient, Result, SourceError, matching::same_taxon};

pub const DEFAULT_BASE_URL: &str = "https://fishbase.ropensci.org";
pub const DEFAULT_IMAGE_BASE: &str = "https://www.fishbase.se/images/species";

#[derive(Deserialize)]
struct SpeciesTable {
  #[serde(default)]
  data: Vec<SpeciesRow>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SpeciesRow {
  genus:              Option<String>,
  species:            Option<String>,
  pic_preferred_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FishBase {
  http:       HttpClient,
  base_url:   String,
  image_base: String,
}

impl FishBase {
  pub fn new(
    http: HttpClient,
    base_url: impl Into<String>,
    image_base: impl Into<String>,
  ) -> Self {
    Self {
      http,
      base_url: base_url.into(),
      image_base: image_base.into(),
    }
  }
}

impl ImageProvider for FishBase {
  fn kind(&self) -> ProviderKind { ProviderKind::FishBase }

  async fn find(&self, scientific_name: &str) -> Result<Option<String>> {
    let mut parts = scientific_name.split_whitespace();
    let (Some(genus), Some(species)) = (parts.next(), parts.next()) else {
      return Ok(None);
    };

    let url = format!("{}/species", self.base_url.trim_end_matches('/'));
    let table: SpeciesTable = self
      .http
      .get_json(
        &url,
        &[
          ("Genus", genus),
          ("Species", species),
          ("fields", "SpecCode,PicPreferredName,Genus,Species"),
          ("limit", "1"),
        ],
      )
      .await?;

    let Some(row) = table.data.into_iter().next() else {
      return Ok(None);
    };
    let echoed = format!(
      "{} {}",
      row.genus.as_deref().unwrap_or(genus),
      row.species.as_deref().unwrap_or(species)
    );
    if !same_taxon(&echoed, &format!("{genus} {species}")) {
      return Err(SourceError::low_confidence(scientific_name, echoed));
    }
    Ok(
      row
        .pic_preferred_name
        .filter(|p| !p.trim().is_empty())
        .map(|p| format!("{}/{}", self.image_base.trim_end_matches('/'), p.trim())),
    )
  }
}
