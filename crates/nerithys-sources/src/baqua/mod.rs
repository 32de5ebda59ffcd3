//! Primary scraper for b-aqua.com species pages.
//!
//! One numeric page id in, one complete [`FicheRecord`] out. The pages are
//! ASP.NET web forms; every field sits in an element whose id starts with
//! `ContentPlaceHolder1_`.

mod curated;
mod page;

use nerithys_core::FicheRecord;
use serde::Deserialize;

use crate::{HttpClient, Lookup, Result};

pub use page::{detect_biotope, guess_difficulty, guess_tags, has_useful_data, parse_page};

pub const DEFAULT_BASE_URL: &str = "https://www.b-aqua.com";

/// One entry of the scrape input list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScrapeTarget {
  pub id:              u32,
  #[serde(rename = "scientificName", alias = "sci")]
  pub scientific_name: String,
}

impl ScrapeTarget {
  pub fn page_url(&self, site: &str) -> String {
    format!("{}/pages/fiche.aspx?id={}", site.trim_end_matches('/'), self.id)
  }
}

#[derive(Debug, Clone)]
pub struct BaquaScraper {
  http:     HttpClient,
  base_url: String,
}

impl BaquaScraper {
  pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
    Self {
      http,
      base_url: base_url.into(),
    }
  }

  /// Scrape one page. Never fails; see [`Lookup`].
  pub async fn fetch(&self, target: &ScrapeTarget) -> Lookup<FicheRecord> {
    let result = self.try_fetch(target).await;
    Lookup::settle("b-aqua", &target.scientific_name, result)
  }

  async fn try_fetch(&self, target: &ScrapeTarget) -> Result<Option<FicheRecord>> {
    let html = self.http.get_text(&target.page_url(&self.base_url)).await?;
    Ok(Some(parse_page(&html, target, &self.base_url)))
  }
}
