//! English Wikipedia article thumbnails.

use std::collections::HashMap;

use serde::Deserialize;

use super::{ImageProvider, ProviderKind, ranked};
use crate::{HttpClient, Result, SourceError, matching::article_matches};

pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org";

#[derive(Deserialize)]
struct ApiResponse {
  query: Option<Query>,
}

#[derive(Deserialize)]
struct Query {
  #[serde(default)]
  pages: HashMap<String, Page>,
}

#[derive(Deserialize)]
struct Page {
  #[serde(default)]
  title:     String,
  index:     Option<u32>,
  thumbnail: Option<Thumbnail>,
}

#[derive(Deserialize)]
struct Thumbnail {
  source: Option<String>,
}

#[derive(Debug, Clone)]
pub struct WikipediaSearch {
  http:     HttpClient,
  base_url: String,
}

impl WikipediaSearch {
  pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
    Self {
      http,
      base_url: base_url.into(),
    }
  }
}

impl ImageProvider for WikipediaSearch {
  fn kind(&self) -> ProviderKind { ProviderKind::Wikipedia }

  async fn find(&self, scientific_name: &str) -> Result<Option<String>> {
    let url = format!("{}/w/api.php", self.base_url.trim_end_matches('/'));
    let resp: ApiResponse = self
      .http
      .get_json(
        &url,
        &[
          ("action", "query"),
          ("generator", "search"),
          ("gsrsearch", scientific_name),
          ("gsrlimit", "2"),
          ("prop", "pageimages"),
          ("piprop", "thumbnail"),
          ("pithumbsize", "800"),
          ("format", "json"),
          ("redirects", "1"),
        ],
      )
      .await?;

    let Some(query) = resp.query else {
      return Ok(None);
    };
    let mut off_topic = None;
    for page in ranked(query.pages, |p| p.index) {
      let Some(src) = page.thumbnail.and_then(|t| t.source) else {
        continue;
      };
      if article_matches(&page.title, scientific_name) {
        return Ok(Some(src));
      }
      off_topic.get_or_insert(page.title);
    }
    match off_topic {
      Some(title) => Err(SourceError::low_confidence(scientific_name, title)),
      None => Ok(None),
    }
  }
}
