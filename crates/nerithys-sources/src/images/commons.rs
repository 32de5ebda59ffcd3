//! Wikimedia Commons file search.

use std::collections::HashMap;

use serde::Deserialize;

use super::{ImageProvider, ProviderKind, ranked};
use crate::{HttpClient, Result, SourceError, matching::mentions};

pub const DEFAULT_BASE_URL: &str = "https://commons.wikimedia.org";

const ACCEPTED_MIME: &[&str] = &["image/jpeg", "image/png", "image/webp"];

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
  #[serde(default)]
  imageinfo: Vec<ImageInfo>,
}

#[derive(Deserialize)]
struct ImageInfo {
  url:      Option<String>,
  thumburl: Option<String>,
  mime:     Option<String>,
}

#[derive(Debug, Clone)]
pub struct Commons {
  http:     HttpClient,
  base_url: String,
}

impl Commons {
  pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
    Self {
      http,
      base_url: base_url.into(),
    }
  }
}

impl ImageProvider for Commons {
  fn kind(&self) -> ProviderKind { ProviderKind::Commons }

  /// First raster file, in search order, whose title names the species.
  /// An 800px thumbnail is preferred over the original.
  async fn find(&self, scientific_name: &str) -> Result<Option<String>> {
    let url = format!("{}/w/api.php", self.base_url.trim_end_matches('/'));
    let resp: ApiResponse = self
      .http
      .get_json(
        &url,
        &[
          ("action", "query"),
          ("generator", "search"),
          ("gsrnamespace", "6"),
          ("gsrsearch", scientific_name),
          ("gsrlimit", "3"),
          ("prop", "imageinfo"),
          ("iiprop", "url|mime"),
          ("iiurlwidth", "800"),
          ("format", "json"),
        ],
      )
      .await?;

    let Some(query) = resp.query else {
      return Ok(None);
    };
    let mut off_topic = None;
    for page in ranked(query.pages, |p| p.index) {
      let Some(info) = page.imageinfo.into_iter().next() else {
        continue;
      };
      let mime = info.mime.unwrap_or_default();
      if !ACCEPTED_MIME.iter().any(|m| mime.starts_with(m)) {
        continue;
      }
      if !mentions(&page.title, scientific_name) {
        off_topic.get_or_insert(page.title);
        continue;
      }
      if let Some(src) = info.thumburl.or(info.url).filter(|u| !u.is_empty()) {
        return Ok(Some(src));
      }
    }
    match off_topic {
      Some(title) => Err(SourceError::low_confidence(scientific_name, title)),
      None => Ok(None),
    }
  }
}
