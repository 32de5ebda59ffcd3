//! Shared HTTP client.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::{Result, SourceError};

/// Default identification sent to public APIs.
pub const DEFAULT_USER_AGENT: &str =
  "Nerithys-Bot/1.0 (aquarium encyclopedia; educational)";

#[derive(Debug, Clone)]
pub struct HttpConfig {
  pub user_agent: String,
  /// Whole-request deadline; expiry is reported as [`Miss::Timeout`](crate::Miss::Timeout).
  pub timeout:    Duration,
}

impl Default for HttpConfig {
  fn default() -> Self {
    Self {
      user_agent: DEFAULT_USER_AGENT.to_owned(),
      timeout:    Duration::from_secs(10),
    }
  }
}

/// Thin wrapper over [`reqwest::Client`] that turns non-2xx answers into
/// errors.
///
/// Cheap to clone; the inner client is `Arc`-based.
#[derive(Debug, Clone)]
pub struct HttpClient {
  client: Client,
}

impl HttpClient {
  pub fn new(config: &HttpConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(config.timeout)
      .user_agent(config.user_agent.clone())
      .build()
      .map_err(SourceError::Request)?;
    Ok(Self { client })
  }

  async fn send(&self, url: &str, query: &[(&str, &str)]) -> Result<Response> {
    let resp = self.client.get(url).query(query).send().await?;
    let status = resp.status();
    if !status.is_success() {
      return Err(SourceError::Status {
        status: status.as_u16(),
        url:    url.to_owned(),
      });
    }
    Ok(resp)
  }

  /// `GET` a page body.
  pub async fn get_text(&self, url: &str) -> Result<String> {
    Ok(self.send(url, &[]).await?.text().await?)
  }

  /// `GET` and decode a JSON document.
  pub async fn get_json<T: DeserializeOwned>(
    &self,
    url: &str,
    query: &[(&str, &str)],
  ) -> Result<T> {
    Ok(self.send(url, query).await?.json().await?)
  }
}
