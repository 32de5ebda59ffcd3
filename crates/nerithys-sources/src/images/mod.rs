//! Image providers and the fallback chain over them.
//!
//! Every provider answers one question: "a photo of exactly this species?"
//! A provider whose best hit is labelled with another taxon reports
//! [`Miss::LowConfidence`] instead of returning the photo.

mod commons;
mod fishbase;
mod gbif;
mod inaturalist;
mod wikipedia;

use std::{collections::HashMap, future::Future};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{HttpClient, Lookup, Miss, Result};

pub use commons::Commons;
pub use fishbase::FishBase;
pub use gbif::Gbif;
pub use inaturalist::INaturalist;
pub use wikipedia::WikipediaSearch;

/// A source of species photos.
pub trait ImageProvider: Send + Sync {
  fn kind(&self) -> ProviderKind;

  /// Best photo URL for `scientific_name`, `Ok(None)` when the provider has
  /// nothing.
  fn find<'a>(
    &'a self,
    scientific_name: &'a str,
  ) -> impl Future<Output = Result<Option<String>>> + Send + 'a;
}

/// Provider names as used in configuration and reports.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProviderKind {
  INaturalist,
  Commons,
  Wikipedia,
  Gbif,
  FishBase,
}

impl ProviderKind {
  /// The default chain, most reliable first.
  pub const DEFAULT_CHAIN: [Self; 3] = [Self::INaturalist, Self::Commons, Self::Wikipedia];
}

/// Base URL per provider; anything absent uses the public endpoint.
pub type ProviderUrls = HashMap<ProviderKind, String>;

/// Static dispatch over the concrete providers so a chain can hold a mix.
#[derive(Debug, Clone)]
pub enum AnyProvider {
  INaturalist(INaturalist),
  Commons(Commons),
  Wikipedia(WikipediaSearch),
  Gbif(Gbif),
  FishBase(FishBase),
}

impl AnyProvider {
  pub fn build(kind: ProviderKind, http: HttpClient, urls: &ProviderUrls) -> Self {
    let url = urls.get(&kind).cloned();
    match kind {
      ProviderKind::INaturalist => Self::INaturalist(INaturalist::new(
        http,
        url.unwrap_or_else(|| inaturalist::DEFAULT_BASE_URL.into()),
      )),
      ProviderKind::Commons => Self::Commons(Commons::new(
        http,
        url.unwrap_or_else(|| commons::DEFAULT_BASE_URL.into()),
      )),
      ProviderKind::Wikipedia => Self::Wikipedia(WikipediaSearch::new(
        http,
        url.unwrap_or_else(|| wikipedia::DEFAULT_BASE_URL.into()),
      )),
      ProviderKind::Gbif => Self::Gbif(Gbif::new(
        http,
        url.unwrap_or_else(|| gbif::DEFAULT_BASE_URL.into()),
      )),
      ProviderKind::FishBase => Self::FishBase(FishBase::new(
        http,
        url.unwrap_or_else(|| fishbase::DEFAULT_BASE_URL.into()),
        fishbase::DEFAULT_IMAGE_BASE,
      )),
    }
  }
}

impl ImageProvider for AnyProvider {
  fn kind(&self) -> ProviderKind {
    match self {
      Self::INaturalist(p) => p.kind(),
      Self::Commons(p) => p.kind(),
      Self::Wikipedia(p) => p.kind(),
      Self::Gbif(p) => p.kind(),
      Self::FishBase(p) => p.kind(),
    }
  }

  async fn find(&self, scientific_name: &str) -> Result<Option<String>> {
    match self {
      Self::INaturalist(p) => p.find(scientific_name).await,
      Self::Commons(p) => p.find(scientific_name).await,
      Self::Wikipedia(p) => p.find(scientific_name).await,
      Self::Gbif(p) => p.find(scientific_name).await,
      Self::FishBase(p) => p.find(scientific_name).await,
    }
  }
}

// ─── Chain ───────────────────────────────────────────────────────────────────

/// A photo and the provider that supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHit {
  pub url:      String,
  pub provider: ProviderKind,
}

/// Ordered fallback over several providers.
#[derive(Debug, Clone)]
pub struct ImageChain {
  providers: Vec<AnyProvider>,
}

impl ImageChain {
  pub fn new(providers: Vec<AnyProvider>) -> Self { Self { providers } }

  pub fn from_kinds(
    kinds: &[ProviderKind],
    http: &HttpClient,
    urls: &ProviderUrls,
  ) -> Self {
    Self::new(
      kinds
        .iter()
        .map(|k| AnyProvider::build(*k, http.clone(), urls))
        .collect(),
    )
  }

  pub fn kinds(&self) -> Vec<ProviderKind> {
    self.providers.iter().map(ImageProvider::kind).collect()
  }

  /// Ask each provider in turn; the first photo wins. When all miss, the
  /// reported reason is the last provider's.
  pub async fn fetch(&self, scientific_name: &str) -> Lookup<ImageHit> {
    let mut last = Miss::NoMatch;
    for provider in &self.providers {
      let kind = provider.kind();
      let result = provider.find(scientific_name).await;
      match Lookup::settle(&kind.to_string(), scientific_name, result) {
        Lookup::Found(url) => {
          return Lookup::Found(ImageHit { url, provider: kind });
        }
        Lookup::Missing(miss) => last = miss,
      }
    }
    Lookup::Missing(last)
  }
}

/// MediaWiki `query.pages` objects are keyed by page id; `index` carries the
/// search rank.
fn ranked<P>(pages: HashMap<String, P>, index: impl Fn(&P) -> Option<u32>) -> Vec<P> {
  let mut pages: Vec<(String, P)> = pages.into_iter().collect();
  pages.sort_by(|(ka, a), (kb, b)| {
    index(a)
      .unwrap_or(u32::MAX)
      .cmp(&index(b).unwrap_or(u32::MAX))
      .then_with(|| ka.cmp(kb))
  });
  pages.into_iter().map(|(_, p)| p).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn provider_names_parse() {
    assert_eq!("inaturalist".parse::<ProviderKind>().unwrap(), ProviderKind::INaturalist);
    assert_eq!("FishBase".parse::<ProviderKind>().unwrap(), ProviderKind::FishBase);
    assert_eq!(ProviderKind::Gbif.to_string(), "gbif");
    assert!("flickr".parse::<ProviderKind>().is_err());
  }

  #[test]
  fn mediawiki_pages_follow_search_rank() {
    let pages = HashMap::from([
      ("900".to_owned(), ("b", Some(2))),
      ("12".to_owned(), ("a", Some(1))),
      ("5".to_owned(), ("c", None)),
    ]);
    let order: Vec<&str> = ranked(pages, |p| p.1).into_iter().map(|p| p.0).collect();
    assert_eq!(order, ["a", "b", "c"]);
  }
}
