//! Operator settings.
//!
//! Layered, lowest first: built-in defaults, the optional TOML file, then
//! `NERITHYS_*` environment variables (`__` separates nested keys, e.g.
//! `NERITHYS_CROSSREF__CONCURRENCY=3`).

use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use anyhow::Context as _;
use nerithys_reconcile::{BatchConfig, Tolerances};
use nerithys_sources::{
  HttpConfig, baqua,
  http::DEFAULT_USER_AGENT,
  images::{ProviderKind, ProviderUrls},
  seriouslyfish,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
  pub fiches_dir: PathBuf,
  pub user_agent: String,
  /// Where the popularity filter lists what it removed.
  pub audit_path: PathBuf,
  pub tolerances: Tolerances,
  pub scrape:     PassSettings,
  pub crossref:   PassSettings,
  pub images:     ImageSettings,
}

/// Batching and HTTP settings for one network pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassSettings {
  pub concurrency:  usize,
  pub delay_ms:     u64,
  pub timeout_secs: u64,
  pub base_url:     String,
  /// Overrides the global user agent for this source only.
  #[serde(default)]
  pub user_agent:   Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSettings {
  pub concurrency:  usize,
  pub delay_ms:     u64,
  pub timeout_secs: u64,
  /// Tried in order; the first photo wins. A configured list replaces the
  /// default chain wholesale.
  #[serde(default = "default_chain", skip_serializing)]
  pub providers:    Vec<ProviderKind>,
  /// Per-provider base URL; absent providers use their public endpoint.
  #[serde(default)]
  pub urls:         ProviderUrls,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      fiches_dir: PathBuf::from("content/fiches"),
      user_agent: DEFAULT_USER_AGENT.to_owned(),
      audit_path: PathBuf::from("removed-species.txt"),
      tolerances: Tolerances::default(),
      scrape:     PassSettings {
        concurrency:  15,
        delay_ms:     150,
        timeout_secs: 12,
        base_url:     baqua::DEFAULT_BASE_URL.to_owned(),
        user_agent:   None,
      },
      crossref:   PassSettings {
        concurrency:  5,
        delay_ms:     400,
        timeout_secs: 10,
        base_url:     seriouslyfish::DEFAULT_BASE_URL.to_owned(),
        user_agent:   Some(seriouslyfish::USER_AGENT.to_owned()),
      },
      images:     ImageSettings {
        concurrency:  8,
        delay_ms:     250,
        timeout_secs: 10,
        providers:    default_chain(),
        urls:         ProviderUrls::new(),
      },
    }
  }
}

impl Settings {
  /// Defaults, then `path` if it exists, then the environment.
  pub fn load(path: &Path) -> anyhow::Result<Self> { Self::load_with(path, environment()) }

  fn load_with(path: &Path, env: config::Environment) -> anyhow::Result<Self> {
    let defaults = config::Config::try_from(&Self::default())
      .context("failed to encode default settings")?;
    let settings = config::Config::builder()
      .add_source(defaults)
      .add_source(config::File::from(path).required(false))
      .add_source(env)
      .build()
      .context("failed to read config file")?;

    let mut settings: Self = settings
      .try_deserialize()
      .context("failed to deserialise settings")?;
    settings.fiches_dir = expand_tilde(&settings.fiches_dir);
    settings.audit_path = expand_tilde(&settings.audit_path);
    Ok(settings)
  }

  pub fn http(&self, pass: &PassSettings) -> HttpConfig {
    HttpConfig {
      user_agent: pass
        .user_agent
        .clone()
        .unwrap_or_else(|| self.user_agent.clone()),
      timeout:    Duration::from_secs(pass.timeout_secs),
    }
  }

  pub fn image_http(&self) -> HttpConfig {
    HttpConfig {
      user_agent: self.user_agent.clone(),
      timeout:    Duration::from_secs(self.images.timeout_secs),
    }
  }
}

impl PassSettings {
  pub fn batch(&self) -> BatchConfig {
    BatchConfig {
      concurrency: self.concurrency,
      delay:       Duration::from_millis(self.delay_ms),
    }
  }
}

impl ImageSettings {
  pub fn batch(&self) -> BatchConfig {
    BatchConfig {
      concurrency: self.concurrency,
      delay:       Duration::from_millis(self.delay_ms),
    }
  }
}

/// Matches `NERITHYS_FICHES_DIR` or `NERITHYS_CROSSREF__CONCURRENCY`.
fn environment() -> config::Environment {
  config::Environment::with_prefix("NERITHYS")
    .prefix_separator("_")
    .separator("__")
    .try_parsing(true)
}

fn default_chain() -> Vec<ProviderKind> { ProviderKind::DEFAULT_CHAIN.to_vec() }

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
