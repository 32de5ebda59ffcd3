//! `nerithys`: operator commands for the fiche repository.
//!
//! # Usage
//!
//! ```text
//! nerithys scrape --ids all_species_ids.json
//! nerithys crossref
//! nerithys images --providers gbif,fishbase
//! nerithys classify && nerithys filter
//! nerithys feed --out public/fiches.json
//! ```
//!
//! Settings come from `nerithys.toml` (or `--config`) and `NERITHYS_*`
//! environment variables; see [`settings`].

mod settings;

use std::path::PathBuf;

use anyhow::{Context as _, bail};
use clap::{Parser, Subcommand};
use nerithys_core::{Biotope, DIET_UNSET, Feed, FicheRecord, FicheStore, slugify};
use nerithys_reconcile::{
  CrossRefPass, Engine, FilterOptions, ImagePass, RunReport, ScrapePass,
};
use nerithys_sources::{
  HttpClient,
  baqua::{BaquaScraper, ScrapeTarget},
  images::{ImageChain, ProviderKind},
  seriouslyfish::SeriouslyFish,
};
use nerithys_store_fs::FsStore;
use settings::Settings;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "nerithys", version, about = "Aquarium fiche reconciliation pipeline")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, value_name = "FILE", default_value = "nerithys.toml")]
  config: PathBuf,

  /// Fiche directory; overrides `fiches_dir` from the settings.
  #[arg(long, value_name = "DIR")]
  fiches: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Create fiches from the primary source for ids without a file.
  Scrape {
    /// JSON array of `{ "id": .., "scientificName": .. }`.
    #[arg(long, value_name = "FILE")]
    ids:           PathBuf,
    /// Re-scrape existing fiches too, filling only their empty fields.
    #[arg(long)]
    fill_existing: bool,
  },
  /// Correct water parameters, size, volume and diet against the
  /// cross-reference source.
  Crossref,
  /// Find a hero image for every fiche without one.
  Images {
    /// Provider order, e.g. `inaturalist,commons,wikipedia`.
    #[arg(long, value_delimiter = ',')]
    providers: Option<Vec<ProviderKind>>,
  },
  /// Refine freshwater biotopes by region.
  Classify,
  /// Delete fiches outside the popularity allow-lists.
  Filter {
    #[arg(long)]
    dry_run: bool,
    /// Audit trail path; overrides `audit_path` from the settings.
    #[arg(long, value_name = "FILE")]
    audit:   Option<PathBuf>,
  },
  /// Write every fiche as one JSON array, sorted by name.
  Feed {
    /// Output file; stdout when omitted.
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
  },
  /// Create an empty fiche to be completed by hand.
  Add {
    scientific_name: String,
    /// Display name; defaults to the scientific name.
    #[arg(long)]
    name:            Option<String>,
    #[arg(long)]
    slug:            Option<String>,
    /// Overwrite an existing fiche with the same slug.
    #[arg(long)]
    force:           bool,
  },
  /// Print one fiche.
  Show { slug: String },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  let mut settings = Settings::load(&cli.config)?;
  if let Some(dir) = cli.fiches {
    settings.fiches_dir = dir;
  }

  let store = FsStore::open(&settings.fiches_dir)
    .await
    .with_context(|| format!("failed to open store at {:?}", settings.fiches_dir))?;

  match cli.command {
    Command::Scrape { ids, fill_existing } => {
      let raw = tokio::fs::read_to_string(&ids)
        .await
        .with_context(|| format!("reading id list {}", ids.display()))?;
      let targets: Vec<ScrapeTarget> =
        serde_json::from_str(&raw).context("parsing id list")?;
      info!(n = targets.len(), "loaded scrape targets");

      let http = HttpClient::new(&settings.http(&settings.scrape))?;
      let scraper = BaquaScraper::new(http, settings.scrape.base_url.clone());
      let pass = ScrapePass::new(scraper, targets).fill_existing(fill_existing);
      let engine = Engine::new(store, settings.scrape.batch());
      finish(engine.run_pass(&pass).await?);
    }

    Command::Crossref => {
      let http = HttpClient::new(&settings.http(&settings.crossref))?;
      let source = SeriouslyFish::new(http, settings.crossref.base_url.clone());
      let pass = CrossRefPass::new(source, settings.tolerances);
      let engine = Engine::new(store, settings.crossref.batch());
      finish(engine.run_pass(&pass).await?);
    }

    Command::Images { providers } => {
      let kinds = providers.unwrap_or_else(|| settings.images.providers.clone());
      if kinds.is_empty() {
        bail!("no image provider configured");
      }
      let http = HttpClient::new(&settings.image_http())?;
      let chain = ImageChain::from_kinds(&kinds, &http, &settings.images.urls);
      info!(chain = ?chain.kinds(), "image providers");
      let engine = Engine::new(store, settings.images.batch());
      finish(engine.run_pass(&ImagePass::new(chain)).await?);
    }

    Command::Classify => {
      let engine = Engine::new(store, Default::default());
      finish(engine.classify_regions().await?);
    }

    Command::Filter { dry_run, audit } => {
      let options = FilterOptions {
        audit_path: Some(audit.unwrap_or(settings.audit_path)),
        dry_run,
      };
      let engine = Engine::new(store, Default::default());
      finish(engine.filter_popular(&options).await?);
    }

    Command::Feed { out } => {
      let records = store.list_all().await.context("listing fiches")?;
      let feed = Feed::new(records);
      let json = feed.render().context("rendering feed")?;
      match out {
        Some(path) => {
          tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("writing {}", path.display()))?;
          info!(n = feed.len(), path = %path.display(), "feed written");
        }
        None => println!("{json}"),
      }
    }

    Command::Add {
      scientific_name,
      name,
      slug,
      force,
    } => {
      let record = blank_fiche(&scientific_name, name, slug);
      if !force && store.get(&record.slug).await.is_ok() {
        bail!("fiche {} already exists (use --force to overwrite)", record.slug);
      }
      store
        .put(&record)
        .await
        .with_context(|| format!("creating fiche {}", record.slug))?;
      info!(slug = %record.slug, path = %store.dir().display(), "fiche created");
    }

    Command::Show { slug } => {
      let record = store.get(&slug).await.map_err(|e| {
        if e.is_not_found() {
          anyhow::anyhow!("fiche introuvable: {slug}")
        } else {
          anyhow::Error::new(e)
        }
      })?;
      println!("{}", serde_json::to_string_pretty(&record)?);
    }
  }

  Ok(())
}

fn finish(report: RunReport) { report.log_summary(); }

/// Hand-editing template: identity filled in, everything else empty.
fn blank_fiche(
  scientific_name: &str,
  name: Option<String>,
  slug: Option<String>,
) -> FicheRecord {
  let scientific_name = scientific_name.trim();
  FicheRecord {
    name: name.unwrap_or_else(|| scientific_name.to_owned()),
    slug: slug.unwrap_or_else(|| slugify(scientific_name)),
    scientific_name: scientific_name.to_owned(),
    biotope: Biotope::Freshwater,
    behavior: Some(String::new()),
    compatibility: Some(String::new()),
    diet: Some(DIET_UNSET.to_owned()),
    breeding: Some(String::new()),
    notes: Some(String::new()),
    ..FicheRecord::default()
  }
}
