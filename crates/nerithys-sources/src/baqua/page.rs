//! Field extraction from one b-aqua detail page.

use std::sync::LazyLock;

use nerithys_core::{Biotope, DIET_UNSET, Difficulty, FicheRecord, slugify};
use nerithys_extract::{
  Range, classify_water_type, clean_html, extract_image_src, extract_label,
  extract_max_size, extract_numbers, extract_param_range,
};
use regex::Regex;

use super::{ScrapeTarget, curated};

const PREFIX: &str = "ContentPlaceHolder1_";
const NOTES_MAX_CHARS: usize = 400;
const COMMON_NAME_MAX_CHARS: usize = 40;
const MAX_TAGS: usize = 5;
const DEFAULT_BEHAVIOR: &str = "Paisible.";
const DEFAULT_COMPATIBILITY: &str = "Compatible communautaire.";

static MILIEU: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?is)Milieu.*?<span[^>]*>([^<]+)").expect("static regex")
});

fn label(html: &str, id: &str) -> Option<String> {
  extract_label(html, &format!("{PREFIX}{id}"))
}

fn range(html: &str, id: &str) -> (Option<f64>, Option<f64>) {
  Range::bounds(extract_param_range(html, &format!("{PREFIX}{id}")))
}

/// Build a full record from a detail page. Identity always comes from the
/// target, not from the page, so the slug is predictable before fetching.
pub fn parse_page(html: &str, target: &ScrapeTarget, site: &str) -> FicheRecord {
  let sci = target.scientific_name.trim();
  let page_sci = label(html, "Label_NAME");

  let common = label(html, "Label_FIRST_NAME_COMMON").map(|c| {
    if c.chars().count() > COMMON_NAME_MAX_CHARS || c.contains(',') {
      c.split(',').next().unwrap_or_default().trim().to_owned()
    } else {
      c
    }
  });
  let name = curated::common_name(sci)
    .map(str::to_owned)
    .or(common)
    .filter(|n| !n.is_empty())
    .or(page_sci)
    .unwrap_or_else(|| sci.to_owned());

  let (temp_min, temp_max) = range(html, "div_TEMP_MAINT");
  let (ph_min, ph_max) = range(html, "div_PH_MAINT");
  let (gh_min, gh_max) = range(html, "div_GH_MAINT");
  let min_volume_l = label(html, "Label_MAINT_MINSIZE")
    .and_then(|v| extract_numbers(&v).first().copied());

  let zone = label(html, "Label_LIFE_ZONE");
  let population = label(html, "Label_MAINT_MINNB");
  let ratio = label(html, "Label_MAINT_RATIO");
  let repro_type = label(html, "Label_REPRO_TYPE_LAB");
  let repro_diff = label(html, "Label_REPRO_POSS_LAB");
  let maint_desc = label(html, "Label_MAINT_DESC");

  let behavior = [
    population.as_ref().map(|p| format!("Population: {p}")),
    zone.as_ref().map(|z| format!("Zone: {z}")),
    ratio.as_ref().map(|r| format!("Ratio M/F: {r}")),
  ]
  .into_iter()
  .flatten()
  .collect::<Vec<_>>()
  .join(". ");

  let breeding = [
    repro_type,
    repro_diff.as_ref().map(|d| format!("difficulté: {d}")),
  ]
  .into_iter()
  .flatten()
  .collect::<Vec<_>>()
  .join(", ");

  let mut record = FicheRecord {
    name,
    scientific_name: sci.to_owned(),
    slug: slugify(sci),
    biotope: detect_biotope(html),
    difficulty: guess_difficulty(sci, maint_desc.as_deref(), repro_diff.as_deref()),
    temp_min,
    temp_max,
    ph_min,
    ph_max,
    gh_min,
    gh_max,
    kh_min: None,
    kh_max: None,
    min_volume_l,
    min_length_cm: extract_max_size(html),
    behavior: Some(if behavior.is_empty() { DEFAULT_BEHAVIOR.to_owned() } else { behavior }),
    compatibility: Some(zone.map_or_else(
      || DEFAULT_COMPATIBILITY.to_owned(),
      |z| format!("Zone {}.", z.to_lowercase()),
    )),
    diet: Some(label(html, "Label_ALIM_TYPE").unwrap_or_else(|| DIET_UNSET.to_owned())),
    breeding: (!breeding.is_empty()).then_some(breeding),
    notes: maint_desc.map(|d| truncate(&d, NOTES_MAX_CHARS)),
    sources: Some(vec![target.page_url(site)]),
    images: extract_image_src(html, &format!("{PREFIX}Image_MAIN"), site)
      .into_iter()
      .collect(),
    ..FicheRecord::default()
  };
  record.tags = guess_tags(&record);
  record
}

/// Water type from the dedicated label, else from the "Milieu" section.
pub fn detect_biotope(html: &str) -> Biotope {
  if let Some(water) = label(html, "Label_WATER_TYPE") {
    return classify_water_type(&water);
  }
  MILIEU
    .captures(html)
    .and_then(|c| clean_html(&c[1]))
    .map_or(Biotope::Freshwater, |m| classify_water_type(&m))
}

/// Curated overrides first, then an ordered keyword ladder over the
/// maintenance and reproduction text. Earlier rungs win.
pub fn guess_difficulty(
  scientific_name: &str,
  maintenance: Option<&str>,
  reproduction: Option<&str>,
) -> Difficulty {
  if let Some(d) = curated::difficulty_override(scientific_name) {
    return d;
  }
  let text = format!(
    "{} {}",
    maintenance.unwrap_or_default(),
    reproduction.unwrap_or_default()
  )
  .to_lowercase();

  const LADDER: &[(&[&str], Difficulty)] = &[
    (&["très difficile", "expert", "impossible"], Difficulty::Expert),
    (&["difficile", "délicat"], Difficulty::Hard),
    (&["moyen", "possible", "assez"], Difficulty::Medium),
  ];
  LADDER
    .iter()
    .find(|(terms, _)| terms.iter().any(|t| text.contains(t)))
    .map_or(Difficulty::Easy, |(_, d)| *d)
}

/// Short labels derived from already-extracted fields.
pub fn guess_tags(record: &FicheRecord) -> Vec<String> {
  let mut tags = Vec::new();
  match record.biotope {
    Biotope::Marine => tags.push("marin"),
    Biotope::Brackish => tags.push("saumâtre"),
    ref b if b.is_freshwater() => tags.push("eau-douce"),
    _ => {}
  }

  let diet = record.diet.as_deref().unwrap_or_default().to_lowercase();
  if diet.contains("carni") {
    tags.push("carnivore");
  } else if diet.contains("herbi") {
    tags.push("herbivore");
  } else if diet.contains("omni") {
    tags.push("omnivore");
  }

  if let Some(size) = record.min_length_cm.filter(|s| *s > 0.0) {
    if size <= 4.0 {
      tags.push("nano");
    }
    if size >= 20.0 {
      tags.push("grand");
    }
  }
  if record.difficulty <= Difficulty::Easy {
    tags.push("facile");
  }
  if record.difficulty >= Difficulty::Hard {
    tags.push("exigeant");
  }

  let breeding = record.breeding.as_deref().unwrap_or_default().to_lowercase();
  if breeding.contains("vivipare") {
    tags.push("vivipare");
  }

  tags.into_iter().take(MAX_TAGS).map(str::to_owned).collect()
}

/// At most `max` characters; longer text ends in `...` within the limit.
fn truncate(s: &str, max: usize) -> String {
  if s.chars().count() <= max {
    return s.to_owned();
  }
  let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
  out.push_str("...");
  out
}

/// A page worth keeping has at least one of: temperature, pH, volume, size
/// or an image.
pub fn has_useful_data(record: &FicheRecord) -> bool {
  record.temp_min.is_some()
    || record.ph_min.is_some()
    || record.min_volume_l.is_some()
    || record.min_length_cm.is_some()
    || record.has_primary_image()
}

#[cfg(test)]
mod tests {
  use super::*;

  const SITE: &str = "https://www.b-aqua.com";

  fn page() -> String {
    let desc = "Bac planté, bien filtré. ".repeat(30);
    format!(
      r#"<html><body>
      <span id="ContentPlaceHolder1_Label_NAME">Corydoras aeneus</span>
      <span id="ContentPlaceHolder1_Label_FIRST_NAME_COMMON">Corydoras bronzé, Coryd vert, Corydoras doré, Poisson-chat cuirassé</span>
      <span id="ContentPlaceHolder1_Label_WATER_TYPE">Eau douce</span>
      <span id="ContentPlaceHolder1_Label_ALIM_TYPE">Omnivore</span>
      <span id="ContentPlaceHolder1_Label_REPRO_TYPE_LAB">Ovipare</span>
      <span id="ContentPlaceHolder1_Label_REPRO_POSS_LAB">Facile</span>
      <span id="ContentPlaceHolder1_Label_LIFE_ZONE">Fond</span>
      <span id="ContentPlaceHolder1_Label_MAINT_MINNB">6 individus</span>
      <span id="ContentPlaceHolder1_Label_MAINT_RATIO">1 mâle / 2 femelles</span>
      <span id="ContentPlaceHolder1_Label_MAINT_MINSIZE">60 litres (60 cm)</span>
      <span id="ContentPlaceHolder1_Label_MAINT_DESC">{desc}</span>
      <div id="ContentPlaceHolder1_div_TEMP_MAINT"><div class="col-sm-9">20 22 26 28</div></div>
      <div id="ContentPlaceHolder1_div_PH_MAINT"><div class="col-sm-9">6,0 - 8,0</div></div>
      <p>Mâle :&nbsp;6 cm SL</p><p>Femelle :&nbsp;7,5 cm SL</p>
      <img id="ContentPlaceHolder1_Image_MAIN" src="../images/fiches/1209.jpg" />
      </body></html>"#
    )
  }

  fn target(sci: &str) -> ScrapeTarget {
    ScrapeTarget { id: 1209, scientific_name: sci.into() }
  }

  #[test]
  fn full_page() {
    let r = parse_page(&page(), &target("Corydoras aeneus"), SITE);
    assert_eq!(r.slug, "corydoras-aeneus");
    assert_eq!(r.name, "Corydoras bronze");
    assert_eq!(r.biotope, Biotope::Freshwater);
    assert_eq!(r.difficulty, Difficulty::Easy);
    assert_eq!((r.temp_min, r.temp_max), (Some(20.0), Some(28.0)));
    assert_eq!((r.ph_min, r.ph_max), (Some(6.0), Some(8.0)));
    assert_eq!((r.gh_min, r.gh_max), (None, None));
    assert_eq!(r.min_volume_l, Some(60.0));
    assert_eq!(r.min_length_cm, Some(7.5));
    assert_eq!(
      r.behavior.as_deref(),
      Some("Population: 6 individus. Zone: Fond. Ratio M/F: 1 mâle / 2 femelles")
    );
    assert_eq!(r.compatibility.as_deref(), Some("Zone fond."));
    assert_eq!(r.breeding.as_deref(), Some("Ovipare, difficulté: Facile"));
    assert_eq!(r.diet.as_deref(), Some("Omnivore"));
    assert_eq!(r.images, ["https://www.b-aqua.com/images/fiches/1209.jpg"]);
    assert_eq!(
      r.sources,
      Some(vec!["https://www.b-aqua.com/pages/fiche.aspx?id=1209".to_owned()])
    );
    let notes = r.notes.as_deref().unwrap();
    assert_eq!(notes.chars().count(), 400);
    assert!(notes.ends_with("..."));
    assert_eq!(r.tags, ["eau-douce", "omnivore", "facile"]);
    assert!(has_useful_data(&r));
  }

  #[test]
  fn long_common_name_is_cut_at_first_comma() {
    let r = parse_page(&page(), &target("Corydoras rabauti"), SITE);
    assert_eq!(r.name, "Corydoras bronzé");
    assert_eq!(r.slug, "corydoras-rabauti");
  }

  #[test]
  fn short_common_name_with_comma_keeps_first() {
    let html = page().replace(
      "Corydoras bronzé, Coryd vert, Corydoras doré, Poisson-chat cuirassé",
      "Coryd vert, Cory",
    );
    assert_eq!(parse_page(&html, &target("Corydoras rabauti"), SITE).name, "Coryd vert");

    let html = page().replace(
      "Corydoras bronzé, Coryd vert, Corydoras doré, Poisson-chat cuirassé",
      "Poisson-chat cuirassé à taches bronze et vertes",
    );
    let r = parse_page(&html, &target("Corydoras rabauti"), SITE);
    assert_eq!(r.name, "Poisson-chat cuirassé à taches bronze et vertes");
  }

  #[test]
  fn empty_page_defaults() {
    let r = parse_page("<html></html>", &target("Danio tinwini"), SITE);
    assert_eq!(r.name, "Danio tinwini");
    assert_eq!(r.diet.as_deref(), Some(DIET_UNSET));
    assert_eq!(r.behavior.as_deref(), Some("Paisible."));
    assert_eq!(r.compatibility.as_deref(), Some("Compatible communautaire."));
    assert_eq!(r.breeding, None);
    assert!(r.images.is_empty());
    assert!(!has_useful_data(&r));
  }

  #[test]
  fn milieu_fallback() {
    let html = r#"<h4>Milieu</h4><p><span class="v">Eau de mer tropicale</span></p>"#;
    assert_eq!(detect_biotope(html), Biotope::Marine);
    assert_eq!(detect_biotope("<p>rien</p>"), Biotope::Freshwater);
  }

  #[test]
  fn difficulty_ladder_order() {
    let sci = "Betta imbellis";
    assert_eq!(
      guess_difficulty(sci, Some("Maintenance très difficile"), Some("possible")),
      Difficulty::Expert
    );
    assert_eq!(guess_difficulty(sci, None, Some("Délicate")), Difficulty::Hard);
    assert_eq!(guess_difficulty(sci, Some("assez simple"), None), Difficulty::Medium);
    assert_eq!(guess_difficulty(sci, None, None), Difficulty::Easy);
  }

  #[test]
  fn curated_difficulty_beats_keywords() {
    assert_eq!(
      guess_difficulty("Danio rerio", Some("très difficile"), None),
      Difficulty::Easy
    );
    assert_eq!(
      guess_difficulty("Carassius auratus", None, None),
      Difficulty::Hard
    );
  }

  #[test]
  fn tags_are_capped() {
    let mut r = FicheRecord::new("Xenotoca eiseni");
    r.biotope = Biotope::Brackish;
    r.diet = Some("Carnivore".into());
    r.min_length_cm = Some(3.0);
    r.difficulty = Difficulty::Expert;
    r.breeding = Some("Ovovivipare".into());
    let tags = guess_tags(&r);
    assert_eq!(tags, ["saumâtre", "carnivore", "nano", "exigeant", "vivipare"]);

    r.difficulty = Difficulty::Easy;
    r.min_length_cm = Some(25.0);
    assert_eq!(guess_tags(&r).len(), MAX_TAGS);
  }
}
