//! Adapter tests against local HTTP doubles.

use std::time::Duration;

use serde_json::json;
use wiremock::{
  Mock, MockServer, ResponseTemplate,
  matchers::{method, path, query_param},
};

use crate::{
  HttpClient, HttpConfig, Lookup, Miss,
  baqua::{BaquaScraper, ScrapeTarget},
  images::{
    Commons, FishBase, Gbif, INaturalist, ImageChain, ImageProvider, ProviderKind,
    ProviderUrls,
  },
  seriouslyfish::{DietCategory, SeriouslyFish},
};

fn http() -> HttpClient {
  HttpClient::new(&HttpConfig {
    timeout: Duration::from_millis(500),
    ..HttpConfig::default()
  })
  .expect("client")
}

fn danio() -> ScrapeTarget {
  ScrapeTarget {
    id:              1475,
    scientific_name: "Danio rerio".into(),
  }
}

const BAQUA_PAGE: &str = r#"
  <span id="ContentPlaceHolder1_Label_WATER_TYPE">Eau douce</span>
  <div id="ContentPlaceHolder1_div_TEMP_MAINT"><div class="col-sm-9">18 - 26</div></div>
  <p>Adulte :&nbsp;4 à 5 cm SL</p>
  <img id="ContentPlaceHolder1_Image_MAIN" src="/img/danio.jpg" />
"#;

// ─── b-aqua ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn baqua_found() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/pages/fiche.aspx"))
    .and(query_param("id", "1475"))
    .respond_with(ResponseTemplate::new(200).set_body_string(BAQUA_PAGE))
    .mount(&server)
    .await;

  let scraper = BaquaScraper::new(http(), server.uri());
  let record = scraper.fetch(&danio()).await.found().expect("record");
  assert_eq!(record.slug, "danio-rerio");
  assert_eq!(record.name, "Danio zébré");
  assert_eq!((record.temp_min, record.temp_max), (Some(18.0), Some(26.0)));
  assert_eq!(record.min_length_cm, Some(5.0));
  assert_eq!(record.images, [format!("{}/img/danio.jpg", server.uri())]);
}

#[tokio::test]
async fn baqua_http_error_is_status_miss() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(404))
    .mount(&server)
    .await;

  let scraper = BaquaScraper::new(http(), server.uri());
  assert_eq!(scraper.fetch(&danio()).await, Lookup::Missing(Miss::Status));
}

#[tokio::test]
async fn slow_answer_is_timeout_miss() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .respond_with(
      ResponseTemplate::new(200)
        .set_body_string(BAQUA_PAGE)
        .set_delay(Duration::from_secs(3)),
    )
    .mount(&server)
    .await;

  let scraper = BaquaScraper::new(http(), server.uri());
  assert_eq!(scraper.fetch(&danio()).await, Lookup::Missing(Miss::Timeout));
}

#[tokio::test]
async fn unreachable_host_is_failed_miss() {
  let scraper = BaquaScraper::new(http(), "http://127.0.0.1:9");
  assert_eq!(scraper.fetch(&danio()).await, Lookup::Missing(Miss::Failed));
}

#[test]
fn scrape_targets_accept_both_key_spellings() {
  let targets: Vec<ScrapeTarget> = serde_json::from_str(
    r#"[{"id": 1475, "sci": "Danio rerio"}, {"id": 717, "scientificName": "Betta splendens"}]"#,
  )
  .unwrap();
  assert_eq!(targets[0], danio());
  assert_eq!(targets[1].scientific_name, "Betta splendens");
}

// ─── seriouslyfish ───────────────────────────────────────────────────────────

#[tokio::test]
async fn seriouslyfish_found() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/species/danio-rerio/"))
    .respond_with(ResponseTemplate::new(200).set_body_string(
      "<h3>Water Conditions</h3><p>Temperature: 18 - 24 °C; pH: 6.0 - 8.0</p>\
       <h3>Diet</h3><p>Omnivorous.</p>",
    ))
    .mount(&server)
    .await;

  let sf = SeriouslyFish::new(http(), server.uri());
  let x = sf.fetch("Danio rerio").await.found().expect("cross-ref");
  assert_eq!(x.temp.map(|r| (r.min, r.max)), Some((18.0, 24.0)));
  assert_eq!(x.ph.map(|r| (r.min, r.max)), Some((6.0, 8.0)));
  assert_eq!(x.diet, Some(DietCategory::Omnivore));
  assert_eq!(x.size_cm, None);
}

#[tokio::test]
async fn seriouslyfish_without_water_section_is_no_match() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200).set_body_string("<p>Search results</p>"))
    .mount(&server)
    .await;

  let sf = SeriouslyFish::new(http(), server.uri());
  assert_eq!(sf.fetch("Danio rerio").await, Lookup::Missing(Miss::NoMatch));
}

// ─── Image providers ─────────────────────────────────────────────────────────

async fn inat_server(name: &str) -> MockServer {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v1/taxa"))
    .and(query_param("q", "Danio rerio"))
    .and(query_param("rank", "species"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "results": [{
        "name": name,
        "default_photo": { "medium_url": "https://inat.example/danio.jpg" }
      }]
    })))
    .mount(&server)
    .await;
  server
}

#[tokio::test]
async fn inaturalist_exact_name_is_accepted() {
  let server = inat_server("Danio rerio").await;
  let p = INaturalist::new(http(), server.uri());
  assert_eq!(
    p.find("Danio rerio").await.unwrap().as_deref(),
    Some("https://inat.example/danio.jpg")
  );
}

#[tokio::test]
async fn inaturalist_other_taxon_is_low_confidence() {
  let server = inat_server("Danio kyathit").await;
  let chain = ImageChain::from_kinds(
    &[ProviderKind::INaturalist],
    &http(),
    &ProviderUrls::from([(ProviderKind::INaturalist, server.uri())]),
  );
  assert_eq!(
    chain.fetch("Danio rerio").await,
    Lookup::Missing(Miss::LowConfidence)
  );
}

#[tokio::test]
async fn malformed_json_is_failed_miss() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
    .mount(&server)
    .await;

  let chain = ImageChain::from_kinds(
    &[ProviderKind::INaturalist],
    &http(),
    &ProviderUrls::from([(ProviderKind::INaturalist, server.uri())]),
  );
  assert_eq!(chain.fetch("Danio rerio").await, Lookup::Missing(Miss::Failed));
}

#[tokio::test]
async fn commons_skips_non_raster_and_checks_title() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/w/api.php"))
    .and(query_param("gsrsearch", "Danio rerio"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "query": { "pages": {
        "11": { "title": "File:Danio rerio range.svg", "index": 1,
                "imageinfo": [{ "url": "https://c.example/range.svg", "mime": "image/svg+xml" }] },
        "12": { "title": "File:Danio rerio 01.jpg", "index": 2,
                "imageinfo": [{ "url": "https://c.example/full.jpg",
                                "thumburl": "https://c.example/800px.jpg",
                                "mime": "image/jpeg" }] }
      }}
    })))
    .mount(&server)
    .await;

  let p = Commons::new(http(), server.uri());
  assert_eq!(
    p.find("Danio rerio").await.unwrap().as_deref(),
    Some("https://c.example/800px.jpg")
  );
}

#[tokio::test]
async fn commons_off_topic_file_is_rejected() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "query": { "pages": {
        "7": { "title": "File:Aquarium shop.jpg", "index": 1,
               "imageinfo": [{ "url": "https://c.example/shop.jpg", "mime": "image/jpeg" }] }
      }}
    })))
    .mount(&server)
    .await;

  let p = Commons::new(http(), server.uri());
  let err = p.find("Danio rerio").await.unwrap_err();
  assert_eq!(err.miss(), Miss::LowConfidence);
}

#[tokio::test]
async fn gbif_two_step_lookup() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v1/species/match"))
    .and(query_param("name", "Danio rerio"))
    .and(query_param("strict", "true"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "usageKey": 2363034, "matchType": "EXACT", "canonicalName": "Danio rerio"
    })))
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/v1/species/2363034/media"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "results": [
        { "type": "Sound", "identifier": "https://g.example/a.mp3" },
        { "type": "StillImage", "identifier": "https://g.example/danio.jpg" }
      ]
    })))
    .mount(&server)
    .await;

  let p = Gbif::new(http(), server.uri());
  assert_eq!(
    p.find("Danio rerio").await.unwrap().as_deref(),
    Some("https://g.example/danio.jpg")
  );
}

#[tokio::test]
async fn gbif_no_match() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v1/species/match"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "matchType": "NONE" })))
    .mount(&server)
    .await;

  let p = Gbif::new(http(), server.uri());
  assert_eq!(p.find("Danio rerio").await.unwrap(), None);
}

#[tokio::test]
async fn fishbase_builds_picture_url() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/species"))
    .and(query_param("Genus", "Danio"))
    .and(query_param("Species", "rerio"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "data": [{ "SpecCode": 4653, "Genus": "Danio", "Species": "rerio",
                 "PicPreferredName": "Dareu_u0.jpg" }]
    })))
    .mount(&server)
    .await;

  let p = FishBase::new(http(), server.uri(), "https://fb.example/images/species/");
  assert_eq!(
    p.find("Danio rerio").await.unwrap().as_deref(),
    Some("https://fb.example/images/species/Dareu_u0.jpg")
  );
  assert_eq!(p.find("Danio").await.unwrap(), None);
}

// ─── Chain ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn chain_falls_through_to_next_provider() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/inat/v1/taxa"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/commons/w/api.php"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "query": { "pages": {
        "1": { "title": "File:Danio rerio.png", "index": 1,
               "imageinfo": [{ "url": "https://c.example/d.png", "mime": "image/png" }] }
      }}
    })))
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/wiki/w/api.php"))
    .respond_with(ResponseTemplate::new(500))
    .expect(0)
    .mount(&server)
    .await;

  let urls = ProviderUrls::from([
    (ProviderKind::INaturalist, format!("{}/inat", server.uri())),
    (ProviderKind::Commons, format!("{}/commons", server.uri())),
    (ProviderKind::Wikipedia, format!("{}/wiki", server.uri())),
  ]);
  let chain = ImageChain::from_kinds(&ProviderKind::DEFAULT_CHAIN, &http(), &urls);
  assert_eq!(chain.kinds(), ProviderKind::DEFAULT_CHAIN);

  let hit = chain.fetch("Danio rerio").await.found().expect("hit");
  assert_eq!(hit.url, "https://c.example/d.png");
  assert_eq!(hit.provider, ProviderKind::Commons);
}

#[tokio::test]
async fn chain_reports_last_miss_when_everything_misses() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/inat/v1/taxa"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/wiki/w/api.php"))
    .respond_with(ResponseTemplate::new(503))
    .mount(&server)
    .await;

  let urls = ProviderUrls::from([
    (ProviderKind::INaturalist, format!("{}/inat", server.uri())),
    (ProviderKind::Wikipedia, format!("{}/wiki", server.uri())),
  ]);
  let chain = ImageChain::from_kinds(
    &[ProviderKind::INaturalist, ProviderKind::Wikipedia],
    &http(),
    &urls,
  );
  assert_eq!(chain.fetch("Danio rerio").await, Lookup::Missing(Miss::Status));
}
