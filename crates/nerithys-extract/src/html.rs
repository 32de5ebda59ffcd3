//! Low-level HTML string helpers.
//!
//! These are deliberately naive: the scraped sites are ASP.NET and WordPress
//! pages whose markup is stable enough that anchored regexes beat a DOM.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static BR: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("static regex"));
static TAG: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"<[^>]+>").expect("static regex"));
static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").expect("static regex")
});
static WHITESPACE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// Remove every tag. `<br>` becomes a space so words on either side stay apart.
pub fn strip_tags(s: &str) -> String {
  let s = BR.replace_all(s, " ");
  TAG.replace_all(&s, "").into_owned()
}

/// Decode the named entities the scraped sites actually emit, plus decimal
/// and hex character references. Unknown names are left as-is.
pub fn decode_entities(s: &str) -> String {
  ENTITY
    .replace_all(s, |caps: &Captures| {
      let body = &caps[1];
      let decoded = if let Some(hex) =
        body.strip_prefix("#x").or_else(|| body.strip_prefix("#X"))
      {
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
      } else if let Some(dec) = body.strip_prefix('#') {
        dec.parse::<u32>().ok().and_then(char::from_u32)
      } else {
        match body {
          "nbsp" => Some(' '),
          "amp" => Some('&'),
          "lt" => Some('<'),
          "gt" => Some('>'),
          "quot" => Some('"'),
          "apos" => Some('\''),
          "deg" => Some('°'),
          "agrave" => Some('à'),
          "eacute" => Some('é'),
          "egrave" => Some('è'),
          _ => None,
        }
      };
      match decoded {
        Some(c) => c.to_string(),
        None => caps[0].to_owned(),
      }
    })
    .into_owned()
}

/// Markup and entities removed, whitespace collapsed. Blank → `None`.
pub fn clean_html(s: &str) -> Option<String> {
  let text = decode_entities(&strip_tags(s));
  let text = WHITESPACE.replace_all(&text, " ");
  let text = text.trim();
  (!text.is_empty()).then(|| text.to_owned())
}

/// Cleaned content of the first `<span>` carrying `id="{element_id}"`.
pub fn extract_label(html: &str, element_id: &str) -> Option<String> {
  let re = Regex::new(&format!(
    r#"(?is)id="{}"[^>]*>(.*?)</span>"#,
    regex::escape(element_id)
  ))
  .ok()?;
  let caps = re.captures(html)?;
  clean_html(&caps[1])
}

/// `src` of the element with `id="{element_id}"`, made absolute against
/// `base`.
pub fn extract_image_src(
  html: &str,
  element_id: &str,
  base: &str,
) -> Option<String> {
  let re = Regex::new(&format!(
    r#"(?i)id="{}"[^>]*src="([^"]+)""#,
    regex::escape(element_id)
  ))
  .ok()?;
  let caps = re.captures(html)?;
  let raw = decode_entities(caps[1].trim());
  (!raw.is_empty()).then(|| resolve_url(base, &raw))
}

/// Resolve a page-relative URL against a site root.
///
/// `../x` and `x` resolve under the root, `/x` against it, `//host/x`
/// inherits https, and absolute URLs pass through.
pub fn resolve_url(base: &str, raw: &str) -> String {
  let base = base.trim_end_matches('/');
  if raw.starts_with("http://") || raw.starts_with("https://") {
    raw.to_owned()
  } else if let Some(rest) = raw.strip_prefix("//") {
    format!("https://{rest}")
  } else if let Some(rest) = raw.strip_prefix("../") {
    format!("{base}/{rest}")
  } else if raw.starts_with('/') {
    format!("{base}{raw}")
  } else {
    format!("{base}/{raw}")
  }
}

/// Up to `len` characters of `s` starting at the first occurrence of
/// `marker` (the marker itself included).
pub fn window_after<'a>(s: &'a str, marker: &str, len: usize) -> Option<&'a str> {
  let start = s.find(marker)?;
  let rest = &s[start..];
  let end = rest
    .char_indices()
    .nth(len)
    .map_or(rest.len(), |(i, _)| i);
  Some(&rest[..end])
}
