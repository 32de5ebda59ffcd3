//! The biotope vocabulary.
//!
//! Stored on disk as the French display label. Unknown labels survive a round
//! trip through [`Biotope::Other`] so hand-edited fiches are never rewritten.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a species lives. Region-qualified freshwater variants are produced
/// by the classifier; the scraper only ever emits the unqualified forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Biotope {
  #[default]
  Freshwater,
  FreshwaterAsia,
  FreshwaterAmazonia,
  FreshwaterAfrica,
  Brackish,
  Marine,
  Other(String),
}

impl Biotope {
  pub fn label(&self) -> &str {
    match self {
      Self::Freshwater => "Eau douce",
      Self::FreshwaterAsia => "Eau douce — Asie",
      Self::FreshwaterAmazonia => "Eau douce — Amazonie",
      Self::FreshwaterAfrica => "Eau douce — Afrique",
      Self::Brackish => "Eau saumâtre",
      Self::Marine => "Eau de mer",
      Self::Other(s) => s,
    }
  }

  /// Any freshwater label, qualified or not.
  pub fn is_freshwater(&self) -> bool {
    matches!(
      self,
      Self::Freshwater
        | Self::FreshwaterAsia
        | Self::FreshwaterAmazonia
        | Self::FreshwaterAfrica
    )
  }

  pub fn is_region_qualified(&self) -> bool {
    matches!(
      self,
      Self::FreshwaterAsia | Self::FreshwaterAmazonia | Self::FreshwaterAfrica
    )
  }
}

impl From<String> for Biotope {
  fn from(s: String) -> Self {
    match s.as_str() {
      "Eau douce" => Self::Freshwater,
      "Eau douce — Asie" => Self::FreshwaterAsia,
      "Eau douce — Amazonie" => Self::FreshwaterAmazonia,
      "Eau douce — Afrique" => Self::FreshwaterAfrica,
      "Eau saumâtre" => Self::Brackish,
      "Eau de mer" => Self::Marine,
      _ => Self::Other(s),
    }
  }
}

impl From<&str> for Biotope {
  fn from(s: &str) -> Self { Self::from(s.to_owned()) }
}

impl From<Biotope> for String {
  fn from(b: Biotope) -> Self {
    match b {
      Biotope::Other(s) => s,
      known => known.label().to_owned(),
    }
  }
}

impl fmt::Display for Biotope {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn labels_round_trip() {
    for b in [
      Biotope::Freshwater,
      Biotope::FreshwaterAsia,
      Biotope::FreshwaterAmazonia,
      Biotope::FreshwaterAfrica,
      Biotope::Brackish,
      Biotope::Marine,
    ] {
      assert_eq!(Biotope::from(b.label()), b);
    }
  }

  #[test]
  fn unknown_label_is_preserved() {
    let json = "\"Eau douce — Océanie\"";
    let b: Biotope = serde_json::from_str(json).unwrap();
    assert_eq!(b, Biotope::Other("Eau douce — Océanie".into()));
    assert_eq!(serde_json::to_string(&b).unwrap(), json);
    assert!(!b.is_freshwater());
  }

  #[test]
  fn qualified_labels_are_freshwater() {
    assert!(Biotope::FreshwaterAsia.is_freshwater());
    assert!(Biotope::FreshwaterAsia.is_region_qualified());
    assert!(!Biotope::Freshwater.is_region_qualified());
    assert!(!Biotope::Marine.is_freshwater());
  }
}
