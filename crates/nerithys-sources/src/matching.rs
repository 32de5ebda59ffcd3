//! Label checks applied to provider answers before they are accepted.

/// Case-insensitive exact taxon match.
pub fn same_taxon(a: &str, b: &str) -> bool {
  a.trim().eq_ignore_ascii_case(b.trim())
}

/// `title` mentions the full binomial (`File:Danio rerio 01.jpg`).
pub fn mentions(title: &str, scientific_name: &str) -> bool {
  let title = title.replace('_', " ").to_lowercase();
  title.contains(&scientific_name.trim().to_lowercase())
}

/// An article title about the queried genus that does not name a different
/// species: `Corydoras` and `Corydoras aeneus` pass for `Corydoras aeneus`,
/// `Corydoras paleatus` does not.
pub fn article_matches(title: &str, scientific_name: &str) -> bool {
  let mut query = scientific_name.split_whitespace();
  let Some(genus) = query.next() else {
    return false;
  };
  let epithet = query.next();

  let words: Vec<&str> = title.split_whitespace().collect();
  let Some(pos) = words.iter().position(|w| w.eq_ignore_ascii_case(genus)) else {
    return title.to_lowercase().contains(&genus.to_lowercase());
  };
  match (words.get(pos + 1), epithet) {
    (Some(next), Some(epithet)) if starts_lowercase(next) => {
      next.eq_ignore_ascii_case(epithet)
    }
    _ => true,
  }
}

fn starts_lowercase(word: &str) -> bool {
  word.chars().next().is_some_and(char::is_lowercase)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn taxon_equality_ignores_case() {
    assert!(same_taxon("Danio rerio", "danio Rerio "));
    assert!(!same_taxon("Danio rerio", "Danio kyathit"));
  }

  #[test]
  fn file_titles() {
    assert!(mentions("File:Danio_rerio_01.jpg", "Danio rerio"));
    assert!(!mentions("File:Danio kyathit.jpg", "Danio rerio"));
  }

  #[test]
  fn article_titles() {
    let q = "Corydoras aeneus";
    assert!(article_matches("Corydoras aeneus", q));
    assert!(article_matches("Corydoras", q));
    assert!(article_matches("Corydoras (fish)", q));
    assert!(!article_matches("Corydoras paleatus", q));
    assert!(!article_matches("Brochis splendens", q));
  }
}
