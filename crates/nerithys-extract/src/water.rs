use nerithys_core::Biotope;

/// Map a source's free-text water-type label onto a biotope. Anything not
/// recognisably marine or brackish is freshwater.
pub fn classify_water_type(label: &str) -> Biotope {
  let label = label.to_lowercase();
  if label.contains("mer") || label.contains("marin") {
    Biotope::Marine
  } else if label.contains("saumâtre") || label.contains("saumatre") {
    Biotope::Brackish
  } else {
    Biotope::Freshwater
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn labels_map_to_biotopes() {
    assert_eq!(classify_water_type("Eau de mer"), Biotope::Marine);
    assert_eq!(classify_water_type("Récifal / Marin"), Biotope::Marine);
    assert_eq!(classify_water_type("Eau Saumâtre"), Biotope::Brackish);
    assert_eq!(classify_water_type("Eau douce"), Biotope::Freshwater);
    assert_eq!(classify_water_type(""), Biotope::Freshwater);
  }
}
