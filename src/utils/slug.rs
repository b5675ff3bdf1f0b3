use std::sync::OnceLock;

use regex::Regex;
use unidecode::unidecode;

fn non_alnum_regex() -> &'static Regex {
  static RE_NON_ALNUM: OnceLock<Regex> = OnceLock::new();
  RE_NON_ALNUM.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Turns free-form input into the dashed keys used for categories and sort orders:
/// " Price: Low! " becomes "price-low".
pub fn to_key(input: &str) -> String {
  let ascii = unidecode(input).to_lowercase();
  non_alnum_regex().replace_all(&ascii, "-").trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sort_labels_become_keys() {
    assert_eq!(to_key("Price Low"), "price-low");
    assert_eq!(to_key("price_high"), "price-high");
    assert_eq!(to_key("  RATING "), "rating");
    assert_eq!(to_key(" Price: Low! "), "price-low");
  }

  #[test]
  fn accents_are_folded() {
    assert_eq!(to_key("Accessóries"), "accessories");
  }

  #[test]
  fn blank_input_is_empty() {
    assert_eq!(to_key("   "), "");
    assert_eq!(to_key("!!"), "");
  }
}
