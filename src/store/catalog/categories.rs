use serde::{Deserialize, Serialize};

use crate::models::products::Category;

/// An entry of the category filter bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCard {
  pub id: Category,
  pub name: String,
  #[serde(default)]
  pub icon: String,
}

pub(super) fn default_categories() -> Vec<CategoryCard> {
  let card = |id, name: &str, icon: &str| CategoryCard { id, name: name.into(), icon: icon.into() };
  vec![
    card(Category::All, "All Products", "🏋️"),
    card(Category::Weights, "Weights", "💪"),
    card(Category::Cardio, "Cardio", "🏃"),
    card(Category::Accessories, "Accessories", "🎯"),
    card(Category::Supplements, "Supplements", "💊"),
    card(Category::Apparel, "Apparel", "👕"),
  ]
}

/// Keeps the file's order, drops repeated ids and makes sure `all` leads the bar.
pub(super) fn normalize_categories(mut cards: Vec<CategoryCard>) -> Vec<CategoryCard> {
  if cards.is_empty() {
    return default_categories();
  }

  let mut seen = Vec::with_capacity(cards.len());
  cards.retain(|c| {
    if seen.contains(&c.id) {
      return false;
    }
    seen.push(c.id);
    true
  });

  match cards.iter().position(|c| c.id == Category::All) {
    Some(0) => {}
    Some(idx) => {
      let all = cards.remove(idx);
      cards.insert(0, all);
    }
    None => cards.insert(0, default_categories().remove(0)),
  }
  cards
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_list_falls_back_to_defaults() {
    let cards = normalize_categories(vec![]);
    assert_eq!(cards.len(), Category::ALL.len());
    assert_eq!(cards[0].id, Category::All);
  }

  #[test]
  fn all_is_moved_first_and_duplicates_dropped() {
    let input = vec![
      CategoryCard { id: Category::Cardio, name: "Cardio".into(), icon: String::new() },
      CategoryCard { id: Category::All, name: "Everything".into(), icon: String::new() },
      CategoryCard { id: Category::Cardio, name: "Again".into(), icon: String::new() },
    ];
    let cards = normalize_categories(input);
    let ids: Vec<Category> = cards.iter().map(|c| c.id).collect();
    assert_eq!(ids, [Category::All, Category::Cardio]);
    assert_eq!(cards[0].name, "Everything");
  }

  #[test]
  fn missing_all_is_added() {
    let input =
      vec![CategoryCard { id: Category::Apparel, name: "Apparel".into(), icon: String::new() }];
    let cards = normalize_categories(input);
    assert_eq!(cards[0].name, "All Products");
    assert_eq!(cards.len(), 2);
  }
}
