use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
  controller::intent::HELP,
  models::{
    cart::CartLine,
    products::{Category, Product, SortKey, PRODUCT_STARS},
  },
  store::{cart::Cart, catalog::categories::CategoryCard, contact::ContactForm},
};

pub const NAV_ITEMS: [&str; 5] = ["Home", "Products", "Categories", "About", "Contact"];

pub(super) fn money(symbol: &str, amount: Decimal) -> String {
  format!("{}{:.2}", symbol, amount.round_dp(2))
}

#[derive(Debug, Serialize)]
pub struct HeaderView {
  pub item_count: u64,
  pub menu_open: bool,
  pub nav_items: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct ProductCardView {
  pub id: String,
  pub name: String,
  pub brand: String,
  pub price: String,
  pub original_price: Option<String>,
  pub discount: u32,
  pub is_new: bool,
  pub in_stock: bool,
  pub stars: String,
  pub rating: String,
  pub reviews: u32,
}

impl ProductCardView {
  pub fn new(p: &Product, symbol: &str) -> Self {
    let filled = p.stars();
    Self {
      id: p.id.clone(),
      name: p.name.clone(),
      brand: p.brand.clone(),
      price: money(symbol, p.price),
      original_price: p.original_price.map(|o| money(symbol, o)),
      discount: p.discount_percentage(),
      is_new: p.is_new,
      in_stock: p.in_stock,
      stars: format!("{}{}", "★".repeat(filled), "☆".repeat(PRODUCT_STARS - filled)),
      rating: p.rating.to_string(),
      reviews: p.reviews,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct ProductModalView {
  pub card: ProductCardView,
  pub image: String,
  pub category: &'static str,
  pub description: String,
  pub features: Vec<String>,
}

impl ProductModalView {
  pub fn new(p: &Product, symbol: &str) -> Self {
    Self {
      card: ProductCardView::new(p, symbol),
      image: p.image.clone(),
      category: p.category.as_str(),
      description: p.description.clone(),
      features: p.features.clone(),
    }
  }
}

#[derive(Debug, Serialize)]
pub struct CategoryChipView {
  pub id: &'static str,
  pub name: String,
  pub icon: String,
  pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct SortOptionView {
  pub key: &'static str,
  pub label: &'static str,
  pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct GridView {
  pub categories: Vec<CategoryChipView>,
  pub sorts: Vec<SortOptionView>,
  pub view_mode: &'static str,
  pub products: Vec<ProductCardView>,
  pub shown: usize,
  pub total: usize,
  pub load_more: bool,
}

impl GridView {
  #[allow(clippy::too_many_arguments)]
  pub fn new(
    cards: &[CategoryCard],
    selected: Category,
    sort: SortKey,
    view_mode: &'static str,
    products: &[&Product],
    catalog_size: usize,
    load_more_threshold: usize,
    symbol: &str,
  ) -> Self {
    Self {
      categories: cards
        .iter()
        .map(|c| CategoryChipView {
          id: c.id.as_str(),
          name: c.name.clone(),
          icon: c.icon.clone(),
          selected: c.id == selected,
        })
        .collect(),
      sorts: SortKey::ALL
        .iter()
        .map(|k| SortOptionView { key: k.as_str(), label: k.label(), selected: *k == sort })
        .collect(),
      view_mode,
      products: products.iter().map(|p| ProductCardView::new(p, symbol)).collect(),
      shown: products.len(),
      total: catalog_size,
      load_more: products.len() > load_more_threshold,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct CartLineView {
  pub id: String,
  pub name: String,
  pub brand: String,
  pub quantity: u64,
  pub unit_price: String,
  pub subtotal: String,
}

impl CartLineView {
  fn new(line: &CartLine, symbol: &str) -> Self {
    Self {
      id: line.product.id.clone(),
      name: line.product.name.clone(),
      brand: line.product.brand.clone(),
      quantity: line.quantity,
      unit_price: money(symbol, line.product.price),
      subtotal: money(symbol, line.subtotal()),
    }
  }
}

#[derive(Debug, Serialize)]
pub struct CartView {
  pub item_count: u64,
  pub lines: Vec<CartLineView>,
  pub total: String,
}

impl CartView {
  pub fn new(cart: &Cart, symbol: &str) -> Self {
    Self {
      item_count: cart.item_count(),
      lines: cart.items().iter().map(|l| CartLineView::new(l, symbol)).collect(),
      total: money(symbol, cart.total()),
    }
  }
}

#[derive(Debug, Serialize)]
pub struct ContactView {
  pub name: String,
  pub email: String,
  pub message: String,
  pub submitting: bool,
  pub submitted: bool,
}

impl ContactView {
  pub fn new(form: &ContactForm, submitted: bool) -> Self {
    let data = form.data();
    Self {
      name: data.name.clone(),
      email: data.email.clone(),
      message: data.message.clone(),
      submitting: form.is_submitting(),
      submitted,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct HelpLineView {
  pub usage: &'static str,
  pub description: &'static str,
}

pub fn help_lines() -> Vec<HelpLineView> {
  HELP.iter().map(|&(usage, description)| HelpLineView { usage, description }).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn money_uses_two_decimals() {
    assert_eq!(money("$", Decimal::from(55)), "$55.00");
    assert_eq!(money("€", Decimal::new(19999, 3)), "€20.00");
    assert_eq!(money("$", Decimal::new(4995, 2)), "$49.95");
  }

  #[test]
  fn card_shows_discount_and_stars() {
    let mut p = Product::new("kb", "Kettlebell", Decimal::new(4500, 2), Category::Weights);
    p.original_price = Some(Decimal::from(60));
    p.rating = 4.5;
    let card = ProductCardView::new(&p, "$");
    assert_eq!(card.price, "$45.00");
    assert_eq!(card.original_price.as_deref(), Some("$60.00"));
    assert_eq!(card.discount, 25);
    assert_eq!(card.stars, "★★★★☆");
    assert_eq!(card.rating, "4.5");
  }
}
