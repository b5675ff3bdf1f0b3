pub mod categories;
pub mod product_list;
pub mod static_catalog;

use std::fmt;

use crate::models::products::{Category, Product, SortKey};
use crate::store::catalog::categories::CategoryCard;

/// Read access to the session's catalog.
pub trait CatalogStore: fmt::Debug + Send + Sync {
  fn products(&self) -> &[Product];

  fn categories(&self) -> &[CategoryCard];

  fn product(&self, id: &str) -> Option<&Product> {
    self.products().iter().find(|p| p.id == id)
  }

  fn product_list(&self, category: Category, sort: SortKey) -> Vec<&Product> {
    product_list::product_list(self.products(), category, sort)
  }

  fn featured_products(&self, limit: usize) -> Vec<&Product> {
    product_list::featured_products(self.products(), limit)
  }
}
