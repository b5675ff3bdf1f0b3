use rust_decimal::Decimal;

use crate::models::products::Product;

/// One product in the cart. The product is a snapshot of the catalog record, so the line
/// keeps its display fields and price without reaching back into the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
  pub product: Product,
  pub quantity: u64,
}

impl CartLine {
  pub fn product_id(&self) -> &str {
    &self.product.id
  }

  pub fn subtotal(&self) -> Decimal {
    self.product.price * Decimal::from(self.quantity)
  }
}

/// What subscribers receive after every effective cart mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartSummary {
  pub version: u64,
  pub item_count: u64,
  pub total: Decimal,
}
