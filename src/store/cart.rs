use rust_decimal::Decimal;
use tokio::sync::watch;
use tracing::debug;

use crate::models::{
  cart::{CartLine, CartSummary},
  products::Product,
};

/// Owner of the session's cart. Every mutation goes through the methods below; the
/// aggregates are computed from the lines on read and never stored.
///
/// Subscribers get a fresh [`CartSummary`] after each mutation that changed something.
/// Calls on unknown product ids are no-ops and publish nothing.
#[derive(Debug)]
pub struct Cart {
  lines: Vec<CartLine>,
  version: u64,
  notifier: watch::Sender<CartSummary>,
}

impl Default for Cart {
  fn default() -> Self {
    Self::new()
  }
}

impl Cart {
  pub fn new() -> Self {
    let (notifier, _) = watch::channel(CartSummary::default());
    Self { lines: vec![], version: 0, notifier }
  }

  pub fn add_item(&mut self, product: &Product) {
    match self.position(&product.id) {
      Some(idx) => {
        let next = self.lines[idx].quantity.saturating_add(1);
        if !self.set_quantity(idx, next) {
          return;
        }
      }
      None => self.lines.push(CartLine { product: product.clone(), quantity: 1 }),
    }
    self.changed("add_item", &product.id);
  }

  /// Sets the quantity of an existing line. Zero or less removes the line.
  pub fn update_quantity(&mut self, product_id: &str, new_quantity: i64) {
    let Some(idx) = self.position(product_id) else {
      debug!(product_id, "update_quantity on a product that is not in the cart");
      return;
    };

    match u64::try_from(new_quantity) {
      Ok(quantity) if quantity > 0 => {
        if !self.set_quantity(idx, quantity) {
          return;
        }
      }
      _ => {
        self.lines.remove(idx);
      }
    }
    self.changed("update_quantity", product_id);
  }

  pub fn increment(&mut self, product_id: &str) {
    let Some(idx) = self.position(product_id) else {
      return;
    };
    let next = self.lines[idx].quantity.saturating_add(1);
    if self.set_quantity(idx, next) {
      self.changed("increment", product_id);
    }
  }

  /// Decrementing a line with quantity 1 removes it.
  pub fn decrement(&mut self, product_id: &str) {
    let Some(idx) = self.position(product_id) else {
      return;
    };
    match self.lines[idx].quantity {
      0 | 1 => {
        self.lines.remove(idx);
      }
      q => {
        self.set_quantity(idx, q - 1);
      }
    }
    self.changed("decrement", product_id);
  }

  pub fn remove_item(&mut self, product_id: &str) {
    let Some(idx) = self.position(product_id) else {
      debug!(product_id, "remove_item on a product that is not in the cart");
      return;
    };
    self.lines.remove(idx);
    self.changed("remove_item", product_id);
  }

  pub fn clear_cart(&mut self) {
    if self.lines.is_empty() {
      return;
    }
    self.lines.clear();
    self.changed("clear_cart", "");
  }

  pub fn items(&self) -> &[CartLine] {
    &self.lines
  }

  pub fn line(&self, product_id: &str) -> Option<&CartLine> {
    self.lines.iter().find(|l| l.product_id() == product_id)
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  pub fn item_count(&self) -> u64 {
    self.lines.iter().map(|l| l.quantity).sum()
  }

  pub fn total(&self) -> Decimal {
    self.lines.iter().map(CartLine::subtotal).sum()
  }

  pub fn version(&self) -> u64 {
    self.version
  }

  pub fn summary(&self) -> CartSummary {
    CartSummary { version: self.version, item_count: self.item_count(), total: self.total() }
  }

  pub fn subscribe(&self) -> watch::Receiver<CartSummary> {
    self.notifier.subscribe()
  }

  fn position(&self, product_id: &str) -> Option<usize> {
    self.lines.iter().position(|l| l.product_id() == product_id)
  }

  /// False when the line already holds `quantity`.
  fn set_quantity(&mut self, idx: usize, quantity: u64) -> bool {
    let line = &mut self.lines[idx];
    if line.quantity == quantity {
      return false;
    }
    line.quantity = quantity;
    true
  }

  fn changed(&mut self, op: &str, product_id: &str) {
    self.version += 1;
    let summary = self.summary();
    debug!(
      op,
      product_id,
      version = summary.version,
      item_count = summary.item_count,
      total = %summary.total,
      "cart changed"
    );
    self.notifier.send_replace(summary);
  }
}
