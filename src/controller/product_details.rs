use tracing::debug;

use crate::controller::{Controller, Screen};

pub(super) fn product_open(c: &mut Controller, product_id: &str) -> Screen {
  if c.catalog.product(product_id).is_none() {
    debug!(product_id, "product details ignored: unknown product");
    return c.current_screen();
  }
  c.ui.open_product(product_id);
  Screen::Product
}

pub(super) fn product_close(c: &mut Controller) -> Screen {
  c.ui.close_product();
  c.current_screen()
}
