use tracing::{debug, info};

use crate::controller::{Controller, Screen};

/// Add-to-cart from a product card or the product modal. Unknown ids and out of stock
/// products are ignored; adding the product shown in the modal closes the modal.
pub(super) fn cart_add(c: &mut Controller, product_id: &str) -> Screen {
  let Some(product) = c.catalog.product(product_id) else {
    debug!(product_id, "add to cart ignored: unknown product");
    return c.current_screen();
  };

  if !product.in_stock {
    debug!(product_id, "add to cart ignored: out of stock");
    return c.current_screen();
  }

  c.cart.add_item(product);
  info!(product_id, item_count = c.cart.item_count(), "added to cart");

  if c.ui.selected_product.as_deref() == Some(product_id) {
    c.ui.close_product();
  }
  c.current_screen()
}
