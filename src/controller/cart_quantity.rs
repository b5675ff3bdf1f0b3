use crate::controller::{Controller, Screen};

pub(super) fn cart_update_quantity(c: &mut Controller, product_id: &str, quantity: i64) -> Screen {
  c.cart.update_quantity(product_id, quantity);
  Screen::Cart
}

pub(super) fn cart_increment(c: &mut Controller, product_id: &str) -> Screen {
  c.cart.increment(product_id);
  Screen::Cart
}

pub(super) fn cart_decrement(c: &mut Controller, product_id: &str) -> Screen {
  c.cart.decrement(product_id);
  Screen::Cart
}

pub(super) fn cart_remove(c: &mut Controller, product_id: &str) -> Screen {
  c.cart.remove_item(product_id);
  Screen::Cart
}

pub(super) fn cart_clear(c: &mut Controller) -> Screen {
  c.cart.clear_cart();
  Screen::Cart
}
