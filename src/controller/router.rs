use crate::{
  controller::{
    cart_add::cart_add,
    cart_quantity::{cart_clear, cart_decrement, cart_increment, cart_remove, cart_update_quantity},
    contact_submit::{contact_set_field, contact_submit},
    intent::Intent,
    product_details::{product_close, product_open},
    product_list::{category_select, sort_select, view_mode_select},
    Controller, Screen,
  },
  models::errors::AppError,
};

impl Controller {
  /// Runs one intent to completion and tells the caller what to show next.
  pub async fn dispatch(&mut self, intent: Intent) -> Result<Screen, AppError> {
    let screen = match intent {
      Intent::ShowPage => {
        self.ui.cart_open = false;
        self.ui.close_product();
        Screen::Page
      }
      Intent::AddToCart(id) => cart_add(self, &id),
      Intent::UpdateQuantity(id, qty) => cart_update_quantity(self, &id, qty),
      Intent::Increment(id) => cart_increment(self, &id),
      Intent::Decrement(id) => cart_decrement(self, &id),
      Intent::RemoveItem(id) => cart_remove(self, &id),
      Intent::ClearCart => cart_clear(self),
      Intent::OpenCart => {
        self.ui.cart_open = true;
        Screen::Cart
      }
      Intent::CloseCart => {
        self.ui.cart_open = false;
        self.current_screen()
      }
      Intent::ViewProduct(id) => product_open(self, &id),
      Intent::CloseProduct => product_close(self),
      Intent::SetCategory(category) => category_select(self, category),
      Intent::SetSort(sort) => sort_select(self, sort),
      Intent::SetViewMode(mode) => view_mode_select(self, mode),
      Intent::ToggleMenu => {
        self.ui.menu_open = !self.ui.menu_open;
        Screen::Page
      }
      Intent::ShowContact => Screen::Contact,
      Intent::SetContactField(field, value) => contact_set_field(self, field, value),
      Intent::SubmitContact => contact_submit(self).await?,
      Intent::Help => Screen::Help,
      Intent::Quit => Screen::Quit,
    };

    Ok(screen)
  }
}
