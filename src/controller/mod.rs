mod cart_add;
mod cart_quantity;
mod contact_submit;
mod helpers;
pub mod intent;
mod product_details;
mod product_list;
mod router;

use std::sync::Arc;

use crate::{
  models::{config::ServiceConfig, ui::UiState},
  store::{cart::Cart, catalog::CatalogStore, contact::ContactForm},
};

pub use intent::Intent;

/// What the caller should render after an intent ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
  Page,
  Cart,
  Product,
  Contact,
  Help,
  Quit,
}

/// Owns the session state and applies intents to it. Views only ever get shared
/// references to the pieces below.
#[derive(Debug)]
pub struct Controller {
  pub(super) cfg: ServiceConfig,
  pub(super) catalog: Arc<dyn CatalogStore>,
  pub(super) cart: Cart,
  pub(super) ui: UiState,
  pub(super) contact: ContactForm,
}

#[derive(Debug)]
pub struct ControllerArgs {
  pub cfg: ServiceConfig,
  pub catalog: Arc<dyn CatalogStore>,
}

impl Controller {
  pub fn new(args: ControllerArgs) -> Controller {
    Controller {
      cfg: args.cfg,
      catalog: args.catalog,
      cart: Cart::new(),
      ui: UiState::default(),
      contact: ContactForm::new(),
    }
  }

  pub fn config(&self) -> &ServiceConfig {
    &self.cfg
  }

  pub fn catalog(&self) -> &dyn CatalogStore {
    self.catalog.as_ref()
  }

  pub fn cart(&self) -> &Cart {
    &self.cart
  }

  pub fn ui(&self) -> &UiState {
    &self.ui
  }

  pub fn contact(&self) -> &ContactForm {
    &self.contact
  }

  /// The overlay on top wins: product modal, then cart panel, then the page.
  pub fn current_screen(&self) -> Screen {
    if self.ui.selected_product.is_some() {
      Screen::Product
    } else if self.ui.cart_open {
      Screen::Cart
    } else {
      Screen::Page
    }
  }
}
