use crate::models::products::{Category, SortKey, ViewMode};

/// View-only flags. Nothing here affects the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
  pub cart_open: bool,
  pub menu_open: bool,
  pub selected_product: Option<String>,
  pub category: Category,
  pub sort: SortKey,
  pub view_mode: ViewMode,
}

impl UiState {
  pub fn open_product(&mut self, id: impl Into<String>) {
    self.selected_product = Some(id.into());
  }

  pub fn close_product(&mut self) {
    self.selected_product = None;
  }
}
