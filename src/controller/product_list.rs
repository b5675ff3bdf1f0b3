use tracing::debug;

use crate::{
  controller::{Controller, Screen},
  models::products::{Category, SortKey, ViewMode},
};

pub(super) fn category_select(c: &mut Controller, category: Category) -> Screen {
  debug!(category = category.as_str(), "category selected");
  c.ui.category = category;
  Screen::Page
}

pub(super) fn sort_select(c: &mut Controller, sort: SortKey) -> Screen {
  debug!(sort = sort.as_str(), "sort selected");
  c.ui.sort = sort;
  Screen::Page
}

pub(super) fn view_mode_select(c: &mut Controller, view_mode: ViewMode) -> Screen {
  c.ui.view_mode = view_mode;
  Screen::Page
}
