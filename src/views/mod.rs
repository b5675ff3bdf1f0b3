pub mod models;

use tera::{Context, Tera};
use tokio::time::Instant;

use crate::{
  controller::{Controller, Screen},
  views::models::{
    help_lines, CartView, ContactView, GridView, HeaderView, ProductCardView, ProductModalView,
    NAV_ITEMS,
  },
};

const SEPARATOR_WIDTH: usize = 60;

const TEMPLATES: [(&str, &str); 10] = [
  ("macros.txt", include_str!("../../templates/macros.txt")),
  ("header.txt", include_str!("../../templates/header.txt")),
  ("hero.txt", include_str!("../../templates/hero.txt")),
  ("featured.txt", include_str!("../../templates/featured.txt")),
  ("product_grid.txt", include_str!("../../templates/product_grid.txt")),
  ("product_modal.txt", include_str!("../../templates/product_modal.txt")),
  ("cart.txt", include_str!("../../templates/cart.txt")),
  ("contact.txt", include_str!("../../templates/contact.txt")),
  ("footer.txt", include_str!("../../templates/footer.txt")),
  ("help.txt", include_str!("../../templates/help.txt")),
];

/// Renders session state. Every method is a pure function of the controller's state.
#[derive(Debug)]
pub struct Views {
  tera: Tera,
}

impl Views {
  pub fn new() -> Result<Self, tera::Error> {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    tera.add_raw_templates(TEMPLATES.to_vec())?;
    Ok(Self { tera })
  }

  pub fn render(
    &self,
    screen: Screen,
    c: &Controller,
    now: Instant,
  ) -> Result<String, tera::Error> {
    match screen {
      Screen::Page => self.render_page(c),
      Screen::Cart => self.join(&[self.render_header(c)?, self.render_cart(c)?]),
      Screen::Product => match self.render_product(c)? {
        Some(modal) => self.join(&[self.render_header(c)?, modal]),
        None => self.render_page(c),
      },
      Screen::Contact => self.render_contact(c, now),
      Screen::Help => self.one("help.txt", "help", &help_lines()),
      Screen::Quit => Ok("Thanks for visiting FitGear!\n".to_string()),
    }
  }

  pub fn render_header(&self, c: &Controller) -> Result<String, tera::Error> {
    let view = HeaderView {
      item_count: c.cart().item_count(),
      menu_open: c.ui().menu_open,
      nav_items: NAV_ITEMS.to_vec(),
    };
    self.one("header.txt", "header", &view)
  }

  pub fn render_page(&self, c: &Controller) -> Result<String, tera::Error> {
    self.join(&[
      self.render_header(c)?,
      self.tera.render("hero.txt", &Context::new())?,
      self.render_featured(c)?,
      self.render_grid(c)?,
      self.tera.render("footer.txt", &Context::new())?,
    ])
  }

  pub fn render_featured(&self, c: &Controller) -> Result<String, tera::Error> {
    let cfg = c.config();
    let products: Vec<ProductCardView> = c
      .catalog()
      .featured_products(cfg.featured_limit)
      .into_iter()
      .map(|p| ProductCardView::new(p, &cfg.currency_symbol))
      .collect();

    let mut ctx = Context::new();
    ctx.insert("featured", &serde_json::json!({ "products": products }));
    self.tera.render("featured.txt", &ctx)
  }

  pub fn render_grid(&self, c: &Controller) -> Result<String, tera::Error> {
    let (cfg, ui, catalog) = (c.config(), c.ui(), c.catalog());
    let products = catalog.product_list(ui.category, ui.sort);
    let view = GridView::new(
      catalog.categories(),
      ui.category,
      ui.sort,
      ui.view_mode.as_str(),
      &products,
      catalog.products().len(),
      cfg.load_more_threshold,
      &cfg.currency_symbol,
    );
    self.one("product_grid.txt", "grid", &view)
  }

  /// `None` when no product is selected.
  pub fn render_product(&self, c: &Controller) -> Result<Option<String>, tera::Error> {
    let Some(product) = c.ui().selected_product.as_deref().and_then(|id| c.catalog().product(id))
    else {
      return Ok(None);
    };
    let view = ProductModalView::new(product, &c.config().currency_symbol);
    self.one("product_modal.txt", "modal", &view).map(Some)
  }

  pub fn render_cart(&self, c: &Controller) -> Result<String, tera::Error> {
    let view = CartView::new(c.cart(), &c.config().currency_symbol);
    self.one("cart.txt", "cart", &view)
  }

  pub fn render_contact(&self, c: &Controller, now: Instant) -> Result<String, tera::Error> {
    let submitted = c.contact().is_submitted(now, c.config().contact.confirmation_ttl());
    let view = ContactView::new(c.contact(), submitted);
    self.one("contact.txt", "contact", &view)
  }

  fn one<T: serde::Serialize>(
    &self,
    template: &str,
    key: &str,
    view: &T,
  ) -> Result<String, tera::Error> {
    let mut ctx = Context::new();
    ctx.insert(key, view);
    self.tera.render(template, &ctx)
  }

  fn join(&self, sections: &[String]) -> Result<String, tera::Error> {
    let separator = format!("\n{}\n", "─".repeat(SEPARATOR_WIDTH));
    let body: Vec<&str> =
      sections.iter().map(|s| s.trim_end()).filter(|s| !s.is_empty()).collect();
    Ok(format!("{}\n", body.join(&separator)))
  }
}
