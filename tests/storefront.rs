use std::str::FromStr;
use std::sync::Arc;

use gym_storefront::controller::{Controller, ControllerArgs, Intent, Screen};
use gym_storefront::models::config::Config;
use gym_storefront::models::products::{Category, SortKey};
use gym_storefront::store::catalog::{static_catalog::StaticCatalog, CatalogStore};
use gym_storefront::views::Views;
use rust_decimal::Decimal;

async fn storefront() -> Controller {
  let config_file = concat!(env!("CARGO_MANIFEST_DIR"), "/config.yaml");
  let yaml = std::fs::read_to_string(config_file).unwrap();
  let config: Config = serde_yaml::from_str(&yaml).unwrap();
  let mut cfg = config.service;
  cfg.contact.submit_delay_ms = 0;

  let catalog = StaticCatalog::load(concat!(env!("CARGO_MANIFEST_DIR"), "/catalog.yaml"))
    .await
    .unwrap();
  Controller::new(ControllerArgs { cfg, catalog: Arc::new(catalog) })
}

async fn run(c: &mut Controller, line: &str) -> Screen {
  c.dispatch(Intent::parse(line).unwrap()).await.unwrap()
}

#[tokio::test]
async fn shipped_catalog_is_valid() {
  let c = storefront().await;
  let catalog = c.catalog();
  assert_eq!(catalog.products().len(), 11);
  assert_eq!(catalog.categories()[0].id, Category::All);
  assert_eq!(catalog.featured_products(c.config().featured_limit).len(), 4);
  assert!(catalog.products().iter().any(|p| !p.in_stock));
}

#[tokio::test]
async fn browse_filter_and_buy() {
  let mut c = storefront().await;

  run(&mut c, "category cardio").await;
  run(&mut c, "sort price-low").await;
  let cardio: Vec<&str> = c
    .catalog()
    .product_list(c.ui().category, c.ui().sort)
    .iter()
    .map(|p| p.id.as_str())
    .collect();
  assert_eq!(cardio, ["rowing-machine", "air-bike", "folding-treadmill"]);

  run(&mut c, "add air-bike").await;
  assert!(c.cart().is_empty());

  assert_eq!(run(&mut c, "view yoga-mat").await, Screen::Product);
  assert_eq!(run(&mut c, "add yoga-mat").await, Screen::Page);
  run(&mut c, "inc yoga-mat").await;
  run(&mut c, "add whey-protein").await;
  assert_eq!(c.cart().item_count(), 3);
  assert_eq!(c.cart().total(), Decimal::from_str("164.97").unwrap());

  run(&mut c, "dec yoga-mat").await;
  run(&mut c, "dec yoga-mat").await;
  assert_eq!(c.cart().items().len(), 1);

  let views = Views::new().unwrap();
  let screen = run(&mut c, "cart").await;
  let out = views.render(screen, &c, tokio::time::Instant::now()).unwrap();
  assert!(out.contains("Cart (1)"));
  assert!(out.contains("Total: $64.99"));
}

#[tokio::test]
async fn name_sort_is_alphabetical() {
  let c = storefront().await;
  let products = c.catalog().product_list(Category::All, SortKey::Name);
  let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
  let mut sorted = names.clone();
  sorted.sort_by_key(|n| n.to_lowercase());
  assert_eq!(names, sorted);
}
