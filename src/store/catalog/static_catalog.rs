use std::{collections::HashSet, path::Path};

use serde::Deserialize;
use tracing::info;

use crate::{
  models::products::{Product, ProductValidationError},
  store::{
    catalog::{
      categories::{normalize_categories, CategoryCard},
      CatalogStore,
    },
    errors::{
      handle_io_error, handle_json_error, handle_product_error, handle_yaml_error, CatalogError,
      CatalogErrorType,
    },
  },
};

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
  #[serde(default)]
  categories: Vec<CategoryCard>,
  #[serde(default)]
  products: Vec<Product>,
}

/// Read-only catalog held in memory for the whole session.
#[derive(Debug)]
pub struct StaticCatalog {
  products: Vec<Product>,
  categories: Vec<CategoryCard>,
}

#[derive(Debug)]
pub struct StaticCatalogArgs {
  pub products: Vec<Product>,
  pub categories: Vec<CategoryCard>,
}

impl StaticCatalog {
  /// Builds a catalog after checking every product and the uniqueness of ids.
  pub fn new(args: StaticCatalogArgs) -> Result<Self, CatalogError> {
    let path = "storefront.store.catalog_new";

    let mut ids = HashSet::with_capacity(args.products.len());
    for product in &args.products {
      product.is_valid().map_err(|e| handle_product_error(e, path))?;
      if !ids.insert(product.id.as_str()) {
        let err = ProductValidationError::DuplicateId(product.id.clone());
        return Err(handle_product_error(err, path));
      }
    }

    Ok(Self { products: args.products, categories: normalize_categories(args.categories) })
  }

  /// Loads a YAML (`.yaml`, `.yml`) or JSON (`.json`) catalog file.
  pub async fn load(file: impl AsRef<Path>) -> Result<Self, CatalogError> {
    let path = "storefront.store.catalog_load";
    let file = file.as_ref();
    let file_name = file.display().to_string();

    let ext = file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    let content =
      tokio::fs::read_to_string(file).await.map_err(|e| handle_io_error(e, path, &file_name))?;

    let parsed: CatalogFile = match ext.as_str() {
      "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| handle_yaml_error(e, path))?,
      "json" => serde_json::from_str(&content).map_err(|e| handle_json_error(e, path))?,
      _ => {
        return Err(CatalogError::new(
          CatalogErrorType::UnsupportedFormat,
          None,
          "catalog must be a .yaml, .yml or .json file",
          path,
          file_name,
        ));
      }
    };

    let catalog =
      Self::new(StaticCatalogArgs { products: parsed.products, categories: parsed.categories })?;
    info!(
      file = %file_name,
      products = catalog.products.len(),
      categories = catalog.categories.len(),
      "catalog loaded"
    );
    Ok(catalog)
  }
}

impl CatalogStore for StaticCatalog {
  fn products(&self) -> &[Product] {
    &self.products
  }

  fn categories(&self) -> &[CategoryCard] {
    &self.categories
  }
}
