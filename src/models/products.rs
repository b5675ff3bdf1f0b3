use std::{fmt, str::FromStr};

use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::net::validate_url_target;

pub const PRODUCT_RATING_MAX: f64 = 5.0;
pub const PRODUCT_STARS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  #[default]
  All,
  Weights,
  Cardio,
  Accessories,
  Supplements,
  Apparel,
}

impl Category {
  pub const ALL: [Category; 6] = [
    Category::All,
    Category::Weights,
    Category::Cardio,
    Category::Accessories,
    Category::Supplements,
    Category::Apparel,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Category::All => "all",
      Category::Weights => "weights",
      Category::Cardio => "cardio",
      Category::Accessories => "accessories",
      Category::Supplements => "supplements",
      Category::Apparel => "apparel",
    }
  }

  /// The `all` sentinel matches every product.
  pub fn matches(&self, product: &Product) -> bool {
    *self == Category::All || *self == product.category
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Category {
  type Err = ();

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Category::ALL.into_iter().find(|c| c.as_str() == s).ok_or(())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
  #[default]
  Featured,
  PriceLow,
  PriceHigh,
  Rating,
  Name,
}

impl SortKey {
  pub const ALL: [SortKey; 5] =
    [SortKey::Featured, SortKey::PriceLow, SortKey::PriceHigh, SortKey::Rating, SortKey::Name];

  pub fn as_str(&self) -> &'static str {
    match self {
      SortKey::Featured => "featured",
      SortKey::PriceLow => "price-low",
      SortKey::PriceHigh => "price-high",
      SortKey::Rating => "rating",
      SortKey::Name => "name",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      SortKey::Featured => "Featured",
      SortKey::PriceLow => "Price: Low to High",
      SortKey::PriceHigh => "Price: High to Low",
      SortKey::Rating => "Highest Rated",
      SortKey::Name => "Name: A to Z",
    }
  }
}

impl FromStr for SortKey {
  type Err = ();

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    SortKey::ALL.into_iter().find(|k| k.as_str() == s).ok_or(())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
  #[default]
  Grid,
  List,
}

impl ViewMode {
  pub fn as_str(&self) -> &'static str {
    match self {
      ViewMode::Grid => "grid",
      ViewMode::List => "list",
    }
  }
}

impl FromStr for ViewMode {
  type Err = ();

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "grid" => Ok(ViewMode::Grid),
      "list" => Ok(ViewMode::List),
      _ => Err(()),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: String,
  pub name: String,
  pub price: Decimal,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub original_price: Option<Decimal>,
  pub image: String,
  pub category: Category,
  pub brand: String,
  pub rating: f64,
  pub reviews: u32,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub features: Vec<String>,
  pub in_stock: bool,
  #[serde(default)]
  pub is_new: bool,
  #[serde(default)]
  pub is_featured: bool,
}

impl Product {
  pub fn new(
    id: impl Into<String>,
    name: impl Into<String>,
    price: Decimal,
    category: Category,
  ) -> Self {
    Self {
      id: id.into(),
      name: name.into(),
      price,
      original_price: None,
      image: String::new(),
      category,
      brand: String::new(),
      rating: 0.0,
      reviews: 0,
      description: String::new(),
      features: vec![],
      in_stock: true,
      is_new: false,
      is_featured: false,
    }
  }

  /// Percent off the original price, rounded half away from zero. Zero without an
  /// original price.
  pub fn discount_percentage(&self) -> u32 {
    let Some(original) = self.original_price else {
      return 0;
    };
    if original.is_zero() || original <= self.price {
      return 0;
    }

    let pct = (original - self.price) / original * Decimal::ONE_HUNDRED;
    pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero).to_u32().unwrap_or(0)
  }

  /// Number of filled stars out of [`PRODUCT_STARS`].
  pub fn stars(&self) -> usize {
    (self.rating.clamp(0.0, PRODUCT_RATING_MAX).floor() as usize).min(PRODUCT_STARS)
  }

  pub fn is_valid(&self) -> Result<(), ProductValidationError> {
    let id = || self.id.clone();

    if self.id.trim().is_empty() {
      return Err(ProductValidationError::MissingId);
    }
    if self.name.trim().is_empty() {
      return Err(ProductValidationError::MissingName(id()));
    }
    if self.price.is_sign_negative() && !self.price.is_zero() {
      return Err(ProductValidationError::NegativePrice(id(), self.price));
    }
    if let Some(original) = self.original_price {
      if original < self.price {
        return Err(ProductValidationError::OriginalBelowPrice(id(), original, self.price));
      }
    }
    if !(0.0..=PRODUCT_RATING_MAX).contains(&self.rating) {
      return Err(ProductValidationError::RatingOutOfRange(id(), self.rating));
    }
    if self.category == Category::All {
      return Err(ProductValidationError::SentinelCategory(id()));
    }
    if !self.image.is_empty() {
      validate_url_target(&self.image)
        .map_err(|e| ProductValidationError::InvalidImage(id(), e.to_string()))?;
    }

    Ok(())
  }
}

#[derive(Debug, Error, PartialEq)]
pub enum ProductValidationError {
  #[error("product id is missing")]
  MissingId,
  #[error("product {0}: name is missing")]
  MissingName(String),
  #[error("product {0}: price {1} is negative")]
  NegativePrice(String, Decimal),
  #[error("product {0}: original price {1} is below price {2}")]
  OriginalBelowPrice(String, Decimal, Decimal),
  #[error("product {0}: rating {1} is outside 0-5")]
  RatingOutOfRange(String, f64),
  #[error("product {0}: `all` is not a product category")]
  SentinelCategory(String),
  #[error("product {0}: invalid image reference: {1}")]
  InvalidImage(String, String),
  #[error("product id {0} is used more than once")]
  DuplicateId(String),
}
