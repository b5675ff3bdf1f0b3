use std::collections::HashMap;

use serde_json::Value;

use crate::models::errors::AppError;
use crate::utils::slug::to_key;

/// Parses a quantity typed by the user. Integers pass through, finite decimals are floored,
/// anything else is rejected.
pub(super) fn parse_quantity(_where: &str, raw: &str) -> Result<i64, AppError> {
  let mk_err = || {
    let params = HashMap::from([("Value".to_string(), Value::from(raw))]);
    AppError::new(_where, "request.quantity.invalid", Some(params), "", None)
  };

  let raw_trimmed = raw.trim();
  if let Ok(n) = raw_trimmed.parse::<i64>() {
    return Ok(n);
  }

  let n = raw_trimmed.parse::<f64>().map_err(|_| mk_err())?;
  if !n.is_finite() {
    return Err(mk_err());
  }

  // `as` saturates at the i64 bounds
  Ok(n.floor() as i64)
}

/// Parses a dashed key ("price-low", "cardio") after normalizing what the user typed.
pub(super) fn parse_key<T: std::str::FromStr>(
  _where: &str,
  msg_id: &str,
  raw: &str,
) -> Result<T, AppError> {
  let key = to_key(raw);
  key.parse::<T>().map_err(|_| {
    let params = HashMap::from([("Value".to_string(), Value::from(raw))]);
    AppError::new(_where, msg_id, Some(params), "", None)
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::products::{Category, SortKey};

  #[test]
  fn quantities_accept_integers_and_floor_decimals() {
    assert_eq!(parse_quantity("t", "3").unwrap(), 3);
    assert_eq!(parse_quantity("t", " -5 ").unwrap(), -5);
    assert_eq!(parse_quantity("t", "2.9").unwrap(), 2);
    assert_eq!(parse_quantity("t", "-0.5").unwrap(), -1);
    assert_eq!(parse_quantity("t", "1e30").unwrap(), i64::MAX);
  }

  #[test]
  fn quantities_reject_non_numbers() {
    for raw in ["", "two", "NaN", "inf", "-inf", "-Infinity", "3x"] {
      let err = parse_quantity("t", raw).unwrap_err();
      assert_eq!(err.id, "request.quantity.invalid", "{raw}");
    }
  }

  #[test]
  fn keys_are_normalized() {
    let sort: SortKey = parse_key("t", "request.sort.invalid", "Price Low").unwrap();
    assert_eq!(sort, SortKey::PriceLow);
    let category: Category = parse_key("t", "request.category.invalid", "CARDIO").unwrap();
    assert_eq!(category, Category::Cardio);
    let err = parse_key::<Category>("t", "request.category.invalid", "yoga").unwrap_err();
    assert_eq!(err.message, "`yoga` is not a category");
  }
}
