use std::collections::HashMap;

use serde_json::Value;

use crate::{
  controller::helpers::{parse_key, parse_quantity},
  models::{
    contact::ContactField,
    errors::AppError,
    products::{Category, SortKey, ViewMode},
  },
};

pub const HELP: &[(&str, &str)] = &[
  ("page", "show the storefront"),
  ("add <id>", "add a product to the cart"),
  ("qty <id> <n>", "set a cart quantity, 0 or less removes the line"),
  ("inc <id> / dec <id>", "change a cart quantity by one"),
  ("remove <id>", "remove a product from the cart"),
  ("clear", "empty the cart"),
  ("cart open|close", "show or hide the cart panel"),
  ("view <id> / close", "open or close product details"),
  ("category <name>", "filter: all, weights, cardio, accessories, supplements, apparel"),
  ("sort <key>", "featured, price-low, price-high, rating, name"),
  ("density grid|list", "change the product grid layout"),
  ("menu", "toggle the navigation menu"),
  ("contact", "show the contact form"),
  ("contact name|email|message <text>", "fill a contact form field"),
  ("contact submit", "send the contact form"),
  ("help", "list commands"),
  ("quit", "leave the store"),
];

/// Everything a user can ask the storefront to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
  ShowPage,
  AddToCart(String),
  UpdateQuantity(String, i64),
  Increment(String),
  Decrement(String),
  RemoveItem(String),
  ClearCart,
  OpenCart,
  CloseCart,
  ViewProduct(String),
  CloseProduct,
  SetCategory(Category),
  SetSort(SortKey),
  SetViewMode(ViewMode),
  ToggleMenu,
  ShowContact,
  SetContactField(ContactField, String),
  SubmitContact,
  Help,
  Quit,
}

impl Intent {
  /// Parses one command line. Errors are meant to be shown to the user.
  pub fn parse(line: &str) -> Result<Intent, AppError> {
    let w = "storefront.controller.intent_parse";
    let mk_err = |id: &str, params: &[(&str, &str)]| {
      let params = params.iter().map(|(k, v)| (k.to_string(), Value::from(*v))).collect();
      AppError::new(w, id, Some(params), "", None)
    };

    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
      Some((command, rest)) => (command, rest.trim()),
      None => (line, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    let missing = |expected: &str| {
      mk_err("request.command.missing_arg", &[("Command", command), ("Expected", expected)])
    };
    let id = || args.first().map(|s| s.to_string()).ok_or_else(|| missing("a product id"));

    let intent = match command.to_ascii_lowercase().as_str() {
      "" => return Err(mk_err("request.command.empty", &[])),
      "page" | "home" | "products" => Intent::ShowPage,
      "add" => Intent::AddToCart(id()?),
      "qty" | "quantity" => {
        let &[id, qty] = args.as_slice() else {
          return Err(missing("a product id and a quantity"));
        };
        Intent::UpdateQuantity(id.to_string(), parse_quantity(w, qty)?)
      }
      "inc" | "+" => Intent::Increment(id()?),
      "dec" | "-" => Intent::Decrement(id()?),
      "remove" | "rm" => Intent::RemoveItem(id()?),
      "clear" => Intent::ClearCart,
      "cart" => match args.first().copied() {
        None | Some("open") => Intent::OpenCart,
        Some("close") => Intent::CloseCart,
        Some(_) => return Err(missing("open or close")),
      },
      "view" | "details" => Intent::ViewProduct(id()?),
      "close" => Intent::CloseProduct,
      "category" => {
        if rest.is_empty() {
          return Err(missing("a category"));
        }
        Intent::SetCategory(parse_key(w, "request.category.invalid", rest)?)
      }
      "sort" => {
        if rest.is_empty() {
          return Err(missing("a sort order"));
        }
        Intent::SetSort(parse_key(w, "request.sort.invalid", rest)?)
      }
      "density" | "layout" => {
        if rest.is_empty() {
          return Err(missing("grid or list"));
        }
        Intent::SetViewMode(parse_key(w, "request.density.invalid", rest)?)
      }
      "menu" => Intent::ToggleMenu,
      "contact" => parse_contact(w, rest)?,
      "help" | "?" => Intent::Help,
      "quit" | "exit" => Intent::Quit,
      _ => return Err(mk_err("request.command.unknown", &[("Command", command)])),
    };

    Ok(intent)
  }
}

fn parse_contact(w: &str, rest: &str) -> Result<Intent, AppError> {
  let (sub, value) = match rest.split_once(char::is_whitespace) {
    Some((sub, value)) => (sub, value.trim()),
    None => (rest, ""),
  };

  match sub {
    "" => Ok(Intent::ShowContact),
    "submit" | "send" => Ok(Intent::SubmitContact),
    field => {
      let field = field.parse::<ContactField>().map_err(|_| {
        let params = HashMap::from([("Value".to_string(), Value::from(field))]);
        AppError::new(w, "contact.field.invalid", Some(params), "", None)
      })?;
      Ok(Intent::SetContactField(field, value.to_string()))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_cart_commands() {
    assert_eq!(Intent::parse("add db-01").unwrap(), Intent::AddToCart("db-01".into()));
    assert_eq!(Intent::parse("  qty db-01 3 ").unwrap(), Intent::UpdateQuantity("db-01".into(), 3));
    assert_eq!(Intent::parse("qty db-01 2.7").unwrap(), Intent::UpdateQuantity("db-01".into(), 2));
    assert_eq!(Intent::parse("dec x").unwrap(), Intent::Decrement("x".into()));
    assert_eq!(Intent::parse("clear").unwrap(), Intent::ClearCart);
    assert_eq!(Intent::parse("cart").unwrap(), Intent::OpenCart);
    assert_eq!(Intent::parse("cart close").unwrap(), Intent::CloseCart);
  }

  #[test]
  fn rejects_bad_quantities_at_the_boundary() {
    let err = Intent::parse("qty db-01 -inf").unwrap_err();
    assert_eq!(err.id, "request.quantity.invalid");
    let err = Intent::parse("qty db-01").unwrap_err();
    assert_eq!(err.id, "request.command.missing_arg");
    assert_eq!(err.message, "`qty` expects a product id and a quantity");
  }

  #[test]
  fn parses_catalog_controls() {
    assert_eq!(Intent::parse("category Cardio").unwrap(), Intent::SetCategory(Category::Cardio));
    assert_eq!(Intent::parse("sort price high").unwrap(), Intent::SetSort(SortKey::PriceHigh));
    assert_eq!(Intent::parse("density list").unwrap(), Intent::SetViewMode(ViewMode::List));
    assert_eq!(Intent::parse("sort cheapest").unwrap_err().id, "request.sort.invalid");
    assert_eq!(Intent::parse("density").unwrap_err().id, "request.command.missing_arg");
  }

  #[test]
  fn parses_contact_commands() {
    assert_eq!(Intent::parse("contact").unwrap(), Intent::ShowContact);
    assert_eq!(
      Intent::parse("contact message Do you ship  to Oslo?").unwrap(),
      Intent::SetContactField(ContactField::Message, "Do you ship  to Oslo?".into())
    );
    assert_eq!(Intent::parse("contact submit").unwrap(), Intent::SubmitContact);
    assert_eq!(Intent::parse("contact phone 123").unwrap_err().id, "contact.field.invalid");
  }

  #[test]
  fn unknown_and_empty_commands() {
    assert_eq!(Intent::parse("   ").unwrap_err().id, "request.command.empty");
    let err = Intent::parse("checkout now").unwrap_err();
    assert_eq!(err.message, "unknown command `checkout`");
    assert_eq!(Intent::parse("add").unwrap_err().id, "request.command.missing_arg");
  }
}
