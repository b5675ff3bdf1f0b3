use std::{str::FromStr, sync::OnceLock};

use chrono::{DateTime, Utc};
use regex::Regex;
use ulid::Ulid;

use crate::models::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
  Name,
  Email,
  Message,
}

impl FromStr for ContactField {
  type Err = ();

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "name" => Ok(ContactField::Name),
      "email" => Ok(ContactField::Email),
      "message" => Ok(ContactField::Message),
      _ => Err(()),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormData {
  pub name: String,
  pub email: String,
  pub message: String,
}

impl ContactFormData {
  pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
    let value = value.into();
    match field {
      ContactField::Name => self.name = value,
      ContactField::Email => self.email = value,
      ContactField::Message => self.message = value,
    }
  }
}

/// A message accepted by the contact form.
#[derive(Debug, Clone)]
pub struct ContactMessage {
  pub id: Ulid,
  pub received_at: DateTime<Utc>,
  pub name: String,
  pub email: String,
  pub message: String,
}

// Same shape browsers accept for <input type="email">.
fn email_regex() -> &'static Regex {
  static RE_EMAIL: OnceLock<Regex> = OnceLock::new();
  RE_EMAIL.get_or_init(|| {
    Regex::new(
      r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
  })
}

pub fn contact_is_valid(data: &ContactFormData) -> Result<(), AppError> {
  let w = "storefront.models.contact_is_valid";
  let mk_err = |id: &str| AppError::new(w, id, None, "", None);

  if data.name.trim().is_empty() {
    return Err(mk_err("contact.name.required"));
  }
  if data.email.trim().is_empty() {
    return Err(mk_err("contact.email.required"));
  }
  if !email_regex().is_match(data.email.trim()) {
    return Err(mk_err("contact.email.invalid"));
  }
  if data.message.trim().is_empty() {
    return Err(mk_err("contact.message.required"));
  }

  Ok(())
}
