use std::{collections::HashMap, error::Error, fmt};

use derive_more::Display;
use serde_json::Value;

use crate::models::trans::tr;

const MAX_ERROR_LENGTH: usize = 1024;

pub const MSG_ID_ERR_INTERNAL: &str = "server.internal.error";

pub type BoxedErr = Box<dyn Error + Send + Sync>;
pub type OptionalParams = Option<HashMap<String, Value>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorType {
  #[display("config_load")]
  ConfigLoad,
  #[display("config_parse")]
  ConfigParse,
  #[display("catalog_load")]
  CatalogLoad,
  #[display("render")]
  Render,
}

#[derive(Debug, Display)]
#[display("InternalError: {} {} {} {} {}", temp, err_type, err, msg, path)]
pub struct InternalError {
  pub temp: bool,
  pub err_type: ErrorType,
  pub err: BoxedErr,
  pub msg: String,
  pub path: String,
}

impl Error for InternalError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    Some(&*self.err)
  }
}

/// A user facing error. `id` is a message id and `message` its English rendering.
#[derive(Debug)]
pub struct AppError {
  pub id: String,
  pub message: String,
  pub detailed_error: String,
  pub tr_params: HashMap<String, Value>,
  pub where_: String,
  pub wrapped: Option<BoxedErr>,
}

impl AppError {
  pub fn new(
    where_: impl Into<String>,
    id: impl Into<String>,
    tr_params: OptionalParams,
    details: impl Into<String>,
    wrapped: Option<BoxedErr>,
  ) -> Self {
    let id = id.into();
    let tr_params = tr_params.unwrap_or_default();
    let message = tr(&id, &tr_params);

    Self { id, message, detailed_error: details.into(), tr_params, where_: where_.into(), wrapped }
  }

  /// Location, message, details and the wrapped error, capped at `MAX_ERROR_LENGTH` bytes.
  pub fn error_string(&self) -> String {
    let mut s = match self.where_.as_str() {
      "" => self.message.clone(),
      w => format!("{w}: {}", self.message),
    };
    if !self.detailed_error.is_empty() {
      s = format!("{s}, {}", self.detailed_error);
    }
    if let Some(wrapped) = &self.wrapped {
      s = format!("{s}, {wrapped}");
    }

    if s.len() > MAX_ERROR_LENGTH {
      let end = (0..=MAX_ERROR_LENGTH).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0);
      s.truncate(end);
      s.push_str("...");
    }
    s
  }
}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.error_string())
  }
}

impl Error for AppError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    self.wrapped.as_ref().map(|e| e.as_ref() as &(dyn Error + 'static))
  }
}
