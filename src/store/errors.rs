use std::error::Error;
use std::fmt;
use std::io::ErrorKind;

use crate::models::products::ProductValidationError;

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogErrorType {
  NotFound,
  Io,
  UnsupportedFormat,
  Yaml,
  Json,
  InvalidProduct,
}

impl fmt::Display for CatalogErrorType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CatalogErrorType::NotFound => write!(f, "not_found"),
      CatalogErrorType::Io => write!(f, "io_error"),
      CatalogErrorType::UnsupportedFormat => write!(f, "unsupported_format"),
      CatalogErrorType::Yaml => write!(f, "yaml_unmarshal"),
      CatalogErrorType::Json => write!(f, "json_unmarshal"),
      CatalogErrorType::InvalidProduct => write!(f, "invalid_product"),
    }
  }
}

#[derive(Debug)]
pub struct CatalogError {
  pub err_type: CatalogErrorType,
  pub err: Option<Box<dyn Error + Send + Sync>>,
  pub msg: String,
  pub path: String,
  pub details: String,
}

impl fmt::Display for CatalogError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut parts = Vec::new();

    if !self.path.is_empty() {
      parts.push(format!("path: {}", self.path));
    }

    parts.push(format!("err_type: {}", self.err_type));

    if !self.msg.is_empty() {
      parts.push(format!("msg: {}", self.msg));
    }

    if !self.details.is_empty() {
      parts.push(format!("details: {}", self.details));
    }

    if let Some(ref err) = self.err {
      parts.push(format!("err: {}", err));
    }

    write!(f, "{}", parts.join(", "))
  }
}

impl Error for CatalogError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    self.err.as_ref().map(|e| &**e as &dyn Error)
  }
}

impl CatalogError {
  pub fn new(
    err_type: CatalogErrorType,
    err: Option<Box<dyn Error + Send + Sync>>,
    msg: impl Into<String>,
    path: impl Into<String>,
    details: impl Into<String>,
  ) -> Self {
    Self { err_type, err, msg: msg.into(), path: path.into(), details: details.into() }
  }
}

pub fn handle_io_error(err: std::io::Error, path: &str, file: &str) -> CatalogError {
  let (err_type, msg) = match err.kind() {
    ErrorKind::NotFound => (CatalogErrorType::NotFound, "catalog file is not found"),
    ErrorKind::PermissionDenied => {
      (CatalogErrorType::Io, "insufficient permissions to read the catalog")
    }
    _ => (CatalogErrorType::Io, "failed to read the catalog"),
  };
  CatalogError::new(err_type, Some(Box::new(err)), msg, path, file)
}

pub fn handle_yaml_error(err: serde_yaml::Error, path: &str) -> CatalogError {
  let details = match err.location() {
    Some(loc) => format!("line {} column {}", loc.line(), loc.column()),
    None => String::new(),
  };
  CatalogError::new(CatalogErrorType::Yaml, Some(Box::new(err)), "malformed catalog", path, details)
}

pub fn handle_json_error(err: serde_json::Error, path: &str) -> CatalogError {
  let details = format!("line {} column {}", err.line(), err.column());
  CatalogError::new(CatalogErrorType::Json, Some(Box::new(err)), "malformed catalog", path, details)
}

pub fn handle_product_error(err: ProductValidationError, path: &str) -> CatalogError {
  let details = err.to_string();
  CatalogError::new(
    CatalogErrorType::InvalidProduct,
    Some(Box::new(err)),
    "catalog contains an invalid product",
    path,
    details,
  )
}
