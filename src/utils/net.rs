use http::Uri;
use std::io::{Error, ErrorKind};

/// Checks that an image reference or link parses as a URI (absolute or path-only).
pub fn validate_url_target(url: &str) -> Result<Uri, Error> {
  url
    .parse::<Uri>()
    .map_err(|e| Error::new(ErrorKind::InvalidInput, format!("invalid URL: {}", e)))
}
