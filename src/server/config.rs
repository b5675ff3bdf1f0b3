use std::{fs, io::ErrorKind};

use tracing::warn;

use crate::models::{
  config::Config,
  errors::{ErrorType, InternalError},
};
use crate::server::Server;

impl Server {
  /// Loads the service config. A missing file falls back to the defaults, a malformed one
  /// is fatal.
  pub(super) fn init_service_config(&mut self) -> Result<(), InternalError> {
    let path = "storefront.server.init_service_config";
    let file = &self.args.config_path;

    let yaml_string = match fs::read_to_string(file) {
      Ok(s) => s,
      Err(err) if err.kind() == ErrorKind::NotFound => {
        warn!(file = %file.display(), "config file not found, using defaults");
        self.config = Config::default();
        return Ok(());
      }
      Err(err) => {
        return Err(InternalError {
          temp: false,
          err_type: ErrorType::ConfigLoad,
          err: Box::new(err),
          msg: "failed to load service config file".into(),
          path: path.into(),
        });
      }
    };

    let parsed_config: Config = serde_yaml::from_str(&yaml_string).map_err(|e| InternalError {
      temp: false,
      err_type: ErrorType::ConfigParse,
      err: Box::new(e),
      msg: "failed to parse config data".into(),
      path: path.into(),
    })?;

    self.config = parsed_config;
    Ok(())
  }
}
