use std::time::Duration;

use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub service: ServiceConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
  pub env: String,
  pub catalog_path: String,
  pub featured_limit: usize,
  pub load_more_threshold: usize,
  pub currency_symbol: String,
  pub contact: ContactConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
  pub submit_delay_ms: u64,
  pub confirmation_ttl_ms: u64,
}

impl Default for ServiceConfig {
  fn default() -> Self {
    ServiceConfig {
      env: "development".to_string(),
      catalog_path: "catalog.yaml".to_string(),
      featured_limit: 4,
      load_more_threshold: 8,
      currency_symbol: "$".to_string(),
      contact: ContactConfig::default(),
    }
  }
}

impl Default for ContactConfig {
  fn default() -> Self {
    ContactConfig { submit_delay_ms: 1000, confirmation_ttl_ms: 5000 }
  }
}

impl ContactConfig {
  pub fn submit_delay(&self) -> Duration {
    Duration::from_millis(self.submit_delay_ms)
  }

  pub fn confirmation_ttl(&self) -> Duration {
    Duration::from_millis(self.confirmation_ttl_ms)
  }
}
