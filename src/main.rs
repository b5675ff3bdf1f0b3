use std::error::Error;
use std::{env, path::PathBuf};

use gym_storefront::logging::init_logging;
use gym_storefront::server::{Server, ServerArgs};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
  init_logging()?;

  let config_path = env::args().nth(1).unwrap_or_else(|| "config.yaml".to_string());
  let args = ServerArgs { config_path: PathBuf::from(config_path) };

  let server = Server::new(args).await;
  match server {
    Ok(mut srv) => srv.run().await,
    Err(e) => Err(e),
  }
}
