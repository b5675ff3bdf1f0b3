mod config;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::spawn;
use tokio::sync::mpsc::{self, Receiver};
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::controller::{Controller, ControllerArgs, Intent, Screen};
use crate::models::config::Config;
use crate::models::errors::{BoxedErr, ErrorType, InternalError, MSG_ID_ERR_INTERNAL};
use crate::models::trans::tr;
use crate::store::catalog::{static_catalog::StaticCatalog, CatalogStore};
use crate::views::Views;

/// Runs one storefront session over a line-oriented terminal.
pub struct Server {
  pub(crate) errors: mpsc::Sender<InternalError>,
  pub(crate) config: Config,
  pub(crate) args: ServerArgs,
}

#[derive(Debug)]
pub struct ServerArgs {
  pub config_path: PathBuf,
}

impl Server {
  pub async fn new(args: ServerArgs) -> Result<Self, Box<dyn Error>> {
    let (tx, rx) = mpsc::channel::<InternalError>(100);

    let mut server = Self { errors: tx, config: Config::default(), args };
    server.init_service_config()?;

    spawn(async move {
      Server::errors_listener(rx).await;
    });

    Ok(server)
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub async fn run(&mut self) -> Result<(), Box<dyn Error>> {
    let mk_err = |msg: &str, err_type: ErrorType, e: BoxedErr| InternalError {
      temp: false,
      err_type,
      err: e,
      msg: msg.to_string(),
      path: "storefront.server.run".into(),
    };

    let cfg = self.config.service.clone();
    let catalog = StaticCatalog::load(&cfg.catalog_path)
      .await
      .map_err(|e| mk_err("failed to load the catalog", ErrorType::CatalogLoad, Box::new(e)))?;
    let views = Views::new()
      .map_err(|e| mk_err("failed to load templates", ErrorType::Render, Box::new(e)))?;

    info!(
      env = %cfg.env,
      products = catalog.products().len(),
      "storefront is open"
    );

    let controller = Controller::new(ControllerArgs { cfg, catalog: Arc::new(catalog) });
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    self.serve(controller, views, stdin, stdout).await
  }

  /// Reads one intent per line and writes the re-rendered screen after each. Returns on
  /// `quit` or end of input.
  pub async fn serve<R, W>(
    &self,
    mut controller: Controller,
    views: Views,
    input: R,
    mut output: W,
  ) -> Result<(), Box<dyn Error>>
  where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
  {
    let mut lines = input.lines();
    let mut cart_changes = controller.cart().subscribe();

    let page = self.render(&views, Screen::Page, &controller).await;
    output.write_all(page.as_bytes()).await?;
    output.flush().await?;

    while let Some(line) = lines.next_line().await? {
      if line.trim().is_empty() {
        continue;
      }

      let intent = match Intent::parse(&line) {
        Ok(intent) => intent,
        Err(err) => {
          output.write_all(format!("! {}\n", err.message).as_bytes()).await?;
          continue;
        }
      };

      let screen = match controller.dispatch(intent).await {
        Ok(screen) => screen,
        Err(err) => {
          output.write_all(format!("! {}\n", err.message).as_bytes()).await?;
          continue;
        }
      };

      let mut out = self.render(&views, screen, &controller).await;

      // Screens without the header still get the badge refreshed when the cart moved.
      if cart_changes.has_changed().unwrap_or(false) {
        let summary = *cart_changes.borrow_and_update();
        debug!(
          version = summary.version,
          items = summary.item_count,
          total = %summary.total,
          "cart changed"
        );
        if matches!(screen, Screen::Contact | Screen::Help) {
          out.push_str(&self.render_header(&views, &controller).await);
        }
      }

      output.write_all(out.as_bytes()).await?;
      output.flush().await?;

      if screen == Screen::Quit {
        break;
      }
    }

    info!("session ended");
    Ok(())
  }

  async fn render(&self, views: &Views, screen: Screen, controller: &Controller) -> String {
    match views.render(screen, controller, Instant::now()) {
      Ok(out) => out,
      Err(e) => self.render_failed(e).await,
    }
  }

  async fn render_header(&self, views: &Views, controller: &Controller) -> String {
    match views.render_header(controller) {
      Ok(out) => out,
      Err(e) => self.render_failed(e).await,
    }
  }

  async fn render_failed(&self, e: tera::Error) -> String {
    let err = InternalError {
      temp: false,
      err_type: ErrorType::Render,
      err: Box::new(e),
      msg: "failed to render the screen".into(),
      path: "storefront.server.render".into(),
    };
    if let Err(e) = self.errors.send(err).await {
      warn!(err = %e.0, "error listener is gone, render failure not reported");
    }
    format!("! {}\n", tr(MSG_ID_ERR_INTERNAL, &Default::default()))
  }

  async fn errors_listener(mut receiver: Receiver<InternalError>) {
    while let Some(msg) = receiver.recv().await {
      error!(path = %msg.path, err_type = %msg.err_type, "{}", msg);
    }
  }
}

#[cfg(test)]
mod tests {
  use rust_decimal::Decimal;

  use super::*;
  use crate::models::products::{Category, Product};
  use crate::store::catalog::static_catalog::StaticCatalogArgs;

  async fn session(input: &str) -> String {
    let args = ServerArgs { config_path: PathBuf::from("does-not-exist.yaml") };
    let server = Server::new(args).await.unwrap();

    let price = Decimal::new(4999, 2);
    let mut belt = Product::new("belt", "Lifting Belt", price, Category::Accessories);
    belt.is_featured = true;
    let rope = Product::new("rope", "Speed Rope", Decimal::new(1500, 2), Category::Cardio);
    let catalog =
      StaticCatalog::new(StaticCatalogArgs { products: vec![belt, rope], categories: vec![] })
        .unwrap();

    let mut cfg = server.config().service.clone();
    cfg.contact.submit_delay_ms = 0;
    let controller = Controller::new(ControllerArgs { cfg, catalog: Arc::new(catalog) });

    let mut output = Vec::new();
    server.serve(controller, Views::new().unwrap(), input.as_bytes(), &mut output).await.unwrap();
    String::from_utf8(output).unwrap()
  }

  #[tokio::test]
  async fn missing_config_falls_back_to_defaults() {
    let args = ServerArgs { config_path: PathBuf::from("does-not-exist.yaml") };
    let server = Server::new(args).await.unwrap();
    assert_eq!(server.config().service.featured_limit, 4);
  }

  #[tokio::test]
  async fn session_renders_after_each_intent() {
    let out = session("add belt\nadd belt\ncart\nquit\nadd rope\n").await;
    assert!(out.contains("Featured Products"));
    assert!(out.contains("Shopping Cart (2)"));
    assert!(out.contains("Total: $99.98"));
    assert!(out.contains("Thanks for visiting FitGear!"));
    assert!(!out.contains("Speed Rope ($15.00 each)"));
  }

  fn bare_server() -> (Server, Receiver<InternalError>) {
    let (tx, rx) = mpsc::channel(1);
    let args = ServerArgs { config_path: PathBuf::from("config.yaml") };
    (Server { errors: tx, config: Config::default(), args }, rx)
  }

  #[tokio::test]
  async fn render_failures_reach_the_listener() {
    let (server, mut rx) = bare_server();
    let out = server.render_failed(tera::Error::msg("bad template")).await;
    assert_eq!(out, "! something went wrong, please try again\n");

    let err = rx.recv().await.unwrap();
    assert_eq!(err.err_type, ErrorType::Render);
    assert_eq!(err.path, "storefront.server.render");
  }

  #[tokio::test]
  async fn render_failures_survive_a_closed_listener() {
    let (server, rx) = bare_server();
    drop(rx);
    let out = server.render_failed(tera::Error::msg("bad template")).await;
    assert_eq!(out, "! something went wrong, please try again\n");
  }

  #[tokio::test]
  async fn user_errors_do_not_end_the_session() {
    let out = session("checkout\nqty belt NaN\n\nadd belt\ncontact\n").await;
    assert!(out.contains("! unknown command `checkout`"));
    assert!(out.contains("Cart (1)"));
    assert!(out.contains("Send Message"));
  }
}
