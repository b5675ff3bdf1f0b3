pub mod controller;
pub mod logging;
pub mod models;
pub mod server;
pub mod store;
pub mod utils;
pub mod views;
