pub mod cart;
pub mod config;
pub mod contact;
pub mod errors;
pub mod products;
pub mod trans;
pub mod ui;
