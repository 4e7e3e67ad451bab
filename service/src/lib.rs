// service/src/lib.rs

//! HTTP front end of the product catalog: configuration, the SQLite store,
//! and the actix-web handlers that map requests onto `catalog::ProductStore`.

pub mod config;
pub mod db;
pub mod errors;
pub mod state;
pub mod telemetry;
pub mod web;
