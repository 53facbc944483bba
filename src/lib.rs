pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod poll;
pub mod routes;
pub mod state;
pub mod templates;
