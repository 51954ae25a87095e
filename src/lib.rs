pub mod config;
pub mod db;
pub mod filters;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod utils;

pub use state::AppState;
