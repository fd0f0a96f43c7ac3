pub mod app;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod submission;
pub mod ui;

pub use app::router;
pub use config::{resolve_config, Config};
pub use state::AppState;
