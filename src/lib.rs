//! Client engine of the trading-signal dashboard: derives dashboard
//! statistics from the analysis history, drives view navigation and runs
//! ticker analyses against the backend.

pub mod app;
pub mod config;
pub mod errors;
pub mod external;
pub mod logging;
pub mod models;
pub mod render;
pub mod services;
pub mod state;

pub use app::App;
pub use errors::AppError;
pub use state::AppState;
