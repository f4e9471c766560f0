//! Chronos - Rust Backend Library
//!
//! Backend functionality for the Chronos document analysis web application:
//! - HTTP route handlers
//! - Business logic services (analysis pipeline, Markdown formatting, PDF intake)
//! - Storage layer (settings, documents, results)
//! - Data models and utilities

pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;
pub mod views;

// Re-export commonly used items
pub use models::settings::{AppConfig, SettingsUpdate};
pub use state::AppState;
pub use utils::error::{AppError, AppResult};
