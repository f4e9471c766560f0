//! Storage Module
//!
//! Persistence layer: JSON settings file and the write-once document and
//! result stores.

pub mod config;
pub mod documents;
pub mod results;

pub use config::ConfigService;
pub use documents::DocumentStore;
pub use results::ResultStore;
