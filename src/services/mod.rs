//! Services Module
//!
//! Business logic: the two-phase analysis pipeline, PDF document intake, and
//! the Markdown-to-HTML formatter.

pub mod analysis;
pub mod document;
pub mod markdown;
