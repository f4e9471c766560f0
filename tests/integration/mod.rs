//! Integration Tests Module
//!
//! End-to-end tests for the Chronos backend: the two-phase analysis
//! pipeline, the tag-grammar round trip, Markdown formatting, and settings
//! persistence.

// Two-phase pipeline against a scripted provider
mod pipeline_test;

// Combined-document tag grammar round trip
mod round_trip_test;

// Markdown-to-HTML formatter behavior
mod markdown_test;

// Settings persistence and full-replacement updates
mod settings_test;
