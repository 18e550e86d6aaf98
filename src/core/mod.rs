//! # Core Module
//!
//! Configuration and text normalization shared by every layer of the assistant.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add text module with wake word handling
//! - 1.0.0: Initial creation with config module

pub mod config;
pub mod text;

// Re-export commonly used items
pub use config::Config;
pub use text::{normalize, strip_wake_word};
