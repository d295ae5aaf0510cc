//! Configuration module
//!
//! This module handles loading the sortcut settings from the optional
//! TOML configuration file.

pub mod loader;
pub mod schema;

// Re-export public types and functions
// Note: These are part of the public API and used in tests, even if not all are used in main.rs
#[allow(unused_imports)]
pub use loader::expand_tilde;
#[allow(unused_imports)]
pub use schema::{Config, ShellConfig, StoreConfig};
