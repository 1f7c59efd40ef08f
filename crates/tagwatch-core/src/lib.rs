//! # tagwatch-core
//!
//! Core library for tagwatch providing:
//! - Runtime configuration types and the layered config loader
//! - The shared error type
//! - Home and config directory helpers

pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use config::ConfigLoader;
pub use error::{Error, Result};
pub use types::RuntimeConfig;
pub use utils::get_home_dir;
