//! Configuration loading

mod loader;

pub use loader::{ConfigLoader, RUNTIME_CONFIG_FILE};
