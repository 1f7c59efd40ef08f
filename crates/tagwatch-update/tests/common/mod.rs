//! Common test infrastructure for tagwatch-update tests
//!
//! # Usage
//!
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Modules
//!
//! - `constants`: tag strings, API paths, payload bodies
//! - `builders`: fluent builder for release JSON payloads
//! - `mock_server`: wiremock setup helpers and a client pointed at them

// Each test binary uses a different subset of the helpers
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod builders;
pub mod constants;
pub mod mock_server;

pub use builders::*;
pub use constants::*;
pub use mock_server::*;
