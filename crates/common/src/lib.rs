//! Shared utilities, configuration, and error handling for Folio
//!
//! This crate provides common functionality used across the Folio service:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Password hashing
//! - Request extractors

pub mod config;
pub mod crypto;
pub mod error;
pub mod extractors;
pub mod state;

pub use config::Config;
pub use crypto::{hash_password, verify_password};
pub use error::{Error, Result};
pub use extractors::{JsonBody, ValidatedJson};
pub use state::StateError;
