//! # VedaBot Core
//! Shared error type, configuration, message envelopes and the `Channel` trait.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::VedaBotConfig;
pub use error::{Result, VedaBotError};
