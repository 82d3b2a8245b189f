//! # VedaBot Channels
//! Transports implementing the `Channel` trait.

pub mod cli;
pub mod telegram;

pub use cli::CliChannel;
pub use telegram::TelegramChannel;
