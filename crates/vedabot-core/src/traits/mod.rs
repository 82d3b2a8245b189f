//! Trait seams between the dispatcher and its transports.

pub mod channel;

pub use channel::Channel;
