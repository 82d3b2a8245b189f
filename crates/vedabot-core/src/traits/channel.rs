//! Channel trait — a chat transport that yields incoming messages and sends replies.

use async_trait::async_trait;
use futures::stream::Stream;

use crate::error::Result;
use crate::types::{IncomingMessage, OutgoingMessage};

#[async_trait]
pub trait Channel: Send + Sync {
    /// Channel name ("telegram", "cli").
    fn name(&self) -> &str;

    /// Verify credentials / open the transport.
    async fn connect(&mut self) -> Result<()>;

    async fn disconnect(&mut self) -> Result<()>;

    fn is_connected(&self) -> bool;

    /// The bot's own username, once known. Commands mentioning another bot are ignored.
    fn bot_username(&self) -> Option<&str> {
        None
    }

    /// Send a text reply.
    async fn send(&self, message: OutgoingMessage) -> Result<()>;

    /// Stream of incoming text messages. Ends when the transport closes.
    async fn listen(&self) -> Result<Box<dyn Stream<Item = IncomingMessage> + Send + Unpin>>;
}
