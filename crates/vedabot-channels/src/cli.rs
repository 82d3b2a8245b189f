//! CLI channel — chat with the bot from a terminal.
//!
//! Each non-blank stdin line becomes one message from the local user; replies
//! are printed to stdout. `exit` or `quit` (or EOF) ends the session.

use async_trait::async_trait;
use futures::stream::Stream;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::Mutex;
use vedabot_core::error::{Result, VedaBotError};
use vedabot_core::traits::Channel;
use vedabot_core::types::{IncomingMessage, OutgoingMessage, ThreadType};

type Input = Box<dyn AsyncRead + Send + Unpin>;

pub struct CliChannel {
    input: Mutex<Option<Input>>,
    user_id: String,
    first_name: String,
    connected: bool,
}

impl CliChannel {
    /// Read from stdin as the current OS user.
    pub fn new() -> Self {
        let realname = whoami::realname();
        let first_name = realname
            .split_whitespace()
            .next()
            .map(String::from)
            .unwrap_or_else(whoami::username);
        Self::with_input(Box::new(tokio::io::stdin()), whoami::username(), first_name)
    }

    pub fn with_input(input: Input, user_id: String, first_name: String) -> Self {
        Self {
            input: Mutex::new(Some(input)),
            user_id,
            first_name,
            connected: false,
        }
    }

    fn to_incoming(&self, line: &str) -> IncomingMessage {
        IncomingMessage {
            channel: "cli".into(),
            thread_id: "cli".into(),
            sender_id: self.user_id.clone(),
            sender_name: Some(self.first_name.clone()),
            sender_username: Some(self.user_id.clone()),
            content: line.to_string(),
            thread_type: ThreadType::Direct,
            timestamp: chrono::Utc::now(),
        }
    }
}

impl Default for CliChannel {
    fn default() -> Self {
        Self::new()
    }
}

fn is_exit(line: &str) -> bool {
    matches!(line.trim(), "exit" | "quit")
}

#[async_trait]
impl Channel for CliChannel {
    fn name(&self) -> &str {
        "cli"
    }

    async fn connect(&mut self) -> Result<()> {
        self.connected = true;
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<()> {
        self.connected = false;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    async fn send(&self, message: OutgoingMessage) -> Result<()> {
        println!("{}\n", message.content);
        Ok(())
    }

    async fn listen(&self) -> Result<Box<dyn Stream<Item = IncomingMessage> + Send + Unpin>> {
        let input = self
            .input
            .lock()
            .await
            .take()
            .ok_or_else(|| VedaBotError::Channel("CLI input already consumed".into()))?;

        let template = self.to_incoming("");

        let stream = async_stream::stream! {
            let mut lines = BufReader::new(input).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        if is_exit(&line) {
                            break;
                        }
                        if line.trim().is_empty() {
                            continue;
                        }
                        yield IncomingMessage {
                            content: line,
                            timestamp: chrono::Utc::now(),
                            ..template.clone()
                        };
                    }
                    Ok(None) => break,
                    Err(e) => {
                        tracing::error!("CLI input error: {e}");
                        break;
                    }
                }
            }
        };

        Ok(Box::new(Box::pin(stream)))
    }
}
