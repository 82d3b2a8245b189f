//! Telegram Bot channel — long polling + message sending via Bot API.

use async_trait::async_trait;
use futures::stream::Stream;
use serde::{Deserialize, Serialize};
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use vedabot_core::config::TelegramConfig;
use vedabot_core::error::{Result, VedaBotError};
use vedabot_core::traits::Channel;
use vedabot_core::types::{IncomingMessage, OutgoingMessage, ThreadType};

/// Delay before polling again after a failed `getUpdates`.
const ERROR_BACKOFF: Duration = Duration::from_secs(5);

/// Thin Bot API client. Cheap to clone; the polling task owns its own copy.
#[derive(Clone)]
pub struct TelegramApi {
    client: reqwest::Client,
    bot_token: String,
    parse_mode: Option<String>,
    poll_timeout: u64,
}

impl TelegramApi {
    pub fn new(bot_token: String, config: &TelegramConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            bot_token,
            parse_mode: config.parse_mode.clone(),
            poll_timeout: config.poll_timeout,
        }
    }

    fn api_url(&self, method: &str) -> String {
        format!("https://api.telegram.org/bot{}/{}", self.bot_token, method)
    }

    /// Get updates after `offset` using long polling.
    pub async fn get_updates(&self, offset: i64) -> Result<Vec<TelegramUpdate>> {
        let response = self
            .client
            .get(self.api_url("getUpdates"))
            .query(&[
                ("offset", offset.to_string()),
                ("timeout", self.poll_timeout.to_string()),
                ("allowed_updates", "[\"message\"]".into()),
            ])
            .send()
            .await
            .map_err(|e| VedaBotError::Channel(format!("Telegram getUpdates failed: {e}")))?;

        let body: TelegramApiResponse<Vec<TelegramUpdate>> = response
            .json()
            .await
            .map_err(|e| VedaBotError::Channel(format!("Invalid Telegram response: {e}")))?;

        body.into_result("getUpdates").map(Option::unwrap_or_default)
    }

    /// Send a text message.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        let body = self.send_message_body(chat_id, text);

        let response = self
            .client
            .post(self.api_url("sendMessage"))
            .json(&body)
            .send()
            .await
            .map_err(|e| VedaBotError::Channel(format!("sendMessage failed: {e}")))?;

        let result: TelegramApiResponse<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| VedaBotError::Channel(format!("Invalid send response: {e}")))?;

        result.into_result("sendMessage").map(|_| ())
    }

    fn send_message_body(&self, chat_id: i64, text: &str) -> serde_json::Value {
        let mut body = serde_json::json!({
            "chat_id": chat_id,
            "text": text,
        });
        if let Some(mode) = &self.parse_mode {
            body["parse_mode"] = serde_json::Value::String(mode.clone());
        }
        body
    }

    /// Get bot info.
    pub async fn get_me(&self) -> Result<TelegramUser> {
        let response = self
            .client
            .get(self.api_url("getMe"))
            .send()
            .await
            .map_err(|e| VedaBotError::Channel(format!("getMe failed: {e}")))?;
        let body: TelegramApiResponse<TelegramUser> = response
            .json()
            .await
            .map_err(|e| VedaBotError::Channel(format!("Invalid getMe response: {e}")))?;
        body.into_result("getMe")?
            .ok_or_else(|| VedaBotError::Channel("No bot info".into()))
    }
}

/// Telegram Bot channel.
pub struct TelegramChannel {
    api: TelegramApi,
    poll_interval: Duration,
    connected: bool,
    /// Set from `getMe` on connect.
    bot_username: Option<String>,
}

impl TelegramChannel {
    pub fn new(bot_token: String, config: &TelegramConfig) -> Self {
        Self {
            api: TelegramApi::new(bot_token, config),
            poll_interval: Duration::from_secs(config.poll_interval),
            connected: false,
            bot_username: None,
        }
    }

    /// Spawn the polling loop and return a stream of incoming messages.
    /// The loop stops once the stream is dropped.
    pub fn start_polling(&self) -> TelegramPollingStream {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        let api = self.api.clone();
        let poll_interval = self.poll_interval;

        tokio::spawn(async move {
            let mut offset = UpdateOffset::default();
            tracing::info!("Telegram polling loop started");

            loop {
                match api.get_updates(offset.next()).await {
                    Ok(updates) => {
                        offset.advance(&updates);
                        for update in updates {
                            if let Some(msg) = update.to_incoming() {
                                if tx.send(msg).is_err() {
                                    tracing::info!("Telegram polling stopped (receiver dropped)");
                                    return;
                                }
                            }
                        }
                    }
                    Err(e) => {
                        tracing::error!("Telegram polling error: {e}");
                        tokio::time::sleep(ERROR_BACKOFF).await;
                    }
                }

                if tx.is_closed() {
                    tracing::info!("Telegram polling stopped (receiver dropped)");
                    return;
                }
                tokio::time::sleep(poll_interval).await;
            }
        });

        TelegramPollingStream { rx }
    }
}

/// Tracks the highest update id seen so each poll only returns new updates.
#[derive(Debug, Default, Clone, Copy)]
struct UpdateOffset {
    last_update_id: i64,
}

impl UpdateOffset {
    fn next(&self) -> i64 {
        self.last_update_id + 1
    }

    fn advance(&mut self, updates: &[TelegramUpdate]) {
        if let Some(max) = updates.iter().map(|u| u.update_id).max() {
            self.last_update_id = self.last_update_id.max(max);
        }
    }
}

/// Stream of incoming Telegram messages from polling.
pub struct TelegramPollingStream {
    rx: tokio::sync::mpsc::UnboundedReceiver<IncomingMessage>,
}

impl Stream for TelegramPollingStream {
    type Item = IncomingMessage;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

#[async_trait]
impl Channel for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn connect(&mut self) -> Result<()> {
        let me = self.api.get_me().await?;
        tracing::info!(
            "Telegram bot: @{} ({})",
            me.username.as_deref().unwrap_or("unknown"),
            me.first_name
        );
        self.bot_username = me.username;
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

    fn bot_username(&self) -> Option<&str> {
        self.bot_username.as_deref()
    }

    async fn send(&self, message: OutgoingMessage) -> Result<()> {
        let chat_id: i64 = message
            .thread_id
            .parse()
            .map_err(|_| VedaBotError::Channel(format!("Invalid chat_id: {}", message.thread_id)))?;
        self.api.send_message(chat_id, &message.content).await
    }

    async fn listen(&self) -> Result<Box<dyn Stream<Item = IncomingMessage> + Send + Unpin>> {
        if !self.connected {
            return Err(VedaBotError::Channel("Telegram channel not connected".into()));
        }
        Ok(Box::new(self.start_polling()))
    }
}

// --- Telegram API Types ---

#[derive(Debug, Deserialize)]
pub struct TelegramApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

impl<T> TelegramApiResponse<T> {
    fn into_result(self, method: &str) -> Result<Option<T>> {
        if !self.ok {
            return Err(VedaBotError::Channel(format!(
                "Telegram {method} error: {}",
                self.description.unwrap_or_default()
            )));
        }
        Ok(self.result)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramUpdate {
    pub update_id: i64,
    pub message: Option<TelegramMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramMessage {
    pub message_id: i64,
    pub from: Option<TelegramUser>,
    pub chat: TelegramChat,
    pub text: Option<String>,
    pub date: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramUser {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramChat {
    pub id: i64,
    #[serde(rename = "type")]
    pub chat_type: String,
    pub title: Option<String>,
}

impl TelegramUpdate {
    /// Convert to an IncomingMessage. Non-text and bot-authored messages yield `None`.
    pub fn to_incoming(&self) -> Option<IncomingMessage> {
        let msg = self.message.as_ref()?;
        let text = msg.text.as_ref()?;
        let from = msg.from.as_ref()?;

        if from.is_bot {
            return None;
        }

        Some(IncomingMessage {
            channel: "telegram".into(),
            thread_id: msg.chat.id.to_string(),
            sender_id: from.id.to_string(),
            sender_name: Some(from.first_name.clone()),
            sender_username: from.username.clone(),
            content: text.clone(),
            thread_type: match msg.chat.chat_type.as_str() {
                "private" => ThreadType::Direct,
                _ => ThreadType::Group,
            },
            timestamp: chrono::DateTime::from_timestamp(msg.date, 0)
                .unwrap_or_else(chrono::Utc::now),
        })
    }
}
