//! # VedaBot Agent
//! Routes incoming chat messages: `/start` gets the greeting, plain text goes
//! to the term matcher, everything else is ignored.
//!
//! A failed turn (the reply could not be sent) is logged and skipped; the
//! conversation and the process carry on.

use futures::StreamExt;
use std::future::Future;
use vedabot_core::config::VedaBotConfig;
use vedabot_core::error::Result;
use vedabot_core::traits::Channel;
use vedabot_core::types::{IncomingMessage, OutgoingMessage};
use vedabot_knowledge::{AnswerSource, TermMatcher, welcome_message};

/// Name used in the greeting when the sender has none.
const DEFAULT_NAME: &str = "friend";

/// Counters for one `run` session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub received: usize,
    pub replied: usize,
    pub ignored: usize,
    pub failed: usize,
}

/// Stateless dispatcher over a `TermMatcher`.
#[derive(Debug, Clone, Default)]
pub struct Agent {
    matcher: TermMatcher,
    /// Commands `@`-mentioning any other name are ignored.
    bot_username: Option<String>,
}

impl Agent {
    pub fn new(matcher: TermMatcher) -> Self {
        Self {
            matcher,
            bot_username: None,
        }
    }

    /// Set the bot's own username, as reported by the channel.
    pub fn with_bot_username(mut self, username: Option<&str>) -> Self {
        self.bot_username = username.map(String::from);
        self
    }

    pub fn from_config(config: &VedaBotConfig) -> Self {
        Self::new(TermMatcher::new(config.matcher.precedence))
    }

    pub fn matcher(&self) -> &TermMatcher {
        &self.matcher
    }

    /// Build the reply for one message, or `None` if it should be ignored.
    pub fn handle(&self, msg: &IncomingMessage) -> Option<OutgoingMessage> {
        let user = msg.sender_username.as_deref().unwrap_or("unknown");

        if msg.is_command() {
            if !self.is_addressed_to_me(msg) {
                tracing::debug!(
                    "Ignoring command for @{} from {}",
                    msg.command_mention().unwrap_or_default(),
                    msg.sender_id
                );
                return None;
            }
            return match msg.command() {
                Some("start") => {
                    tracing::info!("User {} ({}) started the bot", msg.sender_id, user);
                    let name = msg
                        .sender_name
                        .as_deref()
                        .filter(|n| !n.trim().is_empty())
                        .unwrap_or(DEFAULT_NAME);
                    Some(OutgoingMessage::reply_to(msg, welcome_message(name)))
                }
                other => {
                    tracing::debug!("Ignoring command {:?} from {}", other, msg.sender_id);
                    None
                }
            };
        }

        tracing::info!("User {} ({}) asked: {}", msg.sender_id, user, msg.content);
        let answer = self.matcher.resolve(&msg.content);
        match answer.source {
            AnswerSource::Term { term, question } => {
                tracing::debug!("Matched term '{term}' (question: {question})")
            }
            AnswerSource::Phrase(rule) => tracing::debug!("Matched phrase rule '{rule}'"),
            AnswerSource::Fallback => tracing::debug!("No match, sending fallback"),
        }
        Some(OutgoingMessage::reply_to(msg, answer.text))
    }

    /// A command without `@mention`, or one naming this bot (case-insensitive).
    fn is_addressed_to_me(&self, msg: &IncomingMessage) -> bool {
        match msg.command_mention() {
            None => true,
            Some(mention) => self
                .bot_username
                .as_deref()
                .is_some_and(|me| me.eq_ignore_ascii_case(mention)),
        }
    }

    /// Handle one message and send the reply through `channel`.
    /// Returns `Ok(false)` when the message was ignored.
    pub async fn process(&self, channel: &dyn Channel, msg: &IncomingMessage) -> Result<bool> {
        match self.handle(msg) {
            Some(reply) => {
                channel.send(reply).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Drive `channel` until its stream ends.
    pub async fn run(&self, channel: &dyn Channel) -> Result<RunStats> {
        self.run_until(channel, std::future::pending()).await
    }

    /// Drive `channel` until its stream ends or `shutdown` resolves.
    pub async fn run_until<F>(&self, channel: &dyn Channel, shutdown: F) -> Result<RunStats>
    where
        F: Future<Output = ()>,
    {
        let mut incoming = channel.listen().await?;
        let mut stats = RunStats::default();
        tokio::pin!(shutdown);

        tracing::info!("Listening on {} channel", channel.name());
        loop {
            let msg = tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Shutdown requested, leaving {} channel", channel.name());
                    break;
                }
                next = incoming.next() => match next {
                    Some(msg) => msg,
                    None => break,
                },
            };

            stats.received += 1;
            match self.process(channel, &msg).await {
                Ok(true) => stats.replied += 1,
                Ok(false) => stats.ignored += 1,
                Err(e) => {
                    stats.failed += 1;
                    tracing::warn!(
                        "Message from {} in {}:{} caused error {e}",
                        msg.sender_id,
                        msg.channel,
                        msg.thread_id
                    );
                }
            }
        }

        tracing::info!(
            "{} channel closed: {} received, {} replied, {} ignored, {} failed",
            channel.name(),
            stats.received,
            stats.replied,
            stats.ignored,
            stats.failed
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::stream::{self, Stream};
    use std::sync::Mutex;
    use vedabot_core::config::MatchPrecedence;
    use vedabot_core::error::VedaBotError;
    use vedabot_core::types::ThreadType;
    use vedabot_knowledge::{FALLBACK_MESSAGE, lookup};

    fn msg(content: &str) -> IncomingMessage {
        IncomingMessage {
            channel: "test".into(),
            thread_id: "42".into(),
            sender_id: "7".into(),
            sender_name: Some("Arjuna".into()),
            sender_username: Some("arjuna".into()),
            content: content.into(),
            thread_type: ThreadType::Direct,
            timestamp: chrono::Utc::now(),
        }
    }

    /// In-memory channel: replays `inbox`, records sends, fails on chosen contents.
    struct FakeChannel {
        inbox: Mutex<Option<Vec<IncomingMessage>>>,
        sent: Mutex<Vec<OutgoingMessage>>,
        fail_on: Option<&'static str>,
    }

    impl FakeChannel {
        fn new(contents: &[&str]) -> Self {
            Self {
                inbox: Mutex::new(Some(contents.iter().map(|c| msg(c)).collect())),
                sent: Mutex::new(Vec::new()),
                fail_on: None,
            }
        }

        fn sent(&self) -> Vec<OutgoingMessage> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Channel for FakeChannel {
        fn name(&self) -> &str {
            "fake"
        }
        async fn connect(&mut self) -> Result<()> {
            Ok(())
        }
        async fn disconnect(&mut self) -> Result<()> {
            Ok(())
        }
        fn is_connected(&self) -> bool {
            true
        }
        async fn send(&self, message: OutgoingMessage) -> Result<()> {
            if let Some(marker) = self.fail_on {
                if message.content.contains(marker) {
                    return Err(VedaBotError::Channel("send failed".into()));
                }
            }
            self.sent.lock().unwrap().push(message);
            Ok(())
        }
        async fn listen(&self) -> Result<Box<dyn Stream<Item = IncomingMessage> + Send + Unpin>> {
            let msgs = self.inbox.lock().unwrap().take().unwrap_or_default();
            Ok(Box::new(stream::iter(msgs)))
        }
    }

    #[test]
    fn test_start_greets_by_first_name() {
        let reply = Agent::default().handle(&msg("/start")).unwrap();
        assert_eq!(reply.thread_id, "42");
        assert!(reply.content.starts_with("🕉️ Namaste Arjuna!"));

        let agent = Agent::default().with_bot_username(Some("VedasBot"));
        let reply = agent.handle(&msg("/start@VedasBot")).unwrap();
        assert!(reply.content.starts_with("🕉️ Namaste Arjuna!"));
    }

    #[test]
    fn test_start_for_other_bot_ignored() {
        let agent = Agent::default().with_bot_username(Some("VedasBot"));
        assert!(agent.handle(&msg("/start@SomeOtherBot")).is_none());
        assert!(Agent::default().handle(&msg("/start@SomeOtherBot")).is_none());

        let reply = agent.handle(&msg("/start@vedasbot")).unwrap();
        assert!(reply.content.starts_with("🕉️ Namaste Arjuna!"));
    }

    #[test]
    fn test_bare_slash_goes_to_matcher() {
        let reply = Agent::default().handle(&msg("/ what is karma")).unwrap();
        assert_eq!(reply.content, lookup("karma").unwrap().render());

        let reply = Agent::default().handle(&msg("/")).unwrap();
        assert_eq!(reply.content, FALLBACK_MESSAGE);
    }

    #[test]
    fn test_start_without_name() {
        let mut m = msg("/start");
        m.sender_name = None;
        let reply = Agent::default().handle(&m).unwrap();
        assert!(reply.content.starts_with("🕉️ Namaste friend!"));
    }

    #[test]
    fn test_other_commands_ignored() {
        assert!(Agent::default().handle(&msg("/help")).is_none());
        assert!(Agent::default().handle(&msg("/karma")).is_none());
    }

    #[test]
    fn test_text_goes_to_matcher() {
        let reply = Agent::default().handle(&msg("What is Karma?")).unwrap();
        assert_eq!(reply.content, lookup("karma").unwrap().render());

        let reply = Agent::default().handle(&msg("xyz unrelated nonsense")).unwrap();
        assert_eq!(reply.content, FALLBACK_MESSAGE);
    }

    #[test]
    fn test_precedence_from_config() {
        let mut config = VedaBotConfig::default();
        config.matcher.precedence = MatchPrecedence::PhraseRulesFirst;
        let agent = Agent::from_config(&config);
        let reply = agent.handle(&msg("how many vedas are there")).unwrap();
        assert!(reply.content.contains("**four main Vedas**"));
    }

    #[tokio::test]
    async fn test_run_replies_in_order() {
        let channel = FakeChannel::new(&["/start", "karma", "/help", "purpose of life"]);
        let stats = Agent::default().run(&channel).await.unwrap();
        assert_eq!(
            stats,
            RunStats { received: 4, replied: 3, ignored: 1, failed: 0 }
        );

        let sent = channel.sent();
        assert_eq!(sent.len(), 3);
        assert!(sent[0].content.contains("Namaste"));
        assert!(sent[1].content.starts_with("📖 **KARMA**"));
        assert!(sent[2].content.contains("Purusharthas"));
    }

    #[tokio::test]
    async fn test_failed_turn_does_not_stop_loop() {
        let mut channel = FakeChannel::new(&["karma", "dharma", "moksha"]);
        channel.fail_on = Some("**DHARMA**");
        let stats = Agent::default().run(&channel).await.unwrap();
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.replied, 2);

        let sent = channel.sent();
        assert!(sent[0].content.contains("**KARMA**"));
        assert!(sent[1].content.contains("**MOKSHA**"));
    }

    #[tokio::test]
    async fn test_shutdown_stops_run() {
        struct Silent;

        #[async_trait]
        impl Channel for Silent {
            fn name(&self) -> &str {
                "silent"
            }
            async fn connect(&mut self) -> Result<()> {
                Ok(())
            }
            async fn disconnect(&mut self) -> Result<()> {
                Ok(())
            }
            fn is_connected(&self) -> bool {
                true
            }
            async fn send(&self, _message: OutgoingMessage) -> Result<()> {
                Ok(())
            }
            async fn listen(
                &self,
            ) -> Result<Box<dyn Stream<Item = IncomingMessage> + Send + Unpin>> {
                Ok(Box::new(stream::pending()))
            }
        }

        let stats = Agent::default()
            .run_until(&Silent, async {})
            .await
            .unwrap();
        assert_eq!(stats, RunStats::default());
    }

    #[tokio::test]
    async fn test_drained_inbox_ends_run() {
        let channel = FakeChannel::new(&["karma"]);
        let _drained = channel.listen().await.unwrap();
        let stats = Agent::default().run(&channel).await.unwrap();
        assert_eq!(stats.received, 0);
    }
}
