//! VedaBot configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, VedaBotError};

/// Environment variable holding the Telegram bot token.
pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Environment variable overriding the config file path.
pub const CONFIG_ENV: &str = "VEDABOT_CONFIG";

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VedaBotConfig {
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub matcher: MatcherConfig,
}

impl VedaBotConfig {
    /// Load config from `VEDABOT_CONFIG` or the default path (~/.vedabot/config.toml).
    pub fn load() -> Result<Self> {
        Self::load_with_override(std::env::var(CONFIG_ENV).ok())
    }

    /// Load from `override_path` when set (it must exist), else from the default
    /// path, where a missing file yields the defaults.
    pub fn load_with_override(override_path: Option<String>) -> Result<Self> {
        if let Some(p) = override_path.filter(|p| !p.trim().is_empty()) {
            let path = PathBuf::from(p);
            if !path.exists() {
                return Err(VedaBotError::Config(format!(
                    "{CONFIG_ENV} points to missing file {}",
                    path.display()
                )));
            }
            return Self::load_from(&path);
        }

        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| VedaBotError::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| VedaBotError::Config(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Get the VedaBot home directory.
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".vedabot")
    }

    /// Resolve the bot token: environment first, then the config file.
    pub fn bot_token(&self) -> Result<String> {
        self.telegram.resolve_token(std::env::var(TOKEN_ENV).ok())
    }
}

/// Telegram channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    #[serde(default)]
    pub bot_token: String,
    /// Seconds to wait between `getUpdates` calls.
    #[serde(default = "default_poll_interval")]
    pub poll_interval: u64,
    /// Long-poll timeout passed to `getUpdates`, in seconds.
    #[serde(default = "default_poll_timeout")]
    pub poll_timeout: u64,
    /// `parse_mode` for `sendMessage`; unset sends plain text.
    #[serde(default)]
    pub parse_mode: Option<String>,
}

fn default_poll_interval() -> u64 { 1 }
fn default_poll_timeout() -> u64 { 30 }

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            poll_interval: default_poll_interval(),
            poll_timeout: default_poll_timeout(),
            parse_mode: None,
        }
    }
}

impl TelegramConfig {
    /// Pick the token from `env_value` if set, else from the config file.
    /// Blank values count as missing.
    pub fn resolve_token(&self, env_value: Option<String>) -> Result<String> {
        env_value
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .or_else(|| {
                let t = self.bot_token.trim();
                (!t.is_empty()).then(|| t.to_string())
            })
            .ok_or_else(|| VedaBotError::MissingCredential(TOKEN_ENV.into()))
    }
}

/// Order in which term entries and phrase rules are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchPrecedence {
    /// Term table first, then phrase rules.
    #[default]
    TermsFirst,
    /// Phrase rules first, then the term table.
    PhraseRulesFirst,
}

/// Matcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MatcherConfig {
    #[serde(default)]
    pub precedence: MatchPrecedence,
}
