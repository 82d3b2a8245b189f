//! Error types for VedaBot.

use thiserror::Error;

/// Unified error type.
#[derive(Debug, Error)]
pub enum VedaBotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Channel error: {0}")]
    Channel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VedaBotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VedaBotError::MissingCredential("TELEGRAM_BOT_TOKEN".into());
        assert_eq!(err.to_string(), "Missing credential: TELEGRAM_BOT_TOKEN");
    }

    #[test]
    fn test_io_error_converts() {
        fn open() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        assert!(matches!(open(), Err(VedaBotError::Io(_))));
    }
}
