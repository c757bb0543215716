//! Error types for card-bot.

/// Top-level error type for the bot.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Card error: {0}")]
    Card(#[from] CardError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Configuration-related errors. Surfaced at process start; not recoverable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Card construction errors. The adaptive-card asset is read from disk on
/// every turn that needs it; either failure fails that turn and no reply
/// is sent.
#[derive(Debug, thiserror::Error)]
pub enum CardError {
    #[error("Failed to read card asset {path}: {source}")]
    AssetRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Card asset {path} is not valid JSON: {source}")]
    AssetParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Reply-delivery errors from the connector transport.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Connector rejected activity ({status}): {body}")]
    SendFailed { status: u16, body: String },

    #[error("Reply activity is missing {0}")]
    MissingAddress(&'static str),
}

/// Result type alias for the bot.
pub type Result<T> = std::result::Result<T, Error>;
