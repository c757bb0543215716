//! Configuration types.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Bot configuration.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Address the webhook listens on.
    pub bind: SocketAddr,
    /// Directory the card JSON assets are read from.
    pub cards_dir: PathBuf,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            // 3978 is the conventional local bot endpoint port.
            bind: SocketAddr::from(([0, 0, 0, 0], 3978)),
            cards_dir: PathBuf::from("Cards"),
        }
    }
}

impl BotConfig {
    /// Reads configuration from the environment, falling back to defaults.
    /// An unparsable value fails fast at startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(bind) = std::env::var("CARDBOT_BIND") {
            config.bind = bind.parse().map_err(|_| ConfigError::InvalidValue {
                key: "CARDBOT_BIND".into(),
                message: format!("not a socket address: {bind}"),
            })?;
        }
        if let Ok(dir) = std::env::var("CARDBOT_CARDS_DIR") {
            config.cards_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}
