//! Telegram configuration

use secrecy::SecretString;
use serde::Deserialize;

/// Telegram bot configuration
///
/// Optional while the binary runs the console transport; only a Telegram
/// transport consumes the token, so nothing here is required at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot API token issued by BotFather
    #[serde(default = "empty_token")]
    pub bot_token: SecretString,

    /// Directory holding the caries reference images
    #[serde(default = "default_image_dir")]
    pub image_dir: String,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: empty_token(),
            image_dir: default_image_dir(),
        }
    }
}

fn empty_token() -> SecretString {
    SecretString::new(String::new())
}

fn default_image_dir() -> String {
    "images".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn default_image_dir_is_relative() {
        let config = TelegramConfig::default();
        assert_eq!(config.image_dir, "images");
    }

    #[test]
    fn token_defaults_to_empty() {
        let config = TelegramConfig::default();
        assert!(config.bot_token.expose_secret().is_empty());
    }
}
