//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `DENTAL_SCRIBE`
//! prefix; nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use dental_scribe::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod sheets;
mod telegram;

pub use error::{ConfigError, ValidationError};
pub use sheets::SheetsConfig;
pub use telegram::TelegramConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Telegram bot configuration; unused by the console transport, so the
    /// whole section may be absent from the environment
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Google Sheets persistence configuration
    pub sheets: SheetsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present, then reads variables such as
    /// `DENTAL_SCRIBE__SHEETS__SPREADSHEET_ID` and
    /// `DENTAL_SCRIBE__SHEETS__ACCESS_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when required variables are missing or a value
    /// cannot be parsed into its expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DENTAL_SCRIBE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.sheets.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("DENTAL_SCRIBE__SHEETS__SPREADSHEET_ID", "1AbC");
        env::set_var("DENTAL_SCRIBE__SHEETS__ACCESS_TOKEN", "ya29.token");
    }

    fn clear_env() {
        env::remove_var("DENTAL_SCRIBE__SHEETS__SPREADSHEET_ID");
        env::remove_var("DENTAL_SCRIBE__SHEETS__ACCESS_TOKEN");
        env::remove_var("DENTAL_SCRIBE__SHEETS__SHEET_NAME");
    }

    #[test]
    fn load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.expect("config should load");
        assert_eq!(config.sheets.spreadsheet_id, "1AbC");
        assert_eq!(config.sheets.sheet_name, "Database");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn telegram_section_is_optional() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.expect("config should load without telegram vars");
        assert_eq!(config.telegram.image_dir, "images");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn sheet_name_is_overridable() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("DENTAL_SCRIBE__SHEETS__SHEET_NAME", "Arsip");
        let result = AppConfig::load();
        clear_env();

        let config = result.expect("config should load");
        assert_eq!(config.sheets.sheet_name, "Arsip");
    }

    #[test]
    fn missing_required_values_fail_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        assert!(AppConfig::load().is_err());
    }
}
