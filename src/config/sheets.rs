//! Google Sheets configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Google Sheets persistence configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SheetsConfig {
    /// Target spreadsheet id (from the sheet URL)
    pub spreadsheet_id: String,

    /// Tab name inside the spreadsheet
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,

    /// OAuth2 access token with the spreadsheets scope
    pub access_token: SecretString,

    /// API endpoint, overridable for local testing
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl SheetsConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.spreadsheet_id.is_empty() {
            return Err(ValidationError::MissingRequired("SHEETS_SPREADSHEET_ID"));
        }
        if self.spreadsheet_id.contains('/') {
            return Err(ValidationError::InvalidSpreadsheetId);
        }
        if self.access_token.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("SHEETS_ACCESS_TOKEN"));
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ValidationError::InvalidSheetsEndpoint);
        }
        Ok(())
    }
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: String::new(),
            sheet_name: default_sheet_name(),
            access_token: SecretString::new(String::new()),
            endpoint: default_endpoint(),
        }
    }
}

fn default_sheet_name() -> String {
    "Database".to_string()
}

fn default_endpoint() -> String {
    "https://sheets.googleapis.com".to_string()
}
