//! Google Sheets record sink.
//!
//! Append flow mirrors the sheet's conventions: re-read column A to pick up
//! the running number (other writers share the sheet), append one text row
//! per tooth, then overwrite the condition and caries-location cells of the
//! appended range with `=IMAGE()` formulas.

use async_trait::async_trait;
use chrono::Local;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::rows::{self, ImageCell};
use crate::config::SheetsConfig;
use crate::domain::record::Record;
use crate::ports::{AppendReceipt, RecordSink, SinkError};

pub struct SheetsRecordSink {
    client: Client,
    endpoint: String,
    spreadsheet_id: String,
    sheet_name: String,
    access_token: SecretString,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct AppendBody<'a> {
    values: &'a [Vec<String>],
}

#[derive(Debug, Deserialize)]
struct AppendResponse {
    updates: AppendUpdates,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendUpdates {
    updated_range: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchUpdateBody {
    value_input_option: &'static str,
    data: Vec<BatchEntry>,
}

#[derive(Debug, Serialize)]
struct BatchEntry {
    range: String,
    values: Vec<Vec<String>>,
}

impl SheetsRecordSink {
    pub fn new(config: &SheetsConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            spreadsheet_id: config.spreadsheet_id.clone(),
            sheet_name: config.sheet_name.clone(),
            access_token: config.access_token.clone(),
        }
    }

    fn url(&self, tail: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/{}",
            self.endpoint, self.spreadsheet_id, tail
        )
    }

    /// Last running number in column A, or 0 when the sheet is empty or
    /// unreadable. Read failures degrade to 0 rather than blocking the
    /// append; the sheet still gets the data.
    async fn current_counter(&self) -> u64 {
        let url = self.url(&format!("values/{}!A:A", self.sheet_name));
        let result = self
            .client
            .get(&url)
            .bearer_auth(self.access_token.expose_secret())
            .send()
            .await;
        let response = match result {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                warn!(status = %response.status(), "counter read rejected, starting from 0");
                return 0;
            }
            Err(error) => {
                warn!(%error, "counter read failed, starting from 0");
                return 0;
            }
        };
        match response.json::<ValueRange>().await {
            // First row is the header.
            Ok(range) if range.values.len() > 1 => range
                .values
                .last()
                .and_then(|row| row.first())
                .and_then(|cell| cell.parse().ok())
                .unwrap_or(0),
            Ok(_) => 0,
            Err(error) => {
                warn!(%error, "counter response unparsable, starting from 0");
                0
            }
        }
    }

    async fn append_values(&self, rows: &[Vec<String>]) -> Result<String, SinkError> {
        let url = self.url(&format!("values/{}!A:A:append", self.sheet_name));
        let response = self
            .client
            .post(&url)
            .bearer_auth(self.access_token.expose_secret())
            .query(&[
                ("valueInputOption", "USER_ENTERED"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&AppendBody { values: rows })
            .send()
            .await
            .map_err(|e| SinkError::Transport(e.to_string()))?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SinkError::Rejected(format!("{status}: {body}")));
        }
        let parsed: AppendResponse = response
            .json()
            .await
            .map_err(|e| SinkError::Transport(e.to_string()))?;
        Ok(parsed.updates.updated_range)
    }

    async fn write_images(&self, cells: Vec<ImageCell>) -> Result<(), SinkError> {
        if cells.is_empty() {
            return Ok(());
        }
        let url = self.url("values:batchUpdate");
        let body = BatchUpdateBody {
            value_input_option: "USER_ENTERED",
            data: cells
                .into_iter()
                .map(|cell| BatchEntry {
                    range: format!("{}!{}", self.sheet_name, cell.cell),
                    values: vec![vec![cell.formula]],
                })
                .collect(),
        };
        let response = self
            .client
            .post(&url)
            .bearer_auth(self.access_token.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| SinkError::Transport(e.to_string()))?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SinkError::Rejected(format!("{status}: {body}")));
        }
        Ok(())
    }
}

/// Extracts the first row number from an A1 range like `Database!A5:AQ6`.
fn start_row(updated_range: &str) -> Option<u64> {
    let range = updated_range.rsplit('!').next()?;
    let digits: String = range
        .chars()
        .skip_while(|c| c.is_ascii_alphabetic())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[async_trait]
impl RecordSink for SheetsRecordSink {
    async fn append_record(
        &self,
        patient: &Record,
        teeth: &[Record],
        examination: &Record,
    ) -> Result<AppendReceipt, SinkError> {
        let now = Local::now();
        let record_id = format!("RMD-{}", now.format("%Y%m%d%H%M%S"));
        let date = now.format("%d/%m/%Y").to_string();
        let time = now.format("%H:%M:%S").to_string();

        let first_no = self.current_counter().await + 1;
        let built = rows::build_rows(
            patient,
            teeth,
            examination,
            &record_id,
            &date,
            &time,
            first_no,
        );
        let updated_range = self.append_values(&built).await?;
        debug!(%record_id, %updated_range, rows = built.len(), "rows appended");

        // Image formulas are best-effort decoration; a failure here still
        // counts the append as stored. Matches how the sheet was run by hand.
        if let Some(row) = start_row(&updated_range) {
            if let Err(error) = self.write_images(rows::image_cells(teeth, row)).await {
                warn!(%error, "image cell update failed");
            }
        }

        Ok(AppendReceipt {
            record_id,
            rows_inserted: built.len(),
        })
    }
}
