//! Console entry point.
//!
//! Wires the dispatcher to the Google Sheets sink and drives it from stdin,
//! one user, one line per event. Lines starting with `/` are commands,
//! lines matching a callback payload are selections, everything else is a
//! free-text answer.

use std::error::Error;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use dental_scribe::adapters::console::ConsoleTransport;
use dental_scribe::adapters::sheets::SheetsRecordSink;
use dental_scribe::adapters::telegram::{decode_token, parse_command};
use dental_scribe::application::{messages, Dispatcher, Reply};
use dental_scribe::config::AppConfig;
use dental_scribe::domain::foundation::UserId;
use dental_scribe::domain::session::SessionStore;
use dental_scribe::ports::ChatTransport;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let sink = Arc::new(SheetsRecordSink::new(&config.sheets));
    let transport: Arc<dyn ChatTransport> = Arc::new(ConsoleTransport::new());
    let dispatcher = Dispatcher::new(sink);
    let mut store = SessionStore::new();
    let user = UserId::new(0);

    info!(sheet = %config.sheets.sheet_name, "ready, type /start to begin");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let result = if let Some(command) = parse_command(line) {
            dispatcher.handle_command(&mut store, user, command).await
        } else if let Some(token) = decode_token(line) {
            dispatcher.handle_selection(&mut store, user, token).await
        } else {
            dispatcher.handle_text(&mut store, user, line).await
        };

        let replies = match result {
            Ok(replies) => replies,
            Err(error) => vec![Reply::prompt(messages::error_message(&error))],
        };
        for reply in replies {
            transport.send(user, reply).await?;
        }
    }

    Ok(())
}
