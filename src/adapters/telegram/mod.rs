//! Telegram wire-format boundary.
//!
//! Callback payloads and slash-commands are plain strings on the wire; this
//! adapter is the only place they are parsed. The core works exclusively
//! with the decoded [`Command`] and [`SelectionToken`] unions.
//!
//! [`Command`]: crate::application::Command
//! [`SelectionToken`]: crate::application::SelectionToken

mod commands;
mod tokens;

pub use commands::parse_command;
pub use tokens::{decode_token, encode_token};
