//! Console chat transport.
//!
//! Renders replies to stdout for the local harness: menus print each option
//! with its callback payload so a selection can be typed back verbatim.

use async_trait::async_trait;

use crate::adapters::telegram::encode_token;
use crate::application::Reply;
use crate::domain::foundation::UserId;
use crate::ports::{ChatTransport, TransportError};

#[derive(Debug, Default)]
pub struct ConsoleTransport;

impl ConsoleTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChatTransport for ConsoleTransport {
    async fn send(&self, _user: UserId, reply: Reply) -> Result<(), TransportError> {
        match reply {
            Reply::Prompt { text } => println!("{text}"),
            Reply::Menu { text, options } => {
                println!("{text}");
                for option in options {
                    println!("  [{}] -> {}", option.label, encode_token(&option.token));
                }
            }
            Reply::Image { file, caption } => println!("(foto: {file}) {caption}"),
        }
        Ok(())
    }
}
