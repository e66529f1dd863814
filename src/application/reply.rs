//! Outbound reply descriptions.
//!
//! The core never talks to the chat transport directly; it produces these
//! values and the adapter renders them (a [`Menu`] becomes an inline
//! keyboard, an [`Image`] a photo upload).
//!
//! [`Menu`]: Reply::Menu
//! [`Image`]: Reply::Image

use serde::{Deserialize, Serialize};

use super::event::SelectionToken;

/// One tappable option of a menu reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuOption {
    pub label: String,
    pub token: SelectionToken,
}

impl MenuOption {
    pub fn new(label: impl Into<String>, token: SelectionToken) -> Self {
        Self {
            label: label.into(),
            token,
        }
    }
}

/// A single outbound presentation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reply", rename_all = "snake_case")]
pub enum Reply {
    /// Plain text prompt expecting a free-text answer (or none).
    Prompt { text: String },
    /// Text plus a selection keyboard.
    Menu { text: String, options: Vec<MenuOption> },
    /// A local image with caption.
    Image { file: String, caption: String },
}

impl Reply {
    pub fn prompt(text: impl Into<String>) -> Self {
        Reply::Prompt { text: text.into() }
    }

    pub fn menu(text: impl Into<String>, options: Vec<MenuOption>) -> Self {
        Reply::Menu {
            text: text.into(),
            options,
        }
    }

    pub fn image(file: impl Into<String>, caption: impl Into<String>) -> Self {
        Reply::Image {
            file: file.into(),
            caption: caption.into(),
        }
    }

    /// The reply's text, whatever its shape. Convenient in tests.
    pub fn text(&self) -> &str {
        match self {
            Reply::Prompt { text } | Reply::Menu { text, .. } => text,
            Reply::Image { caption, .. } => caption,
        }
    }
}
