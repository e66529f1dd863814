//! Chat transport port.
//!
//! The core produces [`Reply`] descriptions; an implementation renders them
//! for a concrete chat service (menus become inline keyboards, images become
//! photo uploads).
//!
//! [`Reply`]: crate::application::Reply

use async_trait::async_trait;
use thiserror::Error;

use crate::application::Reply;
use crate::domain::foundation::UserId;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to deliver reply: {0}")]
    Delivery(String),
}

/// Port for sending rendered replies to a user.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, user: UserId, reply: Reply) -> Result<(), TransportError>;
}
