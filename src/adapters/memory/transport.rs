//! Transcript-collecting chat transport.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::Reply;
use crate::domain::foundation::UserId;
use crate::ports::{ChatTransport, TransportError};

/// Transport that records every delivered reply instead of sending it.
#[derive(Debug, Default)]
pub struct TranscriptTransport {
    sent: Mutex<Vec<(UserId, Reply)>>,
}

impl TranscriptTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<(UserId, Reply)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatTransport for TranscriptTransport {
    async fn send(&self, user: UserId, reply: Reply) -> Result<(), TransportError> {
        self.sent.lock().unwrap().push((user, reply));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_deliveries_per_user() {
        let transport = TranscriptTransport::new();
        transport
            .send(UserId::new(1), Reply::prompt("halo"))
            .await
            .unwrap();
        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, UserId::new(1));
        assert_eq!(sent[0].1.text(), "halo");
    }
}
