//! Record sink port.
//!
//! Contract for handing a completed record set to external tabular storage.
//! The core treats each append as opaque and atomic; column layout, row
//! counters and image annotation are entirely the implementation's concern.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::record::Record;

/// Errors an append can fail with. Commit failures never destroy the
/// session; the user retries from the confirmation screen.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("sink rejected the append: {0}")]
    Rejected(String),
}

/// What a successful append reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendReceipt {
    /// Sink-assigned identifier for the stored record set.
    pub record_id: String,
    /// Number of rows written (one per committed tooth).
    pub rows_inserted: usize,
}

/// Port for the external persistence collaborator.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Appends one complete record set.
    async fn append_record(
        &self,
        patient: &Record,
        teeth: &[Record],
        examination: &Record,
    ) -> Result<AppendReceipt, SinkError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_sink_is_object_safe() {
        fn _accepts_dyn(_sink: &dyn RecordSink) {}
    }
}
