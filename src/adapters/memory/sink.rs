//! Recording record sink.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::record::Record;
use crate::ports::{AppendReceipt, RecordSink, SinkError};

/// One captured append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendedRecord {
    pub patient: Record,
    pub teeth: Vec<Record>,
    pub examination: Record,
}

/// Sink that keeps every append in memory and can be told to fail the
/// next call, for exercising the commit-retry path.
#[derive(Debug, Default)]
pub struct RecordingSink {
    appended: Mutex<Vec<AppendedRecord>>,
    fail_next: Mutex<Option<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next append fail with a transport error.
    pub fn fail_next(&self, reason: &str) {
        *self.fail_next.lock().unwrap() = Some(reason.to_string());
    }

    /// Everything appended so far, in order.
    pub fn appended(&self) -> Vec<AppendedRecord> {
        self.appended.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordSink for RecordingSink {
    async fn append_record(
        &self,
        patient: &Record,
        teeth: &[Record],
        examination: &Record,
    ) -> Result<AppendReceipt, SinkError> {
        if let Some(reason) = self.fail_next.lock().unwrap().take() {
            return Err(SinkError::Transport(reason));
        }
        let mut appended = self.appended.lock().unwrap();
        appended.push(AppendedRecord {
            patient: patient.clone(),
            teeth: teeth.to_vec(),
            examination: examination.clone(),
        });
        Ok(AppendReceipt {
            record_id: format!("mem-{}", appended.len()),
            rows_inserted: teeth.len().max(1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_appends_in_order() {
        let sink = RecordingSink::new();
        let patient = Record::new();
        let receipt = sink.append_record(&patient, &[], &Record::new()).await.unwrap();
        assert_eq!(receipt.record_id, "mem-1");
        assert_eq!(receipt.rows_inserted, 1);
        assert_eq!(sink.appended().len(), 1);
    }

    #[tokio::test]
    async fn fail_next_fails_exactly_once() {
        let sink = RecordingSink::new();
        sink.fail_next("down");
        let err = sink
            .append_record(&Record::new(), &[], &Record::new())
            .await
            .unwrap_err();
        assert!(matches!(err, SinkError::Transport(_)));
        assert!(sink.appended().is_empty());

        sink.append_record(&Record::new(), &[], &Record::new())
            .await
            .unwrap();
        assert_eq!(sink.appended().len(), 1);
    }
}
