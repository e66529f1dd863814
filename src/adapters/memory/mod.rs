//! In-memory adapters.
//!
//! Used by tests and the local console harness; no external services.

mod sink;
mod transport;

pub use sink::{AppendedRecord, RecordingSink};
pub use transport::TranscriptTransport;
