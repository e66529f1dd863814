//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the core and the outside world. Adapters implement these ports.

mod chat_transport;
mod record_sink;

pub use chat_transport::{ChatTransport, TransportError};
pub use record_sink::{AppendReceipt, RecordSink, SinkError};
