//! Google Sheets persistence adapter.

pub mod rows;
mod sink;

pub use sink::SheetsRecordSink;
