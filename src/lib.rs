//! Turn-based collection of structured dental examination records.
//!
//! A session walks each user through three fixed field lists (patient,
//! teeth, examination), supports editing any collected value before commit
//! and appends the confirmed record to tabular storage, one row per tooth.
//!
//! Layered hexagonally: `domain` holds the session aggregate and field
//! schema, `application` the dispatch and traversal logic, `ports` the
//! outbound contracts and `adapters` their concrete implementations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
