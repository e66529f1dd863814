//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, state machine trait)
//! - `record` - Flat key/value record storage and the skip sentinel
//! - `schema` - Field definitions, phase order, choice catalogs
//! - `session` - Session aggregate, state machine, store, errors

pub mod foundation;
pub mod record;
pub mod schema;
pub mod session;
