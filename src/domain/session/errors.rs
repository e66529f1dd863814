//! Session error taxonomy.
//!
//! None of these are fatal; each maps to a plain-language message and leaves
//! the session (if any) in a well-defined state.

use thiserror::Error;

use crate::domain::foundation::TransitionError;

/// Recoverable errors raised by session dispatch.
#[derive(Debug, Error)]
pub enum SessionError {
    /// An operation required a session that does not exist.
    #[error("no active session")]
    NoActiveSession,

    /// A new record was requested while one is mid-collection.
    #[error("a record is already being collected")]
    DuplicateSessionRequest,

    /// The persistence collaborator rejected the record; the session is
    /// preserved so commit can be retried.
    #[error("record could not be persisted: {reason}")]
    PersistenceFailure { reason: String },

    #[error(transparent)]
    InvalidTransition(#[from] TransitionError),
}
