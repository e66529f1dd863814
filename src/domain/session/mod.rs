//! Session lifecycle: aggregate, state machine, store, errors.

mod edit;
mod errors;
#[allow(clippy::module_inception)]
mod session;
mod state;
mod store;

pub use edit::EditTarget;
pub use errors::SessionError;
pub use session::Session;
pub use state::SessionState;
pub use store::SessionStore;
