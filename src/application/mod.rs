//! Application layer: turns inbound chat events into session mutations and
//! outbound replies.

pub mod collector;
pub mod dispatcher;
pub mod event;
pub mod messages;
pub mod reply;
pub mod summary;
pub mod traversal;

pub use dispatcher::Dispatcher;
pub use event::{Command, SelectionToken};
pub use reply::{MenuOption, Reply};
