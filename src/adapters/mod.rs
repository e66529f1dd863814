//! Adapters - Concrete implementations of the ports.

pub mod console;
pub mod memory;
pub mod sheets;
pub mod telegram;
