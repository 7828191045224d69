//! Session store implementations owned by this crate.

pub mod memory;

pub use memory::MemorySessionStore;
