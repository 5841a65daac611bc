//! featlist-store - Storage backends for the featlist API
//!
//! Currently ships [`MemoryStore`], a volatile in-memory store used by the
//! reference server and by tests. Durable backends plug in behind the same
//! [`ListStore`](featlist_core::ListStore) trait.

pub mod memory;

pub use memory::MemoryStore;
