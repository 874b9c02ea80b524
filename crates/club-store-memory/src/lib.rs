//! In-memory backend for the club store.
//!
//! State lives for the lifetime of the process and is lost on restart.

mod clock;
mod store;

pub use store::MemoryStore;

#[cfg(test)]
mod tests;
