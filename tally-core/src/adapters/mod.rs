//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - JSON file (fs2-locked, atomically replaced) for the Store port
//! - In-memory map for tests and embedding

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
