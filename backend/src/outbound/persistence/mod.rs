//! Persistence adapters for the store ports.

mod failing;
mod memory;

pub use self::failing::FailingStore;
pub use self::memory::MemoryStore;
