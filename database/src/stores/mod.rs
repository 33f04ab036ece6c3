pub mod json_store;
pub mod memory_store;
pub mod traits;

pub use json_store::JsonFileStore;
pub use memory_store::MemoryStore;
pub use traits::MatchStore;
