pub mod config;
pub mod error;
pub mod json_file;
pub mod records;
pub mod session_store;
pub mod stores;

pub use config::StoreConfig;
pub use error::DatabaseError;
pub use records::{apply_patch, Collections, Record};
pub use session_store::SessionStore;
pub use stores::{JsonFileStore, MatchStore, MemoryStore};
