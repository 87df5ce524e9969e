pub mod history;
pub mod language;
pub mod store;

pub use history::{HistoryStore, WriteOutcome};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
