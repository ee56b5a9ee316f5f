pub mod memory;
pub mod repository;

pub use memory::InMemoryRecordStore;
pub use repository::{RecordStore, StoreError};
