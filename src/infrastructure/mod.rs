//! Infrastructure layer - external concerns

pub mod cache;
pub mod storage;

pub use cache::{FileInventoryMirror, InMemoryInventoryMirror};
pub use storage::{InMemoryBookingStore, InMemoryTableRegistry};
