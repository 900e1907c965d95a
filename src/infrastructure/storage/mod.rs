//! Store implementations

mod memory;

pub use memory::{InMemoryBookingStore, InMemoryTableRegistry};
