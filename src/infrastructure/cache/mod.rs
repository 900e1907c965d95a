//! Table inventory mirror implementations

mod file;
mod memory;

pub use file::{default_cache_dir, FileInventoryMirror};
pub use memory::InMemoryInventoryMirror;
