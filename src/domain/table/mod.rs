//! Table aggregate
//!
//! Contains the table number type, the registry interface and the
//! inventory mirror interface.

pub mod mirror;
pub mod model;
pub mod registry;

pub use mirror::{InventoryMirror, INVENTORY_KEY};
pub use model::{TableNumber, DEFAULT_TABLES};
pub use registry::TableRegistry;
