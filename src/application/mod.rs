//! Application layer - use cases composed from domain parts

pub mod services;

pub use services::{
    InventoryResolver, InventorySource, ReservationService, ReservationStats, ResolvedInventory,
};
