pub mod inventory;
pub mod reservation;

pub use inventory::{InventoryResolver, InventorySource, ResolvedInventory};
pub use reservation::{ReservationService, ReservationStats};
