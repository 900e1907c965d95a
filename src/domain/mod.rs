pub mod booking;
pub mod table;
pub mod time_slot;

pub use booking::{
    Booking, BookingDraft, BookingId, BookingPatch, BookingPatchDraft, BookingStore, NewBooking,
};
pub use table::{InventoryMirror, TableNumber, TableRegistry, DEFAULT_TABLES};
pub use time_slot::TimeSlot;

pub use crate::shared::errors::{DomainError, ErrorKind};

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
