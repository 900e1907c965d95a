//! Booking aggregate
//!
//! Contains the Booking entity, input drafts, conflict detection and the
//! store interface.

pub mod conflict;
pub mod draft;
pub mod model;
pub mod store;

pub use conflict::{find_conflict, has_conflict};
pub use draft::{BookingDraft, BookingPatchDraft};
pub use model::{Booking, BookingId, BookingPatch, NewBooking};
pub use store::BookingStore;
