//! Bookings module: create, amend, cancel and list reservations

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
