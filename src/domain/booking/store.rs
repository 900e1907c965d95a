//! Booking store interface

use async_trait::async_trait;

use super::model::{Booking, BookingId, BookingPatch, NewBooking};
use crate::domain::{DomainResult, TableNumber};

/// Owns the booking collection and keeps every (table, time) slot held by at
/// most one booking.
///
/// Implementations must run the conflict check and the mutation that
/// follows it as one critical section, and must never expose a partially
/// applied write to readers.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Insert a booking with a freshly assigned id.
    /// Fails with `SlotTaken` if the slot is held.
    async fn create(&self, booking: NewBooking) -> DomainResult<Booking>;

    /// All bookings in creation order
    async fn list_all(&self) -> DomainResult<Vec<Booking>>;

    /// Bookings for one table in creation order
    async fn list_by_table(&self, table: TableNumber) -> DomainResult<Vec<Booking>>;

    async fn find(&self, id: BookingId) -> DomainResult<Option<Booking>>;

    /// Merge `patch` into an existing booking.
    /// Fails with `NotFound` for an unknown id and `SlotTaken` if the
    /// resulting slot is held by another booking.
    async fn amend(&self, id: BookingId, patch: BookingPatch) -> DomainResult<Booking>;

    /// Remove a booking. Unknown ids are ignored; returns whether a record
    /// was actually removed.
    async fn cancel(&self, id: BookingId) -> DomainResult<bool>;
}
