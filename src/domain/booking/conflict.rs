//! Slot conflict detection
//!
//! Pure functions over a booking snapshot. Stores call these while holding
//! their write lock so the check and the following mutation are atomic.

use super::model::{Booking, BookingId};
use crate::domain::{TableNumber, TimeSlot};

/// First booking other than `exclude` that holds `(table, time)`.
pub fn find_conflict<'a>(
    bookings: &'a [Booking],
    table: TableNumber,
    time: TimeSlot,
    exclude: Option<BookingId>,
) -> Option<&'a Booking> {
    bookings
        .iter()
        .filter(|b| Some(b.id) != exclude)
        .find(|b| b.table == table && b.time == time)
}

/// Whether `(table, time)` is held by a booking other than `exclude`.
pub fn has_conflict(
    bookings: &[Booking],
    table: TableNumber,
    time: TimeSlot,
    exclude: Option<BookingId>,
) -> bool {
    find_conflict(bookings, table, time, exclude).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::NewBooking;

    fn table(n: i64) -> TableNumber {
        TableNumber::new(n).unwrap()
    }

    fn booking(id: i64, t: i64, time: TimeSlot) -> Booking {
        Booking::new(
            BookingId(id),
            NewBooking {
                name: format!("guest-{}", id),
                phone: "555".into(),
                people: 2,
                table: table(t),
                time,
            },
        )
    }

    #[test]
    fn empty_collection_never_conflicts() {
        assert!(!has_conflict(&[], table(1), TimeSlot::H10, None));
    }

    #[test]
    fn same_table_and_time_conflicts() {
        let bookings = vec![booking(1, 1, TimeSlot::H10)];
        assert!(has_conflict(&bookings, table(1), TimeSlot::H10, None));
    }

    #[test]
    fn different_table_or_time_is_free() {
        let bookings = vec![booking(1, 1, TimeSlot::H10)];
        assert!(!has_conflict(&bookings, table(2), TimeSlot::H10, None));
        assert!(!has_conflict(&bookings, table(1), TimeSlot::H11, None));
    }

    #[test]
    fn excluded_booking_does_not_conflict_with_itself() {
        let bookings = vec![booking(1, 1, TimeSlot::H10), booking(2, 2, TimeSlot::H10)];
        assert!(!has_conflict(&bookings, table(1), TimeSlot::H10, Some(BookingId(1))));
        assert!(has_conflict(&bookings, table(2), TimeSlot::H10, Some(BookingId(1))));
    }

    #[test]
    fn find_conflict_returns_the_holder() {
        let bookings = vec![booking(1, 1, TimeSlot::H10), booking(2, 3, TimeSlot::H20)];
        let holder = find_conflict(&bookings, table(3), TimeSlot::H20, None).unwrap();
        assert_eq!(holder.id, BookingId(2));
    }
}
