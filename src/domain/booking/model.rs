//! Booking domain entity

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{TableNumber, TimeSlot};

/// Store-assigned booking identifier. Increases with creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = i64)]
pub struct BookingId(pub i64);

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Table reservation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Booking {
    pub id: BookingId,
    /// Guest name
    pub name: String,
    /// Contact phone
    pub phone: String,
    /// Party size
    pub people: u32,
    pub table: TableNumber,
    pub time: TimeSlot,
    /// When the booking was taken. Informational only.
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(id: BookingId, fields: NewBooking) -> Self {
        Self {
            id,
            name: fields.name,
            phone: fields.phone,
            people: fields.people,
            table: fields.table,
            time: fields.time,
            created_at: Utc::now(),
        }
    }

    /// The (table, time) pair this booking holds.
    pub fn slot(&self) -> (TableNumber, TimeSlot) {
        (self.table, self.time)
    }

    /// Shallow merge: every field set in `patch` overwrites, the rest stay.
    pub fn apply(&mut self, patch: BookingPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(people) = patch.people {
            self.people = people;
        }
        if let Some(table) = patch.table {
            self.table = table;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
    }
}

/// Validated fields of a booking that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub name: String,
    pub phone: String,
    pub people: u32,
    pub table: TableNumber,
    pub time: TimeSlot,
}

/// Validated partial update. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub people: Option<u32>,
    pub table: Option<TableNumber>,
    pub time: Option<TimeSlot>,
}

impl BookingPatch {
    /// Whether applying this patch may move the booking to another slot.
    pub fn touches_slot(&self) -> bool {
        self.table.is_some() || self.time.is_some()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The slot `booking` would hold after applying this patch.
    pub fn effective_slot(&self, booking: &Booking) -> (TableNumber, TimeSlot) {
        (
            self.table.unwrap_or(booking.table),
            self.time.unwrap_or(booking.time),
        )
    }
}
