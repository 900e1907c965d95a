//! Fixed one-hour seating slots

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::errors::DomainError;

/// One of the twelve hourly seating slots between 10:00 and 22:00.
///
/// Slots are atomic: two bookings collide only when their slots are equal.
/// The label string is the wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum TimeSlot {
    #[serde(rename = "10:00 - 11:00")]
    H10,
    #[serde(rename = "11:00 - 12:00")]
    H11,
    #[serde(rename = "12:00 - 13:00")]
    H12,
    #[serde(rename = "13:00 - 14:00")]
    H13,
    #[serde(rename = "14:00 - 15:00")]
    H14,
    #[serde(rename = "15:00 - 16:00")]
    H15,
    #[serde(rename = "16:00 - 17:00")]
    H16,
    #[serde(rename = "17:00 - 18:00")]
    H17,
    #[serde(rename = "18:00 - 19:00")]
    H18,
    #[serde(rename = "19:00 - 20:00")]
    H19,
    #[serde(rename = "20:00 - 21:00")]
    H20,
    #[serde(rename = "21:00 - 22:00")]
    H21,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 12] = [
        Self::H10,
        Self::H11,
        Self::H12,
        Self::H13,
        Self::H14,
        Self::H15,
        Self::H16,
        Self::H17,
        Self::H18,
        Self::H19,
        Self::H20,
        Self::H21,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::H10 => "10:00 - 11:00",
            Self::H11 => "11:00 - 12:00",
            Self::H12 => "12:00 - 13:00",
            Self::H13 => "13:00 - 14:00",
            Self::H14 => "14:00 - 15:00",
            Self::H15 => "15:00 - 16:00",
            Self::H16 => "16:00 - 17:00",
            Self::H17 => "17:00 - 18:00",
            Self::H18 => "18:00 - 19:00",
            Self::H19 => "19:00 - 20:00",
            Self::H20 => "20:00 - 21:00",
            Self::H21 => "21:00 - 22:00",
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(TimeSlot::as_str).collect()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeSlot {
    type Err = DomainError;

    /// Exact label match only; no time arithmetic.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| DomainError::invalid("time", format!("unknown time slot '{}'", s)))
    }
}
