//! Booking DTOs
//!
//! Request bodies accept `people` and `table` either as JSON numbers or as
//! numeric strings, as submitted by HTML forms. They are converted once here
//! into domain drafts.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{BookingDraft, BookingPatchDraft, DomainError, DomainResult};

/// A number that may arrive as text.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum LooseNumber {
    Int(i64),
    Text(String),
}

impl LooseNumber {
    /// Blank text counts as absent.
    fn into_i64(self, field: &'static str) -> DomainResult<Option<i64>> {
        match self {
            Self::Int(n) => Ok(Some(n)),
            Self::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Ok(None);
                }
                s.parse::<i64>()
                    .map(Some)
                    .map_err(|_| DomainError::invalid(field, format!("'{}' is not an integer", s)))
            }
        }
    }
}

fn loose(value: Option<LooseNumber>, field: &'static str) -> DomainResult<Option<i64>> {
    Ok(value.map(|v| v.into_i64(field)).transpose()?.flatten())
}

/// Request to book a table
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateBookingRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub people: Option<LooseNumber>,
    pub table: Option<LooseNumber>,
    /// One of the labels from `GET /api/time-slots`
    pub time: Option<String>,
}

impl TryFrom<CreateBookingRequest> for BookingDraft {
    type Error = DomainError;

    fn try_from(req: CreateBookingRequest) -> Result<Self, Self::Error> {
        Ok(BookingDraft {
            name: req.name,
            phone: req.phone,
            people: loose(req.people, "people")?,
            table: loose(req.table, "table")?,
            time: req.time,
        })
    }
}

/// Partial update of a booking. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBookingRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub people: Option<LooseNumber>,
    pub table: Option<LooseNumber>,
    pub time: Option<String>,
}

impl TryFrom<UpdateBookingRequest> for BookingPatchDraft {
    type Error = DomainError;

    fn try_from(req: UpdateBookingRequest) -> Result<Self, Self::Error> {
        Ok(BookingPatchDraft {
            name: req.name,
            phone: req.phone,
            people: loose(req.people, "people")?,
            table: loose(req.table, "table")?,
            time: req.time,
        })
    }
}
