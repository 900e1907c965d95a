//! Unvalidated booking input
//!
//! Adapters collect whatever the caller sent into a draft; `validate` is the
//! single place where free-form input becomes typed domain values.

use super::model::{BookingPatch, NewBooking};
use crate::domain::{DomainResult, TableNumber, TimeSlot};
use crate::shared::errors::DomainError;

#[derive(Debug, Clone, Default)]
pub struct BookingDraft {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub people: Option<i64>,
    pub table: Option<i64>,
    pub time: Option<String>,
}

impl BookingDraft {
    /// Check presence of every required field, then convert each value.
    ///
    /// All missing fields are reported together; blank text counts as missing.
    pub fn validate(self) -> DomainResult<NewBooking> {
        let name = non_blank(self.name);
        let phone = non_blank(self.phone);
        let time = non_blank(self.time);

        let mut missing = Vec::new();
        if name.is_none() {
            missing.push("name");
        }
        if self.people.is_none() {
            missing.push("people");
        }
        if self.table.is_none() {
            missing.push("table");
        }
        if time.is_none() {
            missing.push("time");
        }
        if phone.is_none() {
            missing.push("phone");
        }

        let (Some(name), Some(phone), Some(people), Some(table), Some(time)) =
            (name, phone, self.people, self.table, time)
        else {
            return Err(DomainError::MissingFields(missing));
        };

        Ok(NewBooking {
            name,
            phone,
            people: party_size(people)?,
            table: TableNumber::new(table)?,
            time: time.parse::<TimeSlot>()?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct BookingPatchDraft {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub people: Option<i64>,
    pub table: Option<i64>,
    pub time: Option<String>,
}

impl BookingPatchDraft {
    /// Convert every supplied field. Supplied text must not be blank.
    pub fn validate(self) -> DomainResult<BookingPatch> {
        Ok(BookingPatch {
            name: self.name.map(|v| required_text("name", v)).transpose()?,
            phone: self.phone.map(|v| required_text("phone", v)).transpose()?,
            people: self.people.map(party_size).transpose()?,
            table: self.table.map(TableNumber::new).transpose()?,
            time: self.time.map(|v| v.trim().parse::<TimeSlot>()).transpose()?,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required_text(field: &'static str, value: String) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

fn party_size(people: i64) -> DomainResult<u32> {
    if people < 1 {
        return Err(DomainError::invalid(
            "people",
            format!("party size must be a positive integer, got {}", people),
        ));
    }
    u32::try_from(people).map_err(|_| DomainError::invalid("people", "party size is too large"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> BookingDraft {
        BookingDraft {
            name: Some("Ana".into()),
            phone: Some("555".into()),
            people: Some(2),
            table: Some(1),
            time: Some("10:00 - 11:00".into()),
        }
    }

    #[test]
    fn complete_draft_validates() {
        let booking = full_draft().validate().unwrap();
        assert_eq!(booking.name, "Ana");
        assert_eq!(booking.people, 2);
        assert_eq!(booking.table.get(), 1);
        assert_eq!(booking.time, TimeSlot::H10);
    }

    #[test]
    fn missing_phone_is_named() {
        let draft = BookingDraft {
            phone: None,
            ..full_draft()
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            DomainError::MissingFields(vec!["phone"])
        );
    }

    #[test]
    fn blank_text_counts_as_missing() {
        let draft = BookingDraft {
            name: Some("   ".into()),
            time: Some(String::new()),
            ..full_draft()
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            DomainError::MissingFields(vec!["name", "time"])
        );
    }

    #[test]
    fn empty_draft_lists_all_fields_in_order() {
        assert_eq!(
            BookingDraft::default().validate().unwrap_err(),
            DomainError::MissingFields(vec!["name", "people", "table", "time", "phone"])
        );
    }

    #[test]
    fn non_positive_values_are_invalid() {
        let draft = BookingDraft {
            people: Some(0),
            ..full_draft()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.offending_fields(), vec!["people"]);

        let draft = BookingDraft {
            table: Some(-1),
            ..full_draft()
        };
        assert_eq!(draft.validate().unwrap_err().offending_fields(), vec!["table"]);
    }

    #[test]
    fn unknown_time_label_is_invalid() {
        let draft = BookingDraft {
            time: Some("09:00 - 10:00".into()),
            ..full_draft()
        };
        assert_eq!(draft.validate().unwrap_err().offending_fields(), vec!["time"]);
    }

    #[test]
    fn patch_keeps_absent_fields_unset() {
        let patch = BookingPatchDraft {
            people: Some(5),
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(patch.people, Some(5));
        assert!(patch.name.is_none());
        assert!(!patch.touches_slot());
    }

    #[test]
    fn patch_rejects_blank_name() {
        let err = BookingPatchDraft {
            name: Some(" ".into()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.offending_fields(), vec!["name"]);
    }
}
