//! Table domain entity

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::errors::DomainError;

/// Tables seeded when neither the registry nor the mirror can provide one.
pub const DEFAULT_TABLES: [u32; 5] = [1, 2, 3, 4, 5];

/// Restaurant table number. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "i64", into = "u32")]
#[schema(value_type = u32)]
pub struct TableNumber(u32);

impl TableNumber {
    pub fn new(number: i64) -> Result<Self, DomainError> {
        if number < 1 {
            return Err(DomainError::invalid(
                "table",
                format!("table number must be a positive integer, got {}", number),
            ));
        }
        u32::try_from(number)
            .map(Self)
            .map_err(|_| DomainError::invalid("table", format!("table number {} is too large", number)))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn defaults() -> Vec<TableNumber> {
        DEFAULT_TABLES.iter().map(|&n| TableNumber(n)).collect()
    }
}

impl TryFrom<i64> for TableNumber {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TableNumber> for u32 {
    fn from(table: TableNumber) -> Self {
        table.0
    }
}

impl fmt::Display for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_and_negative() {
        assert!(TableNumber::new(0).is_err());
        assert!(TableNumber::new(-4).is_err());
        assert_eq!(TableNumber::new(7).unwrap().get(), 7);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(TableNumber::new(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn deserialize_validates() {
        let ok: TableNumber = serde_json::from_str("4").unwrap();
        assert_eq!(ok.get(), 4);
        assert!(serde_json::from_str::<TableNumber>("0").is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), "4");
    }

    #[test]
    fn default_set_is_one_through_five() {
        let numbers: Vec<u32> = TableNumber::defaults().into_iter().map(u32::from).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }
}
