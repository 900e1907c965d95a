use thiserror::Error;

use crate::domain::{TableNumber, TimeSlot};

/// Coarse classification of a [`DomainError`].
///
/// Adapters map these to user-visible outcomes (HTTP status codes, toasts).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    Duplicate,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("This time slot is already booked for this table. (table {table}, {time})")]
    SlotTaken { table: TableNumber, time: TimeSlot },

    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Already exists: table {0}")]
    DuplicateTable(TableNumber),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingFields(_) | Self::InvalidField { .. } => ErrorKind::Validation,
            Self::SlotTaken { .. } => ErrorKind::Conflict,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::DuplicateTable(_) => ErrorKind::Duplicate,
            Self::Storage(_) => ErrorKind::Internal,
        }
    }

    /// Whether this is an expected outcome the caller can recover from by
    /// correcting its input or refreshing its view, as opposed to a failure
    /// of the system itself.
    pub fn is_user_facing(&self) -> bool {
        self.kind() != ErrorKind::Internal
    }

    /// Fields the caller has to fix, if any.
    pub fn offending_fields(&self) -> Vec<&'static str> {
        match self {
            Self::MissingFields(fields) => fields.clone(),
            Self::InvalidField { field, .. } => vec![*field],
            Self::SlotTaken { .. } => vec!["table", "time"],
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config encode error: {0}")]
    ConfigEncode(#[from] toml::ser::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),
}
