//! Table DTOs

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Request to register a table
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddTableRequest {
    /// Table number, positive
    #[validate(range(min = 1, message = "table number must be a positive integer"))]
    pub table: i64,
}
