//! Table registry interface

use async_trait::async_trait;

use super::model::TableNumber;
use crate::domain::DomainResult;

/// Owns the set of valid table numbers.
///
/// Removal never consults bookings: a table that still has bookings is
/// removed and those bookings are left in place.
#[async_trait]
pub trait TableRegistry: Send + Sync {
    /// Register a table. Fails with `DuplicateTable` if already present.
    async fn add(&self, table: TableNumber) -> DomainResult<TableNumber>;

    /// Unregister a table. Fails with `NotFound` if absent.
    async fn remove(&self, table: TableNumber) -> DomainResult<()>;

    /// All tables in insertion order
    async fn list(&self) -> DomainResult<Vec<TableNumber>>;

    async fn contains(&self, table: TableNumber) -> DomainResult<bool>;
}
