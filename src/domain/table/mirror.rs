//! Side-channel copy of the table inventory
//!
//! A consumer that cannot reach the registry (a separately started customer
//! view, an offline kiosk) reads the last published inventory from here.

use async_trait::async_trait;

use super::model::TableNumber;
use crate::domain::DomainResult;

/// Fixed key under which the inventory snapshot is stored.
pub const INVENTORY_KEY: &str = "tables";

#[async_trait]
pub trait InventoryMirror: Send + Sync {
    /// Replace the stored snapshot with `tables`.
    async fn publish(&self, tables: &[TableNumber]) -> DomainResult<()>;

    /// Last published snapshot, or `None` if nothing was ever published.
    async fn load(&self) -> DomainResult<Option<Vec<TableNumber>>>;
}
