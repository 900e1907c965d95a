//! In-memory inventory mirror for tests and single-process setups

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{DomainResult, InventoryMirror, TableNumber};

#[derive(Default)]
pub struct InMemoryInventoryMirror {
    snapshot: RwLock<Option<Vec<TableNumber>>>,
}

impl InMemoryInventoryMirror {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InventoryMirror for InMemoryInventoryMirror {
    async fn publish(&self, tables: &[TableNumber]) -> DomainResult<()> {
        *self.snapshot.write().await = Some(tables.to_vec());
        Ok(())
    }

    async fn load(&self) -> DomainResult<Option<Vec<TableNumber>>> {
        Ok(self.snapshot.read().await.clone())
    }
}
