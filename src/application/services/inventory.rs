//! Table inventory as seen by the customer-facing view
//!
//! The customer view asks the reservation service directly. When that is not
//! possible it falls back to the last mirrored inventory, and finally to the
//! built-in default table set.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};
use utoipa::ToSchema;

use super::ReservationService;
use crate::domain::{InventoryMirror, TableNumber};

/// Where a resolved inventory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InventorySource {
    Live,
    Mirror,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ResolvedInventory {
    pub tables: Vec<TableNumber>,
    pub source: InventorySource,
}

impl ResolvedInventory {
    /// `true` when the list did not come from the live registry.
    pub fn is_degraded(&self) -> bool {
        self.source != InventorySource::Live
    }
}

pub struct InventoryResolver {
    live: Option<Arc<ReservationService>>,
    mirror: Arc<dyn InventoryMirror>,
}

impl InventoryResolver {
    pub fn new(live: Arc<ReservationService>, mirror: Arc<dyn InventoryMirror>) -> Self {
        Self {
            live: Some(live),
            mirror,
        }
    }

    /// Resolver for a consumer with no connection to the service.
    pub fn offline(mirror: Arc<dyn InventoryMirror>) -> Self {
        Self { live: None, mirror }
    }

    pub async fn resolve(&self) -> ResolvedInventory {
        if let Some(service) = &self.live {
            match service.list_tables().await {
                Ok(tables) => {
                    return ResolvedInventory {
                        tables,
                        source: InventorySource::Live,
                    }
                }
                Err(e) => warn!("Live table inventory unavailable: {}", e),
            }
        }

        match self.mirror.load().await {
            Ok(Some(tables)) => {
                debug!(count = tables.len(), "Using mirrored table inventory");
                ResolvedInventory {
                    tables,
                    source: InventorySource::Mirror,
                }
            }
            Ok(None) => Self::fallback(),
            Err(e) => {
                warn!("Mirrored table inventory unreadable: {}", e);
                Self::fallback()
            }
        }
    }

    fn fallback() -> ResolvedInventory {
        ResolvedInventory {
            tables: TableNumber::defaults(),
            source: InventorySource::Default,
        }
    }
}
