//! Reservation business logic service

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::domain::{
    Booking, BookingDraft, BookingId, BookingPatchDraft, BookingStore, DomainError, DomainResult,
    InventoryMirror, TableNumber, TableRegistry,
};

/// Dashboard aggregates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ReservationStats {
    /// Number of active bookings
    pub bookings: usize,
    /// Total guests across all bookings
    pub covers: u64,
    /// Number of registered tables
    pub tables: usize,
}

/// Public surface of the reservation core.
///
/// Holds the booking store and the table registry without owning either;
/// cross-checks between them happen here.
pub struct ReservationService {
    bookings: Arc<dyn BookingStore>,
    tables: Arc<dyn TableRegistry>,
    mirror: Option<Arc<dyn InventoryMirror>>,
    /// Held across "change registry, snapshot, publish" so snapshots reach
    /// the mirror in the order the changes were made.
    inventory_lock: Mutex<()>,
}

impl ReservationService {
    pub fn new(bookings: Arc<dyn BookingStore>, tables: Arc<dyn TableRegistry>) -> Self {
        Self {
            bookings,
            tables,
            mirror: None,
            inventory_lock: Mutex::new(()),
        }
    }

    /// Publish the table inventory to `mirror` after every table change.
    pub fn with_mirror(mut self, mirror: Arc<dyn InventoryMirror>) -> Self {
        self.mirror = Some(mirror);
        self
    }

    // ── Bookings ───────────────────────────────────────────────

    pub async fn book(&self, draft: BookingDraft) -> DomainResult<Booking> {
        let fields = draft.validate()?;
        self.ensure_table_registered(fields.table).await?;

        let booking = self.bookings.create(fields).await?;
        info!(
            booking_id = %booking.id,
            table = %booking.table,
            time = %booking.time,
            people = booking.people,
            "Booking created"
        );
        Ok(booking)
    }

    pub async fn amend(&self, id: BookingId, draft: BookingPatchDraft) -> DomainResult<Booking> {
        let patch = draft.validate()?;
        if let Some(table) = patch.table {
            self.ensure_table_registered(table).await?;
        }

        let booking = self.bookings.amend(id, patch).await?;
        info!(booking_id = %id, table = %booking.table, time = %booking.time, "Booking amended");
        Ok(booking)
    }

    /// Always succeeds for unknown ids.
    pub async fn cancel(&self, id: BookingId) -> DomainResult<()> {
        if self.bookings.cancel(id).await? {
            info!(booking_id = %id, "Booking cancelled");
        }
        Ok(())
    }

    pub async fn list_all(&self) -> DomainResult<Vec<Booking>> {
        self.bookings.list_all().await
    }

    pub async fn list_by_table(&self, table: TableNumber) -> DomainResult<Vec<Booking>> {
        self.bookings.list_by_table(table).await
    }

    pub async fn stats(&self) -> DomainResult<ReservationStats> {
        let bookings = self.bookings.list_all().await?;
        let tables = self.tables.list().await?;
        Ok(ReservationStats {
            bookings: bookings.len(),
            covers: bookings.iter().map(|b| u64::from(b.people)).sum(),
            tables: tables.len(),
        })
    }

    // ── Tables ─────────────────────────────────────────────────

    pub async fn add_table(&self, number: i64) -> DomainResult<TableNumber> {
        let table = TableNumber::new(number)?;
        let _guard = self.inventory_lock.lock().await;
        let table = self.tables.add(table).await?;
        info!(table = %table, "Table added");
        self.publish_snapshot().await;
        Ok(table)
    }

    /// Bookings that reference the table are left in place.
    pub async fn remove_table(&self, number: i64) -> DomainResult<()> {
        let table = TableNumber::new(number)?;
        let _guard = self.inventory_lock.lock().await;
        self.tables.remove(table).await?;

        match self.bookings.list_by_table(table).await {
            Ok(orphaned) if !orphaned.is_empty() => warn!(
                table = %table,
                orphaned = orphaned.len(),
                "Table removed while bookings still reference it"
            ),
            Ok(_) => info!(table = %table, "Table removed"),
            Err(e) => warn!(
                table = %table,
                "Table removed; failed to count bookings still referencing it: {}",
                e
            ),
        }
        self.publish_snapshot().await;
        Ok(())
    }

    pub async fn list_tables(&self) -> DomainResult<Vec<TableNumber>> {
        self.tables.list().await
    }

    /// Push the current inventory to the mirror. Called after every table
    /// change and once at startup.
    ///
    /// Mirror failures are logged, not returned: the registry is already
    /// updated and stays the source of truth.
    pub async fn publish_inventory(&self) {
        let _guard = self.inventory_lock.lock().await;
        self.publish_snapshot().await;
    }

    /// Caller holds `inventory_lock`.
    async fn publish_snapshot(&self) {
        let Some(mirror) = &self.mirror else {
            return;
        };
        let tables = match self.tables.list().await {
            Ok(tables) => tables,
            Err(e) => {
                warn!("Failed to read table inventory for mirror: {}", e);
                return;
            }
        };
        if let Err(e) = mirror.publish(&tables).await {
            warn!("Failed to publish table inventory: {}", e);
        }
    }

    async fn ensure_table_registered(&self, table: TableNumber) -> DomainResult<()> {
        if self.tables.contains(table).await? {
            Ok(())
        } else {
            Err(DomainError::invalid(
                "table",
                format!("table {} is not registered", table),
            ))
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
