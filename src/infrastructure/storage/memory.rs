//! In-memory booking store and table registry

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::booking::{find_conflict, Booking, BookingId, BookingPatch, BookingStore, NewBooking};
use crate::domain::{DomainError, DomainResult, TableNumber, TableRegistry};

struct BookingState {
    bookings: Vec<Booking>,
    next_id: i64,
}

/// Booking store backed by a single lock-guarded vector.
///
/// Every mutation holds the write lock from conflict check to write, so the
/// slot invariant holds under concurrent callers.
pub struct InMemoryBookingStore {
    state: RwLock<BookingState>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(BookingState {
                bookings: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryBookingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn create(&self, booking: NewBooking) -> DomainResult<Booking> {
        let mut state = self.state.write().await;

        if let Some(holder) = find_conflict(&state.bookings, booking.table, booking.time, None) {
            debug!(
                table = %booking.table,
                time = %booking.time,
                holder = %holder.id,
                "Slot already held"
            );
            return Err(DomainError::SlotTaken {
                table: booking.table,
                time: booking.time,
            });
        }

        let id = BookingId(state.next_id);
        state.next_id += 1;

        let booking = Booking::new(id, booking);
        debug!(booking_id = %id, table = %booking.table, time = %booking.time, "Saving booking");
        state.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn list_all(&self) -> DomainResult<Vec<Booking>> {
        Ok(self.state.read().await.bookings.clone())
    }

    async fn list_by_table(&self, table: TableNumber) -> DomainResult<Vec<Booking>> {
        Ok(self
            .state
            .read()
            .await
            .bookings
            .iter()
            .filter(|b| b.table == table)
            .cloned()
            .collect())
    }

    async fn find(&self, id: BookingId) -> DomainResult<Option<Booking>> {
        Ok(self
            .state
            .read()
            .await
            .bookings
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn amend(&self, id: BookingId, patch: BookingPatch) -> DomainResult<Booking> {
        let mut state = self.state.write().await;

        let index = state
            .bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: id.to_string(),
            })?;

        if patch.touches_slot() {
            let (table, time) = patch.effective_slot(&state.bookings[index]);
            if find_conflict(&state.bookings, table, time, Some(id)).is_some() {
                return Err(DomainError::SlotTaken { table, time });
            }
        }

        debug!(booking_id = %id, "Updating booking");
        let booking = &mut state.bookings[index];
        booking.apply(patch);
        Ok(booking.clone())
    }

    async fn cancel(&self, id: BookingId) -> DomainResult<bool> {
        let mut state = self.state.write().await;
        let before = state.bookings.len();
        state.bookings.retain(|b| b.id != id);
        let removed = state.bookings.len() != before;
        debug!(booking_id = %id, removed, "Cancelling booking");
        Ok(removed)
    }
}

/// Table registry that keeps insertion order.
pub struct InMemoryTableRegistry {
    tables: RwLock<Vec<TableNumber>>,
}

impl InMemoryTableRegistry {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Vec::new()),
        }
    }

    /// Registry pre-populated with `tables`. Duplicates are dropped.
    pub fn with_tables(tables: impl IntoIterator<Item = TableNumber>) -> Self {
        let mut seeded: Vec<TableNumber> = Vec::new();
        for table in tables {
            if !seeded.contains(&table) {
                seeded.push(table);
            }
        }
        Self {
            tables: RwLock::new(seeded),
        }
    }
}

impl Default for InMemoryTableRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TableRegistry for InMemoryTableRegistry {
    async fn add(&self, table: TableNumber) -> DomainResult<TableNumber> {
        let mut tables = self.tables.write().await;
        if tables.contains(&table) {
            return Err(DomainError::DuplicateTable(table));
        }
        tables.push(table);
        Ok(table)
    }

    async fn remove(&self, table: TableNumber) -> DomainResult<()> {
        let mut tables = self.tables.write().await;
        let index = tables
            .iter()
            .position(|t| *t == table)
            .ok_or_else(|| DomainError::NotFound {
                entity: "Table",
                field: "number",
                value: table.to_string(),
            })?;
        tables.remove(index);
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<TableNumber>> {
        Ok(self.tables.read().await.clone())
    }

    async fn contains(&self, table: TableNumber) -> DomainResult<bool> {
        Ok(self.tables.read().await.contains(&table))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::TimeSlot;

    fn table(n: i64) -> TableNumber {
        TableNumber::new(n).unwrap()
    }

    fn new_booking(name: &str, t: i64, time: TimeSlot) -> NewBooking {
        NewBooking {
            name: name.into(),
            phone: "555".into(),
            people: 2,
            table: table(t),
            time,
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let store = InMemoryBookingStore::new();
        let a = store.create(new_booking("Ana", 1, TimeSlot::H10)).await.unwrap();
        let b = store.create(new_booking("Bo", 1, TimeSlot::H11)).await.unwrap();
        assert!(b.id > a.id);

        let all = store.list_all().await.unwrap();
        assert_eq!(all.iter().map(|b| b.id).collect::<Vec<_>>(), vec![a.id, b.id]);
    }

    #[tokio::test]
    async fn create_rejects_taken_slot_without_mutation() {
        let store = InMemoryBookingStore::new();
        store.create(new_booking("Ana", 1, TimeSlot::H10)).await.unwrap();
        let before = store.list_all().await.unwrap();

        let err = store
            .create(new_booking("Bo", 1, TimeSlot::H10))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::SlotTaken {
                table: table(1),
                time: TimeSlot::H10
            }
        );
        assert_eq!(store.list_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_cancel() {
        let store = InMemoryBookingStore::new();
        let a = store.create(new_booking("Ana", 1, TimeSlot::H10)).await.unwrap();
        assert!(store.cancel(a.id).await.unwrap());
        let b = store.create(new_booking("Bo", 1, TimeSlot::H10)).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn list_by_table_filters_exactly() {
        let store = InMemoryBookingStore::new();
        store.create(new_booking("Ana", 1, TimeSlot::H10)).await.unwrap();
        store.create(new_booking("Bo", 2, TimeSlot::H10)).await.unwrap();
        store.create(new_booking("Cy", 1, TimeSlot::H12)).await.unwrap();

        let names: Vec<String> = store
            .list_by_table(table(1))
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["Ana", "Cy"]);
        assert!(store.list_by_table(table(9)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn amend_unknown_id_is_not_found() {
        let store = InMemoryBookingStore::new();
        let err = store
            .amend(BookingId(42), BookingPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Booking", .. }));
    }

    #[tokio::test]
    async fn amend_into_own_slot_is_allowed() {
        let store = InMemoryBookingStore::new();
        let a = store.create(new_booking("Ana", 1, TimeSlot::H10)).await.unwrap();
        let updated = store
            .amend(
                a.id,
                BookingPatch {
                    table: Some(table(1)),
                    time: Some(TimeSlot::H10),
                    name: Some("Ana Maria".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Ana Maria");
        assert_eq!(updated.slot(), a.slot());
    }

    #[tokio::test]
    async fn amend_into_taken_slot_leaves_state_unchanged() {
        let store = InMemoryBookingStore::new();
        store.create(new_booking("Ana", 1, TimeSlot::H10)).await.unwrap();
        let b = store.create(new_booking("Bo", 1, TimeSlot::H11)).await.unwrap();
        let before = store.list_all().await.unwrap();

        let err = store
            .amend(
                b.id,
                BookingPatch {
                    time: Some(TimeSlot::H10),
                    people: Some(8),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::SlotTaken { .. }));
        assert_eq!(store.list_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn amend_moving_table_checks_new_table() {
        let store = InMemoryBookingStore::new();
        store.create(new_booking("Ana", 2, TimeSlot::H10)).await.unwrap();
        let b = store.create(new_booking("Bo", 1, TimeSlot::H10)).await.unwrap();

        let err = store
            .amend(
                b.id,
                BookingPatch {
                    table: Some(table(2)),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::SlotTaken {
                table: table(2),
                time: TimeSlot::H10
            }
        );
    }

    #[tokio::test]
    async fn cancel_is_idempotent() {
        let store = InMemoryBookingStore::new();
        let a = store.create(new_booking("Ana", 1, TimeSlot::H10)).await.unwrap();
        assert!(store.cancel(a.id).await.unwrap());
        assert!(!store.cancel(a.id).await.unwrap());
        assert!(!store.cancel(BookingId(999)).await.unwrap());
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn concurrent_creates_for_one_slot_admit_exactly_one() {
        let store = Arc::new(InMemoryBookingStore::new());
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .create(new_booking(&format!("guest-{}", i), 4, TimeSlot::H19))
                    .await
            }));
        }

        let mut ok = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                ok += 1;
            }
        }
        assert_eq!(ok, 1);
        assert_eq!(store.list_by_table(table(4)).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn registry_add_rejects_duplicates() {
        let registry = InMemoryTableRegistry::new();
        registry.add(table(3)).await.unwrap();
        assert_eq!(
            registry.add(table(3)).await.unwrap_err(),
            DomainError::DuplicateTable(table(3))
        );
    }

    #[tokio::test]
    async fn registry_keeps_insertion_order() {
        let registry = InMemoryTableRegistry::new();
        for n in [5, 2, 9] {
            registry.add(table(n)).await.unwrap();
        }
        assert_eq!(registry.list().await.unwrap(), vec![table(5), table(2), table(9)]);

        registry.remove(table(2)).await.unwrap();
        assert_eq!(registry.list().await.unwrap(), vec![table(5), table(9)]);
        assert!(!registry.contains(table(2)).await.unwrap());
    }

    #[tokio::test]
    async fn registry_remove_unknown_is_not_found() {
        let registry = InMemoryTableRegistry::with_tables(TableNumber::defaults());
        let err = registry.remove(table(6)).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Table", .. }));
        assert_eq!(registry.list().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn seeding_drops_duplicates() {
        let registry = InMemoryTableRegistry::with_tables([table(1), table(1), table(2)]);
        assert_eq!(registry.list().await.unwrap(), vec![table(1), table(2)]);
    }
}
