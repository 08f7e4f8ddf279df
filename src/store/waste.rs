//! The waste recorder: ad-hoc stock deductions outside the sale path, with
//! an append-only audit trail.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, warn};

use crate::model::{InventoryItemId, WasteRecord};
use crate::store::CafeStore;

/// Errors that can occur during waste operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WasteError {
    /// The provided quantity is zero, negative, or not finite.
    #[error("Invalid waste quantity: {0}")]
    InvalidQuantity(f64),

    /// An error occurred while communicating with the engine actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for WasteError {
    fn from(msg: String) -> Self {
        WasteError::ActorCommunicationError(msg)
    }
}

impl CafeStore {
    /// Records wasted stock: deducts `quantity` (floored at zero, like the
    /// reconciler) and appends an immutable [`WasteRecord`].
    ///
    /// An unknown inventory item still gets its audit record (the
    /// operator's report matters more than the catalog row it pointed at),
    /// with the orphan reference logged for reporting to pick up.
    pub fn record_waste(
        &mut self,
        inventory_item_id: InventoryItemId,
        quantity: f64,
        reason: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<WasteRecord, WasteError> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(WasteError::InvalidQuantity(quantity));
        }

        match self.inventory.get_mut(&inventory_item_id) {
            Some(item) => {
                item.stock = (item.stock - quantity).max(0.0);
            }
            None => {
                warn!(
                    inventory_item_id = %inventory_item_id,
                    "Waste recorded against unknown inventory item"
                );
            }
        }

        let record = WasteRecord {
            id: self.next_waste_id(),
            timestamp: now,
            inventory_item_id,
            quantity,
            reason: reason.into(),
        };
        self.waste_log.push(record.clone());
        info!(
            waste_id = %record.id,
            inventory_item_id = %inventory_item_id,
            quantity,
            "Waste recorded"
        );
        Ok(record)
    }

    /// All waste records, most recent first.
    pub fn waste_records(&self) -> Vec<WasteRecord> {
        self.waste_log.iter().rev().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InventoryCategory, InventoryItemCreate, StockUnit};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    fn add_units(store: &mut CafeStore, stock: f64) -> InventoryItemId {
        store
            .add_inventory_item(InventoryItemCreate {
                name: "Croissant".into(),
                category: InventoryCategory::Bakery,
                stock,
                unit: StockUnit::Units,
                reorder_level: 10.0,
                supplier: "Bakery Co".into(),
                cost: 0.8,
            })
            .id
    }

    #[test]
    fn waste_deducts_and_appends_one_record() {
        let mut store = CafeStore::new();
        let item = add_units(&mut store, 30.0);

        let record = store
            .record_waste(item, 12.0, "dropped tray", now())
            .unwrap();

        assert!((store.inventory_item(item).unwrap().stock - 18.0).abs() < 1e-9);
        assert!((record.quantity - 12.0).abs() < 1e-9);
        assert_eq!(record.reason, "dropped tray");
        assert_eq!(store.waste_records().len(), 1);
    }

    #[test]
    fn over_waste_floors_at_zero_and_keeps_the_reported_quantity() {
        let mut store = CafeStore::new();
        let item = add_units(&mut store, 4.0);

        let record = store.record_waste(item, 50.0, "spoiled", now()).unwrap();

        assert!(store.inventory_item(item).unwrap().stock.abs() < f64::EPSILON);
        // The audit trail keeps what the operator reported, not the clamp.
        assert!((record.quantity - 50.0).abs() < 1e-9);
        assert_eq!(store.waste_records().len(), 1);
    }

    #[test]
    fn non_positive_quantities_are_rejected() {
        let mut store = CafeStore::new();
        let item = add_units(&mut store, 4.0);

        assert_eq!(
            store.record_waste(item, 0.0, "typo", now()),
            Err(WasteError::InvalidQuantity(0.0))
        );
        assert_eq!(
            store.record_waste(item, -3.0, "typo", now()),
            Err(WasteError::InvalidQuantity(-3.0))
        );
        assert!(store.waste_records().is_empty());
    }

    #[test]
    fn unknown_item_still_gets_an_audit_record() {
        let mut store = CafeStore::new();

        let record = store
            .record_waste(InventoryItemId(404), 2.0, "orphan", now())
            .unwrap();

        assert_eq!(record.inventory_item_id, InventoryItemId(404));
        assert_eq!(store.waste_records().len(), 1);
    }

    #[test]
    fn records_surface_most_recent_first() {
        let mut store = CafeStore::new();
        let item = add_units(&mut store, 30.0);

        store.record_waste(item, 1.0, "first", now()).unwrap();
        store.record_waste(item, 2.0, "second", now()).unwrap();

        let records = store.waste_records();
        assert_eq!(records[0].reason, "second");
        assert_eq!(records[1].reason, "first");
    }
}
