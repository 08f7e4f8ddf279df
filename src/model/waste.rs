//! Waste audit records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{InventoryItemId, WasteRecordId};

/// An immutable audit record of stock discarded outside the sale path.
/// Never mutated after it is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteRecord {
    pub id: WasteRecordId,
    pub timestamp: DateTime<Utc>,
    pub inventory_item_id: InventoryItemId,
    pub quantity: f64,
    pub reason: String,
}
