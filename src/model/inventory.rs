//! Raw inventory items and their purchase history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::InventoryItemId;

/// Storage category for an inventory item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryCategory {
    Produce,
    Dairy,
    Bakery,
    DryGoods,
    Beverages,
}

/// Unit the stock counter is measured in. Continuous units (kg, liters)
/// share the same `f64` counter as discrete ones.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockUnit {
    Kg,
    G,
    Liters,
    Ml,
    Units,
}

/// One restock event, appended to an item's purchase history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub date: DateTime<Utc>,
    pub quantity: f64,
    pub cost_per_unit: f64,
}

/// A raw inventory item consumed by recipes and waste.
///
/// `reorder_level` is an advisory threshold consumed by reporting; the
/// engine never enforces it. `stock` never goes below zero; every deduction
/// path floors at zero rather than rejecting the operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub name: String,
    pub category: InventoryCategory,
    pub stock: f64,
    pub unit: StockUnit,
    pub reorder_level: f64,
    pub supplier: String,
    /// Cost per unit, used by reporting.
    pub cost: f64,
    /// Append-only restock trail.
    pub purchase_history: Vec<PurchaseRecord>,
}

impl InventoryItem {
    /// Whether the item sits at or below its advisory reorder threshold.
    pub fn needs_reorder(&self) -> bool {
        self.stock <= self.reorder_level
    }
}

/// Payload for adding an inventory item to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItemCreate {
    pub name: String,
    pub category: InventoryCategory,
    pub stock: f64,
    pub unit: StockUnit,
    pub reorder_level: f64,
    pub supplier: String,
    pub cost: f64,
}
