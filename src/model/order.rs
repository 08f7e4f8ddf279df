//! Sales, order lines, and kitchen orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{CustomerId, MenuItem, MenuItemId, SaleId};

/// One line of an order: a snapshot of the menu item at order time plus the
/// quantity sold. The snapshot freezes name and price so later catalog edits
/// cannot rewrite historical sales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub menu_item_id: MenuItemId,
    pub name: String,
    pub unit_price: f64,
    /// Quantity sold. Must be > 0 (caller contract).
    pub quantity: u32,
}

impl OrderItem {
    /// Snapshots a catalog item into an order line.
    pub fn of(item: &MenuItem, quantity: u32) -> Self {
        Self {
            menu_item_id: item.id,
            name: item.name.clone(),
            unit_price: item.price,
            quantity,
        }
    }
}

/// A finalized sale.
///
/// The money triple is computed and validated by the checkout collaborator
/// before it reaches the engine (`total = subtotal - discount`,
/// `discount <= subtotal`, all non-negative). `prep_time_seconds` is absent
/// until the matching kitchen order completes, and is written exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    pub timestamp: DateTime<Utc>,
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
    pub discount: f64,
    pub total: f64,
    pub prep_time_seconds: Option<u64>,
    /// Present only for loyalty-attributed orders.
    pub customer_id: Option<CustomerId>,
}

/// The in-progress fulfillment record mirroring a [`Sale`].
///
/// Created atomically with its sale (same id) and removed from the active
/// set when the kitchen completes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitchenOrder {
    pub id: SaleId,
    pub timestamp: DateTime<Utc>,
    pub items: Vec<OrderItem>,
    pub customer_id: Option<CustomerId>,
}

/// Payload for finalizing a sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleCreate {
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
    pub discount: f64,
    pub total: f64,
    pub customer_id: Option<CustomerId>,
}
