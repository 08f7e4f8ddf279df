//! Menu items and their fulfillment model.
//!
//! Whether selling an item consumes raw inventory (via a recipe) or its own
//! finished-goods counter is decided once, at catalog-edit time, by the
//! [`Fulfillment`] tag. The reconciler never has to re-derive it by looking
//! a recipe up on every sale.

use serde::{Deserialize, Serialize};

use crate::model::{InventoryItemId, MenuItemId};

/// Display category for a menu item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuCategory {
    Food,
    Beverage,
    Dessert,
}

/// One ingredient line of a [`Recipe`]: how much of a raw inventory item a
/// single sold unit consumes. `quantity_per_unit` must be >= 0 and is
/// validated when the recipe is attached to a menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub inventory_item_id: InventoryItemId,
    pub quantity_per_unit: f64,
}

/// A menu item's preparation instructions.
///
/// Timing fields are a baseline for estimating how long an active kitchen
/// order will take; they are never enforced. The ancillary costs feed
/// reporting only and are not deducted from inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub ingredients: Vec<RecipeIngredient>,
    pub prep_time_minutes: u32,
    pub clean_time_minutes: u32,
    pub utilities_cost: f64,
    pub packaging_cost: f64,
}

impl Recipe {
    /// Baseline prep + clean time in seconds, used for order estimates.
    pub fn baseline_seconds(&self) -> u64 {
        u64::from(self.prep_time_minutes + self.clean_time_minutes) * 60
    }
}

/// How a menu item is fulfilled when sold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fulfillment {
    /// A finished/purchased good: selling decrements this counter directly.
    Stocked { stock: u32 },
    /// A prepared good: selling consumes raw inventory via the recipe.
    Prepared(Recipe),
}

/// An item on the café menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub category: MenuCategory,
    /// Unit price, caller currency.
    pub price: f64,
    pub fulfillment: Fulfillment,
}

impl MenuItem {
    /// The active recipe, if this item is prepared from raw inventory.
    pub fn recipe(&self) -> Option<&Recipe> {
        match &self.fulfillment {
            Fulfillment::Prepared(recipe) => Some(recipe),
            Fulfillment::Stocked { .. } => None,
        }
    }

    /// Direct finished-goods stock, if this item is not recipe-backed.
    pub fn direct_stock(&self) -> Option<u32> {
        match self.fulfillment {
            Fulfillment::Stocked { stock } => Some(stock),
            Fulfillment::Prepared(_) => None,
        }
    }
}

/// Payload for adding a menu item to the catalog.
///
/// New items always start as direct-stock goods; attaching a recipe is a
/// separate, validated edit
/// ([`set_recipe`](crate::store::CafeStore::set_recipe)).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub category: MenuCategory,
    pub price: f64,
    pub stock: u32,
}
