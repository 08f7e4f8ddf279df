//! Catalog operations: the surface the menu, recipe, and inventory editors
//! write through, and the read models everyone else consumes.
//!
//! Recipe assignment is where the recipe-vs-direct-stock decision is made:
//! [`CafeStore::set_recipe`] validates every ingredient against the
//! inventory collection and flips the item's [`Fulfillment`] tag, so the
//! sale path never has to re-derive an item's fulfillment category.

use thiserror::Error;
use tracing::info;

use crate::model::{
    CustomerCreate, CustomerId, Fulfillment, InventoryItem, InventoryItemCreate, InventoryItemId,
    LoyaltyCustomer, MenuItem, MenuItemCreate, MenuItemId, PurchaseRecord, Recipe,
};
use crate::store::CafeStore;
use chrono::{DateTime, Utc};

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The named menu item does not exist.
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(MenuItemId),

    /// The named inventory item does not exist.
    #[error("Inventory item not found: {0}")]
    InventoryItemNotFound(InventoryItemId),

    /// A recipe references an inventory item that is not in the catalog.
    #[error("Recipe for {menu_item_id} references unknown inventory item {inventory_item_id}")]
    UnknownIngredient {
        menu_item_id: MenuItemId,
        inventory_item_id: InventoryItemId,
    },

    /// A recipe ingredient carries a negative or non-finite per-unit quantity.
    #[error("Invalid per-unit quantity {quantity} for ingredient {inventory_item_id}")]
    InvalidIngredientQuantity {
        inventory_item_id: InventoryItemId,
        quantity: f64,
    },

    /// The provided restock quantity is not positive.
    #[error("Invalid restock quantity: {0}")]
    InvalidQuantity(f64),

    /// An error occurred while communicating with the engine actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::ActorCommunicationError(msg)
    }
}

impl CafeStore {
    /// Adds a menu item. New items always start as direct-stock goods;
    /// [`set_recipe`](Self::set_recipe) turns them into prepared goods.
    pub fn add_menu_item(&mut self, params: MenuItemCreate) -> MenuItem {
        let id = self.next_menu_id();
        let item = MenuItem {
            id,
            name: params.name,
            category: params.category,
            price: params.price,
            fulfillment: Fulfillment::Stocked {
                stock: params.stock,
            },
        };
        self.menu.insert(id, item.clone());
        info!(menu_item_id = %id, name = %item.name, size = self.menu.len(), "Menu item added");
        item
    }

    /// Attaches `recipe` to a menu item, switching it to prepared
    /// fulfillment. Every ingredient must reference an existing inventory
    /// item with a non-negative per-unit quantity; the check happens here,
    /// at edit time, not on the sale path.
    pub fn set_recipe(
        &mut self,
        menu_item_id: MenuItemId,
        recipe: Recipe,
    ) -> Result<MenuItem, CatalogError> {
        for ingredient in &recipe.ingredients {
            if !self.inventory.contains_key(&ingredient.inventory_item_id) {
                return Err(CatalogError::UnknownIngredient {
                    menu_item_id,
                    inventory_item_id: ingredient.inventory_item_id,
                });
            }
            if !ingredient.quantity_per_unit.is_finite() || ingredient.quantity_per_unit < 0.0 {
                return Err(CatalogError::InvalidIngredientQuantity {
                    inventory_item_id: ingredient.inventory_item_id,
                    quantity: ingredient.quantity_per_unit,
                });
            }
        }

        let item = self
            .menu
            .get_mut(&menu_item_id)
            .ok_or(CatalogError::MenuItemNotFound(menu_item_id))?;
        item.fulfillment = Fulfillment::Prepared(recipe);
        info!(menu_item_id = %menu_item_id, name = %item.name, "Recipe attached");
        Ok(item.clone())
    }

    /// Detaches any recipe, returning the item to direct-stock fulfillment
    /// with the given counter.
    pub fn clear_recipe(
        &mut self,
        menu_item_id: MenuItemId,
        stock: u32,
    ) -> Result<MenuItem, CatalogError> {
        let item = self
            .menu
            .get_mut(&menu_item_id)
            .ok_or(CatalogError::MenuItemNotFound(menu_item_id))?;
        item.fulfillment = Fulfillment::Stocked { stock };
        info!(menu_item_id = %menu_item_id, name = %item.name, stock, "Recipe cleared");
        Ok(item.clone())
    }

    /// Adds a raw inventory item.
    pub fn add_inventory_item(&mut self, params: InventoryItemCreate) -> InventoryItem {
        let id = self.next_inventory_id();
        let item = InventoryItem {
            id,
            name: params.name,
            category: params.category,
            stock: params.stock,
            unit: params.unit,
            reorder_level: params.reorder_level,
            supplier: params.supplier,
            cost: params.cost,
            purchase_history: Vec::new(),
        };
        self.inventory.insert(id, item.clone());
        info!(inventory_item_id = %id, name = %item.name, size = self.inventory.len(), "Inventory item added");
        item
    }

    /// Records a purchase: appends to the item's purchase history and
    /// increases its stock. `quantity` must be positive.
    pub fn restock(
        &mut self,
        inventory_item_id: InventoryItemId,
        quantity: f64,
        cost_per_unit: f64,
        now: DateTime<Utc>,
    ) -> Result<InventoryItem, CatalogError> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(CatalogError::InvalidQuantity(quantity));
        }
        let item = self
            .inventory
            .get_mut(&inventory_item_id)
            .ok_or(CatalogError::InventoryItemNotFound(inventory_item_id))?;
        item.stock += quantity;
        item.purchase_history.push(PurchaseRecord {
            date: now,
            quantity,
            cost_per_unit,
        });
        info!(inventory_item_id = %inventory_item_id, quantity, stock = item.stock, "Restocked");
        Ok(item.clone())
    }

    /// Removes a menu item. Sales already snapshotted keep their line data;
    /// a later order line naming the removed id is skipped by the
    /// reconciler.
    pub fn remove_menu_item(&mut self, id: MenuItemId) -> Option<MenuItem> {
        let removed = self.menu.remove(&id);
        if removed.is_some() {
            info!(menu_item_id = %id, size = self.menu.len(), "Menu item removed");
        }
        removed
    }

    /// Removes an inventory item. Recipes that still reference it keep
    /// working; their deduction for this ingredient is skipped (and logged)
    /// by the reconciler.
    pub fn remove_inventory_item(&mut self, id: InventoryItemId) -> Option<InventoryItem> {
        let removed = self.inventory.remove(&id);
        if removed.is_some() {
            info!(inventory_item_id = %id, size = self.inventory.len(), "Inventory item removed");
        }
        removed
    }

    /// Enrolls a loyalty customer.
    pub fn add_customer(&mut self, params: CustomerCreate, now: DateTime<Utc>) -> LoyaltyCustomer {
        let id = self.next_customer_id();
        let customer = LoyaltyCustomer {
            id,
            name: params.name,
            email: params.email,
            points: params.points,
            join_date: now,
        };
        self.customers.insert(id, customer.clone());
        info!(customer_id = %id, name = %customer.name, size = self.customers.len(), "Customer enrolled");
        customer
    }

    // --- Reads ---

    pub fn menu_item(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.menu.get(&id)
    }

    /// All menu items, sorted by id for stable display.
    pub fn menu_items(&self) -> Vec<MenuItem> {
        let mut items: Vec<MenuItem> = self.menu.values().cloned().collect();
        items.sort_by_key(|item| item.id);
        items
    }

    pub fn inventory_item(&self, id: InventoryItemId) -> Option<&InventoryItem> {
        self.inventory.get(&id)
    }

    /// All inventory items, sorted by id for stable display.
    pub fn inventory_items(&self) -> Vec<InventoryItem> {
        let mut items: Vec<InventoryItem> = self.inventory.values().cloned().collect();
        items.sort_by_key(|item| item.id);
        items
    }

    /// Items at or below their advisory reorder threshold. Reporting only;
    /// nothing in the engine blocks on this.
    pub fn low_stock(&self) -> Vec<InventoryItem> {
        let mut items: Vec<InventoryItem> = self
            .inventory
            .values()
            .filter(|item| item.needs_reorder())
            .cloned()
            .collect();
        items.sort_by_key(|item| item.id);
        items
    }

    pub fn customer(&self, id: CustomerId) -> Option<&LoyaltyCustomer> {
        self.customers.get(&id)
    }

    /// All customers, sorted by id.
    pub fn customers(&self) -> Vec<LoyaltyCustomer> {
        let mut customers: Vec<LoyaltyCustomer> = self.customers.values().cloned().collect();
        customers.sort_by_key(|customer| customer.id);
        customers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InventoryCategory, MenuCategory, RecipeIngredient, StockUnit};
    use chrono::TimeZone;

    fn beans_params() -> InventoryItemCreate {
        InventoryItemCreate {
            name: "Espresso Beans".into(),
            category: InventoryCategory::DryGoods,
            stock: 20.0,
            unit: StockUnit::Kg,
            reorder_level: 5.0,
            supplier: "Roastery Co".into(),
            cost: 18.0,
        }
    }

    fn latte_params() -> MenuItemCreate {
        MenuItemCreate {
            name: "Latte".into(),
            category: MenuCategory::Beverage,
            price: 4.5,
            stock: 0,
        }
    }

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn set_recipe_rejects_unknown_ingredient() {
        let mut store = CafeStore::new();
        let latte = store.add_menu_item(latte_params());

        let result = store.set_recipe(
            latte.id,
            Recipe {
                ingredients: vec![RecipeIngredient {
                    inventory_item_id: InventoryItemId(99),
                    quantity_per_unit: 0.02,
                }],
                prep_time_minutes: 3,
                clean_time_minutes: 2,
                utilities_cost: 0.1,
                packaging_cost: 0.05,
            },
        );

        assert!(matches!(
            result,
            Err(CatalogError::UnknownIngredient { .. })
        ));
        // The item stays a direct-stock good.
        assert_eq!(store.menu_item(latte.id).unwrap().direct_stock(), Some(0));
    }

    #[test]
    fn set_recipe_rejects_negative_per_unit_quantity() {
        let mut store = CafeStore::new();
        let beans = store.add_inventory_item(beans_params());
        let latte = store.add_menu_item(latte_params());

        let result = store.set_recipe(
            latte.id,
            Recipe {
                ingredients: vec![RecipeIngredient {
                    inventory_item_id: beans.id,
                    quantity_per_unit: -0.02,
                }],
                prep_time_minutes: 3,
                clean_time_minutes: 2,
                utilities_cost: 0.0,
                packaging_cost: 0.0,
            },
        );

        assert!(matches!(
            result,
            Err(CatalogError::InvalidIngredientQuantity { .. })
        ));
    }

    #[test]
    fn set_recipe_switches_fulfillment() {
        let mut store = CafeStore::new();
        let beans = store.add_inventory_item(beans_params());
        let latte = store.add_menu_item(latte_params());

        let updated = store
            .set_recipe(
                latte.id,
                Recipe {
                    ingredients: vec![RecipeIngredient {
                        inventory_item_id: beans.id,
                        quantity_per_unit: 0.02,
                    }],
                    prep_time_minutes: 3,
                    clean_time_minutes: 2,
                    utilities_cost: 0.1,
                    packaging_cost: 0.05,
                },
            )
            .unwrap();
        assert!(updated.recipe().is_some());

        let reverted = store.clear_recipe(latte.id, 7).unwrap();
        assert_eq!(reverted.direct_stock(), Some(7));
    }

    #[test]
    fn restock_appends_history_and_increases_stock() {
        let mut store = CafeStore::new();
        let beans = store.add_inventory_item(beans_params());

        let updated = store.restock(beans.id, 5.0, 17.5, now()).unwrap();
        assert!((updated.stock - 25.0).abs() < 1e-9);
        assert_eq!(updated.purchase_history.len(), 1);
        assert!((updated.purchase_history[0].quantity - 5.0).abs() < 1e-9);

        assert_eq!(
            store.restock(beans.id, 0.0, 17.5, now()),
            Err(CatalogError::InvalidQuantity(0.0))
        );
        assert!(matches!(
            store.restock(InventoryItemId(99), 1.0, 17.5, now()),
            Err(CatalogError::InventoryItemNotFound(_))
        ));
    }

    #[test]
    fn low_stock_is_advisory_report() {
        let mut store = CafeStore::new();
        let mut params = beans_params();
        params.stock = 4.0; // at/below the reorder level of 5.0
        let beans = store.add_inventory_item(params);
        let milk = store.add_inventory_item(InventoryItemCreate {
            name: "Whole Milk".into(),
            category: InventoryCategory::Dairy,
            stock: 12.0,
            unit: StockUnit::Liters,
            reorder_level: 4.0,
            supplier: "Dairy Farm".into(),
            cost: 1.2,
        });

        let low = store.low_stock();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].id, beans.id);
        assert_ne!(low[0].id, milk.id);
    }
}
