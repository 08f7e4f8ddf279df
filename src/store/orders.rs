//! The order lifecycle: sale finalization through kitchen completion.
//!
//! A sale moves `Created → InKitchen → Completed`. The first transition is
//! collapsed into finalization: a [`Sale`] and its [`KitchenOrder`] always
//! come into existence together, in the same store transition that applies
//! the inventory deduction, so no sale exists without its consumption and
//! vice versa. Completion is terminal; "awaiting pickup" is a label the
//! pickup set derives over completed customer orders, not a stored state.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, warn};

use crate::model::{KitchenOrder, Sale, SaleCreate, SaleId};
use crate::store::CafeStore;

/// Errors that can occur during order operations.
///
/// Domain-wise the lifecycle never fails: finalization always succeeds and
/// completing an unknown or already-completed order is a no-op. What remains
/// is the transport.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// An error occurred while communicating with the engine actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}

impl CafeStore {
    /// Finalizes a sale: issues the id, stores the sale, opens the matching
    /// kitchen order, and applies the inventory deduction as one indivisible
    /// transition.
    ///
    /// The money triple is the caller's responsibility (the POS validates
    /// `total = subtotal - discount` before calling in); the engine stores
    /// what it is given.
    pub fn finalize_sale(&mut self, params: SaleCreate, now: DateTime<Utc>) -> Sale {
        let id = self.next_sale_id();
        let sale = Sale {
            id,
            timestamp: now,
            items: params.items,
            subtotal: params.subtotal,
            discount: params.discount,
            total: params.total,
            prep_time_seconds: None,
            customer_id: params.customer_id,
        };

        self.kitchen.insert(
            id,
            KitchenOrder {
                id,
                timestamp: now,
                items: sale.items.clone(),
                customer_id: sale.customer_id,
            },
        );
        self.reconcile(&sale.items);
        self.sales.push(sale.clone());

        info!(
            sale_id = %id,
            lines = sale.items.len(),
            total = sale.total,
            customer_id = ?sale.customer_id,
            "Sale finalized"
        );
        sale
    }

    /// Completes an active kitchen order, returning the recorded prep time.
    ///
    /// Idempotent-safe: an id that is not in the active set (already
    /// completed, or never existed) is a silent no-op returning `None`, so
    /// duplicate completion requests from a stale kitchen display cannot
    /// corrupt anything. The prep time is the wall-clock delta since the
    /// order entered the kitchen, clamped to zero against clock skew, and is
    /// written onto the sale exactly once.
    pub fn complete_order(&mut self, sale_id: SaleId, now: DateTime<Utc>) -> Option<u64> {
        let order = self.kitchen.remove(&sale_id)?;

        let prep_time_seconds = (now - order.timestamp).num_seconds().max(0) as u64;
        match self.sales.iter_mut().rev().find(|sale| sale.id == sale_id) {
            Some(sale) if sale.prep_time_seconds.is_none() => {
                sale.prep_time_seconds = Some(prep_time_seconds);
            }
            Some(_) => {}
            None => {
                warn!(sale_id = %sale_id, "Kitchen order completed but its sale is missing");
            }
        }

        if order.customer_id.is_some() {
            self.mark_ready(sale_id);
        }

        info!(
            sale_id = %sale_id,
            prep_time_seconds,
            active = self.kitchen.len(),
            "Order completed"
        );
        Some(prep_time_seconds)
    }

    /// Baseline prep-time estimate for an active order, in seconds: the
    /// longest `(prep + clean)` baseline among its prepared items. `None`
    /// for unknown/completed orders and for orders of direct-stock goods
    /// only. Estimation only; completion records the real figure.
    pub fn estimated_prep_seconds(&self, sale_id: SaleId) -> Option<u64> {
        let order = self.kitchen.get(&sale_id)?;
        order
            .items
            .iter()
            .filter_map(|line| self.menu.get(&line.menu_item_id))
            .filter_map(|item| item.recipe())
            .map(|recipe| recipe.baseline_seconds())
            .max()
    }

    /// All sales, most recent first.
    pub fn sales(&self) -> Vec<Sale> {
        self.sales.iter().rev().cloned().collect()
    }

    /// Looks up a single sale.
    pub fn sale(&self, sale_id: SaleId) -> Option<&Sale> {
        self.sales.iter().rev().find(|sale| sale.id == sale_id)
    }

    /// The active kitchen set, oldest first so the display matches kitchen
    /// priority. (No ordering is mandated; this is display convenience.)
    pub fn kitchen_orders(&self) -> Vec<KitchenOrder> {
        let mut orders: Vec<KitchenOrder> = self.kitchen.values().cloned().collect();
        orders.sort_by_key(|order| (order.timestamp, order.id));
        orders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        InventoryCategory, InventoryItemCreate, MenuCategory, MenuItemCreate, OrderItem, Recipe,
        RecipeIngredient, StockUnit,
    };
    use chrono::{Duration, TimeZone};

    fn at(minute: u32, second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, minute, second).unwrap()
    }

    fn stocked_sale(store: &mut CafeStore, quantity: u32, now: DateTime<Utc>) -> Sale {
        let item = store.add_menu_item(MenuItemCreate {
            name: "Cheesecake".into(),
            category: MenuCategory::Dessert,
            price: 6.0,
            stock: 15,
        });
        store.finalize_sale(
            SaleCreate {
                items: vec![OrderItem::of(&item, quantity)],
                subtotal: 6.0 * f64::from(quantity),
                discount: 0.0,
                total: 6.0 * f64::from(quantity),
                customer_id: None,
            },
            now,
        )
    }

    #[test]
    fn sale_and_kitchen_order_are_created_together() {
        let mut store = CafeStore::new();
        let sale = stocked_sale(&mut store, 1, at(0, 0));

        assert_eq!(store.sale_count(), 1);
        assert_eq!(store.active_order_count(), 1);
        let kitchen = &store.kitchen_orders()[0];
        assert_eq!(kitchen.id, sale.id);
        assert_eq!(kitchen.items, sale.items);
        assert!(sale.prep_time_seconds.is_none());
        // Consumption applied in the same transition.
        assert_eq!(
            store.menu_item(sale.items[0].menu_item_id).unwrap().direct_stock(),
            Some(14)
        );
    }

    #[test]
    fn sale_ids_are_unique_and_increasing() {
        let mut store = CafeStore::new();
        let first = stocked_sale(&mut store, 1, at(0, 0));
        let second = stocked_sale(&mut store, 1, at(0, 0));
        // Same creation instant, still distinguishable.
        assert!(second.id > first.id);
    }

    #[test]
    fn sales_surface_most_recent_first() {
        let mut store = CafeStore::new();
        let first = stocked_sale(&mut store, 1, at(0, 0));
        let second = stocked_sale(&mut store, 2, at(1, 0));

        let sales = store.sales();
        assert_eq!(sales[0].id, second.id);
        assert_eq!(sales[1].id, first.id);
    }

    #[test]
    fn completion_records_elapsed_prep_time() {
        let mut store = CafeStore::new();
        let sale = stocked_sale(&mut store, 1, at(0, 0));

        let recorded = store.complete_order(sale.id, at(1, 30));
        assert_eq!(recorded, Some(90));
        assert_eq!(store.sale(sale.id).unwrap().prep_time_seconds, Some(90));
        assert_eq!(store.active_order_count(), 0);
    }

    #[test]
    fn completion_is_idempotent() {
        let mut store = CafeStore::new();
        let sale = stocked_sale(&mut store, 1, at(0, 0));

        assert_eq!(store.complete_order(sale.id, at(1, 30)), Some(90));
        // Second completion: no-op, prep time untouched.
        assert_eq!(store.complete_order(sale.id, at(5, 0)), None);
        assert_eq!(store.sale(sale.id).unwrap().prep_time_seconds, Some(90));
    }

    #[test]
    fn completing_an_unknown_order_is_a_noop() {
        let mut store = CafeStore::new();
        assert_eq!(store.complete_order(SaleId(404), at(0, 0)), None);
    }

    #[test]
    fn clock_skew_clamps_prep_time_to_zero() {
        let mut store = CafeStore::new();
        let sale = stocked_sale(&mut store, 1, at(2, 0));

        // Completion timestamp before creation (skewed clock).
        let recorded = store.complete_order(sale.id, at(2, 0) - Duration::seconds(30));
        assert_eq!(recorded, Some(0));
        assert_eq!(store.sale(sale.id).unwrap().prep_time_seconds, Some(0));
    }

    #[test]
    fn kitchen_orders_sort_oldest_first() {
        let mut store = CafeStore::new();
        let late = stocked_sale(&mut store, 1, at(5, 0));
        let early = stocked_sale(&mut store, 1, at(1, 0));

        let orders = store.kitchen_orders();
        assert_eq!(orders[0].id, early.id);
        assert_eq!(orders[1].id, late.id);
    }

    #[test]
    fn estimate_uses_longest_recipe_baseline() {
        let mut store = CafeStore::new();
        let milk = store.add_inventory_item(InventoryItemCreate {
            name: "Whole Milk".into(),
            category: InventoryCategory::Dairy,
            stock: 12.0,
            unit: StockUnit::Liters,
            reorder_level: 4.0,
            supplier: "Dairy Farm".into(),
            cost: 1.2,
        });
        let latte = store.add_menu_item(MenuItemCreate {
            name: "Latte".into(),
            category: MenuCategory::Beverage,
            price: 4.5,
            stock: 0,
        });
        let latte = store
            .set_recipe(
                latte.id,
                Recipe {
                    ingredients: vec![RecipeIngredient {
                        inventory_item_id: milk.id,
                        quantity_per_unit: 0.25,
                    }],
                    prep_time_minutes: 3,
                    clean_time_minutes: 2,
                    utilities_cost: 0.1,
                    packaging_cost: 0.05,
                },
            )
            .unwrap();
        let cheesecake = store.add_menu_item(MenuItemCreate {
            name: "Cheesecake".into(),
            category: MenuCategory::Dessert,
            price: 6.0,
            stock: 15,
        });

        let sale = store.finalize_sale(
            SaleCreate {
                items: vec![OrderItem::of(&latte, 2), OrderItem::of(&cheesecake, 1)],
                subtotal: 15.0,
                discount: 0.0,
                total: 15.0,
                customer_id: None,
            },
            at(0, 0),
        );

        assert_eq!(store.estimated_prep_seconds(sale.id), Some(300));

        // Direct-stock-only orders have no baseline.
        let plain = store.finalize_sale(
            SaleCreate {
                items: vec![OrderItem::of(&cheesecake, 1)],
                subtotal: 6.0,
                discount: 0.0,
                total: 6.0,
                customer_id: None,
            },
            at(0, 0),
        );
        assert_eq!(store.estimated_prep_seconds(plain.id), None);

        store.complete_order(sale.id, at(4, 0));
        assert_eq!(store.estimated_prep_seconds(sale.id), None);
    }
}
