//! Inventory reconciliation: turning a finalized order into stock
//! deductions.
//!
//! The algorithm is accumulate-then-write. Deductions are summed into
//! per-entity running totals across *all* order lines first, and each
//! affected stock field is written exactly once afterwards. Several lines
//! sharing an ingredient therefore floor against the combined total, and the
//! result is identical regardless of line ordering.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::model::{Fulfillment, InventoryItemId, MenuItemId, OrderItem};
use crate::store::CafeStore;

impl CafeStore {
    /// Applies the stock consumption of a finalized order.
    ///
    /// Never fails: stock floors at zero instead of rejecting over-deduction
    /// (availability of the sale record wins over strict inventory
    /// accuracy), and lines or ingredients referencing entities missing from
    /// the catalog are skipped with a warning while the rest of the order
    /// still reconciles.
    pub fn reconcile(&mut self, items: &[OrderItem]) {
        let mut inventory_totals: HashMap<InventoryItemId, f64> = HashMap::new();
        let mut menu_totals: HashMap<MenuItemId, u32> = HashMap::new();

        for line in items {
            match self.menu.get(&line.menu_item_id).map(|item| &item.fulfillment) {
                Some(Fulfillment::Prepared(recipe)) => {
                    for ingredient in &recipe.ingredients {
                        *inventory_totals
                            .entry(ingredient.inventory_item_id)
                            .or_default() +=
                            ingredient.quantity_per_unit * f64::from(line.quantity);
                    }
                }
                Some(Fulfillment::Stocked { .. }) => {
                    *menu_totals.entry(line.menu_item_id).or_default() += line.quantity;
                }
                None => {
                    warn!(
                        menu_item_id = %line.menu_item_id,
                        "Order line references unknown menu item, skipped"
                    );
                }
            }
        }

        for (id, deduction) in inventory_totals {
            match self.inventory.get_mut(&id) {
                Some(item) => {
                    item.stock = (item.stock - deduction).max(0.0);
                    debug!(inventory_item_id = %id, deduction, stock = item.stock, "Ingredient stock deducted");
                }
                None => {
                    warn!(
                        inventory_item_id = %id,
                        "Recipe references unknown inventory item, skipped"
                    );
                }
            }
        }

        for (id, deduction) in menu_totals {
            if let Some(item) = self.menu.get_mut(&id) {
                if let Fulfillment::Stocked { stock } = &mut item.fulfillment {
                    *stock = stock.saturating_sub(deduction);
                    debug!(menu_item_id = %id, deduction, stock = *stock, "Direct stock deducted");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        InventoryCategory, InventoryItemCreate, MenuCategory, MenuItem, MenuItemCreate, Recipe,
        RecipeIngredient, StockUnit,
    };

    fn add_inventory(store: &mut CafeStore, name: &str, stock: f64, unit: StockUnit) -> InventoryItemId {
        store
            .add_inventory_item(InventoryItemCreate {
                name: name.into(),
                category: InventoryCategory::DryGoods,
                stock,
                unit,
                reorder_level: 1.0,
                supplier: "Supplier".into(),
                cost: 1.0,
            })
            .id
    }

    fn add_stocked(store: &mut CafeStore, name: &str, stock: u32) -> MenuItem {
        store.add_menu_item(MenuItemCreate {
            name: name.into(),
            category: MenuCategory::Dessert,
            price: 6.0,
            stock,
        })
    }

    fn add_prepared(
        store: &mut CafeStore,
        name: &str,
        ingredients: Vec<RecipeIngredient>,
    ) -> MenuItem {
        let item = store.add_menu_item(MenuItemCreate {
            name: name.into(),
            category: MenuCategory::Beverage,
            price: 4.5,
            stock: 0,
        });
        store
            .set_recipe(
                item.id,
                Recipe {
                    ingredients,
                    prep_time_minutes: 3,
                    clean_time_minutes: 2,
                    utilities_cost: 0.1,
                    packaging_cost: 0.05,
                },
            )
            .unwrap()
    }

    fn line(item: &MenuItem, quantity: u32) -> OrderItem {
        OrderItem::of(item, quantity)
    }

    fn stock_of(store: &CafeStore, id: InventoryItemId) -> f64 {
        store.inventory_item(id).unwrap().stock
    }

    #[test]
    fn latte_order_consumes_ingredients() {
        let mut store = CafeStore::new();
        let beans = add_inventory(&mut store, "Espresso Beans", 20.0, StockUnit::Kg);
        let milk = add_inventory(&mut store, "Whole Milk", 12.0, StockUnit::Liters);
        let latte = add_prepared(
            &mut store,
            "Latte",
            vec![
                RecipeIngredient {
                    inventory_item_id: beans,
                    quantity_per_unit: 0.02,
                },
                RecipeIngredient {
                    inventory_item_id: milk,
                    quantity_per_unit: 0.25,
                },
            ],
        );

        store.reconcile(&[line(&latte, 2)]);

        assert!((stock_of(&store, beans) - 19.96).abs() < 1e-9);
        assert!((stock_of(&store, milk) - 11.5).abs() < 1e-9);
    }

    #[test]
    fn direct_stock_item_decrements_its_own_counter() {
        let mut store = CafeStore::new();
        let beans = add_inventory(&mut store, "Espresso Beans", 20.0, StockUnit::Kg);
        let cheesecake = add_stocked(&mut store, "Cheesecake", 15);

        store.reconcile(&[line(&cheesecake, 1)]);

        assert_eq!(
            store.menu_item(cheesecake.id).unwrap().direct_stock(),
            Some(14)
        );
        // Inventory untouched.
        assert!((stock_of(&store, beans) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn result_is_independent_of_line_order() {
        let build = || {
            let mut store = CafeStore::new();
            let beans = add_inventory(&mut store, "Espresso Beans", 20.0, StockUnit::Kg);
            let milk = add_inventory(&mut store, "Whole Milk", 12.0, StockUnit::Liters);
            let latte = add_prepared(
                &mut store,
                "Latte",
                vec![
                    RecipeIngredient {
                        inventory_item_id: beans,
                        quantity_per_unit: 0.02,
                    },
                    RecipeIngredient {
                        inventory_item_id: milk,
                        quantity_per_unit: 0.25,
                    },
                ],
            );
            let flat_white = add_prepared(
                &mut store,
                "Flat White",
                vec![
                    RecipeIngredient {
                        inventory_item_id: beans,
                        quantity_per_unit: 0.02,
                    },
                    RecipeIngredient {
                        inventory_item_id: milk,
                        quantity_per_unit: 0.15,
                    },
                ],
            );
            let cheesecake = add_stocked(&mut store, "Cheesecake", 15);
            (store, beans, milk, latte, flat_white, cheesecake)
        };

        let (mut forward, beans_a, milk_a, latte, flat_white, cheesecake) = build();
        let lines = vec![line(&latte, 2), line(&flat_white, 3), line(&cheesecake, 1)];
        forward.reconcile(&lines);

        let (mut reversed, beans_b, milk_b, ..) = build();
        let mut backwards = lines.clone();
        backwards.reverse();
        reversed.reconcile(&backwards);

        assert_eq!(
            stock_of(&forward, beans_a).to_bits(),
            stock_of(&reversed, beans_b).to_bits()
        );
        assert_eq!(
            stock_of(&forward, milk_a).to_bits(),
            stock_of(&reversed, milk_b).to_bits()
        );
    }

    #[test]
    fn shared_ingredients_are_summed_before_the_write() {
        let mut store = CafeStore::new();
        // 1.0 on hand; two lines wanting 0.75 each must floor against the
        // combined 1.5, not leave 0.25 behind from a second pass.
        let milk = add_inventory(&mut store, "Whole Milk", 1.0, StockUnit::Liters);
        let latte = add_prepared(
            &mut store,
            "Latte",
            vec![RecipeIngredient {
                inventory_item_id: milk,
                quantity_per_unit: 0.25,
            }],
        );
        let cocoa = add_prepared(
            &mut store,
            "Hot Chocolate",
            vec![RecipeIngredient {
                inventory_item_id: milk,
                quantity_per_unit: 0.25,
            }],
        );

        store.reconcile(&[line(&latte, 3), line(&cocoa, 3)]);

        assert!(stock_of(&store, milk).abs() < 1e-9);
    }

    #[test]
    fn stock_floors_at_zero() {
        let mut store = CafeStore::new();
        let beans = add_inventory(&mut store, "Espresso Beans", 0.05, StockUnit::Kg);
        let latte = add_prepared(
            &mut store,
            "Latte",
            vec![RecipeIngredient {
                inventory_item_id: beans,
                quantity_per_unit: 0.02,
            }],
        );

        store.reconcile(&[line(&latte, 40)]);

        assert!(stock_of(&store, beans).abs() < f64::EPSILON);

        let cheesecake = add_stocked(&mut store, "Cheesecake", 2);
        store.reconcile(&[line(&cheesecake, 10)]);
        assert_eq!(
            store.menu_item(cheesecake.id).unwrap().direct_stock(),
            Some(0)
        );
    }

    #[test]
    fn unknown_references_are_skipped_not_fatal() {
        let mut store = CafeStore::new();
        let milk = add_inventory(&mut store, "Whole Milk", 12.0, StockUnit::Liters);
        let latte = add_prepared(
            &mut store,
            "Latte",
            vec![RecipeIngredient {
                inventory_item_id: milk,
                quantity_per_unit: 0.25,
            }],
        );

        // A line for a menu item that was deleted after checkout.
        let ghost = OrderItem {
            menu_item_id: MenuItemId(404),
            name: "Ghost".into(),
            unit_price: 1.0,
            quantity: 3,
        };

        store.reconcile(&[ghost, line(&latte, 2)]);

        // The rest of the order still reconciled.
        assert!((stock_of(&store, milk) - 11.5).abs() < 1e-9);
    }

    #[test]
    fn ingredient_removed_from_catalog_is_skipped() {
        let mut store = CafeStore::new();
        let beans = add_inventory(&mut store, "Espresso Beans", 20.0, StockUnit::Kg);
        let milk = add_inventory(&mut store, "Whole Milk", 12.0, StockUnit::Liters);
        let latte = add_prepared(
            &mut store,
            "Latte",
            vec![
                RecipeIngredient {
                    inventory_item_id: beans,
                    quantity_per_unit: 0.02,
                },
                RecipeIngredient {
                    inventory_item_id: milk,
                    quantity_per_unit: 0.25,
                },
            ],
        );

        // The recipe was validated at edit time, but the ingredient has
        // since been deleted by an inventory editor.
        store.remove_inventory_item(milk);
        store.reconcile(&[line(&latte, 2)]);

        assert!((stock_of(&store, beans) - 19.96).abs() < 1e-9);
    }
}
