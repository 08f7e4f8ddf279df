//! The engine actor: exclusive owner of the [`CafeStore`].
//!
//! # Concurrency Model
//!
//! The actor processes its mailbox *sequentially* in a loop, so the store
//! needs no `Mutex` or `RwLock`: exclusive ownership within the task is the
//! serialization point the engine's invariants depend on. Concurrent sale
//! finalizations cannot interleave their accumulate/write phases; a waste
//! deduction cannot race a sale against the same stock counter.
//!
//! The actor reads the injected [`Clock`] once per message and hands the
//! timestamp into the store, keeping every store transition deterministic.

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::engine::EngineRequest;
use crate::store::CafeStore;

/// Owns the store and the receiving end of the request channel.
pub struct EngineActor {
    receiver: mpsc::Receiver<EngineRequest>,
    store: CafeStore,
    clock: Box<dyn Clock>,
}

impl EngineActor {
    /// Creates the actor and the sender its clients will share.
    pub fn new(
        mailbox_capacity: usize,
        clock: Box<dyn Clock>,
    ) -> (Self, mpsc::Sender<EngineRequest>) {
        let (sender, receiver) = mpsc::channel(mailbox_capacity);
        let actor = Self {
            receiver,
            store: CafeStore::new(),
            clock,
        };
        (actor, sender)
    }

    /// Runs the event loop, processing requests until every client (and
    /// with them, every sender clone) has been dropped.
    pub async fn run(mut self) {
        info!("Engine actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg);
        }

        info!(
            sales = self.store.sale_count(),
            active_orders = self.store.active_order_count(),
            "Engine actor shutdown"
        );
    }

    fn handle(&mut self, msg: EngineRequest) {
        match msg {
            // --- Catalog ---
            EngineRequest::AddMenuItem { params, respond_to } => {
                debug!(?params, "AddMenuItem");
                let _ = respond_to.send(self.store.add_menu_item(params));
            }
            EngineRequest::SetRecipe {
                menu_item_id,
                recipe,
                respond_to,
            } => {
                debug!(%menu_item_id, ?recipe, "SetRecipe");
                let _ = respond_to.send(self.store.set_recipe(menu_item_id, recipe));
            }
            EngineRequest::ClearRecipe {
                menu_item_id,
                stock,
                respond_to,
            } => {
                debug!(%menu_item_id, stock, "ClearRecipe");
                let _ = respond_to.send(self.store.clear_recipe(menu_item_id, stock));
            }
            EngineRequest::RemoveMenuItem {
                menu_item_id,
                respond_to,
            } => {
                debug!(%menu_item_id, "RemoveMenuItem");
                let _ = respond_to.send(self.store.remove_menu_item(menu_item_id));
            }
            EngineRequest::GetMenuItem {
                menu_item_id,
                respond_to,
            } => {
                debug!(%menu_item_id, "GetMenuItem");
                let _ = respond_to.send(self.store.menu_item(menu_item_id).cloned());
            }
            EngineRequest::ListMenuItems { respond_to } => {
                let _ = respond_to.send(self.store.menu_items());
            }
            EngineRequest::AddInventoryItem { params, respond_to } => {
                debug!(?params, "AddInventoryItem");
                let _ = respond_to.send(self.store.add_inventory_item(params));
            }
            EngineRequest::Restock {
                inventory_item_id,
                quantity,
                cost_per_unit,
                respond_to,
            } => {
                debug!(%inventory_item_id, quantity, cost_per_unit, "Restock");
                let now = self.clock.now();
                let _ = respond_to.send(self.store.restock(
                    inventory_item_id,
                    quantity,
                    cost_per_unit,
                    now,
                ));
            }
            EngineRequest::RemoveInventoryItem {
                inventory_item_id,
                respond_to,
            } => {
                debug!(%inventory_item_id, "RemoveInventoryItem");
                let _ = respond_to.send(self.store.remove_inventory_item(inventory_item_id));
            }
            EngineRequest::GetInventoryItem {
                inventory_item_id,
                respond_to,
            } => {
                debug!(%inventory_item_id, "GetInventoryItem");
                let _ = respond_to.send(self.store.inventory_item(inventory_item_id).cloned());
            }
            EngineRequest::ListInventoryItems { respond_to } => {
                let _ = respond_to.send(self.store.inventory_items());
            }
            EngineRequest::ListLowStock { respond_to } => {
                let _ = respond_to.send(self.store.low_stock());
            }
            EngineRequest::AddCustomer { params, respond_to } => {
                debug!(?params, "AddCustomer");
                let now = self.clock.now();
                let _ = respond_to.send(self.store.add_customer(params, now));
            }
            EngineRequest::GetCustomer {
                customer_id,
                respond_to,
            } => {
                debug!(%customer_id, "GetCustomer");
                let _ = respond_to.send(self.store.customer(customer_id).cloned());
            }
            EngineRequest::ListCustomers { respond_to } => {
                let _ = respond_to.send(self.store.customers());
            }

            // --- Order lifecycle ---
            EngineRequest::FinalizeSale { params, respond_to } => {
                debug!(?params, "FinalizeSale");
                let now = self.clock.now();
                let _ = respond_to.send(self.store.finalize_sale(params, now));
            }
            EngineRequest::CompleteOrder {
                sale_id,
                respond_to,
            } => {
                debug!(%sale_id, "CompleteOrder");
                let now = self.clock.now();
                let _ = respond_to.send(self.store.complete_order(sale_id, now));
            }
            EngineRequest::ListSales { respond_to } => {
                let _ = respond_to.send(self.store.sales());
            }
            EngineRequest::ListKitchenOrders { respond_to } => {
                let _ = respond_to.send(self.store.kitchen_orders());
            }
            EngineRequest::EstimatePrepSeconds {
                sale_id,
                respond_to,
            } => {
                debug!(%sale_id, "EstimatePrepSeconds");
                let _ = respond_to.send(self.store.estimated_prep_seconds(sale_id));
            }

            // --- Loyalty ---
            EngineRequest::ApplyCustomerSale {
                customer_id,
                total,
                points_redeemed,
                respond_to,
            } => {
                debug!(%customer_id, total, points_redeemed, "ApplyCustomerSale");
                let _ =
                    respond_to.send(self.store.apply_customer_sale(customer_id, total, points_redeemed));
            }

            // --- Waste ---
            EngineRequest::RecordWaste {
                inventory_item_id,
                quantity,
                reason,
                respond_to,
            } => {
                debug!(%inventory_item_id, quantity, "RecordWaste");
                let now = self.clock.now();
                let _ =
                    respond_to.send(self.store.record_waste(inventory_item_id, quantity, reason, now));
            }
            EngineRequest::ListWasteRecords { respond_to } => {
                let _ = respond_to.send(self.store.waste_records());
            }

            // --- Pickup ---
            EngineRequest::PendingPickups {
                customer_id,
                respond_to,
            } => {
                debug!(%customer_id, "PendingPickups");
                let _ = respond_to.send(self.store.pending_pickups(customer_id));
            }
            EngineRequest::AcknowledgePickup {
                sale_id,
                respond_to,
            } => {
                debug!(%sale_id, "AcknowledgePickup");
                let _ = respond_to.send(self.store.acknowledge_pickup(sale_id));
            }
        }
    }
}
