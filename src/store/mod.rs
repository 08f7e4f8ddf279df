//! The store owning every entity collection.
//!
//! All mutation funnels through [`CafeStore`] methods, giving the engine a
//! single point where serialization is enforced: in production the store is
//! owned exclusively by the [`EngineActor`](crate::engine::EngineActor),
//! which processes one request at a time, so no method here needs a lock.
//!
//! Store methods are pure synchronous transitions (the only wall-clock
//! input arrives as an explicit `now` argument), which keeps every business
//! rule unit-testable without spawning the runtime.
//!
//! # Module Map
//!
//! The operations are split by component, one file per concern:
//! - [`catalog`]: editor surface (menu, inventory, recipes, customers,
//!   restocking)
//! - [`reconcile`]: stock deduction for a finalized order
//! - [`orders`]: sale/kitchen-order lifecycle and prep-time derivation
//! - [`loyalty`]: point accrual and redemption
//! - [`waste`]: audited ad-hoc deductions
//! - [`pickup`]: completed customer orders awaiting acknowledgment

pub mod catalog;
pub mod loyalty;
pub mod orders;
pub mod pickup;
pub mod reconcile;
pub mod waste;

pub use catalog::CatalogError;
pub use loyalty::LoyaltyError;
pub use orders::OrderError;
pub use pickup::PickupError;
pub use waste::WasteError;

use std::collections::{HashMap, HashSet};

use crate::model::{
    CustomerId, InventoryItem, InventoryItemId, KitchenOrder, LoyaltyCustomer, MenuItem,
    MenuItemId, Sale, SaleId, WasteRecord, WasteRecordId,
};

/// Monotonically increasing id source, one per collection.
///
/// Plain counters are enough: the store has a single logical owner, so
/// issuance is already serialized.
#[derive(Debug, Default)]
struct IdSequence {
    next: u64,
}

impl IdSequence {
    fn next(&mut self) -> u64 {
        self.next += 1;
        self.next
    }
}

/// Owns every entity collection of the engine.
///
/// See the [module docs](self) for the concurrency contract. Direct use is
/// fine for single-threaded embedding and tests; concurrent callers go
/// through [`CafeSystem`](crate::lifecycle::CafeSystem) instead.
pub struct CafeStore {
    pub(crate) menu: HashMap<MenuItemId, MenuItem>,
    pub(crate) inventory: HashMap<InventoryItemId, InventoryItem>,
    pub(crate) customers: HashMap<CustomerId, LoyaltyCustomer>,
    /// Creation order; surfaced most-recent-first.
    pub(crate) sales: Vec<Sale>,
    /// The active kitchen set. A completed order leaves this map.
    pub(crate) kitchen: HashMap<SaleId, KitchenOrder>,
    /// Append-only.
    pub(crate) waste_log: Vec<WasteRecord>,
    pub(crate) pending_pickup: HashSet<SaleId>,
    menu_ids: IdSequence,
    inventory_ids: IdSequence,
    customer_ids: IdSequence,
    sale_ids: IdSequence,
    waste_ids: IdSequence,
}

impl CafeStore {
    pub fn new() -> Self {
        Self {
            menu: HashMap::new(),
            inventory: HashMap::new(),
            customers: HashMap::new(),
            sales: Vec::new(),
            kitchen: HashMap::new(),
            waste_log: Vec::new(),
            pending_pickup: HashSet::new(),
            menu_ids: IdSequence::default(),
            inventory_ids: IdSequence::default(),
            customer_ids: IdSequence::default(),
            sale_ids: IdSequence::default(),
            waste_ids: IdSequence::default(),
        }
    }

    pub(crate) fn next_menu_id(&mut self) -> MenuItemId {
        MenuItemId(self.menu_ids.next())
    }

    pub(crate) fn next_inventory_id(&mut self) -> InventoryItemId {
        InventoryItemId(self.inventory_ids.next())
    }

    pub(crate) fn next_customer_id(&mut self) -> CustomerId {
        CustomerId(self.customer_ids.next())
    }

    pub(crate) fn next_sale_id(&mut self) -> SaleId {
        SaleId(self.sale_ids.next())
    }

    pub(crate) fn next_waste_id(&mut self) -> WasteRecordId {
        WasteRecordId(self.waste_ids.next())
    }

    /// Number of recorded sales.
    pub fn sale_count(&self) -> usize {
        self.sales.len()
    }

    /// Number of orders still in the kitchen.
    pub fn active_order_count(&self) -> usize {
        self.kitchen.len()
    }
}

impl Default for CafeStore {
    fn default() -> Self {
        Self::new()
    }
}
