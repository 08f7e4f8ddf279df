//! The engine's message protocol.
//!
//! Each operation of the engine is one variant carrying its payload and a
//! `oneshot` responder. Requests for fallible operations embed their domain
//! `Result` in the response payload, so typed errors cross the channel
//! intact; [`EngineError`](crate::engine::EngineError) is reserved for the
//! channel itself failing.

use tokio::sync::oneshot;

use crate::model::{
    CustomerCreate, CustomerId, InventoryItem, InventoryItemCreate, InventoryItemId,
    KitchenOrder, LoyaltyCustomer, MenuItem, MenuItemCreate, MenuItemId, Recipe, Sale,
    SaleCreate, SaleId, WasteRecord,
};
use crate::store::{CatalogError, WasteError};

/// The one-shot response channel used by the engine actor.
pub type Response<T> = oneshot::Sender<T>;

/// A request to the engine actor.
///
/// The engine processes these strictly one at a time, which is what makes
/// multi-collection operations (a sale and its inventory deduction)
/// indivisible relative to every other operation.
#[derive(Debug)]
pub enum EngineRequest {
    // =========================================================================
    // Catalog (menu, recipe, and inventory editors)
    // =========================================================================
    AddMenuItem {
        params: MenuItemCreate,
        respond_to: Response<MenuItem>,
    },
    SetRecipe {
        menu_item_id: MenuItemId,
        recipe: Recipe,
        respond_to: Response<Result<MenuItem, CatalogError>>,
    },
    ClearRecipe {
        menu_item_id: MenuItemId,
        stock: u32,
        respond_to: Response<Result<MenuItem, CatalogError>>,
    },
    RemoveMenuItem {
        menu_item_id: MenuItemId,
        respond_to: Response<Option<MenuItem>>,
    },
    GetMenuItem {
        menu_item_id: MenuItemId,
        respond_to: Response<Option<MenuItem>>,
    },
    ListMenuItems {
        respond_to: Response<Vec<MenuItem>>,
    },
    AddInventoryItem {
        params: InventoryItemCreate,
        respond_to: Response<InventoryItem>,
    },
    Restock {
        inventory_item_id: InventoryItemId,
        quantity: f64,
        cost_per_unit: f64,
        respond_to: Response<Result<InventoryItem, CatalogError>>,
    },
    RemoveInventoryItem {
        inventory_item_id: InventoryItemId,
        respond_to: Response<Option<InventoryItem>>,
    },
    GetInventoryItem {
        inventory_item_id: InventoryItemId,
        respond_to: Response<Option<InventoryItem>>,
    },
    ListInventoryItems {
        respond_to: Response<Vec<InventoryItem>>,
    },
    ListLowStock {
        respond_to: Response<Vec<InventoryItem>>,
    },
    AddCustomer {
        params: CustomerCreate,
        respond_to: Response<LoyaltyCustomer>,
    },
    GetCustomer {
        customer_id: CustomerId,
        respond_to: Response<Option<LoyaltyCustomer>>,
    },
    ListCustomers {
        respond_to: Response<Vec<LoyaltyCustomer>>,
    },

    // =========================================================================
    // Order lifecycle (POS and kitchen display)
    // =========================================================================
    FinalizeSale {
        params: SaleCreate,
        respond_to: Response<Sale>,
    },
    CompleteOrder {
        sale_id: SaleId,
        respond_to: Response<Option<u64>>,
    },
    ListSales {
        respond_to: Response<Vec<Sale>>,
    },
    ListKitchenOrders {
        respond_to: Response<Vec<KitchenOrder>>,
    },
    EstimatePrepSeconds {
        sale_id: SaleId,
        respond_to: Response<Option<u64>>,
    },

    // =========================================================================
    // Loyalty ledger (checkout)
    // =========================================================================
    ApplyCustomerSale {
        customer_id: CustomerId,
        total: f64,
        points_redeemed: i64,
        respond_to: Response<i64>,
    },

    // =========================================================================
    // Waste recorder
    // =========================================================================
    RecordWaste {
        inventory_item_id: InventoryItemId,
        quantity: f64,
        reason: String,
        respond_to: Response<Result<WasteRecord, WasteError>>,
    },
    ListWasteRecords {
        respond_to: Response<Vec<WasteRecord>>,
    },

    // =========================================================================
    // Pickup tracker (customer-facing UI)
    // =========================================================================
    PendingPickups {
        customer_id: CustomerId,
        respond_to: Response<Vec<SaleId>>,
    },
    AcknowledgePickup {
        sale_id: SaleId,
        respond_to: Response<bool>,
    },
}
