//! Client for the catalog surface: menu, recipes, inventory, customers.

use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::clients::send_request;
use crate::engine::EngineRequest;
use crate::model::{
    CustomerCreate, CustomerId, InventoryItem, InventoryItemCreate, InventoryItemId,
    LoyaltyCustomer, MenuItem, MenuItemCreate, MenuItemId, Recipe,
};
use crate::store::CatalogError;

/// Client used by the menu, recipe, and inventory editors.
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<EngineRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<EngineRequest>) -> Self {
        Self { sender }
    }

    fn comm_error(e: impl std::fmt::Display) -> CatalogError {
        CatalogError::ActorCommunicationError(e.to_string())
    }

    #[instrument(skip(self, params))]
    pub async fn add_menu_item(&self, params: MenuItemCreate) -> Result<MenuItem, CatalogError> {
        debug!(?params, "add_menu_item called");
        send_request(&self.sender, |respond_to| EngineRequest::AddMenuItem {
            params,
            respond_to,
        })
        .await
        .map_err(Self::comm_error)
    }

    /// Attaches a recipe, turning the item into a prepared good.
    #[instrument(skip(self, recipe))]
    pub async fn set_recipe(
        &self,
        menu_item_id: MenuItemId,
        recipe: Recipe,
    ) -> Result<MenuItem, CatalogError> {
        debug!(?recipe, "set_recipe called");
        send_request(&self.sender, |respond_to| EngineRequest::SetRecipe {
            menu_item_id,
            recipe,
            respond_to,
        })
        .await
        .map_err(Self::comm_error)?
    }

    /// Detaches the recipe, returning the item to direct stock.
    #[instrument(skip(self))]
    pub async fn clear_recipe(
        &self,
        menu_item_id: MenuItemId,
        stock: u32,
    ) -> Result<MenuItem, CatalogError> {
        debug!("Sending request");
        send_request(&self.sender, |respond_to| EngineRequest::ClearRecipe {
            menu_item_id,
            stock,
            respond_to,
        })
        .await
        .map_err(Self::comm_error)?
    }

    #[instrument(skip(self))]
    pub async fn remove_menu_item(
        &self,
        menu_item_id: MenuItemId,
    ) -> Result<Option<MenuItem>, CatalogError> {
        debug!("Sending request");
        send_request(&self.sender, |respond_to| EngineRequest::RemoveMenuItem {
            menu_item_id,
            respond_to,
        })
        .await
        .map_err(Self::comm_error)
    }

    #[instrument(skip(self))]
    pub async fn menu_item(
        &self,
        menu_item_id: MenuItemId,
    ) -> Result<Option<MenuItem>, CatalogError> {
        debug!("Sending request");
        send_request(&self.sender, |respond_to| EngineRequest::GetMenuItem {
            menu_item_id,
            respond_to,
        })
        .await
        .map_err(Self::comm_error)
    }

    #[instrument(skip(self))]
    pub async fn menu_items(&self) -> Result<Vec<MenuItem>, CatalogError> {
        debug!("Sending request");
        send_request(&self.sender, |respond_to| EngineRequest::ListMenuItems {
            respond_to,
        })
        .await
        .map_err(Self::comm_error)
    }

    #[instrument(skip(self, params))]
    pub async fn add_inventory_item(
        &self,
        params: InventoryItemCreate,
    ) -> Result<InventoryItem, CatalogError> {
        debug!(?params, "add_inventory_item called");
        send_request(&self.sender, |respond_to| EngineRequest::AddInventoryItem {
            params,
            respond_to,
        })
        .await
        .map_err(Self::comm_error)
    }

    /// Records a purchase against an inventory item.
    #[instrument(skip(self))]
    pub async fn restock(
        &self,
        inventory_item_id: InventoryItemId,
        quantity: f64,
        cost_per_unit: f64,
    ) -> Result<InventoryItem, CatalogError> {
        debug!("Sending request");
        send_request(&self.sender, |respond_to| EngineRequest::Restock {
            inventory_item_id,
            quantity,
            cost_per_unit,
            respond_to,
        })
        .await
        .map_err(Self::comm_error)?
    }

    #[instrument(skip(self))]
    pub async fn remove_inventory_item(
        &self,
        inventory_item_id: InventoryItemId,
    ) -> Result<Option<InventoryItem>, CatalogError> {
        debug!("Sending request");
        send_request(&self.sender, |respond_to| {
            EngineRequest::RemoveInventoryItem {
                inventory_item_id,
                respond_to,
            }
        })
        .await
        .map_err(Self::comm_error)
    }

    #[instrument(skip(self))]
    pub async fn inventory_item(
        &self,
        inventory_item_id: InventoryItemId,
    ) -> Result<Option<InventoryItem>, CatalogError> {
        debug!("Sending request");
        send_request(&self.sender, |respond_to| EngineRequest::GetInventoryItem {
            inventory_item_id,
            respond_to,
        })
        .await
        .map_err(Self::comm_error)
    }

    #[instrument(skip(self))]
    pub async fn inventory_items(&self) -> Result<Vec<InventoryItem>, CatalogError> {
        debug!("Sending request");
        send_request(&self.sender, |respond_to| {
            EngineRequest::ListInventoryItems { respond_to }
        })
        .await
        .map_err(Self::comm_error)
    }

    /// Items at or below their advisory reorder threshold.
    #[instrument(skip(self))]
    pub async fn low_stock(&self) -> Result<Vec<InventoryItem>, CatalogError> {
        debug!("Sending request");
        send_request(&self.sender, |respond_to| EngineRequest::ListLowStock {
            respond_to,
        })
        .await
        .map_err(Self::comm_error)
    }

    #[instrument(skip(self, params))]
    pub async fn add_customer(
        &self,
        params: CustomerCreate,
    ) -> Result<LoyaltyCustomer, CatalogError> {
        debug!(?params, "add_customer called");
        send_request(&self.sender, |respond_to| EngineRequest::AddCustomer {
            params,
            respond_to,
        })
        .await
        .map_err(Self::comm_error)
    }

    #[instrument(skip(self))]
    pub async fn customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Option<LoyaltyCustomer>, CatalogError> {
        debug!("Sending request");
        send_request(&self.sender, |respond_to| EngineRequest::GetCustomer {
            customer_id,
            respond_to,
        })
        .await
        .map_err(Self::comm_error)
    }

    #[instrument(skip(self))]
    pub async fn customers(&self) -> Result<Vec<LoyaltyCustomer>, CatalogError> {
        debug!("Sending request");
        send_request(&self.sender, |respond_to| EngineRequest::ListCustomers {
            respond_to,
        })
        .await
        .map_err(Self::comm_error)
    }
}
