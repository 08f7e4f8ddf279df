use tracing::{error, info};

use crate::clients::{CatalogClient, LoyaltyClient, OrderClient, PickupClient, WasteClient};
use crate::clock::{Clock, SystemClock};
use crate::config::EngineConfig;
use crate::engine::EngineActor;

/// The runtime orchestrator for the café engine.
///
/// `CafeSystem` is responsible for:
/// - **Lifecycle Management**: Starting the engine actor and stopping it
/// - **Client Wiring**: Handing each collaborator its typed facade
/// - **Clock Injection**: Choosing the time source the engine stamps with
///
/// # Architecture
///
/// One actor owns all mutable state. The five clients are cheap sender
/// clones, one per collaborator:
/// - **Catalog**: menu/recipe/inventory editors
/// - **Order**: POS checkout and the kitchen display
/// - **Loyalty**: points settlement at checkout
/// - **Waste**: the waste-tracking screen
/// - **Pickup**: the customer-facing pickup UI
///
/// # Example
///
/// ```ignore
/// let system = CafeSystem::new();
///
/// let latte = system.catalog_client.add_menu_item(params).await?;
/// let sale = system.order_client.finalize_sale(order).await?;
/// system.order_client.complete_order(sale.id).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct CafeSystem {
    /// Client for the catalog surface (menu, recipes, inventory, customers)
    pub catalog_client: CatalogClient,

    /// Client for sale finalization and kitchen fulfillment
    pub order_client: OrderClient,

    /// Client for the loyalty ledger
    pub loyalty_client: LoyaltyClient,

    /// Client for the waste recorder
    pub waste_client: WasteClient,

    /// Client for the pickup tracker
    pub pickup_client: PickupClient,

    /// Task handle for the engine actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl CafeSystem {
    /// Creates a system with the default configuration and the wall clock.
    pub fn new() -> Self {
        Self::with_clock(EngineConfig::default(), Box::new(SystemClock))
    }

    /// Creates a system with an explicit configuration and clock. Tests pass
    /// a [`ManualClock`](crate::clock::ManualClock) here to make prep-time
    /// derivation deterministic.
    pub fn with_clock(config: EngineConfig, clock: Box<dyn Clock>) -> Self {
        let (actor, sender) = EngineActor::new(config.mailbox_capacity, clock);
        let handle = tokio::spawn(actor.run());

        Self {
            catalog_client: CatalogClient::new(sender.clone()),
            order_client: OrderClient::new(sender.clone()),
            loyalty_client: LoyaltyClient::new(sender.clone()),
            waste_client: WasteClient::new(sender.clone()),
            pickup_client: PickupClient::new(sender),
            handle,
        }
    }

    /// Gracefully shuts down the engine.
    ///
    /// Dropping the clients closes the request channel; the actor drains its
    /// mailbox, logs its final state, and exits. Returns an error if the
    /// actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down engine...");

        // Dropping every client drops every sender clone, which closes the
        // channel and ends the actor's receive loop.
        drop(self.catalog_client);
        drop(self.order_client);
        drop(self.loyalty_client);
        drop(self.waste_client);
        drop(self.pickup_client);

        if let Err(e) = self.handle.await {
            error!("Engine task failed: {:?}", e);
            return Err(format!("Engine task failed: {:?}", e));
        }

        info!("Engine shutdown complete.");
        Ok(())
    }
}

impl Default for CafeSystem {
    fn default() -> Self {
        Self::new()
    }
}
