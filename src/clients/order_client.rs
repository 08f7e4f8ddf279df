//! Client for the order lifecycle: the POS front end and the kitchen
//! display.

use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::clients::send_request;
use crate::engine::EngineRequest;
use crate::model::{KitchenOrder, Sale, SaleCreate, SaleId};
use crate::store::orders::OrderError;

/// Client for finalizing sales and driving kitchen fulfillment.
#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<EngineRequest>,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<EngineRequest>) -> Self {
        Self { sender }
    }

    fn comm_error(e: impl std::fmt::Display) -> OrderError {
        OrderError::ActorCommunicationError(e.to_string())
    }

    /// Finalizes a sale. The sale record, its kitchen order, and the
    /// inventory deduction are applied as one unit by the engine.
    ///
    /// The caller owns the money triple: the engine stores
    /// `subtotal`/`discount`/`total` as given.
    #[instrument(skip(self, params))]
    pub async fn finalize_sale(&self, params: SaleCreate) -> Result<Sale, OrderError> {
        debug!(?params, "finalize_sale called");
        info!("Sending finalize_sale to engine");
        send_request(&self.sender, |respond_to| EngineRequest::FinalizeSale {
            params,
            respond_to,
        })
        .await
        .map_err(Self::comm_error)
    }

    /// Completes an active kitchen order. Returns the recorded prep time in
    /// seconds, or `None` if the order was unknown or already completed
    /// (safe to call twice).
    #[instrument(skip(self))]
    pub async fn complete_order(&self, sale_id: SaleId) -> Result<Option<u64>, OrderError> {
        debug!("Sending request");
        send_request(&self.sender, |respond_to| EngineRequest::CompleteOrder {
            sale_id,
            respond_to,
        })
        .await
        .map_err(Self::comm_error)
    }

    /// All sales, most recent first.
    #[instrument(skip(self))]
    pub async fn sales(&self) -> Result<Vec<Sale>, OrderError> {
        debug!("Sending request");
        send_request(&self.sender, |respond_to| EngineRequest::ListSales {
            respond_to,
        })
        .await
        .map_err(Self::comm_error)
    }

    /// The active kitchen set, oldest first.
    #[instrument(skip(self))]
    pub async fn kitchen_orders(&self) -> Result<Vec<KitchenOrder>, OrderError> {
        debug!("Sending request");
        send_request(&self.sender, |respond_to| {
            EngineRequest::ListKitchenOrders { respond_to }
        })
        .await
        .map_err(Self::comm_error)
    }

    /// Baseline prep-time estimate for an active order.
    #[instrument(skip(self))]
    pub async fn estimated_prep_seconds(
        &self,
        sale_id: SaleId,
    ) -> Result<Option<u64>, OrderError> {
        debug!("Sending request");
        send_request(&self.sender, |respond_to| {
            EngineRequest::EstimatePrepSeconds {
                sale_id,
                respond_to,
            }
        })
        .await
        .map_err(Self::comm_error)
    }
}
