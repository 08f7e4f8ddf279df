//! Client for the pickup tracker.

use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::clients::send_request;
use crate::engine::EngineRequest;
use crate::model::{CustomerId, SaleId};
use crate::store::pickup::PickupError;

/// Client used by the customer-facing pickup UI.
///
/// Which customer is allowed to acknowledge which order is enforced by the
/// external auth collaborator, not here.
#[derive(Clone)]
pub struct PickupClient {
    sender: mpsc::Sender<EngineRequest>,
}

impl PickupClient {
    pub fn new(sender: mpsc::Sender<EngineRequest>) -> Self {
        Self { sender }
    }

    fn comm_error(e: impl std::fmt::Display) -> PickupError {
        PickupError::ActorCommunicationError(e.to_string())
    }

    /// The customer's completed orders still awaiting acknowledgment.
    #[instrument(skip(self))]
    pub async fn pending(&self, customer_id: CustomerId) -> Result<Vec<SaleId>, PickupError> {
        debug!("Sending request");
        send_request(&self.sender, |respond_to| EngineRequest::PendingPickups {
            customer_id,
            respond_to,
        })
        .await
        .map_err(Self::comm_error)
    }

    /// Acknowledges a pickup. Returns whether the order was pending.
    #[instrument(skip(self))]
    pub async fn acknowledge(&self, sale_id: SaleId) -> Result<bool, PickupError> {
        debug!("Sending request");
        send_request(&self.sender, |respond_to| {
            EngineRequest::AcknowledgePickup {
                sale_id,
                respond_to,
            }
        })
        .await
        .map_err(Self::comm_error)
    }
}
