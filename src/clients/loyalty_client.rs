//! Client for the loyalty ledger.

use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::clients::send_request;
use crate::engine::EngineRequest;
use crate::model::CustomerId;
use crate::store::loyalty::LoyaltyError;

/// Client used by checkout to settle points for customer-attributed sales.
#[derive(Clone)]
pub struct LoyaltyClient {
    sender: mpsc::Sender<EngineRequest>,
}

impl LoyaltyClient {
    pub fn new(sender: mpsc::Sender<EngineRequest>) -> Self {
        Self { sender }
    }

    /// Applies accrual and redemption for one sale, returning the points
    /// earned (`floor(total * 10)`).
    ///
    /// Caller contract: `points_redeemed` must not exceed the customer's
    /// balance at call time; the ledger does not re-validate it.
    #[instrument(skip(self))]
    pub async fn apply_customer_sale(
        &self,
        customer_id: CustomerId,
        total: f64,
        points_redeemed: i64,
    ) -> Result<i64, LoyaltyError> {
        debug!("Sending request");
        send_request(&self.sender, |respond_to| {
            EngineRequest::ApplyCustomerSale {
                customer_id,
                total,
                points_redeemed,
                respond_to,
            }
        })
        .await
        .map_err(|e| LoyaltyError::ActorCommunicationError(e.to_string()))
    }
}
