//! The pickup tracker: completed customer orders awaiting acknowledgment.
//!
//! Pure set membership over sale identities. Which customer may acknowledge
//! an order is the external auth collaborator's concern; the engine only
//! scopes the `pending` read to the owning customer.

use thiserror::Error;
use tracing::{debug, info};

use crate::model::{CustomerId, SaleId};
use crate::store::CafeStore;

/// Errors that can occur during pickup operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PickupError {
    /// An error occurred while communicating with the engine actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for PickupError {
    fn from(msg: String) -> Self {
        PickupError::ActorCommunicationError(msg)
    }
}

impl CafeStore {
    /// Marks a completed customer order as awaiting pickup. Called by
    /// [`complete_order`](Self::complete_order); not part of the public
    /// client surface.
    pub(crate) fn mark_ready(&mut self, sale_id: SaleId) {
        self.pending_pickup.insert(sale_id);
        debug!(sale_id = %sale_id, pending = self.pending_pickup.len(), "Order awaiting pickup");
    }

    /// The customer's completed-but-unacknowledged order ids. Sorted for a
    /// stable read; no priority is implied.
    pub fn pending_pickups(&self, customer_id: CustomerId) -> Vec<SaleId> {
        let mut ids: Vec<SaleId> = self
            .pending_pickup
            .iter()
            .copied()
            .filter(|id| {
                self.sale(*id)
                    .is_some_and(|sale| sale.customer_id == Some(customer_id))
            })
            .collect();
        ids.sort();
        ids
    }

    /// Acknowledges a pickup, removing it from the pending set. Returns
    /// whether the id was pending; acknowledging twice, or acknowledging an
    /// id that was never marked, is a harmless no-op.
    pub fn acknowledge_pickup(&mut self, sale_id: SaleId) -> bool {
        let removed = self.pending_pickup.remove(&sale_id);
        if removed {
            info!(sale_id = %sale_id, pending = self.pending_pickup.len(), "Pickup acknowledged");
        }
        removed
    }
}
