//! Client for the waste recorder.

use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::clients::send_request;
use crate::engine::EngineRequest;
use crate::model::{InventoryItemId, WasteRecord};
use crate::store::WasteError;

/// Client used by the waste-tracking screen.
#[derive(Clone)]
pub struct WasteClient {
    sender: mpsc::Sender<EngineRequest>,
}

impl WasteClient {
    pub fn new(sender: mpsc::Sender<EngineRequest>) -> Self {
        Self { sender }
    }

    fn comm_error(e: impl std::fmt::Display) -> WasteError {
        WasteError::ActorCommunicationError(e.to_string())
    }

    /// Deducts wasted stock (floored at zero) and appends the audit record.
    #[instrument(skip(self, reason))]
    pub async fn record_waste(
        &self,
        inventory_item_id: InventoryItemId,
        quantity: f64,
        reason: impl Into<String>,
    ) -> Result<WasteRecord, WasteError> {
        debug!("Sending request");
        let reason = reason.into();
        send_request(&self.sender, |respond_to| EngineRequest::RecordWaste {
            inventory_item_id,
            quantity,
            reason,
            respond_to,
        })
        .await
        .map_err(Self::comm_error)?
    }

    /// All waste records, most recent first.
    #[instrument(skip(self))]
    pub async fn waste_records(&self) -> Result<Vec<WasteRecord>, WasteError> {
        debug!("Sending request");
        send_request(&self.sender, |respond_to| {
            EngineRequest::ListWasteRecords { respond_to }
        })
        .await
        .map_err(Self::comm_error)
    }
}
