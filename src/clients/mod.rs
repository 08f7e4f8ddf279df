//! Type-safe client facades over the engine actor.
//!
//! Every facade is a cheap clone of the same `mpsc::Sender`, so any number
//! of collaborator tasks (POS, kitchen display, pickup UI, editors) can hold
//! clients concurrently; the actor serializes whatever they send.

pub mod catalog_client;
pub mod loyalty_client;
pub mod order_client;
pub mod pickup_client;
pub mod waste_client;

pub use catalog_client::*;
pub use loyalty_client::*;
pub use order_client::*;
pub use pickup_client::*;
pub use waste_client::*;

use tokio::sync::{mpsc, oneshot};

use crate::engine::{EngineError, EngineRequest, Response};

/// Sends one request to the engine and awaits its response.
///
/// Shared plumbing for all facades: builds the `oneshot` pair, maps a closed
/// mailbox to [`EngineError::ActorClosed`] and a dropped responder to
/// [`EngineError::ActorDropped`]. Facades map the result into their domain
/// error.
pub(crate) async fn send_request<T>(
    sender: &mpsc::Sender<EngineRequest>,
    build: impl FnOnce(Response<T>) -> EngineRequest,
) -> Result<T, EngineError> {
    let (respond_to, response) = oneshot::channel();
    sender
        .send(build(respond_to))
        .await
        .map_err(|_| EngineError::ActorClosed)?;
    response.await.map_err(|_| EngineError::ActorDropped)
}
