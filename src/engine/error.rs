//! Channel-level errors of the engine actor.

use thiserror::Error;

/// Failures of the request/response plumbing itself. Domain failures travel
/// inside the response payloads; these two mean the actor is gone.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("Engine actor closed")]
    ActorClosed,
    #[error("Engine actor dropped response channel")]
    ActorDropped,
}
