//! The engine actor and its message protocol.
//!
//! # Main Components
//!
//! - [`EngineRequest`] - Every engine operation as a message variant
//! - [`EngineActor`] - Owns the [`CafeStore`](crate::store::CafeStore) and
//!   processes requests sequentially
//! - [`EngineError`] - Channel-level failures (actor gone)
//!
//! Callers do not use this module directly; the typed facades in
//! [`clients`](crate::clients) wrap it.

pub mod actor;
pub mod error;
pub mod request;

pub use actor::*;
pub use error::*;
pub use request::*;
