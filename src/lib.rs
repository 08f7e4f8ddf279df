//! # Café Engine
//!
//! > **The order lifecycle & inventory reconciliation core of a café
//! > operations dashboard.**
//!
//! This crate is the part of the dashboard with real invariants: given a
//! completed sale it resolves which inventory is consumed (recipes versus
//! direct finished-goods stock), atomically decrements the right quantities,
//! tracks the sale through kitchen fulfillment with derived timing metrics,
//! settles loyalty points, and records waste against inventory. Everything
//! around it (screens, routing, auth, payments, persistence, reporting) is
//! an external collaborator that calls in through the clients and displays
//! the results.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why an Actor Owning the Store?
//!
//! The engine's invariants are cross-collection: a sale record and its
//! inventory deduction must exist together or not at all, and two sales
//! racing the same stock counter must not interleave their read-modify-write
//! cycles. A single Tokio task owning *all* entity collections gives both
//! properties for free:
//! - **One writer**: the actor processes requests sequentially, so no locks
//!   and no lost deductions.
//! - **Indivisible transitions**: each request is handled start-to-finish
//!   before the next is dequeued, so "create sale + open kitchen order +
//!   deduct stock" is atomic relative to every other operation.
//! - **Type safety**: every operation is a typed request variant with a
//!   typed response; you cannot send the engine a payload it doesn't handle.
//!
//! ### Policy: Availability over Strict Accuracy
//!
//! Stock deductions floor at zero instead of rejecting a sale: the sale
//! record always lands, even when true consumption would have driven stock
//! negative. The floored writes are logged at `warn!` so operator alerting
//! (outside this engine) can surface the shortfall.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The State ([`store`])
//! [`CafeStore`](store::CafeStore) owns every entity collection and
//! implements each component as pure synchronous transitions: the catalog
//! surface, the inventory reconciler, the order lifecycle, the loyalty
//! ledger, the waste recorder, and the pickup tracker.
//! - **Role**: All business rules, unit-testable without the runtime.
//!
//! ### 2. The Runtime ([`engine`])
//! [`EngineActor`](engine::EngineActor) owns the store, reads the injected
//! [`Clock`](clock::Clock) once per message, and processes
//! [`EngineRequest`](engine::EngineRequest)s sequentially.
//! - **Role**: The single-writer serialization point.
//!
//! ### 3. The Interface ([`clients`])
//! Typed facades over the actor's sender, one per collaborator:
//! [`CatalogClient`](clients::CatalogClient),
//! [`OrderClient`](clients::OrderClient),
//! [`LoyaltyClient`](clients::LoyaltyClient),
//! [`WasteClient`](clients::WasteClient),
//! [`PickupClient`](clients::PickupClient).
//! - **Role**: Hide the message passing; map channel failures into each
//!   domain's error type.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`CafeSystem`](lifecycle::CafeSystem) spawns the actor, hands out the
//! clients, and shuts the system down by dropping them.
//!
//! ## 🚀 Quick Start
//!
//! ```ignore
//! use cafe_engine::lifecycle::CafeSystem;
//!
//! let system = CafeSystem::new();
//! let sale = system.order_client.finalize_sale(order).await?;
//! // ... kitchen works ...
//! system.order_client.complete_order(sale.id).await?;
//! system.shutdown().await?;
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! RUST_LOG=info cargo test
//! ```

pub mod clients;
pub mod clock;
pub mod config;
pub mod engine;
pub mod lifecycle;
pub mod model;
pub mod store;
