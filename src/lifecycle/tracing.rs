//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the engine.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the
//! `tracing` crate. The engine logs with structured fields rather than
//! module targets (`with_target(false)`), which keeps log lines short while
//! still carrying entity ids, quantities, and collection sizes.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup, shutdown, and final state
//! - **Mutations**: sale finalization, completion, restocks, waste, points;
//!   each an `info!` with the affected ids
//! - **Integrity skips**: order lines and ingredients pointing at missing
//!   catalog entries, logged at `warn!` for reporting to pick up
//! - **Request payloads**: full payloads once at `debug!`, at the client
//!   call site and again when the actor dequeues the request
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo test
//!
//! # Show full payloads
//! RUST_LOG=debug cargo test
//!
//! # Filter to one concern
//! RUST_LOG=cafe_engine::store=debug cargo test
//! ```
//!
//! ## Workflow Trace Example
//!
//! A customer sale with `RUST_LOG=info`:
//!
//! ```text
//! INFO Sending finalize_sale to engine
//! INFO Sale finalized sale_id="sale_12" lines=2 total=10.5 customer="customer_3"
//! INFO Loyalty points applied customer_id="customer_3" points_earned=105 points_redeemed=0 balance=235
//! INFO Order completed sale_id="sale_12" prep_time_seconds=241 active=0
//! INFO Pickup acknowledged sale_id="sale_12" pending=0
//! ```
//!
//! The `warn!` lines are the ones an operator should wire alerting to: they
//! mark deductions that were skipped or floored, i.e. places where the
//! recorded stock may understate true consumption.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Structured fields carry the context instead
        .compact()
        .init();
}
