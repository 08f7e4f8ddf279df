//! System lifecycle: spawning the engine and shutting it down, plus the
//! tracing setup.

pub mod cafe_system;
pub mod tracing;

pub use cafe_system::*;
pub use tracing::*;
