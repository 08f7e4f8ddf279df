//! Pure domain types managed by the [`CafeStore`](crate::store::CafeStore).

pub mod customer;
pub mod ids;
pub mod inventory;
pub mod menu;
pub mod order;
pub mod waste;

pub use customer::*;
pub use ids::*;
pub use inventory::*;
pub use menu::*;
pub use order::*;
pub use waste::*;
