//! Typed identifiers for every entity collection.
//!
//! Each id is a `u64` newtype issued by the store's per-collection sequence,
//! so identities stay unique even under rapid concurrent creation (the engine
//! actor serializes issuance). The `Display` impls carry a short entity
//! prefix, which keeps log lines readable (`sale_42`, `inv_3`).

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(
            Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

entity_id!(
    /// Identifies a menu item in the catalog.
    MenuItemId,
    "menu"
);
entity_id!(
    /// Identifies a raw inventory item.
    InventoryItemId,
    "inv"
);
entity_id!(
    /// Identifies a loyalty customer.
    CustomerId,
    "customer"
);
entity_id!(
    /// Identifies a sale. The matching kitchen order shares this id.
    SaleId,
    "sale"
);
entity_id!(
    /// Identifies a waste record.
    WasteRecordId,
    "waste"
);
