//! The loyalty ledger: point accrual and redemption for
//! customer-attributed sales.

use thiserror::Error;
use tracing::{info, warn};

use crate::model::CustomerId;
use crate::store::CafeStore;

/// Points earned per currency unit of a sale's total, truncated toward
/// zero.
pub const POINTS_PER_CURRENCY_UNIT: f64 = 10.0;

/// Errors that can occur during loyalty operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LoyaltyError {
    /// An error occurred while communicating with the engine actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for LoyaltyError {
    fn from(msg: String) -> Self {
        LoyaltyError::ActorCommunicationError(msg)
    }
}

impl CafeStore {
    /// Applies a customer-attributed sale to the ledger and returns the
    /// points earned (`floor(total * 10)`).
    ///
    /// Redemption and accrual land in a single balance update, so no
    /// intermediate negative balance is ever visible. The ledger does not
    /// re-validate `points_redeemed` against the balance (the checkout
    /// collaborator checks that against the balance it is displaying), so an
    /// over-redemption drives the balance negative; the ledger logs it and
    /// moves on. An unknown customer leaves every balance untouched.
    pub fn apply_customer_sale(
        &mut self,
        customer_id: CustomerId,
        total: f64,
        points_redeemed: i64,
    ) -> i64 {
        let points_earned = (total * POINTS_PER_CURRENCY_UNIT).floor() as i64;

        match self.customers.get_mut(&customer_id) {
            Some(customer) => {
                customer.points = customer.points - points_redeemed + points_earned;
                if customer.points < 0 {
                    warn!(
                        customer_id = %customer_id,
                        balance = customer.points,
                        "Loyalty balance went negative"
                    );
                }
                info!(
                    customer_id = %customer_id,
                    points_earned,
                    points_redeemed,
                    balance = customer.points,
                    "Loyalty points applied"
                );
            }
            None => {
                warn!(
                    customer_id = %customer_id,
                    "Loyalty sale for unknown customer, no balance touched"
                );
            }
        }

        points_earned
    }
}
