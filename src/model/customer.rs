//! Loyalty customers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::CustomerId;

/// A customer enrolled in the loyalty program.
///
/// `points` is signed: the ledger applies redemption and accrual in a single
/// update and does not floor the balance. Validating that a redemption fits
/// the balance is the checkout collaborator's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyCustomer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub points: i64,
    pub join_date: DateTime<Utc>,
}

/// Payload for enrolling a customer.
///
/// `points` seeds the starting balance (zero for fresh enrollments, non-zero
/// when migrating an existing program).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
    pub points: i64,
}
