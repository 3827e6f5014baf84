//! # Credit Standing
//!
//! Classifies a customer's outstanding balance against their credit limit.
//!
//! ## Classification
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Credit Standing                                    │
//! │                                                                         │
//! │  outstanding < 0                      → Credit     (we owe them)        │
//! │  outstanding = 0                      → Clear                           │
//! │  outstanding ≤ limit, or limit = 0    → WithinLimit                     │
//! │  outstanding > limit > 0              → OverLimit                       │
//! │                                                                         │
//! │  A credit limit of zero means unlimited: such a customer can never     │
//! │  be OverLimit no matter how much they owe.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Utilization is outstanding as a percentage of the limit. The raw figure
//! can exceed 100 or go negative; the clamped variant is bounded to 0..=100
//! for progress-bar style display. A limitless customer has no utilization.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Customer, SalesStats};

// =============================================================================
// Standing
// =============================================================================

/// Where a customer sits relative to their credit limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    /// Negative outstanding: the customer holds credit with the shop.
    Credit,
    /// Exactly zero outstanding.
    Clear,
    /// Owes money, but within the limit (or no limit is set).
    WithinLimit,
    /// Owes more than a positive limit allows.
    OverLimit,
}

impl Standing {
    pub fn label(&self) -> &'static str {
        match self {
            Standing::Credit => "In Credit",
            Standing::Clear => "Clear",
            Standing::WithinLimit => "Within Limit",
            Standing::OverLimit => "Over Limit",
        }
    }
}

// =============================================================================
// Credit Standing
// =============================================================================

/// The evaluated credit position of one customer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CreditStanding {
    pub outstanding: Money,
    /// Zero means unlimited.
    pub credit_limit: Money,
    pub standing: Standing,
    /// outstanding − limit when over the limit, zero otherwise.
    pub over_by: Money,
}

impl CreditStanding {
    /// Evaluates standing from an outstanding figure and a limit.
    pub fn evaluate(outstanding: Money, credit_limit: Money) -> Self {
        let unlimited = credit_limit.is_zero();
        let standing = if outstanding.is_negative() {
            Standing::Credit
        } else if outstanding.is_zero() {
            Standing::Clear
        } else if unlimited || outstanding <= credit_limit {
            Standing::WithinLimit
        } else {
            Standing::OverLimit
        };
        let over_by = match standing {
            Standing::OverLimit => outstanding - credit_limit,
            _ => Money::zero(),
        };

        CreditStanding {
            outstanding,
            credit_limit,
            standing,
            over_by,
        }
    }

    /// Evaluates a customer, preferring server-aggregated stats for the
    /// outstanding figure when available.
    pub fn for_customer(customer: &Customer, stats: Option<&SalesStats>) -> Self {
        Self::evaluate(customer.effective_outstanding(stats), customer.credit_limit)
    }

    /// Raw utilization percentage; may exceed 100 or be negative.
    /// `None` when the customer has no limit.
    pub fn utilization_percent(&self) -> Option<f64> {
        if self.credit_limit.is_zero() {
            return None;
        }
        Some(self.outstanding.rupees() / self.credit_limit.rupees() * 100.0)
    }

    /// Utilization clamped to 0..=100 for gauge display.
    pub fn utilization_clamped(&self) -> f64 {
        self.utilization_percent()
            .map(|p| p.clamp(0.0, 100.0))
            .unwrap_or(0.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rupees(r: f64) -> Money {
        Money::from_rupees(r)
    }

    #[test]
    fn test_negative_outstanding_is_credit() {
        let s = CreditStanding::evaluate(rupees(-200.0), rupees(1000.0));
        assert_eq!(s.standing, Standing::Credit);
        assert_eq!(s.over_by, Money::zero());
        assert_eq!(s.standing.label(), "In Credit");
    }

    #[test]
    fn test_zero_outstanding_is_clear() {
        let s = CreditStanding::evaluate(Money::zero(), rupees(1000.0));
        assert_eq!(s.standing, Standing::Clear);

        // Clear even with no limit set
        let s = CreditStanding::evaluate(Money::zero(), Money::zero());
        assert_eq!(s.standing, Standing::Clear);
    }

    #[test]
    fn test_within_and_over_limit() {
        let s = CreditStanding::evaluate(rupees(800.0), rupees(1000.0));
        assert_eq!(s.standing, Standing::WithinLimit);

        // Exactly at the limit is still within it
        let s = CreditStanding::evaluate(rupees(1000.0), rupees(1000.0));
        assert_eq!(s.standing, Standing::WithinLimit);

        let s = CreditStanding::evaluate(rupees(1250.0), rupees(1000.0));
        assert_eq!(s.standing, Standing::OverLimit);
        assert_eq!(s.over_by, rupees(250.0));
    }

    #[test]
    fn test_zero_limit_means_unlimited() {
        let s = CreditStanding::evaluate(rupees(9_999_999.0), Money::zero());
        assert_eq!(s.standing, Standing::WithinLimit);
        assert_eq!(s.utilization_percent(), None);
        assert_eq!(s.utilization_clamped(), 0.0);
    }

    #[test]
    fn test_utilization_raw_and_clamped() {
        let s = CreditStanding::evaluate(rupees(500.0), rupees(1000.0));
        assert_eq!(s.utilization_percent(), Some(50.0));
        assert_eq!(s.utilization_clamped(), 50.0);

        let over = CreditStanding::evaluate(rupees(1500.0), rupees(1000.0));
        assert_eq!(over.utilization_percent(), Some(150.0));
        assert_eq!(over.utilization_clamped(), 100.0);

        let credit = CreditStanding::evaluate(rupees(-100.0), rupees(1000.0));
        assert_eq!(credit.utilization_percent(), Some(-10.0));
        assert_eq!(credit.utilization_clamped(), 0.0);
    }

    #[test]
    fn test_for_customer_uses_stats_outstanding() {
        let customer = Customer {
            id: "cust-1".to_string(),
            name: "Verma Hardware".to_string(),
            phone: String::new(),
            email: None,
            address: None,
            customer_type: None,
            gst_number: None,
            pan_number: None,
            credit_limit: rupees(1000.0),
            outstanding_amount: rupees(1200.0),
            total_purchase: Money::zero(),
            last_purchase: None,
            is_active: true,
            created_at: None,
            updated_at: None,
        };
        let stats = SalesStats {
            total_outstanding: rupees(700.0),
            ..Default::default()
        };

        let fresh = CreditStanding::for_customer(&customer, Some(&stats));
        assert_eq!(fresh.standing, Standing::WithinLimit);

        let stale = CreditStanding::for_customer(&customer, None);
        assert_eq!(stale.standing, Standing::OverLimit);
        assert_eq!(stale.over_by, rupees(200.0));
    }
}
