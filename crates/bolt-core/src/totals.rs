//! # Sale Totals Calculator
//!
//! Pure recomputation of invoice figures from line items.
//!
//! ## Calculation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Sale Totals Pipeline                               │
//! │                                                                         │
//! │  lines: [{qty, price, discount}, ...]                                   │
//! │       │                                                                 │
//! │       ▼  per line                                                       │
//! │  line_total = qty × price − discount                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  subtotal = Σ line_total                                                │
//! │       │                                                                 │
//! │       ▼  invoice-level adjustments                                      │
//! │  total = subtotal − discount + tax                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  balance = total − paid                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  payment_status = classify(balance, paid)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Never fails: non-finite input coerces to zero and the pipeline runs on.
//! - Deterministic: the same lines always produce the same figures.
//! - Nothing is clamped: a discount larger than the subtotal yields a
//!   negative total, and overpayment yields a negative balance. Oddities
//!   surface in the figures rather than being silently corrected.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::PaymentStatus;

// =============================================================================
// Line Input
// =============================================================================

/// One editable line on the sale form.
///
/// Quantity stays a float for weighed goods (2.5 kg of nails). The amounts
/// are already [`Money`], so anything non-finite was zeroed on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaleLine {
    pub quantity: f64,
    pub price: Money,
    /// Flat per-line discount amount, not a percentage.
    pub discount: Money,
}

impl SaleLine {
    /// Builds a line from raw form floats, zeroing anything non-finite.
    pub fn from_raw(quantity: f64, price: f64, discount: f64) -> Self {
        SaleLine {
            quantity: sanitize(quantity),
            price: Money::from_rupees(price),
            discount: Money::from_rupees(discount),
        }
    }

    /// quantity × price − discount, rounded to the paisa once at the end.
    pub fn total(&self) -> Money {
        let gross = sanitize(self.quantity) * self.price.rupees();
        Money::from_rupees(gross) - self.discount
    }
}

/// NaN and ±inf quantities become zero, same treatment as bad amounts.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

// =============================================================================
// Computed Totals
// =============================================================================

/// The recomputed figures for a sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaleTotals {
    /// Per-line totals, index-aligned with the input lines.
    pub line_totals: Vec<Money>,
    pub subtotal: Money,
    pub discount: Money,
    pub tax: Money,
    pub total: Money,
    pub paid: Money,
    pub balance: Money,
    pub payment_status: PaymentStatus,
}

impl SaleTotals {
    /// Recomputes every derived figure for a sale.
    ///
    /// `discount` and `tax` are the invoice-level adjustments, applied after
    /// line discounts. `paid` is the running amount received against this
    /// invoice.
    pub fn compute(lines: &[SaleLine], discount: Money, tax: Money, paid: Money) -> Self {
        let line_totals: Vec<Money> = lines.iter().map(SaleLine::total).collect();
        let subtotal: Money = line_totals.iter().copied().sum();
        let total = subtotal - discount + tax;
        let balance = total - paid;
        let payment_status = PaymentStatus::from_balance(balance, paid);

        SaleTotals {
            line_totals,
            subtotal,
            discount,
            tax,
            total,
            paid,
            balance,
            payment_status,
        }
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
    fn test_worked_invoice() {
        // 2 × 100 and 1 × 50 with a 5 line discount, then 10 off and 20 tax
        let lines = vec![
            SaleLine::from_raw(2.0, 100.0, 0.0),
            SaleLine::from_raw(1.0, 50.0, 5.0),
        ];
        let totals = SaleTotals::compute(&lines, rupees(10.0), rupees(20.0), Money::zero());

        assert_eq!(totals.line_totals, vec![rupees(200.0), rupees(45.0)]);
        assert_eq!(totals.subtotal, rupees(245.0));
        assert_eq!(totals.total, rupees(255.0));
        assert_eq!(totals.balance, rupees(255.0));
        assert_eq!(totals.payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn test_status_follows_paid_amount() {
        let lines = vec![
            SaleLine::from_raw(2.0, 100.0, 0.0),
            SaleLine::from_raw(1.0, 50.0, 5.0),
        ];
        let discount = rupees(10.0);
        let tax = rupees(20.0);

        let partial = SaleTotals::compute(&lines, discount, tax, rupees(100.0));
        assert_eq!(partial.balance, rupees(155.0));
        assert_eq!(partial.payment_status, PaymentStatus::Partial);

        let settled = SaleTotals::compute(&lines, discount, tax, rupees(255.0));
        assert_eq!(settled.balance, Money::zero());
        assert_eq!(settled.payment_status, PaymentStatus::Paid);

        let over = SaleTotals::compute(&lines, discount, tax, rupees(300.0));
        assert_eq!(over.balance, rupees(-45.0));
        assert_eq!(over.payment_status, PaymentStatus::Overpaid);
    }

    #[test]
    fn test_empty_sale_is_pending_zero() {
        let totals = SaleTotals::compute(&[], Money::zero(), Money::zero(), Money::zero());
        assert!(totals.line_totals.is_empty());
        assert_eq!(totals.subtotal, Money::zero());
        assert_eq!(totals.total, Money::zero());
        // Zero total with zero paid lands in the tolerance band
        assert_eq!(totals.payment_status, PaymentStatus::Paid);
    }

    #[test]
    fn test_non_finite_input_coerces_to_zero() {
        let lines = vec![
            SaleLine::from_raw(f64::NAN, 100.0, 0.0),
            SaleLine::from_raw(2.0, f64::INFINITY, f64::NAN),
        ];
        let totals = SaleTotals::compute(&lines, Money::zero(), Money::zero(), Money::zero());
        assert_eq!(totals.line_totals, vec![Money::zero(), Money::zero()]);
        assert_eq!(totals.subtotal, Money::zero());
    }

    #[test]
    fn test_discount_can_push_totals_negative() {
        // Oversized invoice discount is reported as-is, never clamped
        let lines = vec![SaleLine::from_raw(1.0, 50.0, 0.0)];
        let totals = SaleTotals::compute(&lines, rupees(80.0), Money::zero(), Money::zero());
        assert_eq!(totals.total, rupees(-30.0));
        assert_eq!(totals.balance, rupees(-30.0));
        assert_eq!(totals.payment_status, PaymentStatus::Overpaid);
    }

    #[test]
    fn test_fractional_quantity_supported() {
        // 2.5 kg at 36/kg with 2.50 off the line
        let line = SaleLine::from_raw(2.5, 36.0, 2.5);
        assert_eq!(line.total(), Money::from_paise(8750));
    }

    #[test]
    fn test_subtotal_is_sum_of_line_totals() {
        let lines = vec![
            SaleLine::from_raw(3.0, 12.5, 1.25),
            SaleLine::from_raw(1.0, 99.99, 0.0),
            SaleLine::from_raw(4.0, 7.0, 3.0),
        ];
        let totals = SaleTotals::compute(&lines, Money::zero(), Money::zero(), Money::zero());
        let summed: Money = totals.line_totals.iter().copied().sum();
        assert_eq!(totals.subtotal, summed);
    }
}
