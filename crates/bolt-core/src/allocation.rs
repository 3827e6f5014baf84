//! # Payment Allocator
//!
//! Splits a received payment across a customer's open sales.
//!
//! ## Allocation Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Payment Allocation                                │
//! │                                                                         │
//! │  payment amount: 500                                                    │
//! │       │                                                                 │
//! │       ├──► sale A: 300         (entry kept, amount > 0)                 │
//! │       ├──► sale B: 150         (entry kept)                             │
//! │       └──► sale C: 0           (entry dropped, amount ≤ 0)              │
//! │                                                                         │
//! │  total_allocated = 450                                                  │
//! │  remaining       = 500 − 450 = 50   (stays with customer as credit)    │
//! │                                                                         │
//! │  remaining < 0  ⇒  over-allocation: reported, never rejected           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The plan is sparse: a sale with no entry gets nothing, and setting an
//! entry to zero or below removes it. Setting an amount for a sale already
//! in the plan replaces its previous amount, so repeated edits to the same
//! row converge instead of stacking.
//!
//! Over-allocation (remaining below zero) is a soft condition. The form
//! shows a warning but the operator may still submit; the server is the
//! final arbiter.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Allocation Plan
// =============================================================================

/// One row of the plan: this much of the payment goes to this sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEntry {
    pub sale_id: String,
    pub amount: Money,
}

/// A payment being divided across open sales, edited one row at a time.
///
/// Entry order follows first insertion, so the plan renders in the order
/// the operator filled it in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AllocationPlan {
    /// Total payment received, before any split.
    pub amount: Money,
    entries: Vec<AllocationEntry>,
}

impl AllocationPlan {
    pub fn new(amount: Money) -> Self {
        AllocationPlan {
            amount,
            entries: Vec::new(),
        }
    }

    /// Sets the allocation for one sale, replacing any previous amount.
    ///
    /// An amount of zero or below removes the row entirely, which is how
    /// the form clears a line: type 0, the row drops out of the plan.
    pub fn set(&mut self, sale_id: &str, amount: Money) {
        if !amount.is_positive() {
            self.entries.retain(|e| e.sale_id != sale_id);
            return;
        }
        match self.entries.iter_mut().find(|e| e.sale_id == sale_id) {
            Some(entry) => entry.amount = amount,
            None => self.entries.push(AllocationEntry {
                sale_id: sale_id.to_string(),
                amount,
            }),
        }
    }

    /// The amount currently allocated to one sale, zero when absent.
    pub fn allocated_to(&self, sale_id: &str) -> Money {
        self.entries
            .iter()
            .find(|e| e.sale_id == sale_id)
            .map(|e| e.amount)
            .unwrap_or_default()
    }

    /// Σ of all row amounts.
    pub fn total_allocated(&self) -> Money {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// amount − total_allocated. Negative means over-allocated.
    pub fn remaining(&self) -> Money {
        self.amount - self.total_allocated()
    }

    /// Whether the rows claim more than the payment holds.
    pub fn is_over_allocated(&self) -> bool {
        self.remaining().is_negative()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[AllocationEntry] {
        &self.entries
    }

    /// Consumes the plan into the rows to submit. Every row is positive by
    /// construction, so this is just the entry list.
    pub fn into_entries(self) -> Vec<AllocationEntry> {
        self.entries
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
    fn test_split_with_remainder() {
        let mut plan = AllocationPlan::new(rupees(500.0));
        plan.set("sale-a", rupees(300.0));
        plan.set("sale-b", rupees(150.0));

        assert_eq!(plan.total_allocated(), rupees(450.0));
        assert_eq!(plan.remaining(), rupees(50.0));
        assert!(!plan.is_over_allocated());
        assert_eq!(plan.entries().len(), 2);
    }

    #[test]
    fn test_set_replaces_previous_amount() {
        let mut plan = AllocationPlan::new(rupees(500.0));
        plan.set("sale-a", rupees(300.0));
        plan.set("sale-a", rupees(200.0));

        assert_eq!(plan.allocated_to("sale-a"), rupees(200.0));
        assert_eq!(plan.total_allocated(), rupees(200.0));
        assert_eq!(plan.entries().len(), 1);
    }

    #[test]
    fn test_zero_or_negative_removes_entry() {
        let mut plan = AllocationPlan::new(rupees(500.0));
        plan.set("sale-a", rupees(300.0));
        plan.set("sale-a", Money::zero());
        assert!(plan.is_empty());
        assert_eq!(plan.allocated_to("sale-a"), Money::zero());

        plan.set("sale-b", rupees(100.0));
        plan.set("sale-b", rupees(-5.0));
        assert!(plan.is_empty());

        // Removing again is a no-op, not an error
        plan.set("sale-b", Money::zero());
        assert!(plan.is_empty());
        assert_eq!(plan.remaining(), rupees(500.0));
    }

    #[test]
    fn test_over_allocation_is_reported_not_rejected() {
        let mut plan = AllocationPlan::new(rupees(100.0));
        plan.set("sale-a", rupees(80.0));
        plan.set("sale-b", rupees(60.0));

        assert_eq!(plan.total_allocated(), rupees(140.0));
        assert_eq!(plan.remaining(), rupees(-40.0));
        assert!(plan.is_over_allocated());
        // The rows are still intact for submission
        assert_eq!(plan.entries().len(), 2);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut plan = AllocationPlan::new(rupees(300.0));
        plan.set("sale-c", rupees(50.0));
        plan.set("sale-a", rupees(100.0));
        plan.set("sale-b", rupees(25.0));
        plan.set("sale-a", rupees(75.0));

        let ids: Vec<&str> = plan.entries().iter().map(|e| e.sale_id.as_str()).collect();
        assert_eq!(ids, vec!["sale-c", "sale-a", "sale-b"]);
    }

    #[test]
    fn test_into_entries_yields_positive_rows_only() {
        let mut plan = AllocationPlan::new(rupees(200.0));
        plan.set("sale-a", rupees(120.0));
        plan.set("sale-b", rupees(30.0));
        plan.set("sale-b", Money::zero());

        let entries = plan.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].sale_id, "sale-a");
        assert_eq!(entries[0].amount, rupees(120.0));
    }
}
