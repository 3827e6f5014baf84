//! Sales slice: the invoice list, one open sale, and the sale form draft.

use bolt_core::totals::{SaleLine, SaleTotals};
use bolt_core::types::Sale;
use bolt_core::Money;

use super::LoadState;

/// A sale being composed or edited, with live totals.
///
/// The draft mirrors the sale form: the operator edits lines and the
/// invoice-level figures, and every read of [`SaleDraft::totals`] recomputes
/// the derived numbers from scratch. Nothing here is persisted until the
/// submit action sends it to the API.
#[derive(Debug, Clone, Default)]
pub struct SaleDraft {
    pub customer_id: String,
    pub lines: Vec<SaleLine>,
    pub discount: Money,
    pub tax: Money,
    pub paid: Money,
    pub notes: Option<String>,
}

impl SaleDraft {
    pub fn new(customer_id: impl Into<String>) -> Self {
        SaleDraft {
            customer_id: customer_id.into(),
            ..Default::default()
        }
    }

    /// Recompute subtotal, total, balance, and status from current inputs.
    pub fn totals(&self) -> SaleTotals {
        SaleTotals::compute(&self.lines, self.discount, self.tax, self.paid)
    }
}

#[derive(Debug, Default)]
pub struct SalesSlice {
    pub load: LoadState,
    pub sales: Vec<Sale>,

    /// The sale currently opened in detail.
    pub current: Option<Sale>,

    /// The sale form, when one is open.
    pub draft: Option<SaleDraft>,
}

impl SalesSlice {
    pub fn pending(&mut self) {
        self.load = LoadState::Loading;
    }

    pub fn loaded(&mut self, sales: Vec<Sale>) {
        self.load = LoadState::Loaded;
        self.sales = sales;
    }

    pub fn current_loaded(&mut self, sale: Sale) {
        self.load = LoadState::Loaded;
        self.current = Some(sale);
    }

    pub fn failed(&mut self, message: String) {
        self.load = LoadState::Failed(message);
    }

    pub fn upsert(&mut self, sale: Sale) {
        match self.sales.iter_mut().find(|s| s.id == sale.id) {
            Some(existing) => *existing = sale,
            None => self.sales.push(sale),
        }
    }

    pub fn removed(&mut self, id: &str) {
        self.sales.retain(|s| s.id != id);
        if self.current.as_ref().is_some_and(|s| s.id == id) {
            self.current = None;
        }
    }

    /// Open a fresh draft for a customer, discarding any previous one.
    pub fn begin_draft(&mut self, customer_id: &str) -> &mut SaleDraft {
        self.draft = Some(SaleDraft::new(customer_id));
        self.draft.as_mut().expect("draft just set")
    }

    pub fn discard_draft(&mut self) {
        self.draft = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bolt_core::types::PaymentStatus;

    #[test]
    fn test_draft_totals_track_edits() {
        let mut slice = SalesSlice::default();
        let draft = slice.begin_draft("cust-1");
        draft.lines.push(SaleLine::from_raw(2.0, 100.0, 0.0));
        draft.lines.push(SaleLine::from_raw(1.0, 50.0, 5.0));
        draft.discount = Money::from_rupees(10.0);
        draft.tax = Money::from_rupees(20.0);

        let totals = draft.totals();
        assert_eq!(totals.subtotal, Money::from_rupees(245.0));
        assert_eq!(totals.total, Money::from_rupees(255.0));
        assert_eq!(totals.payment_status, PaymentStatus::Pending);

        draft.paid = Money::from_rupees(255.0);
        assert_eq!(draft.totals().payment_status, PaymentStatus::Paid);

        slice.discard_draft();
        assert!(slice.draft.is_none());
    }
}
