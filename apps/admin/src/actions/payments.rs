//! Payment actions: list, detail, draft submission, delete.

use bolt_client::api;
use bolt_client::api::payments::{PaymentInput, PaymentListQuery};
use bolt_client::ApiClient;
use bolt_core::validation;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::state::Store;

/// Fetch the payments list.
pub async fn fetch_all(
    store: &Store,
    client: &ApiClient,
    query: PaymentListQuery,
) -> AppResult<()> {
    store.with_mut(|s| s.payments.pending());
    match api::payments::list(client, &query).await {
        Ok(payments) => {
            info!(count = payments.len(), "Payments loaded");
            store.with_mut(|s| s.payments.loaded(payments));
            Ok(())
        }
        Err(e) => {
            let err = AppError::from(e);
            store.with_mut(|s| s.payments.failed(err.message.clone()));
            Err(err)
        }
    }
}

/// Fetch one payment.
pub async fn fetch_one(store: &Store, client: &ApiClient, id: &str) -> AppResult<()> {
    store.with_mut(|s| s.payments.pending());
    match api::payments::get(client, id).await {
        Ok(payment) => {
            store.with_mut(|s| s.payments.current_loaded(payment));
            Ok(())
        }
        Err(e) => {
            let err = AppError::from(e);
            store.with_mut(|s| s.payments.failed(err.message.clone()));
            Err(err)
        }
    }
}

/// Submit the open payment draft.
///
/// Over-allocation is logged as a warning and submitted anyway; the server
/// decides whether to accept it. The draft is discarded only on success.
pub async fn submit_draft(store: &Store, client: &ApiClient) -> AppResult<()> {
    let input = store.with(|s| -> AppResult<PaymentInput> {
        let draft = s
            .payments
            .draft
            .as_ref()
            .ok_or_else(|| AppError::validation("No payment draft open"))?;
        validation::validate_payment_amount(draft.plan.amount)?;

        if draft.plan.is_over_allocated() {
            warn!(
                remaining = %draft.plan.remaining(),
                "Allocations exceed the payment amount"
            );
        }

        Ok(PaymentInput {
            customer: draft.customer_id.clone(),
            amount: draft.plan.amount,
            payment_method: draft.method,
            payment_date: None,
            reference: draft.reference.clone(),
            notes: draft.notes.clone(),
            sales: draft
                .plan
                .entries()
                .iter()
                .cloned()
                .map(Into::into)
                .collect(),
        })
    })?;

    match api::payments::create(client, &input).await {
        Ok(payment) => {
            info!(payment = %payment.id, amount = %payment.amount, "Payment recorded");
            store.with_mut(|s| {
                s.payments.upsert(payment);
                s.payments.discard_draft();
            });
            Ok(())
        }
        Err(e) => {
            let err = AppError::from(e);
            store.with_mut(|s| s.payments.failed(err.message.clone()));
            Err(err)
        }
    }
}

/// Delete a payment.
pub async fn remove(store: &Store, client: &ApiClient, id: &str) -> AppResult<()> {
    api::payments::delete(client, id).await.map_err(AppError::from)?;
    info!(payment = %id, "Payment deleted");
    store.with_mut(|s| s.payments.removed(id));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bolt_client::ClientConfig;
    use bolt_core::Money;

    #[tokio::test]
    async fn test_submit_draft_rejects_before_any_io() {
        let store = Store::new();
        let client = ClientConfig::new("http://localhost:1/api").build_client();

        // No draft open
        let err = submit_draft(&store, &client).await.unwrap_err();
        assert!(err.message.contains("draft"));

        // Zero-amount draft fails validation, and the draft survives
        store.with_mut(|s| {
            s.payments.begin_draft("cust-1", Money::zero());
        });
        assert!(submit_draft(&store, &client).await.is_err());
        assert!(store.with(|s| s.payments.draft.is_some()));
    }
}
