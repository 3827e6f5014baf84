//! Sale actions: list, detail, draft submission, delete.

use bolt_client::api;
use bolt_client::api::sales::{SaleInput, SaleItemInput, SaleListQuery};
use bolt_client::ApiClient;
use bolt_core::validation;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::state::{SaleDraft, Store};

/// Fetch the sales list.
pub async fn fetch_all(store: &Store, client: &ApiClient, query: SaleListQuery) -> AppResult<()> {
    store.with_mut(|s| s.sales.pending());
    match api::sales::list(client, &query).await {
        Ok(sales) => {
            info!(count = sales.len(), "Sales loaded");
            store.with_mut(|s| s.sales.loaded(sales));
            Ok(())
        }
        Err(e) => {
            let err = AppError::from(e);
            store.with_mut(|s| s.sales.failed(err.message.clone()));
            Err(err)
        }
    }
}

/// Fetch one sale.
pub async fn fetch_one(store: &Store, client: &ApiClient, id: &str) -> AppResult<()> {
    store.with_mut(|s| s.sales.pending());
    match api::sales::get(client, id).await {
        Ok(sale) => {
            store.with_mut(|s| s.sales.current_loaded(sale));
            Ok(())
        }
        Err(e) => {
            let err = AppError::from(e);
            store.with_mut(|s| s.sales.failed(err.message.clone()));
            Err(err)
        }
    }
}

fn draft_to_input(draft: &SaleDraft, product_ids: &[String]) -> SaleInput {
    let totals = draft.totals();
    SaleInput {
        customer: draft.customer_id.clone(),
        items: draft
            .lines
            .iter()
            .zip(product_ids)
            .map(|(line, product)| SaleItemInput {
                product: product.clone(),
                quantity: line.quantity,
                price: line.price,
                discount: line.discount,
            })
            .collect(),
        discount: draft.discount,
        tax: draft.tax,
        paid: totals.paid,
        payment_method: None,
        sale_date: None,
        notes: draft.notes.clone(),
    }
}

/// Submit the open sale draft.
///
/// `product_ids` is index-aligned with the draft lines; the draft itself
/// carries only the figures, not which product each line is for. The draft
/// is validated and discarded only on success.
pub async fn submit_draft(
    store: &Store,
    client: &ApiClient,
    product_ids: &[String],
    sale_id: Option<&str>,
) -> AppResult<()> {
    let input = store.with(|s| {
        let draft = s
            .sales
            .draft
            .as_ref()
            .ok_or_else(|| AppError::validation("No sale draft open"))?;
        if draft.lines.len() != product_ids.len() {
            return Err(AppError::validation(
                "Every line needs a product selected",
            ));
        }
        validation::validate_sale_lines(&draft.lines)?;
        Ok(draft_to_input(draft, product_ids))
    })?;

    let result = match sale_id {
        Some(id) => api::sales::update(client, id, &input).await,
        None => api::sales::create(client, &input).await,
    };
    match result {
        Ok(sale) => {
            info!(sale = %sale.id, total = %sale.total, "Sale saved");
            store.with_mut(|s| {
                s.sales.upsert(sale);
                s.sales.discard_draft();
            });
            Ok(())
        }
        Err(e) => {
            let err = AppError::from(e);
            store.with_mut(|s| s.sales.failed(err.message.clone()));
            Err(err)
        }
    }
}

/// Delete a sale.
pub async fn remove(store: &Store, client: &ApiClient, id: &str) -> AppResult<()> {
    api::sales::delete(client, id).await.map_err(AppError::from)?;
    info!(sale = %id, "Sale deleted");
    store.with_mut(|s| s.sales.removed(id));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bolt_core::totals::SaleLine;
    use bolt_core::Money;

    #[test]
    fn test_draft_to_input_carries_computed_paid() {
        let mut draft = SaleDraft::new("cust-1");
        draft.lines.push(SaleLine::from_raw(2.0, 100.0, 0.0));
        draft.discount = Money::from_rupees(10.0);
        draft.paid = Money::from_rupees(50.0);

        let input = draft_to_input(&draft, &["prod-1".to_string()]);
        assert_eq!(input.customer, "cust-1");
        assert_eq!(input.items.len(), 1);
        assert_eq!(input.items[0].product, "prod-1");
        assert_eq!(input.paid, Money::from_rupees(50.0));
        assert_eq!(input.discount, Money::from_rupees(10.0));
    }
}
