//! Customer actions: list, detail, create/update, delete.

use bolt_client::api;
use bolt_client::api::customers::{CustomerInput, CustomerListQuery};
use bolt_client::ApiClient;
use bolt_core::validation;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::state::Store;

/// Local validation before anything is sent to the API.
fn validate(input: &CustomerInput) -> AppResult<()> {
    validation::validate_customer_name(&input.name)?;
    if let Some(email) = &input.email {
        validation::validate_email(email)?;
    }
    if let Some(gstin) = &input.gst_number {
        validation::validate_gstin(gstin)?;
    }
    if let Some(pan) = &input.pan_number {
        validation::validate_pan(pan)?;
    }
    validation::validate_credit_limit(input.credit_limit)?;
    Ok(())
}

/// Fetch the customer list.
pub async fn fetch_all(
    store: &Store,
    client: &ApiClient,
    query: CustomerListQuery,
) -> AppResult<()> {
    store.with_mut(|s| s.customers.pending());
    match api::customers::list(client, &query).await {
        Ok(customers) => {
            info!(count = customers.len(), "Customers loaded");
            store.with_mut(|s| s.customers.loaded(customers));
            Ok(())
        }
        Err(e) => {
            let err = AppError::from(e);
            store.with_mut(|s| s.customers.failed(err.message.clone()));
            Err(err)
        }
    }
}

/// Fetch one customer with their ledger detail.
pub async fn fetch_detail(store: &Store, client: &ApiClient, id: &str) -> AppResult<()> {
    store.with_mut(|s| s.customers.pending());
    match api::customers::get(client, id).await {
        Ok(detail) => {
            store.with_mut(|s| s.customers.detail_loaded(detail));
            Ok(())
        }
        Err(e) => {
            let err = AppError::from(e);
            store.with_mut(|s| s.customers.failed(err.message.clone()));
            Err(err)
        }
    }
}

/// Create or update a customer, then reflect it in the list.
pub async fn save(
    store: &Store,
    client: &ApiClient,
    id: Option<&str>,
    input: CustomerInput,
) -> AppResult<()> {
    validate(&input)?;

    let result = match id {
        Some(id) => api::customers::update(client, id, &input).await,
        None => api::customers::create(client, &input).await,
    };
    match result {
        Ok(customer) => {
            info!(customer = %customer.id, "Customer saved");
            store.with_mut(|s| s.customers.upsert(customer));
            Ok(())
        }
        Err(e) => {
            let err = AppError::from(e);
            store.with_mut(|s| s.customers.failed(err.message.clone()));
            Err(err)
        }
    }
}

/// Delete a customer.
pub async fn remove(store: &Store, client: &ApiClient, id: &str) -> AppResult<()> {
    api::customers::delete(client, id).await.map_err(AppError::from)?;
    info!(customer = %id, "Customer deleted");
    store.with_mut(|s| s.customers.removed(id));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bolt_core::Money;

    #[test]
    fn test_validate_rejects_bad_input_before_any_io() {
        let mut input = CustomerInput {
            name: "Sharma Traders".to_string(),
            phone: "9876543210".to_string(),
            credit_limit: Money::from_rupees(50000.0),
            is_active: true,
            ..Default::default()
        };
        assert!(validate(&input).is_ok());

        input.gst_number = Some("NOTAGSTIN".to_string());
        assert!(validate(&input).is_err());

        input.gst_number = None;
        input.name = "  ".to_string();
        assert!(validate(&input).is_err());
    }
}
