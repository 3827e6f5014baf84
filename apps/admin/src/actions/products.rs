//! Product actions: catalogue, categories, stock, delete.

use bolt_client::api;
use bolt_client::api::products::{ProductInput, ProductListQuery, StockAdjustment};
use bolt_client::ApiClient;
use bolt_core::validation;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::state::Store;

/// Fetch the product list.
pub async fn fetch_all(
    store: &Store,
    client: &ApiClient,
    query: ProductListQuery,
) -> AppResult<()> {
    store.with_mut(|s| s.products.pending());
    match api::products::list(client, &query).await {
        Ok(products) => {
            info!(count = products.len(), "Products loaded");
            store.with_mut(|s| s.products.loaded(products));
            Ok(())
        }
        Err(e) => {
            let err = AppError::from(e);
            store.with_mut(|s| s.products.failed(err.message.clone()));
            Err(err)
        }
    }
}

/// Fetch one product.
pub async fn fetch_one(store: &Store, client: &ApiClient, id: &str) -> AppResult<()> {
    store.with_mut(|s| s.products.pending());
    match api::products::get(client, id).await {
        Ok(product) => {
            store.with_mut(|s| s.products.current_loaded(product));
            Ok(())
        }
        Err(e) => {
            let err = AppError::from(e);
            store.with_mut(|s| s.products.failed(err.message.clone()));
            Err(err)
        }
    }
}

/// Create or update a product.
pub async fn save(
    store: &Store,
    client: &ApiClient,
    id: Option<&str>,
    input: ProductInput,
) -> AppResult<()> {
    validation::validate_product_name(&input.name)?;
    validation::validate_product_prices(input.price.selling, input.price.mrp)?;

    let result = match id {
        Some(id) => api::products::update(client, id, &input).await,
        None => api::products::create(client, &input).await,
    };
    match result {
        Ok(product) => {
            info!(product = %product.id, "Product saved");
            store.with_mut(|s| s.products.upsert(product));
            Ok(())
        }
        Err(e) => {
            let err = AppError::from(e);
            store.with_mut(|s| s.products.failed(err.message.clone()));
            Err(err)
        }
    }
}

/// Adjust stock for one product.
pub async fn adjust_stock(
    store: &Store,
    client: &ApiClient,
    id: &str,
    adjustment: StockAdjustment,
) -> AppResult<()> {
    let product = api::products::update_stock(client, id, &adjustment)
        .await
        .map_err(AppError::from)?;
    info!(product = %id, current = product.stock.current, "Stock adjusted");
    store.with_mut(|s| s.products.upsert(product));
    Ok(())
}

/// Fetch the distinct category names.
pub async fn fetch_categories(store: &Store, client: &ApiClient) -> AppResult<()> {
    let categories = api::products::categories(client)
        .await
        .map_err(AppError::from)?;
    store.with_mut(|s| s.products.categories_loaded(categories));
    Ok(())
}

/// Fetch products at or below minimum stock.
pub async fn fetch_low_stock(store: &Store, client: &ApiClient) -> AppResult<()> {
    let products = api::products::low_stock(client)
        .await
        .map_err(AppError::from)?;
    info!(count = products.len(), "Low-stock products loaded");
    store.with_mut(|s| s.products.low_stock_loaded(products));
    Ok(())
}

/// Delete a product.
pub async fn remove(store: &Store, client: &ApiClient, id: &str) -> AppResult<()> {
    api::products::delete(client, id).await.map_err(AppError::from)?;
    info!(product = %id, "Product deleted");
    store.with_mut(|s| s.products.removed(id));
    Ok(())
}
