//! Product endpoints: `/inventory/products/*`.

use bolt_core::types::{Product, ProductPrice, ProductStock};
use serde::{Deserialize, Serialize};

use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::response::ApiResponse;

// =============================================================================
// Query & Input DTOs
// =============================================================================

/// Filters for the product list.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Fields submitted when creating or updating a product.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub price: ProductPrice,

    pub stock: ProductStock,

    pub is_active: bool,
}

/// A stock adjustment. The operation names are server-defined:
/// "add", "subtract", or "set".
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAdjustment {
    pub quantity: i64,
    pub operation: String,
}

// =============================================================================
// Payloads
// =============================================================================

#[derive(Debug, Deserialize)]
struct ProductsData {
    products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
struct ProductData {
    product: Product,
}

#[derive(Debug, Deserialize)]
struct CategoriesData {
    categories: Vec<String>,
}

// =============================================================================
// Operations
// =============================================================================

/// List products matching the query.
pub async fn list(client: &ApiClient, query: &ProductListQuery) -> ClientResult<Vec<Product>> {
    let resp: ApiResponse<ProductsData> = client.get_query("inventory/products", query).await?;
    Ok(resp.into_data("products")?.products)
}

/// Fetch one product.
pub async fn get(client: &ApiClient, id: &str) -> ClientResult<Product> {
    let resp: ApiResponse<ProductData> = client.get(&format!("inventory/products/{id}")).await?;
    Ok(resp.into_data("product")?.product)
}

/// Create a product.
pub async fn create(client: &ApiClient, input: &ProductInput) -> ClientResult<Product> {
    let resp: ApiResponse<ProductData> = client.post("inventory/products", input).await?;
    Ok(resp.into_data("product")?.product)
}

/// Update a product.
pub async fn update(client: &ApiClient, id: &str, input: &ProductInput) -> ClientResult<Product> {
    let resp: ApiResponse<ProductData> =
        client.put(&format!("inventory/products/{id}"), input).await?;
    Ok(resp.into_data("product")?.product)
}

/// Delete (deactivate) a product.
pub async fn delete(client: &ApiClient, id: &str) -> ClientResult<()> {
    let _resp: ApiResponse<serde_json::Value> =
        client.delete(&format!("inventory/products/{id}")).await?;
    Ok(())
}

/// Distinct category names in use.
pub async fn categories(client: &ApiClient) -> ClientResult<Vec<String>> {
    let resp: ApiResponse<CategoriesData> =
        client.get("inventory/products/categories").await?;
    Ok(resp.into_data("categories")?.categories)
}

/// Adjust stock for one product.
pub async fn update_stock(
    client: &ApiClient,
    id: &str,
    adjustment: &StockAdjustment,
) -> ClientResult<Product> {
    let resp: ApiResponse<ProductData> = client
        .put(&format!("inventory/products/{id}/stock"), adjustment)
        .await?;
    Ok(resp.into_data("product")?.product)
}

/// Products at or below their minimum stock level.
pub async fn low_stock(client: &ApiClient) -> ClientResult<Vec<Product>> {
    let resp: ApiResponse<ProductsData> = client.get("inventory/products/low-stock").await?;
    Ok(resp.into_data("products")?.products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bolt_core::Money;

    #[test]
    fn test_product_input_wire_shape() {
        let input = ProductInput {
            name: "Claw Hammer".to_string(),
            sku: Some("HMR-001".to_string()),
            category: Some("Tools".to_string()),
            price: ProductPrice {
                purchase: Money::from_rupees(180.0),
                selling: Money::from_rupees(250.0),
                mrp: Some(Money::from_rupees(299.0)),
            },
            stock: ProductStock {
                current: 40,
                minimum: 5,
                maximum: None,
            },
            is_active: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["price"]["selling"], 250.0);
        assert_eq!(json["price"]["mrp"], 299.0);
        assert_eq!(json["stock"]["current"], 40);
        assert!(json.get("brand").is_none());
    }
}
