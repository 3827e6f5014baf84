//! Sale endpoints: `/sales/*`.

use bolt_core::types::{PaymentMethod, PaymentStatus, Sale, SalesStats};
use bolt_core::Money;
use serde::{Deserialize, Serialize};

use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::response::ApiResponse;

// =============================================================================
// Query & Input DTOs
// =============================================================================

/// Filters for the sales list.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,

    /// ISO date, inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// One line item as submitted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItemInput {
    /// Product id.
    pub product: String,
    pub quantity: f64,
    pub price: Money,
    pub discount: Money,
}

/// Fields submitted when creating or updating a sale.
///
/// The server recomputes every derived figure; the console sends only what
/// the operator entered plus the figures it showed them.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleInput {
    /// Customer id.
    pub customer: String,

    pub items: Vec<SaleItemInput>,

    /// Invoice-level discount.
    pub discount: Money,

    pub tax: Money,

    /// Amount received at the counter with this sale.
    pub paid: Money,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// =============================================================================
// Payloads
// =============================================================================

#[derive(Debug, Deserialize)]
struct SalesData {
    sales: Vec<Sale>,
}

#[derive(Debug, Deserialize)]
struct SaleData {
    sale: Sale,
}

/// Sales over a period with their aggregate figures.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    #[serde(default)]
    pub sales: Vec<Sale>,

    #[serde(default)]
    pub stats: Option<SalesStats>,
}

// =============================================================================
// Operations
// =============================================================================

/// List sales matching the query.
pub async fn list(client: &ApiClient, query: &SaleListQuery) -> ClientResult<Vec<Sale>> {
    let resp: ApiResponse<SalesData> = client.get_query("sales", query).await?;
    Ok(resp.into_data("sales")?.sales)
}

/// Fetch one sale with populated customer and products.
pub async fn get(client: &ApiClient, id: &str) -> ClientResult<Sale> {
    let resp: ApiResponse<SaleData> = client.get(&format!("sales/{id}")).await?;
    Ok(resp.into_data("sale")?.sale)
}

/// Create a sale.
pub async fn create(client: &ApiClient, input: &SaleInput) -> ClientResult<Sale> {
    let resp: ApiResponse<SaleData> = client.post("sales", input).await?;
    Ok(resp.into_data("sale")?.sale)
}

/// Update a sale.
pub async fn update(client: &ApiClient, id: &str, input: &SaleInput) -> ClientResult<Sale> {
    let resp: ApiResponse<SaleData> = client.put(&format!("sales/{id}"), input).await?;
    Ok(resp.into_data("sale")?.sale)
}

/// Delete a sale.
pub async fn delete(client: &ApiClient, id: &str) -> ClientResult<()> {
    let _resp: ApiResponse<serde_json::Value> = client.delete(&format!("sales/{id}")).await?;
    Ok(())
}

/// All sales for one customer, newest first.
pub async fn by_customer(client: &ApiClient, customer_id: &str) -> ClientResult<Vec<Sale>> {
    let resp: ApiResponse<SalesData> = client.get(&format!("sales/customer/{customer_id}")).await?;
    Ok(resp.into_data("sales")?.sales)
}

/// Sales report over a date range.
pub async fn report(client: &ApiClient, query: &SaleListQuery) -> ClientResult<SalesReport> {
    let resp: ApiResponse<SalesReport> = client.get_query("sales/report", query).await?;
    resp.into_data("report")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_input_wire_shape() {
        let input = SaleInput {
            customer: "cust-1".to_string(),
            items: vec![SaleItemInput {
                product: "prod-1".to_string(),
                quantity: 2.0,
                price: Money::from_rupees(100.0),
                discount: Money::zero(),
            }],
            discount: Money::from_rupees(10.0),
            tax: Money::from_rupees(20.0),
            paid: Money::from_rupees(100.0),
            payment_method: Some(PaymentMethod::Cash),
            sale_date: None,
            notes: None,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["customer"], "cust-1");
        assert_eq!(json["items"][0]["product"], "prod-1");
        assert_eq!(json["items"][0]["price"], 100.0);
        assert_eq!(json["paymentMethod"], "cash");
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn test_query_payment_status_wire_name() {
        let query = SaleListQuery {
            payment_status: Some(PaymentStatus::Partial),
            ..Default::default()
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json, serde_json::json!({"paymentStatus": "partial"}));
    }
}
