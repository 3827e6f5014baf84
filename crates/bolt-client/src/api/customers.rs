//! Customer endpoints: `/customers/*`.

use bolt_core::types::{Address, Customer, Payment, PaymentStats, Sale, SalesStats};
use bolt_core::Money;
use serde::{Deserialize, Serialize};

use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::response::ApiResponse;

// =============================================================================
// Query & Input DTOs
// =============================================================================

/// Filters for the customer list.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Retail or wholesale.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub customer_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Fields submitted when creating or updating a customer.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    pub name: String,
    pub phone: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub customer_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_number: Option<String>,

    pub credit_limit: Money,

    pub is_active: bool,
}

// =============================================================================
// Payloads
// =============================================================================

#[derive(Debug, Deserialize)]
struct CustomersData {
    customers: Vec<Customer>,
}

#[derive(Debug, Deserialize)]
struct CustomerData {
    customer: Customer,
}

/// Everything the detail endpoint returns for one customer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetail {
    pub customer: Customer,

    #[serde(default)]
    pub sales: Vec<Sale>,

    #[serde(default)]
    pub payments: Vec<Payment>,

    #[serde(default)]
    pub sales_stats: Option<SalesStats>,

    #[serde(default)]
    pub payment_stats: Option<PaymentStats>,

    /// Server's own standing verdict: "clear", "credit", ...
    #[serde(default)]
    pub overall_status: Option<String>,

    #[serde(default)]
    pub status_message: Option<String>,

    /// Outstanding net of unallocated payment credit.
    #[serde(default)]
    pub adjusted_outstanding: Option<Money>,
}

/// Transaction history for one customer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerTransactions {
    #[serde(default)]
    pub sales: Vec<Sale>,

    #[serde(default)]
    pub payments: Vec<Payment>,
}

// =============================================================================
// Operations
// =============================================================================

/// List customers matching the query.
pub async fn list(client: &ApiClient, query: &CustomerListQuery) -> ClientResult<Vec<Customer>> {
    let resp: ApiResponse<CustomersData> = client.get_query("customers", query).await?;
    Ok(resp.into_data("customers")?.customers)
}

/// Fetch one customer with their sales, payments, and aggregates.
pub async fn get(client: &ApiClient, id: &str) -> ClientResult<CustomerDetail> {
    let resp: ApiResponse<CustomerDetail> = client.get(&format!("customers/{id}")).await?;
    resp.into_data("customer")
}

/// Create a customer.
pub async fn create(client: &ApiClient, input: &CustomerInput) -> ClientResult<Customer> {
    let resp: ApiResponse<CustomerData> = client.post("customers", input).await?;
    Ok(resp.into_data("customer")?.customer)
}

/// Update a customer.
pub async fn update(client: &ApiClient, id: &str, input: &CustomerInput) -> ClientResult<Customer> {
    let resp: ApiResponse<CustomerData> = client.put(&format!("customers/{id}"), input).await?;
    Ok(resp.into_data("customer")?.customer)
}

/// Delete (deactivate) a customer.
pub async fn delete(client: &ApiClient, id: &str) -> ClientResult<()> {
    let _resp: ApiResponse<serde_json::Value> = client.delete(&format!("customers/{id}")).await?;
    Ok(())
}

/// Fetch the full transaction history for a customer.
pub async fn transactions(client: &ApiClient, id: &str) -> ClientResult<CustomerTransactions> {
    let resp: ApiResponse<CustomerTransactions> =
        client.get(&format!("customers/{id}/transactions")).await?;
    resp.into_data("transactions")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_serializes_sparse() {
        let query = CustomerListQuery {
            search: Some("sharma".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json, serde_json::json!({"search": "sharma"}));
    }

    #[test]
    fn test_input_renames_type() {
        let input = CustomerInput {
            name: "Sharma Traders".to_string(),
            phone: "9876543210".to_string(),
            customer_type: Some("wholesale".to_string()),
            credit_limit: Money::from_rupees(50000.0),
            is_active: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["type"], "wholesale");
        assert_eq!(json["creditLimit"], 50000.0);
        assert!(json.get("gstNumber").is_none());
    }

    #[test]
    fn test_detail_payload_deserializes() {
        let json = r#"{
            "customer": {"_id": "c1", "name": "Verma Hardware", "creditLimit": 10000},
            "sales": [],
            "salesStats": {"totalSales": 4, "totalOutstanding": 1200},
            "overallStatus": "clear",
            "adjustedOutstanding": -150
        }"#;
        let detail: CustomerDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.customer.id, "c1");
        assert_eq!(detail.sales_stats.unwrap().total_sales, 4);
        assert_eq!(detail.overall_status.as_deref(), Some("clear"));
        assert_eq!(detail.adjusted_outstanding, Some(Money::from_rupees(-150.0)));
        assert!(detail.payments.is_empty());
    }
}
