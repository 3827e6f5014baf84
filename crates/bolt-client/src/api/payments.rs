//! Payment endpoints: `/payments/*`.

use bolt_core::allocation::AllocationEntry;
use bolt_core::types::{Payment, PaymentMethod};
use bolt_core::Money;
use serde::{Deserialize, Serialize};

use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::response::ApiResponse;

// =============================================================================
// Query & Input DTOs
// =============================================================================

/// Filters for the payments list.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// One allocation row as submitted: this much against this sale.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationInput {
    /// Sale id.
    pub sale: String,
    pub amount: Money,
}

impl From<AllocationEntry> for AllocationInput {
    fn from(entry: AllocationEntry) -> Self {
        AllocationInput {
            sale: entry.sale_id,
            amount: entry.amount,
        }
    }
}

/// Fields submitted when recording or updating a payment.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInput {
    /// Customer id.
    pub customer: String,

    pub amount: Money,

    pub payment_method: PaymentMethod,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<String>,

    /// Transaction id, cheque number, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// How the amount splits across open sales. May sum to less than the
    /// amount (the rest stays as customer credit); the server has the last
    /// word on over-allocation.
    pub sales: Vec<AllocationInput>,
}

// =============================================================================
// Payloads
// =============================================================================

#[derive(Debug, Deserialize)]
struct PaymentsData {
    payments: Vec<Payment>,
}

#[derive(Debug, Deserialize)]
struct PaymentData {
    payment: Payment,
}

// =============================================================================
// Operations
// =============================================================================

/// List payments matching the query.
pub async fn list(client: &ApiClient, query: &PaymentListQuery) -> ClientResult<Vec<Payment>> {
    let resp: ApiResponse<PaymentsData> = client.get_query("payments", query).await?;
    Ok(resp.into_data("payments")?.payments)
}

/// Fetch one payment with populated customer and sales.
pub async fn get(client: &ApiClient, id: &str) -> ClientResult<Payment> {
    let resp: ApiResponse<PaymentData> = client.get(&format!("payments/{id}")).await?;
    Ok(resp.into_data("payment")?.payment)
}

/// Record a payment.
pub async fn create(client: &ApiClient, input: &PaymentInput) -> ClientResult<Payment> {
    let resp: ApiResponse<PaymentData> = client.post("payments", input).await?;
    Ok(resp.into_data("payment")?.payment)
}

/// Update a payment.
pub async fn update(client: &ApiClient, id: &str, input: &PaymentInput) -> ClientResult<Payment> {
    let resp: ApiResponse<PaymentData> = client.put(&format!("payments/{id}"), input).await?;
    Ok(resp.into_data("payment")?.payment)
}

/// Delete a payment.
pub async fn delete(client: &ApiClient, id: &str) -> ClientResult<()> {
    let _resp: ApiResponse<serde_json::Value> = client.delete(&format!("payments/{id}")).await?;
    Ok(())
}

/// All payments for one customer, newest first.
pub async fn by_customer(client: &ApiClient, customer_id: &str) -> ClientResult<Vec<Payment>> {
    let resp: ApiResponse<PaymentsData> = client
        .get(&format!("payments/customer/{customer_id}"))
        .await?;
    Ok(resp.into_data("payments")?.payments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bolt_core::AllocationPlan;

    #[test]
    fn test_payment_input_from_allocation_plan() {
        let mut plan = AllocationPlan::new(Money::from_rupees(500.0));
        plan.set("sale-a", Money::from_rupees(300.0));
        plan.set("sale-b", Money::from_rupees(150.0));

        let input = PaymentInput {
            customer: "cust-1".to_string(),
            amount: plan.amount,
            payment_method: PaymentMethod::Upi,
            sales: plan.into_entries().into_iter().map(Into::into).collect(),
            ..Default::default()
        };

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["amount"], 500.0);
        assert_eq!(json["paymentMethod"], "upi");
        assert_eq!(json["sales"][0]["sale"], "sale-a");
        assert_eq!(json["sales"][0]["amount"], 300.0);
        assert_eq!(json["sales"][1]["sale"], "sale-b");
        assert!(json.get("reference").is_none());
    }
}
