//! Dashboard endpoints: `/dashboard/*`.

use bolt_core::types::DashboardStats;
use bolt_core::Money;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::response::ApiResponse;

// =============================================================================
// Payloads
// =============================================================================

/// What kind of record an activity line refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Sale,
    Payment,
}

/// One line in the recent-activity feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: ActivityKind,

    /// Set when kind is Sale.
    #[serde(default)]
    pub invoice_number: Option<String>,

    /// Set when kind is Payment.
    #[serde(default)]
    pub receipt_number: Option<String>,

    #[serde(default)]
    pub amount: Money,

    /// Customer name for display.
    #[serde(default)]
    pub customer: Option<String>,

    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct ActivitiesData {
    activities: Vec<Activity>,
}

// =============================================================================
// Operations
// =============================================================================

/// Shop-wide dashboard figures.
pub async fn stats(client: &ApiClient) -> ClientResult<DashboardStats> {
    let resp: ApiResponse<DashboardStats> = client.get("dashboard/stats").await?;
    resp.into_data("stats")
}

/// The most recent sales and payments, newest first.
pub async fn recent_activities(client: &ApiClient, limit: u32) -> ClientResult<Vec<Activity>> {
    let resp: ApiResponse<ActivitiesData> = client
        .get_query("dashboard/activities", &[("limit", limit)])
        .await?;
    Ok(resp.into_data("activities")?.activities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_deserializes_both_kinds() {
        let json = r#"[
            {"id": "s1", "type": "sale", "invoiceNumber": "INV-0042",
             "amount": 255, "customer": "Sharma Traders", "date": "2026-08-29T10:15:00Z"},
            {"id": "p1", "type": "payment", "receiptNumber": "RCP-0031", "amount": 500}
        ]"#;
        let activities: Vec<Activity> = serde_json::from_str(json).unwrap();

        assert_eq!(activities[0].kind, ActivityKind::Sale);
        assert_eq!(activities[0].invoice_number.as_deref(), Some("INV-0042"));
        assert_eq!(activities[0].amount, Money::from_rupees(255.0));

        assert_eq!(activities[1].kind, ActivityKind::Payment);
        assert_eq!(activities[1].receipt_number.as_deref(), Some("RCP-0031"));
        assert!(activities[1].date.is_none());
    }

    #[test]
    fn test_stats_payload_fills_missing_fields() {
        let stats: DashboardStats =
            serde_json::from_str(r#"{"totalSales": 12, "todayRevenue": 4550.5}"#).unwrap();
        assert_eq!(stats.total_sales, 12);
        assert_eq!(stats.today_revenue, Money::from_paise(455050));
        assert_eq!(stats.low_stock_products, 0);
    }
}
