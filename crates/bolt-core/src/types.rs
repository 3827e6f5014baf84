//! # Domain Types
//!
//! Core domain types used throughout Bolt Admin.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │      Sale       │   │    Payment      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (_id)       │   │  id (_id)       │   │  id (_id)       │       │
//! │  │  credit_limit   │   │  invoice_number │   │  amount         │       │
//! │  │  outstanding    │   │  items[]        │   │  sales[] alloc  │       │
//! │  │  is_active      │   │  balance        │   │  remaining      │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  PaymentStatus  │   │  RecordStatus   │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Pending        │   │  Completed      │   │  Cash, Card     │       │
//! │  │  Partial        │   │  Cancelled      │   │  Upi, Cheque    │       │
//! │  │  Paid, Overpaid │   │  Refunded       │   │  BankTransfer   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Fidelity
//! The shop API serves MongoDB documents in camelCase with `_id` keys, and
//! relation fields arrive either as a bare id string or as a populated
//! sub-document depending on the endpoint. Those loose shapes become typed
//! here: every entity is a struct with explicit optional fields, and
//! populated-or-id references are untagged enums ([`CustomerRef`],
//! [`ProductRef`], [`SaleRef`]) instead of `?.` chains.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::BALANCE_TOLERANCE_PAISE;

fn default_true() -> bool {
    true
}

// =============================================================================
// Status & Method Enums
// =============================================================================

/// How much of a sale has been settled.
///
/// Derived from `balance = total - paid` with a one-paisa tolerance; the
/// server also stores its own copy of this field, which is trusted for
/// display and re-derived locally when the form edits totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Nothing paid yet.
    #[default]
    Pending,
    /// Paid something, but less than the total.
    Partial,
    /// Balance within tolerance of zero.
    Paid,
    /// Paid more than the total (negative balance).
    Overpaid,
}

impl PaymentStatus {
    /// Classifies a sale's settlement state from its balance and paid amount.
    ///
    /// ## Classification
    /// ```text
    /// balance < -ε   → Overpaid
    /// |balance| ≤ ε  → Paid
    /// paid > 0       → Partial
    /// otherwise      → Pending
    /// ```
    /// ε is one paisa, absorbing any rounding in amounts that arrived as
    /// rupee decimals.
    pub fn from_balance(balance: Money, paid: Money) -> Self {
        if balance.paise() < -BALANCE_TOLERANCE_PAISE {
            PaymentStatus::Overpaid
        } else if balance.paise().abs() <= BALANCE_TOLERANCE_PAISE {
            PaymentStatus::Paid
        } else if paid.is_positive() {
            PaymentStatus::Partial
        } else {
            PaymentStatus::Pending
        }
    }

    /// Capitalized label for display ("Pending", "Partial", ...).
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Partial => "Partial",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Overpaid => "Overpaid",
        }
    }
}

/// Lifecycle status shared by sales and payments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    #[default]
    Completed,
    Cancelled,
    Refunded,
}

/// How a payment was tendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Upi,
    BankTransfer,
    Credit,
    Cheque,
}

impl PaymentMethod {
    /// Uppercased display label, underscores spaced ("BANK TRANSFER").
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "CASH",
            PaymentMethod::Card => "CARD",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::BankTransfer => "BANK TRANSFER",
            PaymentMethod::Credit => "CREDIT",
            PaymentMethod::Cheque => "CHEQUE",
        }
    }
}

// =============================================================================
// References (populated-or-id)
// =============================================================================

/// Slim customer projection used when a relation is populated.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
}

/// A customer relation: either a bare id or a populated summary.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum CustomerRef {
    Populated(CustomerSummary),
    Id(String),
}

impl CustomerRef {
    pub fn id(&self) -> &str {
        match self {
            CustomerRef::Populated(c) => &c.id,
            CustomerRef::Id(id) => id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            CustomerRef::Populated(c) => Some(&c.name),
            CustomerRef::Id(_) => None,
        }
    }
}

/// Slim product projection used inside sale line items.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
}

/// A product relation: either a bare id or a populated summary.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum ProductRef {
    Populated(ProductSummary),
    Id(String),
}

impl ProductRef {
    pub fn id(&self) -> &str {
        match self {
            ProductRef::Populated(p) => &p.id,
            ProductRef::Id(id) => id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            ProductRef::Populated(p) => Some(&p.name),
            ProductRef::Id(_) => None,
        }
    }
}

/// Slim sale projection used inside payment allocations.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaleSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub total: Money,
    #[serde(default)]
    pub balance: Money,
}

/// A sale relation: either a bare id or a populated summary.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum SaleRef {
    Populated(SaleSummary),
    Id(String),
}

impl SaleRef {
    pub fn id(&self) -> &str {
        match self {
            SaleRef::Populated(s) => &s.id,
            SaleRef::Id(id) => id,
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// Postal address sub-document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
}

/// A customer of the shop.
///
/// `outstanding_amount` is signed: positive means the customer owes money,
/// negative means they hold a credit from overpayment. `credit_limit` of
/// zero means unlimited credit. Both are maintained server-side as sales and
/// payments are recorded; this side only derives labels from them.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub address: Option<Address>,

    /// Retail or wholesale.
    #[serde(rename = "type", default)]
    pub customer_type: Option<String>,

    #[serde(default)]
    pub gst_number: Option<String>,

    #[serde(default)]
    pub pan_number: Option<String>,

    /// Maximum outstanding permitted before the customer is flagged.
    /// Zero means unlimited.
    #[serde(default)]
    pub credit_limit: Money,

    /// Sum of this customer's sale balances. Negative = credit.
    #[serde(default)]
    pub outstanding_amount: Money,

    /// Lifetime purchase volume.
    #[serde(default)]
    pub total_purchase: Money,

    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub last_purchase: Option<DateTime<Utc>>,

    /// Soft-delete flag; deactivated customers stay on record.
    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Customer {
    /// The outstanding figure to reconcile against.
    ///
    /// Server-aggregated stats are fresher than the denormalized field on
    /// the customer document, so they win when present.
    pub fn effective_outstanding(&self, stats: Option<&SalesStats>) -> Money {
        match stats {
            Some(s) => s.total_outstanding,
            None => self.outstanding_amount,
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// Price points for a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductPrice {
    #[serde(default)]
    pub purchase: Money,
    #[serde(default)]
    pub selling: Money,
    /// Maximum retail price; must be at least the selling price when set.
    #[serde(default)]
    pub mrp: Option<Money>,
}

/// Stock levels for a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductStock {
    #[serde(default)]
    pub current: i64,
    #[serde(default)]
    pub minimum: i64,
    #[serde(default)]
    pub maximum: Option<i64>,
}

/// An inventory item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub sku: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub brand: Option<String>,

    /// Unit of sale: piece, kg, litre, box...
    #[serde(default)]
    pub unit: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub price: ProductPrice,

    #[serde(default)]
    pub stock: ProductStock,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Low-stock check used for dashboard alerts.
    pub fn is_low_stock(&self) -> bool {
        self.stock.current <= self.stock.minimum
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A line item on a sale.
///
/// `total` is the stored figure; it equals `quantity × price − discount`
/// when recomputed (see `totals::line_total`).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    pub product: ProductRef,

    /// Quantity sold; fractional for weighed goods.
    #[serde(default)]
    pub quantity: f64,

    /// Unit price at time of sale.
    #[serde(default)]
    pub price: Money,

    /// Per-line discount amount (not a percentage).
    #[serde(default)]
    pub discount: Money,

    #[serde(default)]
    pub total: Money,
}

/// A sales invoice.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub invoice_number: Option<String>,

    pub customer: CustomerRef,

    #[serde(default)]
    pub items: Vec<SaleItem>,

    #[serde(default)]
    pub subtotal: Money,

    /// Invoice-level discount, applied after line discounts.
    #[serde(default)]
    pub discount: Money,

    #[serde(default)]
    pub tax: Money,

    #[serde(default)]
    pub total: Money,

    #[serde(default)]
    pub paid: Money,

    /// total − paid; negative means overpaid.
    #[serde(default)]
    pub balance: Money,

    #[serde(default)]
    pub payment_status: PaymentStatus,

    #[serde(default)]
    pub status: RecordStatus,

    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub sale_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Sale {
    /// Whether the invoice still has money owing on it.
    pub fn has_outstanding_balance(&self) -> bool {
        self.balance.is_positive() || self.total > self.paid
    }
}

// =============================================================================
// Payment
// =============================================================================

/// A slice of a payment applied to one sale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAllocation {
    #[serde(rename = "_id")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub sale: SaleRef,

    pub amount: Money,
}

/// A payment received from a customer, optionally allocated across their
/// open sales. Whatever is not allocated stays on the customer as credit.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub receipt_number: Option<String>,

    #[serde(default)]
    pub customer: Option<CustomerRef>,

    #[serde(default)]
    pub amount: Money,

    #[serde(default)]
    pub payment_method: PaymentMethod,

    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub payment_date: Option<DateTime<Utc>>,

    /// Transaction id, cheque number, etc.
    #[serde(default)]
    pub reference: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    /// Allocations against open sales; absent sales are unallocated.
    #[serde(default)]
    pub sales: Vec<PaymentAllocation>,

    /// Σ sales[].amount, maintained server-side.
    #[serde(default)]
    pub total_allocated: Money,

    /// amount − total_allocated; unallocated credit.
    #[serde(default)]
    pub remaining_amount: Money,

    #[serde(default)]
    pub status: RecordStatus,

    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Users & Aggregates
// =============================================================================

/// An authenticated back-office user.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Per-customer aggregates computed server-side from their sales.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SalesStats {
    #[serde(default)]
    pub total_sales: i64,
    #[serde(default)]
    pub paid_sales: i64,
    #[serde(default)]
    pub pending_sales: i64,
    #[serde(default)]
    pub total_amount: Money,
    /// Authoritative outstanding figure; preferred over the denormalized
    /// field on the customer document.
    #[serde(default)]
    pub total_outstanding: Money,
}

/// Per-customer payment aggregates computed server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStats {
    #[serde(default)]
    pub total_payments: i64,
    #[serde(default)]
    pub total_amount: Money,
}

/// Shop-wide figures for the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_products: i64,
    #[serde(default)]
    pub total_customers: i64,
    #[serde(default)]
    pub total_sales: i64,
    #[serde(default)]
    pub total_revenue: Money,
    #[serde(default)]
    pub today_sales: i64,
    #[serde(default)]
    pub today_revenue: Money,
    #[serde(default)]
    pub low_stock_products: i64,
    #[serde(default)]
    pub pending_payments: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_status_classification() {
        let paid = Money::from_rupees(255.0);
        assert_eq!(
            PaymentStatus::from_balance(Money::zero(), paid),
            PaymentStatus::Paid
        );
        assert_eq!(
            PaymentStatus::from_balance(Money::from_rupees(155.0), Money::from_rupees(100.0)),
            PaymentStatus::Partial
        );
        assert_eq!(
            PaymentStatus::from_balance(Money::from_rupees(255.0), Money::zero()),
            PaymentStatus::Pending
        );
        assert_eq!(
            PaymentStatus::from_balance(Money::from_rupees(-10.0), Money::from_rupees(265.0)),
            PaymentStatus::Overpaid
        );
    }

    #[test]
    fn test_payment_status_tolerance_at_boundary() {
        // One paisa either side of settled still counts as paid
        let paid = Money::from_paise(25500);
        assert_eq!(
            PaymentStatus::from_balance(Money::from_paise(1), paid),
            PaymentStatus::Paid
        );
        assert_eq!(
            PaymentStatus::from_balance(Money::from_paise(-1), paid),
            PaymentStatus::Paid
        );
        // Two paise short flips to partial; two over flips to overpaid
        assert_eq!(
            PaymentStatus::from_balance(Money::from_paise(2), paid),
            PaymentStatus::Partial
        );
        assert_eq!(
            PaymentStatus::from_balance(Money::from_paise(-2), paid),
            PaymentStatus::Overpaid
        );
    }

    #[test]
    fn test_customer_ref_deserializes_both_shapes() {
        let bare: CustomerRef = serde_json::from_str("\"665f1c2e9b1d\"").unwrap();
        assert_eq!(bare.id(), "665f1c2e9b1d");
        assert!(bare.name().is_none());

        let populated: CustomerRef = serde_json::from_str(
            r#"{"_id":"665f1c2e9b1d","name":"Sharma Traders","phone":"9876543210"}"#,
        )
        .unwrap();
        assert_eq!(populated.id(), "665f1c2e9b1d");
        assert_eq!(populated.name(), Some("Sharma Traders"));
    }

    #[test]
    fn test_customer_effective_outstanding_prefers_stats() {
        let customer = sample_customer(Money::from_rupees(500.0));
        let stats = SalesStats {
            total_outstanding: Money::from_rupees(320.0),
            ..Default::default()
        };
        assert_eq!(
            customer.effective_outstanding(Some(&stats)),
            Money::from_rupees(320.0)
        );
        assert_eq!(
            customer.effective_outstanding(None),
            Money::from_rupees(500.0)
        );
    }

    #[test]
    fn test_sale_deserializes_sparse_document() {
        let json = r#"{
            "_id": "sale-1",
            "invoiceNumber": "INV-2026-0042",
            "customer": "cust-1",
            "items": [
                {"product": {"_id": "p1", "name": "Hammer"}, "quantity": 2, "price": 100, "discount": 0, "total": 200}
            ],
            "subtotal": 200,
            "total": 200,
            "paid": 50,
            "balance": 150,
            "paymentStatus": "partial"
        }"#;
        let sale: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.customer.id(), "cust-1");
        assert_eq!(sale.items[0].product.id(), "p1");
        assert_eq!(sale.balance, Money::from_rupees(150.0));
        assert_eq!(sale.payment_status, PaymentStatus::Partial);
        assert_eq!(sale.status, RecordStatus::Completed);
        assert!(sale.has_outstanding_balance());
    }

    #[test]
    fn test_payment_allocation_wire_names() {
        let saved: PaymentAllocation =
            serde_json::from_str(r#"{"_id":"alloc-1","sale":"sale-1","amount":300}"#).unwrap();
        assert_eq!(saved.id.as_deref(), Some("alloc-1"));
        let json = serde_json::to_value(&saved).unwrap();
        assert_eq!(json["_id"], "alloc-1");

        // Unsaved allocations carry no id on the wire
        let fresh = PaymentAllocation {
            id: None,
            sale: SaleRef::Id("sale-1".to_string()),
            amount: Money::from_rupees(300.0),
        };
        let json = serde_json::to_value(&fresh).unwrap();
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn test_payment_method_wire_names() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::BankTransfer).unwrap(),
            "\"bank_transfer\""
        );
        let method: PaymentMethod = serde_json::from_str("\"upi\"").unwrap();
        assert_eq!(method, PaymentMethod::Upi);
        assert_eq!(method.label(), "UPI");
    }

    fn sample_customer(outstanding: Money) -> Customer {
        Customer {
            id: "cust-1".to_string(),
            name: "Sharma Traders".to_string(),
            phone: "9876543210".to_string(),
            email: None,
            address: None,
            customer_type: None,
            gst_number: None,
            pan_number: None,
            credit_limit: Money::zero(),
            outstanding_amount: outstanding,
            total_purchase: Money::zero(),
            last_purchase: None,
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }
}
