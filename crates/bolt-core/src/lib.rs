//! # bolt-core: Pure Ledger Logic for Bolt Admin
//!
//! This crate is the **heart** of Bolt Admin. It contains the ledger math
//! and domain types as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Bolt Admin Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    admin console (apps/admin)                   │   │
//! │  │    state slices ──► actions ──► session ──► output             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    bolt-client (HTTP layer)                     │   │
//! │  │    customers, sales, payments, products, dashboard, auth       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bolt-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐ │   │
//! │  │   │   types   │  │   money   │  │   totals   │  │ validation│ │   │
//! │  │   │ Customer  │  │   Money   │  │ SaleTotals │  │   rules   │ │   │
//! │  │   │ Sale, ... │  │  (paise)  │  │ allocation │  │  checks   │ │   │
//! │  │   └───────────┘  └───────────┘  │  standing  │  └───────────┘ │   │
//! │  │                                 └────────────┘                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Customer, Sale, Payment, Product, ...)
//! - [`money`] - Money type with integer paise arithmetic
//! - [`totals`] - Sale totals recomputation
//! - [`allocation`] - Splitting a payment across open sales
//! - [`standing`] - Credit limit standing and utilization
//! - [`validation`] - Form input validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in paise (i64) internally;
//!    the rupee-decimal wire format is handled at the serde boundary
//! 4. **Calculators Never Fail**: Bad numeric input coerces to zero and the
//!    math runs on; only form validation returns errors
//!
//! ## Example Usage
//!
//! ```rust
//! use bolt_core::money::Money;
//! use bolt_core::totals::{SaleLine, SaleTotals};
//! use bolt_core::types::PaymentStatus;
//!
//! let lines = vec![
//!     SaleLine::from_raw(2.0, 100.0, 0.0),
//!     SaleLine::from_raw(1.0, 50.0, 5.0),
//! ];
//! let totals = SaleTotals::compute(
//!     &lines,
//!     Money::from_rupees(10.0),
//!     Money::from_rupees(20.0),
//!     Money::zero(),
//! );
//!
//! assert_eq!(totals.subtotal, Money::from_rupees(245.0));
//! assert_eq!(totals.total, Money::from_rupees(255.0));
//! assert_eq!(totals.payment_status, PaymentStatus::Pending);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod allocation;
pub mod error;
pub mod money;
pub mod standing;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bolt_core::Money` instead of
// `use bolt_core::money::Money`

pub use allocation::{AllocationEntry, AllocationPlan};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use standing::{CreditStanding, Standing};
pub use totals::{SaleLine, SaleTotals};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Settlement tolerance in paise.
///
/// Amounts arrive on the wire as rupee decimals, so a sale paid in full can
/// land a paisa off after rounding. A balance within this band still counts
/// as paid.
pub const BALANCE_TOLERANCE_PAISE: i64 = 1;
