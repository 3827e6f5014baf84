//! # Money Module
//!
//! Provides the `Money` type for handling rupee amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  The web frontend papers over this with a 0.01-rupee epsilon when it    │
//! │  classifies a balance as "paid". We keep the same tolerance, but since  │
//! │  every amount is an integer number of paise the comparison is exact.    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! The shop API speaks rupee decimals (`"total": 255.5`), so `Money`
//! serializes as a rupee `f64` and deserializes from one. Non-finite input
//! (NaN, ±inf) coerces to zero; the ledger math must never crash on a bad
//! number, it produces a best-effort figure instead.
//!
//! ## Usage
//! ```rust
//! use bolt_core::money::Money;
//!
//! let price = Money::from_paise(10999); // ₹109.99
//! let doubled = price * 2;
//! assert_eq!(doubled.paise(), 21998);
//!
//! // From the wire (rupee decimals)
//! let total = Money::from_rupees(255.0);
//! assert_eq!(total.paise(), 25500);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A rupee amount held as an integer number of paise.
///
/// ## Design Decisions
/// - **i64 (signed)**: outstanding amounts go negative when a customer has
///   overpaid, and sale balances go negative for overpaid invoices
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Manual serde**: the API wire format is rupee decimals, not paise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from a rupee decimal, rounding to the nearest
    /// paisa.
    ///
    /// Non-finite input coerces to zero. The SPA this replaces used
    /// `Number(value) || 0` everywhere; this is the typed equivalent.
    ///
    /// ## Example
    /// ```rust
    /// use bolt_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees(10.99).paise(), 1099);
    /// assert_eq!(Money::from_rupees(f64::NAN).paise(), 0);
    /// assert_eq!(Money::from_rupees(-5.5).paise(), -550);
    /// ```
    pub fn from_rupees(rupees: f64) -> Self {
        if !rupees.is_finite() {
            return Money(0);
        }
        Money((rupees * 100.0).round() as i64)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the value as a rupee decimal (for the wire and for display math).
    #[inline]
    pub fn rupees(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rupees.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Formats the amount with the rupee sign and Indian digit grouping.
    ///
    /// The frontend renders every amount through
    /// `toLocaleString('en-IN')`; this reproduces that grouping (last three
    /// digits, then pairs): `₹12,34,567.89`.
    ///
    /// ## Example
    /// ```rust
    /// use bolt_core::money::Money;
    ///
    /// assert_eq!(Money::from_paise(123456789).format_inr(), "₹12,34,567.89");
    /// assert_eq!(Money::from_paise(-25050).format_inr(), "-₹250.50");
    /// ```
    pub fn format_inr(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let whole = (self.0 / 100).abs();
        let frac = (self.0 % 100).abs();
        format!("{}₹{}.{:02}", sign, group_indian(whole), frac)
    }
}

/// Groups an unsigned whole-rupee figure Indian style: 1234567 → "12,34,567".
fn group_indian(mut value: i64) -> String {
    debug_assert!(value >= 0);
    if value < 1000 {
        return value.to_string();
    }
    let tail = value % 1000;
    value /= 1000;
    let mut pairs = Vec::new();
    while value >= 100 {
        pairs.push(value % 100);
        value /= 100;
    }
    let mut out = value.to_string();
    for pair in pairs.iter().rev() {
        out.push_str(&format!(",{:02}", pair));
    }
    out.push_str(&format!(",{:03}", tail));
    out
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly display; UI surfaces should use [`Money::format_inr`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

/// Multiplication by integer quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Serializes as a rupee decimal, matching the API wire format.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.rupees())
    }
}

/// Deserializes from a rupee decimal; non-finite values coerce to zero.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rupees = f64::deserialize(deserializer)?;
        Ok(Money::from_rupees(rupees))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise() {
        let money = Money::from_paise(1099);
        assert_eq!(money.paise(), 1099);
        assert!((money.rupees() - 10.99).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_rupees_rounds_to_paisa() {
        assert_eq!(Money::from_rupees(10.99).paise(), 1099);
        assert_eq!(Money::from_rupees(0.019).paise(), 2);
        assert_eq!(Money::from_rupees(0.125).paise(), 13); // half rounds away from zero
        assert_eq!(Money::from_rupees(-5.5).paise(), -550);
    }

    #[test]
    fn test_from_rupees_coerces_non_finite_to_zero() {
        assert_eq!(Money::from_rupees(f64::NAN).paise(), 0);
        assert_eq!(Money::from_rupees(f64::INFINITY).paise(), 0);
        assert_eq!(Money::from_rupees(f64::NEG_INFINITY).paise(), 0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_paise(1000);
        let b = Money::from_paise(500);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);
        assert_eq!((a * 3).paise(), 3000);
        assert_eq!((-a).paise(), -1000);

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total.paise(), 2000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_paise(1099)), "₹10.99");
        assert_eq!(format!("{}", Money::from_paise(-550)), "-₹5.50");
        assert_eq!(format!("{}", Money::zero()), "₹0.00");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(Money::from_paise(0).format_inr(), "₹0.00");
        assert_eq!(Money::from_paise(99900).format_inr(), "₹999.00");
        assert_eq!(Money::from_paise(100000).format_inr(), "₹1,000.00");
        assert_eq!(Money::from_paise(12345600).format_inr(), "₹1,23,456.00");
        assert_eq!(Money::from_paise(123456789).format_inr(), "₹12,34,567.89");
        assert_eq!(Money::from_paise(-25050).format_inr(), "-₹250.50");
    }

    #[test]
    fn test_wire_round_trip() {
        let money = Money::from_paise(25550);
        let json = serde_json::to_string(&money).unwrap();
        assert_eq!(json, "255.5");

        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, money);

        // Integers on the wire are fine too
        let from_int: Money = serde_json::from_str("255").unwrap();
        assert_eq!(from_int.paise(), 25500);
    }
}
