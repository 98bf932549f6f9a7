//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Rupiah                                           │
//! │    Prices are whole Rupiah (Rp 5.000, Rp 10.000); the smallest          │
//! │    traded unit IS the unit, so an i64 represents every amount           │
//! │    exactly and sums stay exact over any number of sales                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use scoop_core::money::Money;
//!
//! // Create from whole Rupiah (preferred)
//! let price = Money::from_rupiah(5000); // Rp 5.000
//!
//! // Arithmetic operations
//! let total = price.multiply_quantity(3);        // Rp 15.000
//! let margin = price - Money::from_rupiah(3000); // Rp 2.000
//!
//! // NEVER do this:
//! // let bad = Money::from_float(4999.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in whole Indonesian Rupiah.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for loss-making profit figures
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Transparent serde**: Persists as a plain number, the same shape the
///   snapshot document has always carried
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole Rupiah.
    ///
    /// ## Example
    /// ```rust
    /// use scoop_core::money::Money;
    ///
    /// let price = Money::from_rupiah(5000); // Represents Rp 5.000
    /// assert_eq!(price.rupiah(), 5000);
    /// ```
    #[inline]
    pub const fn from_rupiah(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the value in whole Rupiah.
    #[inline]
    pub const fn rupiah(&self) -> i64 {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a sold quantity.
    ///
    /// ## Example
    /// ```rust
    /// use scoop_core::money::Money;
    ///
    /// let unit_price = Money::from_rupiah(5000);
    /// let revenue = unit_price.multiply_quantity(4);
    /// assert_eq!(revenue.rupiah(), 20000); // Rp 20.000
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u64) -> Self {
        Money(self.0 * qty as i64)
    }

    /// Formats the value as a grouped Rupiah string, e.g. `Rp 10.000`.
    ///
    /// Indonesian convention groups thousands with `.` and carries no
    /// fractional digits. Negative amounts put the sign before the symbol.
    ///
    /// ## Example
    /// ```rust
    /// use scoop_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupiah(10000).format_rupiah(), "Rp 10.000");
    /// assert_eq!(Money::from_rupiah(-2000).format_rupiah(), "-Rp 2.000");
    /// ```
    pub fn format_rupiah(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}Rp {}", sign, group_thousands(self.0.unsigned_abs()))
    }
}

/// Groups a magnitude with `.` separators every three digits.
fn group_thousands(mut value: u64) -> String {
    if value < 1000 {
        return value.to_string();
    }

    // Collect three-digit groups from the least significant end
    let mut groups = Vec::new();
    while value >= 1000 {
        groups.push(format!("{:03}", value % 1000));
        value /= 1000;
    }
    groups.push(value.to_string());
    groups.reverse();
    groups.join(".")
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the grouped Rupiah form.
///
/// The terminal IS the presentation surface here, so unlike a GUI stack
/// there is no separate frontend formatter to defer to.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_rupiah())
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rupiah() {
        let money = Money::from_rupiah(5000);
        assert_eq!(money.rupiah(), 5000);
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupiah(10000);
        let b = Money::from_rupiah(3000);

        assert_eq!((a + b).rupiah(), 13000);
        assert_eq!((a - b).rupiah(), 7000);

        let mut c = a;
        c += b;
        assert_eq!(c.rupiah(), 13000);
        c -= b;
        assert_eq!(c.rupiah(), 10000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_rupiah(5000);
        assert_eq!(unit_price.multiply_quantity(4).rupiah(), 20000);
        assert_eq!(unit_price.multiply_quantity(0).rupiah(), 0);
    }

    #[test]
    fn test_negative_profit_is_representable() {
        // Selling below cost produces a negative margin, not a panic
        let margin = Money::from_rupiah(3000) - Money::from_rupiah(5000);
        assert!(margin.is_negative());
        assert_eq!(margin.abs().rupiah(), 2000);
    }

    #[test]
    fn test_format_rupiah_grouping() {
        assert_eq!(Money::from_rupiah(0).format_rupiah(), "Rp 0");
        assert_eq!(Money::from_rupiah(500).format_rupiah(), "Rp 500");
        assert_eq!(Money::from_rupiah(5000).format_rupiah(), "Rp 5.000");
        assert_eq!(Money::from_rupiah(40000).format_rupiah(), "Rp 40.000");
        assert_eq!(Money::from_rupiah(1234567).format_rupiah(), "Rp 1.234.567");
    }

    #[test]
    fn test_format_rupiah_negative() {
        assert_eq!(Money::from_rupiah(-2000).format_rupiah(), "-Rp 2.000");
        assert_eq!(format!("{}", Money::from_rupiah(-1000000)), "-Rp 1.000.000");
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert_eq!(zero, Money::default());
    }
}
