//! # Money Module
//!
//! Provides the `Money` type and the one-decimal rounding used by every
//! stage of the bill split.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Splitting a bill in floating point:                                    │
//! │    211 / 3 = 70.33333333333333  → each share carries noise              │
//! │    88.4 + 86.2 + 86.2 = 260.79999999999995                              │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Exact Ratios                              │
//! │    Shares are kept as an exact fraction of cents and rounded ONCE      │
//! │    to the 0.1 grid. Any drift left over is a whole number of cents      │
//! │    that the reconciler can hand out explicitly.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use splitbill_core::money::Money;
//!
//! let steak = Money::from_major_minor(82, 0);
//! let juice = Money::from_cents(1000);
//! let total = steak + juice;
//! assert_eq!(total.to_string(), "92.0");
//!
//! // 0.45 rounds half away from zero to 0.5
//! assert_eq!(Money::from_cents(45).round_to_tenths().cents(), 50);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TipRate;

/// Cents in one tenth of the major unit (the presentation grid).
pub const CENTS_PER_TENTH: i64 = 10;

/// Basis points in 100%.
const BPS_SCALE: i128 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: reconciliation differences can be negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serialized as cents**: the wire never carries floats
///
/// ## Where Money Flows
/// ```text
/// BillItem.price ──► sub_total ──► tip ──► total_amount
///        │                                      │
///        └──► allocate() ──► PersonItem.amount ─┴──► reconcile()
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use splitbill_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -5.50, not -4.50.
    ///
    /// ```rust
    /// use splitbill_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(12, 30).cents(), 1230);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
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

    /// Checks if the value sits on the 0.1 grid.
    #[inline]
    pub const fn is_whole_tenths(&self) -> bool {
        self.0 % CENTS_PER_TENTH == 0
    }

    /// Rounds to the nearest 0.1, ties away from zero.
    ///
    /// ```rust
    /// use splitbill_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1234).round_to_tenths().cents(), 1230);
    /// assert_eq!(Money::from_cents(1235).round_to_tenths().cents(), 1240);
    /// assert_eq!(Money::from_cents(-5).round_to_tenths().cents(), -10);
    /// ```
    pub fn round_to_tenths(&self) -> Money {
        Money::from_ratio_rounded(self.0 as i128, 1)
    }

    /// Rounds the exact fraction `numerator / denominator` cents to the
    /// nearest 0.1, ties away from zero.
    ///
    /// Every share in the split goes through here so that division by the
    /// participant count never loses precision before the single rounding.
    ///
    /// ## Implementation
    /// In tenths: `(2·|n| + d·10) / (2·d·10)` is `|n| / (d·10)` rounded half up,
    /// then the sign is put back.
    ///
    /// # Panics
    /// `denominator` must be positive.
    pub fn from_ratio_rounded(numerator: i128, denominator: i128) -> Money {
        debug_assert!(denominator > 0, "denominator must be positive");

        let per_tenth = denominator * CENTS_PER_TENTH as i128;
        let magnitude = numerator.abs();
        let tenths = (2 * magnitude + per_tenth) / (2 * per_tenth);
        let signed = if numerator < 0 { -tenths } else { tenths };

        Money::from_cents((signed * CENTS_PER_TENTH as i128) as i64)
    }

    /// Calculates a tip on this amount, rounded to the nearest 0.1.
    ///
    /// ## Implementation
    /// Integer math only: `cents · bps / 10000`, kept as a fraction until
    /// the rounding step.
    ///
    /// ```rust
    /// use splitbill_core::money::Money;
    /// use splitbill_core::types::TipRate;
    ///
    /// let sub_total = Money::from_major_minor(123, 40);
    /// let tip = sub_total.calculate_tip(TipRate::from_bps(1000));
    /// assert_eq!(tip.cents(), 1230); // 12.34 → 12.3
    /// ```
    pub fn calculate_tip(&self, rate: TipRate) -> Money {
        let numerator = self.0 as i128 * rate.bps() as i128;
        Money::from_ratio_rounded(numerator, BPS_SCALE)
    }

    /// Returns this amount with the tip rate applied on top, as an exact
    /// fraction of cents `(numerator, denominator)`.
    pub(crate) fn with_tip_ratio(numerator: i128, denominator: i128, rate: TipRate) -> (i128, i128) {
        (
            numerator * (BPS_SCALE + rate.bps() as i128),
            denominator * BPS_SCALE,
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows one decimal place when the value is on the 0.1 grid, two otherwise.
///
/// No currency symbol: rendering layers add their own.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let major = self.major().abs();
        if self.is_whole_tenths() {
            write!(f, "{}{}.{}", sign, major, self.minor() / 10)
        } else {
            write!(f, "{}{}.{:02}", sign, major, self.minor())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
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

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(5610).to_string(), "56.1");
        assert_eq!(Money::from_cents(11000).to_string(), "110.0");
        assert_eq!(Money::from_cents(1005).to_string(), "10.05");
        assert_eq!(Money::from_cents(-10).to_string(), "-0.1");
        assert_eq!(Money::zero().to_string(), "0.0");
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);

        let total: Money = [a, b, b].iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    #[test]
    fn test_round_to_tenths_ties_away_from_zero() {
        assert_eq!(Money::from_cents(44).round_to_tenths().cents(), 40);
        assert_eq!(Money::from_cents(45).round_to_tenths().cents(), 50);
        assert_eq!(Money::from_cents(-44).round_to_tenths().cents(), -40);
        assert_eq!(Money::from_cents(-45).round_to_tenths().cents(), -50);
        assert_eq!(Money::zero().round_to_tenths().cents(), 0);
    }

    #[test]
    fn test_ratio_rounding() {
        // 21100 / 3 = 7033.33 cents → 70.3
        assert_eq!(Money::from_ratio_rounded(21_100, 3).cents(), 7030);
        // 265_100_000 / 30_000 = 8836.67 cents → 88.4
        assert_eq!(Money::from_ratio_rounded(265_100_000, 30_000).cents(), 8840);
        // -10 / 3 = -3.33 cents → -0.0
        assert_eq!(Money::from_ratio_rounded(-10, 3).cents(), 0);
    }

    #[test]
    fn test_tip_boundaries() {
        let rate = TipRate::from_bps(1000);
        assert_eq!(Money::from_cents(12340).calculate_tip(rate).cents(), 1230);
        assert_eq!(Money::from_cents(12350).calculate_tip(rate).cents(), 1240);
        assert_eq!(Money::from_cents(10000).calculate_tip(TipRate::zero()).cents(), 0);
    }

    #[test]
    fn test_with_tip_ratio() {
        // 51.00 with 10% on top = 56.1 exactly
        let (n, d) = Money::with_tip_ratio(5100, 1, TipRate::from_bps(1000));
        assert_eq!(Money::from_ratio_rounded(n, d).cents(), 5610);
    }
}
