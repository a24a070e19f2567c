//! # Money Module
//!
//! Monetary values and discount percentages for Ovro POS.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Poisha                                           │
//! │    ৳1 = 100 poisha, all arithmetic is exact i64 math                    │
//! │    Rounding happens in exactly one place (discount_amount)              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ovro_core::money::{DiscountRate, Money};
//!
//! let subtotal = Money::from_taka(1100);
//! let discount = subtotal.discount_amount(DiscountRate::from_percentage(10.0));
//! assert_eq!(discount, Money::from_taka(110));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in poisha, the smallest currency unit (৳1 = 100 poisha).
///
/// ## Design Decisions
/// - **i64 (signed)**: intermediate results (e.g. a refundable margin) may
///   go negative even though catalog prices never do
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from poisha (the smallest currency unit).
    #[inline]
    pub const fn from_poisha(poisha: i64) -> Self {
        Money(poisha)
    }

    /// Creates a Money value from whole taka.
    ///
    /// Catalog prices in the workshop are whole-taka amounts, so this is
    /// the usual constructor for seeded data and tests.
    #[inline]
    pub const fn from_taka(taka: i64) -> Self {
        Money(taka * 100)
    }

    /// Returns the value in poisha.
    #[inline]
    pub const fn poisha(&self) -> i64 {
        self.0
    }

    /// Returns the whole-taka portion.
    #[inline]
    pub const fn taka_part(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the poisha portion (always 0-99).
    #[inline]
    pub const fn poisha_part(&self) -> i64 {
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
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

    /// Multiplies money by a quantity (line total = unit price × quantity).
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Calculates the discount amount for a percentage rate.
    ///
    /// ## Implementation
    /// Integer math with rounding: `(poisha * bps + 5000) / 10000`.
    /// i128 intermediates prevent overflow on large subtotals.
    ///
    /// ## Example
    /// ```rust
    /// use ovro_core::money::{DiscountRate, Money};
    ///
    /// let subtotal = Money::from_taka(1100);
    /// let rate = DiscountRate::from_percentage(10.0);
    /// assert_eq!(subtotal.discount_amount(rate), Money::from_taka(110));
    /// ```
    pub fn discount_amount(&self, rate: DiscountRate) -> Money {
        let amount = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_poisha(amount as i64)
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// A discount percentage in basis points (1 bps = 0.01%; 1000 bps = 10%).
///
/// ## Range Policy
/// Constructors clamp to `[0, 10000]` (0% to 100%). The cart subsystem has
/// no fatal error path: an out-of-range percentage entered in the UI
/// degrades to the nearest boundary instead of rejecting the checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

/// 100% expressed in basis points.
const MAX_BPS: u32 = 10_000;

impl DiscountRate {
    /// Creates a discount rate from basis points, clamped to [0, 10000].
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        if bps > MAX_BPS {
            DiscountRate(MAX_BPS)
        } else {
            DiscountRate(bps)
        }
    }

    /// Creates a discount rate from a percentage, clamped to [0%, 100%].
    ///
    /// Non-finite or negative input maps to 0% (malformed numeric input is
    /// treated as zero throughout this subsystem).
    pub fn from_percentage(pct: f64) -> Self {
        if !pct.is_finite() || pct <= 0.0 {
            return DiscountRate(0);
        }
        DiscountRate::from_bps((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// For debugging and receipt text. The webview handles localized display.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}৳{}.{:02}", sign, self.taka_part().abs(), self.poisha_part())
    }
}

/// Default money is zero.
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

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_taka_and_parts() {
        let money = Money::from_taka(550);
        assert_eq!(money.poisha(), 55000);
        assert_eq!(money.taka_part(), 550);
        assert_eq!(money.poisha_part(), 0);

        let odd = Money::from_poisha(1099);
        assert_eq!(odd.taka_part(), 10);
        assert_eq!(odd.poisha_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_poisha(1099)), "৳10.99");
        assert_eq!(format!("{}", Money::from_taka(550)), "৳550.00");
        assert_eq!(format!("{}", Money::from_poisha(-550)), "-৳5.50");
        assert_eq!(format!("{}", Money::zero()), "৳0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_poisha(1000);
        let b = Money::from_poisha(500);

        assert_eq!((a + b).poisha(), 1500);
        assert_eq!((a - b).poisha(), 500);
        assert_eq!((a * 3).poisha(), 3000);
        assert_eq!(a.multiply_quantity(2).poisha(), 2000);
    }

    #[test]
    fn test_discount_amount_exact() {
        // ৳1100 at 10% = ৳110, exactly
        let subtotal = Money::from_taka(1100);
        let rate = DiscountRate::from_percentage(10.0);
        assert_eq!(subtotal.discount_amount(rate), Money::from_taka(110));
    }

    #[test]
    fn test_discount_amount_rounds() {
        // ৳10.00 at 8.25% = 82.5 poisha, rounds to 83
        let amount = Money::from_taka(10);
        let rate = DiscountRate::from_bps(825);
        assert_eq!(amount.discount_amount(rate).poisha(), 83);
    }

    #[test]
    fn test_discount_rate_clamps() {
        assert_eq!(DiscountRate::from_bps(25_000).bps(), 10_000);
        assert_eq!(DiscountRate::from_percentage(150.0).bps(), 10_000);
        assert_eq!(DiscountRate::from_percentage(-5.0).bps(), 0);
        assert_eq!(DiscountRate::from_percentage(f64::NAN).bps(), 0);
        assert_eq!(DiscountRate::from_percentage(10.0).bps(), 1000);
    }

    #[test]
    fn test_discount_is_pure() {
        let subtotal = Money::from_taka(1100);
        let rate = DiscountRate::from_percentage(10.0);
        assert_eq!(
            subtotal.discount_amount(rate),
            subtotal.discount_amount(rate)
        );
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Money::from_poisha(100).is_positive());
        assert!(Money::from_poisha(-100).is_negative());
        assert_eq!(Money::from_poisha(-550).abs().poisha(), 550);
    }
}
