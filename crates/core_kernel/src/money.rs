//! Money types with precise decimal arithmetic
//!
//! All billing figures are dollar amounts held as `rust_decimal::Decimal`.
//! Intermediate products keep full precision; figures are brought to whole
//! cents with [`round_to_cent`] only at the points where a billing rule says so.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};
use thiserror::Error;

/// Number of fractional digits in a reported amount
pub const CENT_PLACES: u32 = 2;

/// Rounds an amount to whole cents, halves rounded up (away from zero)
///
/// `12.345` becomes `12.35`, `4994.0625` becomes `4994.06`.
pub fn round_to_cent(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CENT_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount in dollars
///
/// Equality and ordering compare the numeric value, so `500` and `500.00`
/// are the same amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// The zero amount
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Creates a new Money value without rounding
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates Money from an integer amount of cents
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, CENT_PLACES))
    }

    /// Parses an amount such as `"95125.00"`
    pub fn parse(text: &str) -> Result<Self, MoneyError> {
        text.trim()
            .parse::<Decimal>()
            .map(Self)
            .map_err(|_| MoneyError::InvalidAmount(text.to_string()))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Rounds to whole cents using round-half-up
    pub fn round_to_cent(&self) -> Self {
        Self(round_to_cent(self.0))
    }

    /// Multiplies by a scalar (e.g., a quantity or a factor)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self(self.0 * factor)
    }

    /// Checked multiplication, failing on decimal overflow
    pub fn checked_multiply(&self, factor: Decimal) -> Result<Self, MoneyError> {
        self.0.checked_mul(factor).map(Self).ok_or(MoneyError::Overflow)
    }

    /// Checked addition, failing on decimal overflow
    pub fn checked_add(&self, other: &Money) -> Result<Self, MoneyError> {
        self.0.checked_add(other.0).map(Self).ok_or(MoneyError::Overflow)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + *m)
    }
}

/// Represents a percentage rate (e.g., a sales tax rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    /// The rate as a decimal (e.g., 0.0525 for 5.25%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal value (e.g., 0.05 for 5%)
    pub const fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g., 5.25 for 5.25%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }

    /// Applies this rate to a money amount, unrounded
    pub fn apply(&self, money: &Money) -> Money {
        money.multiply(self.value)
    }

    /// Applies this rate and rounds the result to whole cents
    pub fn apply_rounded(&self, money: &Money) -> Money {
        self.apply(money).round_to_cent()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_to_cent(dec!(4994.0625)), dec!(4994.06));
        assert_eq!(round_to_cent(dec!(0.125)), dec!(0.13));
        assert_eq!(round_to_cent(dec!(0.135)), dec!(0.14));
        assert_eq!(round_to_cent(dec!(35.75)), dec!(35.75));
    }

    #[test]
    fn test_money_from_cents() {
        let m = Money::from_cents(10050);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(100.00));
        let b = Money::new(dec!(50.00));

        assert_eq!((a + b).amount(), dec!(150.00));
        assert_eq!((a - b).amount(), dec!(50.00));
        assert_eq!((a * dec!(3)).amount(), dec!(300.00));
    }

    #[test]
    fn test_money_sum() {
        let parts = vec![Money::from_cents(1), Money::from_cents(2), Money::from_cents(3)];
        let total: Money = parts.iter().sum();
        assert_eq!(total, Money::from_cents(6));
    }

    #[test]
    fn test_money_display_uses_two_places() {
        assert_eq!(Money::new(dec!(1500)).to_string(), "$1500.00");
        assert_eq!(Money::new(dec!(35.75)).to_string(), "$35.75");
    }

    #[test]
    fn test_money_parse_rejects_garbage() {
        assert_eq!(Money::parse("95125.00").unwrap(), Money::new(dec!(95125)));
        assert!(matches!(Money::parse("n/a"), Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_rate_application() {
        let rate = Rate::from_percentage(dec!(5.25));
        let price = Money::new(dec!(95125.00));

        assert_eq!(rate.apply(&price).amount(), dec!(4994.0625));
        assert_eq!(rate.apply_rounded(&price).amount(), dec!(4994.06));
        assert_eq!(rate.to_string(), "5.25%");
    }
}
