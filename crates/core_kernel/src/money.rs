//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.
//! Premiums under the OGPO scheme are expressed in whole tenge, so the type
//! carries a single terminal rounding step alongside exact intermediate math.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use thiserror::Error;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Kazakhstani tenge - the OGPO scheme's currency
    KZT,
    USD,
    EUR,
    RUB,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::KZT => "₸",
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::RUB => "₽",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::KZT => "KZT",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::RUB => "RUB",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Coefficient must be strictly positive, got {0}")]
    NonPositiveCoefficient(Decimal),
}

/// A monetary amount with associated currency
///
/// Money uses rust_decimal for precise arithmetic without floating-point
/// errors. Amounts are stored with 4 decimal places internally so a chain of
/// coefficient multiplications never loses precision before the final round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(4),
            currency,
        }
    }

    /// Creates Money from a whole number of major units (e.g., whole tenge)
    pub fn from_major(units: i64, currency: Currency) -> Self {
        Self {
            amount: Decimal::new(units, 0),
            currency,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Rounds to a whole number of major units, half away from zero
    ///
    /// This is the terminal rounding step for OGPO premiums: the exact
    /// decimal product is carried through the calculation and collapsed to
    /// whole tenge exactly once.
    pub fn round_to_unit(&self) -> Self {
        Self {
            amount: self
                .amount
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
            currency: self.currency,
        }
    }

    /// Returns the amount as whole major units, rounding half away from zero
    pub fn to_whole_units(&self) -> i64 {
        self.round_to_unit()
            .amount
            .try_into()
            .unwrap_or(i64::MAX)
    }

    /// Checked addition that returns an error on currency mismatch
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(Self::new(self.amount + other.amount, self.currency))
    }

    /// Checked subtraction that returns an error on currency mismatch
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(Self::new(self.amount - other.amount, self.currency))
    }

    /// Multiplies by a scalar (e.g., a rating coefficient)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.amount * factor, self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.currency.decimal_places();
        write!(
            f,
            "{} {:.dp$}",
            self.currency.symbol(),
            self.amount,
            dp = dp as usize
        )
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(&other)
            .expect("Currency mismatch in Money::add")
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(&other)
            .expect("Currency mismatch in Money::sub")
    }
}

/// A multiplicative rating coefficient
///
/// Regulatory coefficient tables only ever contain strictly positive
/// multipliers, so the invariant is enforced at construction. A coefficient
/// of 1.0 is the neutral element (an unrated factor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Coefficient(Decimal);

impl Coefficient {
    /// Creates a coefficient, rejecting zero and negative values
    pub fn new(value: Decimal) -> Result<Self, MoneyError> {
        if value <= Decimal::ZERO {
            return Err(MoneyError::NonPositiveCoefficient(value));
        }
        Ok(Self(value))
    }

    /// The neutral coefficient (factor not rated)
    pub fn unit() -> Self {
        Self(dec!(1.0))
    }

    /// Returns the coefficient as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Applies this coefficient to a money amount
    pub fn apply(&self, money: &Money) -> Money {
        money.multiply(self.0)
    }
}

impl TryFrom<Decimal> for Coefficient {
    type Error = MoneyError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Coefficient> for Decimal {
    fn from(c: Coefficient) -> Decimal {
        c.0
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(1983), Currency::KZT);
        assert_eq!(m.amount(), dec!(1983));
        assert_eq!(m.currency(), Currency::KZT);
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(100.00), Currency::KZT);
        let b = Money::new(dec!(50.00), Currency::KZT);

        assert_eq!((a + b).amount(), dec!(150.00));
        assert_eq!((a - b).amount(), dec!(50.00));
    }

    #[test]
    fn test_currency_mismatch() {
        let kzt = Money::new(dec!(100.00), Currency::KZT);
        let usd = Money::new(dec!(100.00), Currency::USD);

        let result = kzt.checked_add(&usd);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn test_round_to_unit_half_away_from_zero() {
        let m = Money::new(dec!(5869.68), Currency::KZT);
        assert_eq!(m.round_to_unit().amount(), dec!(5870));

        let exact_half = Money::new(dec!(100.5), Currency::KZT);
        assert_eq!(exact_half.round_to_unit().amount(), dec!(101));

        let below_half = Money::new(dec!(100.4999), Currency::KZT);
        assert_eq!(below_half.round_to_unit().amount(), dec!(100));
    }

    #[test]
    fn test_to_whole_units() {
        let m = Money::new(dec!(14380.716), Currency::KZT);
        assert_eq!(m.to_whole_units(), 14381);
    }

    #[test]
    fn test_coefficient_rejects_non_positive() {
        assert!(Coefficient::new(dec!(0)).is_err());
        assert!(Coefficient::new(dec!(-1.1)).is_err());
        assert!(Coefficient::new(dec!(0.2)).is_ok());
    }

    #[test]
    fn test_coefficient_application() {
        let coeff = Coefficient::new(dec!(2.96)).unwrap();
        let base = Money::new(dec!(1983), Currency::KZT);

        assert_eq!(coeff.apply(&base).amount(), dec!(5869.68));
    }

    #[test]
    fn test_unit_coefficient_is_identity() {
        let base = Money::new(dec!(3166), Currency::KZT);
        assert_eq!(Coefficient::unit().apply(&base), base);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn money_multiplication_preserves_sign(
            amount in 1i64..1_000_000i64,
            factor_hundredths in 1i64..1_000i64
        ) {
            let money = Money::from_major(amount, Currency::KZT);
            let factor = Decimal::new(factor_hundredths, 2);

            prop_assert!(money.multiply(factor).is_positive());
        }

        #[test]
        fn round_to_unit_is_idempotent(amount_cents in -1_000_000_000i64..1_000_000_000i64) {
            let money = Money::new(Decimal::new(amount_cents, 2), Currency::KZT);
            let once = money.round_to_unit();

            prop_assert_eq!(once, once.round_to_unit());
        }
    }
}
