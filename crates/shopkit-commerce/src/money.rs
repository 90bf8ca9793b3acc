//! Money type for representing prices and totals.
//!
//! Amounts are integer minor units (cents for USD), so line totals and cart
//! totals are exact sums with no floating-point drift.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

/// Largest magnitude of minor units an `i64` amount can hold, as `f64`.
const MAX_MINOR_UNITS: f64 = 9_223_372_036_854_775_808.0;

/// Supported currencies.
///
/// Deserializes from a currency code in any case ("USD", "eur").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    RUB,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::RUB => "RUB",
        }
    }

    /// Number of decimal places in the minor unit.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "RUB" => Some(Currency::RUB),
            _ => None,
        }
    }

    fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Currency::from_code(&code)
            .ok_or_else(|| de::Error::custom(format!("unknown currency code: {}", code)))
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounded to the minor unit.
    ///
    /// Returns None for NaN, infinities, and amounts outside the `i64` range.
    ///
    /// ```
    /// use shopkit_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(49.99, Currency::USD).unwrap();
    /// assert_eq!(price.amount_cents, 4999);
    /// assert!(Money::from_decimal(f64::NAN, Currency::USD).is_none());
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Option<Self> {
        let scaled = (amount * currency.minor_per_major() as f64).round();
        if !scaled.is_finite() || scaled.abs() >= MAX_MINOR_UNITS {
            return None;
        }
        Some(Self::new(scaled as i64, currency))
    }

    /// Create a Money value from whole major units (e.g., dollars).
    ///
    /// Returns None on overflow.
    pub fn from_major(amount: i64, currency: Currency) -> Option<Self> {
        amount
            .checked_mul(currency.minor_per_major())
            .map(|amount_cents| Self::new(amount_cents, currency))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Format as a plain decimal with trailing fractional zeros dropped
    /// ("500", "49.9", "0.99"). This is the price format of the text reports.
    pub fn display_plain(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        let (sign, whole, frac) = self.split();
        if frac == 0 {
            return format!("{sign}{whole}");
        }
        let digits = format!("{frac:0places$}");
        format!("{sign}{whole}.{}", digits.trim_end_matches('0'))
    }

    fn split(&self) -> (&'static str, u64, u64) {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        let unit = self.currency.minor_per_major() as u64;
        (sign, abs / unit, abs % unit)
    }

    /// Add another Money value, returning None on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values, returning None on mismatch or overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}
