use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};
use std::str::FromStr;

/// Money type quantized to cents; every operation rounds half-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);
    pub const CENT: Money = Money(Decimal::from_parts(1, 0, 0, false, 2));

    fn quantize(d: Decimal) -> Decimal {
        d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(Self::quantize(d))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Self::quantize(Decimal::from_str(s)?)))
    }

    /// create from whole currency units (dollars, euros, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// create from integer cents
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// integer cents view for the API boundary
    pub fn as_cents(&self) -> i64 {
        (self.0 * Decimal::ONE_HUNDRED).to_i64().unwrap_or(0)
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// check if strictly positive
    pub fn is_positive(&self) -> bool {
        !self.0.is_zero() && self.0.is_sign_positive()
    }

    /// check if strictly negative
    pub fn is_negative(&self) -> bool {
        !self.0.is_zero() && self.0.is_sign_negative()
    }

    /// absolute value
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// minimum of two values
    pub fn min(self, other: Self) -> Self {
        Money(self.0.min(other.0))
    }

    /// maximum of two values
    pub fn max(self, other: Self) -> Self {
        Money(self.0.max(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(Self::quantize(self.0 + other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 = Self::quantize(self.0 + other.0);
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(Self::quantize(self.0 - other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 = Self::quantize(self.0 - other.0);
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, other: Decimal) -> Money {
        Money(Self::quantize(self.0 * other))
    }
}

impl Div<Decimal> for Money {
    type Output = Money;

    fn div(self, other: Decimal) -> Money {
        Money(Self::quantize(self.0 / other))
    }
}

/// annual interest rate stored as a fraction (0.1999 for 19.99%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from decimal fraction (e.g., 0.05 for 5%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from percentage (e.g., 19.99 for 19.99%)
    pub fn from_percentage(p: Decimal) -> Self {
        Rate(p / Decimal::ONE_HUNDRED)
    }

    /// get as decimal fraction
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// get as percentage
    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }

    /// monthly factor from annual rate
    pub fn monthly_factor(&self) -> Decimal {
        self.0 / Decimal::from(12)
    }

    /// true when the percentage lies in the valid 0-100 range
    pub fn is_valid_percentage(&self) -> bool {
        self.0 >= Decimal::ZERO && self.0 <= Decimal::ONE
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage())
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_decimal(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cent_quantization_rounds_half_up() {
        assert_eq!(Money::from_decimal(dec!(36.665)), Money::from_str_exact("36.67").unwrap());
        assert_eq!(Money::from_decimal(dec!(36.664)), Money::from_str_exact("36.66").unwrap());
        assert_eq!(Money::from_decimal(dec!(2.005)), Money::from_str_exact("2.01").unwrap());
    }

    #[test]
    fn test_cents_round_trip() {
        let m = Money::from_cents(123_456);
        assert_eq!(m, Money::from_str_exact("1234.56").unwrap());
        assert_eq!(m.as_cents(), 123_456);
        assert_eq!(Money::from_major(500).as_cents(), 50_000);
    }

    #[test]
    fn test_arithmetic_stays_on_cents() {
        let a = Money::from_str_exact("10.01").unwrap();
        let b = Money::from_str_exact("0.02").unwrap();
        assert_eq!((a + b).as_cents(), 1003);
        assert_eq!((a - b).as_cents(), 999);
        assert_eq!((a * dec!(3)).as_cents(), 3003);
        assert_eq!((a / dec!(3)).as_cents(), 334); // 3.3366... rounds to 3.34
    }

    #[test]
    fn test_sign_probes() {
        assert!(Money::from_cents(1).is_positive());
        assert!(!Money::ZERO.is_positive());
        assert!(!Money::ZERO.is_negative());
        assert!((Money::ZERO - Money::CENT).is_negative());
    }

    #[test]
    fn test_rate_percentage_round_trip() {
        let rate = Rate::from_percentage(dec!(19.99));
        assert_eq!(rate.as_decimal(), dec!(0.1999));
        assert_eq!(rate.as_percentage(), dec!(19.99));
    }

    #[test]
    fn test_monthly_factor() {
        let rate = Rate::from_percentage(dec!(18));
        assert_eq!(rate.monthly_factor(), dec!(0.015));
    }

    #[test]
    fn test_rate_validity_range() {
        assert!(Rate::ZERO.is_valid_percentage());
        assert!(Rate::from_percentage(dec!(100)).is_valid_percentage());
        assert!(!Rate::from_percentage(dec!(100.01)).is_valid_percentage());
        assert!(!Rate::from_percentage(dec!(-1)).is_valid_percentage());
    }
}
