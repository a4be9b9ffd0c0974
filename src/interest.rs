use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};

/// months in a compounding year
pub const MONTHS_PER_YEAR: u32 = 12;

/// one month of interest on a balance at an annual rate, rounded to cents
pub fn monthly_interest(balance: Money, annual_rate: Rate) -> Money {
    if !balance.is_positive() {
        return Money::ZERO;
    }
    Money::from_decimal(balance.as_decimal() * annual_rate.monthly_factor())
}

/// balance after one month of interest and a payment, clamped at zero
pub fn apply_payment(balance: Money, annual_rate: Rate, payment: Money) -> Money {
    (balance + monthly_interest(balance, annual_rate) - payment).max(Money::ZERO)
}

/// effective annual rate of a monthly-compounded nominal rate
pub fn effective_annual_rate(annual_rate: Rate) -> Rate {
    let base = Decimal::ONE + annual_rate.monthly_factor();
    let mut factor = Decimal::ONE;
    for _ in 0..MONTHS_PER_YEAR {
        factor *= base;
    }
    Rate::from_decimal(factor - Decimal::ONE)
}
