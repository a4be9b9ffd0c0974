use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::{DebtId, DebtSnapshot};

/// payoff allocation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoffStrategy {
    /// highest interest rate first
    Avalanche,
    /// smallest balance first
    Snowball,
}

impl fmt::Display for PayoffStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayoffStrategy::Avalanche => write!(f, "avalanche"),
            PayoffStrategy::Snowball => write!(f, "snowball"),
        }
    }
}

/// ordering view over a debt, implemented by snapshots and live accounts
pub trait Allocatable {
    fn debt_id(&self) -> DebtId;
    fn current_balance(&self) -> Money;
    fn annual_rate(&self) -> Rate;
}

impl Allocatable for DebtSnapshot {
    fn debt_id(&self) -> DebtId {
        self.id
    }

    fn current_balance(&self) -> Money {
        self.balance
    }

    fn annual_rate(&self) -> Rate {
        self.interest_rate
    }
}

impl<T: Allocatable> Allocatable for &T {
    fn debt_id(&self) -> DebtId {
        (*self).debt_id()
    }

    fn current_balance(&self) -> Money {
        (*self).current_balance()
    }

    fn annual_rate(&self) -> Rate {
        (*self).annual_rate()
    }
}

impl PayoffStrategy {
    /// total order over debts; the first debt receives the extra payment.
    /// keys are validated finite decimals, so the comparator never panics.
    pub fn compare<T: Allocatable>(&self, a: &T, b: &T) -> Ordering {
        match self {
            PayoffStrategy::Avalanche => b
                .annual_rate()
                .cmp(&a.annual_rate())
                .then_with(|| b.current_balance().cmp(&a.current_balance()))
                .then_with(|| a.debt_id().cmp(&b.debt_id())),
            PayoffStrategy::Snowball => a
                .current_balance()
                .cmp(&b.current_balance())
                .then_with(|| b.annual_rate().cmp(&a.annual_rate()))
                .then_with(|| a.debt_id().cmp(&b.debt_id())),
        }
    }

    /// deterministic allocation order over the active debts
    pub fn order<T: Allocatable>(&self, active_debts: &[T]) -> Vec<DebtId> {
        let mut indices: Vec<usize> = (0..active_debts.len()).collect();
        indices.sort_by(|&i, &j| self.compare(&active_debts[i], &active_debts[j]));
        indices
            .into_iter()
            .map(|i| active_debts[i].debt_id())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn debt(n: u128, balance: i64, rate_pct: &str) -> DebtSnapshot {
        DebtSnapshot::new(
            Uuid::from_u128(n),
            Money::from_major(balance),
            Rate::from_percentage(rate_pct.parse().unwrap()),
            Money::from_major(25),
        )
    }

    #[test]
    fn test_avalanche_orders_by_rate_descending() {
        let debts = [debt(1, 1000, "10"), debt(2, 1000, "20"), debt(3, 1000, "15")];
        let order = PayoffStrategy::Avalanche.order(&debts);
        assert_eq!(order, vec![Uuid::from_u128(2), Uuid::from_u128(3), Uuid::from_u128(1)]);
    }

    #[test]
    fn test_avalanche_rate_tie_breaks_on_balance_then_id() {
        let debts = [debt(2, 500, "18"), debt(1, 500, "18"), debt(3, 900, "18")];
        let order = PayoffStrategy::Avalanche.order(&debts);
        // same rate: larger balance first, then smaller id
        assert_eq!(order, vec![Uuid::from_u128(3), Uuid::from_u128(1), Uuid::from_u128(2)]);
    }

    #[test]
    fn test_snowball_orders_by_balance_ascending() {
        let debts = [debt(1, 2000, "10"), debt(2, 500, "22"), debt(3, 1200, "15")];
        let order = PayoffStrategy::Snowball.order(&debts);
        assert_eq!(order, vec![Uuid::from_u128(2), Uuid::from_u128(3), Uuid::from_u128(1)]);
    }

    #[test]
    fn test_snowball_balance_tie_breaks_on_rate_then_id() {
        let debts = [debt(2, 800, "12"), debt(1, 800, "19"), debt(3, 800, "12")];
        let order = PayoffStrategy::Snowball.order(&debts);
        // same balance: higher rate first, then smaller id
        assert_eq!(order, vec![Uuid::from_u128(1), Uuid::from_u128(2), Uuid::from_u128(3)]);
    }

    #[test]
    fn test_order_is_total_on_identical_keys() {
        let debts = [debt(9, 100, "5"), debt(4, 100, "5"), debt(6, 100, "5")];
        let order = PayoffStrategy::Avalanche.order(&debts);
        assert_eq!(order, vec![Uuid::from_u128(4), Uuid::from_u128(6), Uuid::from_u128(9)]);
        assert_eq!(order, PayoffStrategy::Avalanche.order(&debts));
    }

    #[test]
    fn test_zero_rate_sorts_last_under_avalanche() {
        let debts = [debt(1, 100, "0"), debt(2, 100, "0.01")];
        let order = PayoffStrategy::Avalanche.order(&debts);
        assert_eq!(order[0], Uuid::from_u128(2));
    }

    #[test]
    fn test_serde_lowercase_names() {
        assert_eq!(serde_json::to_string(&PayoffStrategy::Avalanche).unwrap(), "\"avalanche\"");
        assert_eq!(PayoffStrategy::Snowball.to_string(), "snowball");
    }
}
