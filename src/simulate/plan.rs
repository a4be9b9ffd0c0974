use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::strategy::PayoffStrategy;
use crate::types::DebtId;

use super::state::DebtAccount;

/// one debt's share of a month's budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPaymentShare {
    pub debt_id: DebtId,
    pub amount: Money,
}

/// one simulated month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPayment {
    /// 1-based month number
    pub month: u32,
    pub date: NaiveDate,
    /// every debt that received a nonzero payment, amount descending then id ascending
    pub payments: Vec<DebtPaymentShare>,
    pub total_paid: Money,
    /// sum of all balances after this month's payments
    pub total_balance_remaining: Money,
}

/// per-debt outcome of a completed plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtSummary {
    pub debt_id: DebtId,
    /// month the balance first reached zero
    pub payoff_month: u32,
    pub interest_paid: Money,
}

/// complete payoff plan, assembled once the simulation terminates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffPlan {
    pub strategy: PayoffStrategy,
    pub monthly_amount: Money,
    pub start_date: NaiveDate,
    pub payoff_date: NaiveDate,
    pub total_interest: Money,
    pub monthly_breakdown: Vec<MonthlyPayment>,
    pub debt_summaries: Vec<DebtSummary>,
}

impl PayoffPlan {
    pub fn months(&self) -> u32 {
        self.monthly_breakdown.len() as u32
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// restore from a json string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// accumulates simulator output into the externally consumed plan
pub(crate) struct PlanBuilder {
    strategy: PayoffStrategy,
    monthly_amount: Money,
    start_date: NaiveDate,
    months: Vec<MonthlyPayment>,
    total_interest: Money,
}

impl PlanBuilder {
    pub(crate) fn new(strategy: PayoffStrategy, monthly_amount: Money, start_date: NaiveDate) -> Self {
        Self {
            strategy,
            monthly_amount,
            start_date,
            months: Vec::new(),
            total_interest: Money::ZERO,
        }
    }

    /// record one simulated month
    pub(crate) fn record_month(
        &mut self,
        month: u32,
        mut payments: Vec<DebtPaymentShare>,
        interest_accrued: Money,
        total_balance_remaining: Money,
    ) {
        payments.retain(|p| p.amount.is_positive());
        payments.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| a.debt_id.cmp(&b.debt_id))
        });

        let total_paid = payments
            .iter()
            .map(|p| p.amount)
            .fold(Money::ZERO, |acc, x| acc + x);

        self.total_interest += interest_accrued;
        self.months.push(MonthlyPayment {
            month,
            date: add_months(self.start_date, month),
            payments,
            total_paid,
            total_balance_remaining,
        });
    }

    /// assemble the plan from the terminal account state
    pub(crate) fn build(self, accounts: &[DebtAccount]) -> PayoffPlan {
        let payoff_date = add_months(self.start_date, self.months.len() as u32);

        let debt_summaries = accounts
            .iter()
            .map(|account| DebtSummary {
                debt_id: account.id,
                payoff_month: account.retired_month.unwrap_or(0),
                interest_paid: account.interest_accrued,
            })
            .collect();

        PayoffPlan {
            strategy: self.strategy,
            monthly_amount: self.monthly_amount,
            start_date: self.start_date,
            payoff_date,
            total_interest: self.total_interest,
            monthly_breakdown: self.months,
            debt_summaries,
        }
    }
}

/// calendar stepping for monthly periods, clamped to valid days
fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_add_months_clamps_end_of_month() {
        let jan31 = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        assert_eq!(add_months(jan31, 1), NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
        assert_eq!(add_months(jan31, 13), NaiveDate::from_ymd_opt(2027, 2, 28).unwrap());
    }

    #[test]
    fn test_record_month_orders_payments() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let mut builder = PlanBuilder::new(PayoffStrategy::Avalanche, Money::from_major(500), start);

        builder.record_month(
            1,
            vec![
                DebtPaymentShare { debt_id: Uuid::from_u128(2), amount: Money::from_major(90) },
                DebtPaymentShare { debt_id: Uuid::from_u128(3), amount: Money::from_major(260) },
                DebtPaymentShare { debt_id: Uuid::from_u128(9), amount: Money::from_major(90) },
                DebtPaymentShare { debt_id: Uuid::from_u128(1), amount: Money::ZERO },
            ],
            Money::from_major(10),
            Money::from_major(1000),
        );

        let plan = builder.build(&[]);
        let month = &plan.monthly_breakdown[0];

        // zero share dropped; descending amount, ties by ascending id
        let ids: Vec<u128> = month.payments.iter().map(|p| p.debt_id.as_u128()).collect();
        assert_eq!(ids, vec![3, 2, 9]);
        assert_eq!(month.total_paid, Money::from_major(440));
        assert_eq!(month.date, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
    }

    #[test]
    fn test_build_totals_and_payoff_date() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let mut builder = PlanBuilder::new(PayoffStrategy::Snowball, Money::from_major(100), start);
        builder.record_month(1, vec![], Money::from_str_exact("1.50").unwrap(), Money::ZERO);
        builder.record_month(2, vec![], Money::from_str_exact("0.75").unwrap(), Money::ZERO);

        let plan = builder.build(&[]);
        assert_eq!(plan.months(), 2);
        assert_eq!(plan.total_interest, Money::from_str_exact("2.25").unwrap());
        assert_eq!(plan.payoff_date, NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
    }

    #[test]
    fn test_json_round_trip() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let plan = PlanBuilder::new(PayoffStrategy::Avalanche, Money::from_major(500), start).build(&[]);

        let json = plan.to_json_pretty().unwrap();
        let restored = PayoffPlan::from_json(&json).unwrap();
        assert_eq!(plan, restored);
    }
}
