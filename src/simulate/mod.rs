pub mod plan;
mod state;

use chrono::NaiveDate;

use crate::config::SimulationConfig;
use crate::decimal::Money;
use crate::errors::{DebtError, Result};
use crate::events::{Event, EventStore};
use crate::strategy::PayoffStrategy;
use crate::types::DebtSnapshot;

use plan::PlanBuilder;
use state::DebtAccount;

pub use plan::{DebtPaymentShare, DebtSummary, MonthlyPayment, PayoffPlan};

/// month-by-month payoff simulator
#[derive(Debug, Clone, Copy, Default)]
pub struct PayoffSimulator {
    config: SimulationConfig,
}

impl PayoffSimulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// simulate the payoff of `debts` under `strategy`, spending `monthly_amount`
    /// each month starting from `start_date`
    pub fn run(
        &self,
        debts: &[DebtSnapshot],
        strategy: PayoffStrategy,
        monthly_amount: Money,
        start_date: NaiveDate,
        events: &mut EventStore,
    ) -> Result<PayoffPlan> {
        validate(debts, monthly_amount)?;

        events.emit(Event::SimulationStarted {
            strategy,
            debt_count: debts.len(),
            monthly_amount,
            start_date,
        });

        let mut accounts: Vec<DebtAccount> = debts.iter().map(DebtAccount::open).collect();
        let mut builder = PlanBuilder::new(strategy, monthly_amount, start_date);

        // debts that arrive already at zero were never active
        for account in accounts.iter_mut() {
            account.settle(0);
        }

        if accounts.iter().all(|a| a.retired_month.is_some()) {
            let plan = builder.build(&accounts);
            events.emit(Event::SimulationCompleted {
                strategy,
                months: 0,
                total_interest: plan.total_interest,
            });
            return Ok(plan);
        }

        for month in 1..=self.config.max_months {
            // 1. interest accrual on every active debt
            let mut interest_accrued = Money::ZERO;
            for account in accounts.iter_mut().filter(|a| a.is_active()) {
                interest_accrued += account.accrue();
            }

            // 2. minimum payments; the up-front funds check keeps this from underflowing
            let mut remaining = monthly_amount;
            let mut shares: Vec<DebtPaymentShare> = Vec::new();
            for account in accounts.iter_mut().filter(|a| a.is_active()) {
                let minimum = account.min_payment;
                let paid = account.pay(minimum);
                remaining -= paid;
                if paid.is_positive() {
                    shares.push(DebtPaymentShare {
                        debt_id: account.id,
                        amount: paid,
                    });
                }
            }

            // 3. cascade the remainder along the strategy order; retired debts are
            // excluded from the active set, so freed minimums roll forward on their own
            if remaining.is_positive() {
                let active: Vec<&DebtAccount> =
                    accounts.iter().filter(|a| a.is_active()).collect();
                let order = strategy.order(&active);

                for debt_id in order {
                    if !remaining.is_positive() {
                        break;
                    }
                    if let Some(account) = accounts
                        .iter_mut()
                        .find(|a| a.id == debt_id && a.is_active())
                    {
                        let paid = account.pay(remaining);
                        remaining -= paid;
                        if paid.is_positive() {
                            match shares.iter_mut().find(|s| s.debt_id == debt_id) {
                                Some(share) => share.amount += paid,
                                None => shares.push(DebtPaymentShare {
                                    debt_id,
                                    amount: paid,
                                }),
                            }
                        }
                    }
                }
            }

            // 4. retirement check
            for account in accounts.iter_mut() {
                if account.settle(month) {
                    events.emit(Event::DebtRetired {
                        debt_id: account.id,
                        month,
                    });
                }
            }

            // 5. record the month
            let total_balance_remaining = accounts
                .iter()
                .map(|a| a.balance)
                .fold(Money::ZERO, |acc, x| acc + x);
            builder.record_month(month, shares, interest_accrued, total_balance_remaining);

            if accounts.iter().all(|a| a.retired_month.is_some()) {
                let plan = builder.build(&accounts);
                events.emit(Event::SimulationCompleted {
                    strategy,
                    months: plan.months(),
                    total_interest: plan.total_interest,
                });
                return Ok(plan);
            }
        }

        Err(DebtError::NoConvergence {
            months: self.config.max_months,
        })
    }
}

/// calculate a payoff plan with the default configuration
pub fn calculate_payoff_plan(
    debts: &[DebtSnapshot],
    strategy: PayoffStrategy,
    monthly_amount: Money,
    start_date: NaiveDate,
) -> Result<PayoffPlan> {
    let mut events = EventStore::new();
    PayoffSimulator::default().run(debts, strategy, monthly_amount, start_date, &mut events)
}

/// entry validation, before any simulation state is built
fn validate(debts: &[DebtSnapshot], monthly_amount: Money) -> Result<()> {
    if debts.is_empty() {
        return Err(DebtError::NoDebts);
    }

    for debt in debts {
        debt.validate()?;
    }

    let required = debts
        .iter()
        .filter(|d| d.balance.is_positive())
        .map(|d| d.min_payment)
        .fold(Money::ZERO, |acc, x| acc + x);

    if monthly_amount < required {
        return Err(DebtError::InsufficientFunds {
            monthly: monthly_amount,
            required,
        });
    }

    Ok(())
}
