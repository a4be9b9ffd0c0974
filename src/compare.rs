use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::decimal::Money;
use crate::errors::Result;
use crate::events::EventStore;
use crate::simulate::{PayoffPlan, PayoffSimulator};
use crate::strategy::PayoffStrategy;
use crate::types::DebtSnapshot;

/// outcome of running both strategies on the same inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub avalanche: PayoffPlan,
    pub snowball: PayoffPlan,
    /// snowball interest minus avalanche interest; negative only within rounding
    pub interest_saved: Money,
    /// snowball months minus avalanche months
    pub months_saved: i32,
}

/// run both strategies on identical snapshots and report the savings
pub fn compare_strategies(
    debts: &[DebtSnapshot],
    monthly_amount: Money,
    start_date: NaiveDate,
) -> Result<StrategyComparison> {
    compare_with_config(debts, monthly_amount, start_date, SimulationConfig::default())
}

/// strategy comparison with an explicit simulation bound
pub fn compare_with_config(
    debts: &[DebtSnapshot],
    monthly_amount: Money,
    start_date: NaiveDate,
    config: SimulationConfig,
) -> Result<StrategyComparison> {
    let simulator = PayoffSimulator::new(config);
    let mut events = EventStore::new();

    let avalanche = simulator.run(
        debts,
        PayoffStrategy::Avalanche,
        monthly_amount,
        start_date,
        &mut events,
    )?;
    let snowball = simulator.run(
        debts,
        PayoffStrategy::Snowball,
        monthly_amount,
        start_date,
        &mut events,
    )?;

    let interest_saved = snowball.total_interest - avalanche.total_interest;
    let months_saved = snowball.months() as i32 - avalanche.months() as i32;

    Ok(StrategyComparison {
        avalanche,
        snowball,
        interest_saved,
        months_saved,
    })
}
