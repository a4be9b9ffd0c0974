/// build a three-card debt snapshot and print the avalanche payoff plan
use debt_payoff_rs::chrono::NaiveDate;
use debt_payoff_rs::{calculate_payoff_plan, DebtSnapshot, Money, PayoffStrategy, Rate, Uuid};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let debts = vec![
        DebtSnapshot::new(
            Uuid::new_v4(),
            Money::from_decimal(dec!(5000)),
            Rate::from_percentage(dec!(19.99)),
            Money::from_decimal(dec!(150)),
        ),
        DebtSnapshot::new(
            Uuid::new_v4(),
            Money::from_decimal(dec!(3000)),
            Rate::from_percentage(dec!(15.50)),
            Money::from_decimal(dec!(90)),
        ),
        DebtSnapshot::new(
            Uuid::new_v4(),
            Money::from_decimal(dec!(2000)),
            Rate::from_percentage(dec!(22.00)),
            Money::from_decimal(dec!(75)),
        ),
    ];

    let start = NaiveDate::from_ymd_opt(2026, 1, 1).ok_or("bad start date")?;
    let plan = calculate_payoff_plan(&debts, PayoffStrategy::Avalanche, Money::from_major(500), start)?;

    println!(
        "{} debts paid off in {} months ({}), {} total interest",
        plan.debt_summaries.len(),
        plan.months(),
        plan.payoff_date,
        plan.total_interest,
    );
    println!("{}", plan.to_json_pretty()?);

    Ok(())
}
