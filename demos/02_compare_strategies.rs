/// run avalanche and snowball on the same debts and print the savings
use debt_payoff_rs::chrono::NaiveDate;
use debt_payoff_rs::{compare_strategies, DebtSnapshot, Money, Rate, Uuid};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let debts = vec![
        DebtSnapshot::new(
            Uuid::new_v4(),
            Money::from_decimal(dec!(8200)),
            Rate::from_percentage(dec!(24.99)),
            Money::from_decimal(dec!(200)),
        ),
        DebtSnapshot::new(
            Uuid::new_v4(),
            Money::from_decimal(dec!(1500)),
            Rate::from_percentage(dec!(9.75)),
            Money::from_decimal(dec!(45)),
        ),
        DebtSnapshot::new(
            Uuid::new_v4(),
            Money::from_decimal(dec!(4300)),
            Rate::from_percentage(dec!(17.25)),
            Money::from_decimal(dec!(120)),
        ),
    ];

    let start = NaiveDate::from_ymd_opt(2026, 1, 1).ok_or("bad start date")?;
    let comparison = compare_strategies(&debts, Money::from_major(700), start)?;

    println!(
        "avalanche: {} months, {} interest",
        comparison.avalanche.months(),
        comparison.avalanche.total_interest,
    );
    println!(
        "snowball:  {} months, {} interest",
        comparison.snowball.months(),
        comparison.snowball.total_interest,
    );
    println!(
        "avalanche saves {} in interest and {} months",
        comparison.interest_saved, comparison.months_saved,
    );

    Ok(())
}
