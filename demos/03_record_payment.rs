/// record real payments against a debt and rebuild its balance history
use debt_payoff_rs::{
    balance_history, record_payment, DebtSnapshot, EventStore, Money, Rate, RecordedPayment,
    SafeTimeProvider, TimeSource, Uuid,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let starting_balance = Money::from_decimal(dec!(1000));
    let mut debt = DebtSnapshot::new(
        Uuid::new_v4(),
        starting_balance,
        Rate::from_percentage(dec!(18)),
        Money::from_decimal(dec!(25)),
    );

    let time = SafeTimeProvider::new(TimeSource::System);
    let mut events = EventStore::new();
    let today = time.now().date_naive();

    let mut payments: Vec<RecordedPayment> = Vec::new();
    for (amount, days_ago) in [(100, 60), (100, 30), (250, 0)] {
        let date = today - chrono::Duration::days(days_ago);
        let payment = record_payment(&debt, Money::from_major(amount), date, None, &time, &mut events)?;
        println!(
            "paid {} on {}, balance now {}",
            payment.amount, payment.date, payment.updated_balance,
        );
        // the caller owns persistence of the returned balance
        debt.balance = payment.updated_balance;
        payments.push(payment);
    }

    println!("balance history:");
    for point in balance_history(starting_balance, &payments) {
        println!("  {}: {}", point.date, point.balance);
    }

    Ok(())
}
