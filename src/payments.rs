use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::{DebtError, Result};
use crate::events::{Event, EventStore};
use crate::types::{DebtId, DebtSnapshot};

/// an actual payment applied against a live debt balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedPayment {
    pub debt_id: DebtId,
    pub amount: Money,
    pub date: NaiveDate,
    pub plan_id: Option<Uuid>,
    pub updated_balance: Money,
}

/// apply one real payment to a debt. the updated balance is handed back for
/// the caller's store to persist; nothing is written here.
pub fn record_payment(
    debt: &DebtSnapshot,
    amount: Money,
    date: NaiveDate,
    plan_id: Option<Uuid>,
    time: &SafeTimeProvider,
    events: &mut EventStore,
) -> Result<RecordedPayment> {
    if !amount.is_positive() || amount > debt.balance {
        return Err(DebtError::InvalidAmount { amount });
    }

    let today = time.now().date_naive();
    if date > today {
        return Err(DebtError::InvalidDate {
            message: format!("payment date {} is after {}", date, today),
        });
    }

    let updated_balance = (debt.balance - amount).max(Money::ZERO);

    events.emit(Event::PaymentRecorded {
        debt_id: debt.id,
        amount,
        date,
        updated_balance,
    });

    Ok(RecordedPayment {
        debt_id: debt.id,
        amount,
        date,
        plan_id,
        updated_balance,
    })
}

/// a point on a debt's balance curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub balance: Money,
}

/// rebuild the balance curve implied by a starting balance and the recorded
/// payments, oldest first, clamped at zero
pub fn balance_history(starting_balance: Money, payments: &[RecordedPayment]) -> Vec<BalancePoint> {
    let mut ordered: Vec<&RecordedPayment> = payments.iter().collect();
    ordered.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.amount.cmp(&b.amount)));

    let mut balance = starting_balance;
    ordered
        .into_iter()
        .map(|payment| {
            balance = (balance - payment.amount).max(Money::ZERO);
            BalancePoint {
                date: payment.date,
                balance,
            }
        })
        .collect()
}
