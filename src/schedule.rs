use chrono::{Datelike, Months, NaiveDate};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{DebtId, DebtSnapshot};

/// day of the month payments fall due
pub const DEFAULT_DUE_DAY: u32 = 15;

/// one scheduled minimum payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledPayment {
    pub debt_id: DebtId,
    pub amount: Money,
    pub due_date: NaiveDate,
    pub is_minimum: bool,
}

/// all payments due in one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSchedule {
    /// YYYY-MM
    pub month: String,
    pub total_amount: Money,
    pub payments: Vec<ScheduledPayment>,
}

/// builds minimum-payment schedules from the current debt list
#[derive(Debug, Clone, Copy)]
pub struct PaymentScheduler {
    due_day: u32,
}

impl Default for PaymentScheduler {
    fn default() -> Self {
        Self {
            due_day: DEFAULT_DUE_DAY,
        }
    }
}

impl PaymentScheduler {
    pub fn new(due_day: u32) -> Self {
        Self { due_day }
    }

    // due day clamped to the 28th so every month has it
    fn due_date_in(&self, year: i32, month: u32, fallback: NaiveDate) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, self.due_day.min(28)).unwrap_or(fallback)
    }

    /// minimum payments due this month for every debt still carrying a balance
    pub fn monthly_schedule(
        &self,
        debts: &[DebtSnapshot],
        time: &SafeTimeProvider,
    ) -> Vec<ScheduledPayment> {
        let today = time.now().date_naive();
        let due_date = self.due_date_in(today.year(), today.month(), today);

        debts
            .iter()
            .filter(|d| d.balance.is_positive())
            .map(|d| ScheduledPayment {
                debt_id: d.id,
                amount: d.min_payment,
                due_date,
                is_minimum: true,
            })
            .collect()
    }

    /// schedules for the current month and the months that follow
    pub fn future_schedules(
        &self,
        debts: &[DebtSnapshot],
        months_ahead: u32,
        time: &SafeTimeProvider,
    ) -> Vec<MonthSchedule> {
        let today = time.now().date_naive();

        (0..months_ahead)
            .map(|offset| {
                let shifted = today
                    .checked_add_months(Months::new(offset))
                    .unwrap_or(today);
                let due_date = self.due_date_in(shifted.year(), shifted.month(), shifted);

                let payments: Vec<ScheduledPayment> = debts
                    .iter()
                    .filter(|d| d.balance.is_positive())
                    .map(|d| ScheduledPayment {
                        debt_id: d.id,
                        amount: d.min_payment,
                        due_date,
                        is_minimum: true,
                    })
                    .collect();

                let total_amount = payments
                    .iter()
                    .map(|p| p.amount)
                    .fold(Money::ZERO, |acc, x| acc + x);

                MonthSchedule {
                    month: format!("{:04}-{:02}", shifted.year(), shifted.month()),
                    total_amount,
                    payments,
                }
            })
            .collect()
    }

    /// next due date, rolling into the following month once the due day has passed
    pub fn next_due_date(&self, time: &SafeTimeProvider) -> NaiveDate {
        let today = time.now().date_naive();

        let (year, month) = if today.day() > self.due_day {
            if today.month() == 12 {
                (today.year() + 1, 1)
            } else {
                (today.year(), today.month() + 1)
            }
        } else {
            (today.year(), today.month())
        };

        self.due_date_in(year, month, today)
    }
}
