use crate::decimal::{Money, Rate};
use crate::interest::monthly_interest;
use crate::strategy::Allocatable;
use crate::types::{DebtId, DebtSnapshot};

/// private mutable working copy of one debt during a simulation run
#[derive(Debug, Clone)]
pub(crate) struct DebtAccount {
    pub(crate) id: DebtId,
    pub(crate) balance: Money,
    pub(crate) interest_rate: Rate,
    pub(crate) min_payment: Money,
    pub(crate) interest_accrued: Money,
    pub(crate) retired_month: Option<u32>,
}

impl DebtAccount {
    pub(crate) fn open(snapshot: &DebtSnapshot) -> Self {
        Self {
            id: snapshot.id,
            balance: snapshot.balance,
            interest_rate: snapshot.interest_rate,
            min_payment: snapshot.min_payment,
            interest_accrued: Money::ZERO,
            retired_month: None,
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.retired_month.is_none() && self.balance.is_positive()
    }

    /// accrue one month of interest; returns the amount accrued
    pub(crate) fn accrue(&mut self) -> Money {
        let interest = monthly_interest(self.balance, self.interest_rate);
        self.balance += interest;
        self.interest_accrued += interest;
        interest
    }

    /// pay up to `amount`, capped at the remaining balance; returns the amount paid
    pub(crate) fn pay(&mut self, amount: Money) -> Money {
        let payment = amount.min(self.balance);
        self.balance -= payment;
        payment
    }

    /// mark the account retired in `month` once its balance first reaches zero
    pub(crate) fn settle(&mut self, month: u32) -> bool {
        if self.retired_month.is_none() && !self.balance.is_positive() {
            self.retired_month = Some(month);
            return true;
        }
        false
    }
}

impl Allocatable for DebtAccount {
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
