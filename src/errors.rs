use thiserror::Error;

use crate::decimal::Money;
use crate::types::DebtId;

#[derive(Error, Debug)]
pub enum DebtError {
    #[error("no debts to simulate")]
    NoDebts,

    #[error("insufficient funds: monthly amount {monthly} does not cover minimum payments {required}")]
    InsufficientFunds {
        monthly: Money,
        required: Money,
    },

    #[error("invalid debt data for {debt_id}: {reason}")]
    InvalidDebtData {
        debt_id: DebtId,
        reason: String,
    },

    #[error("invalid payment amount: {amount}")]
    InvalidAmount {
        amount: Money,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("no convergence: balances not paid off within {months} months")]
    NoConvergence {
        months: u32,
    },
}

pub type Result<T> = std::result::Result<T, DebtError>;
