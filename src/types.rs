use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::errors::{DebtError, Result};

/// unique identifier for a debt
pub type DebtId = Uuid;

/// immutable input record per debt, captured once at simulation start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtSnapshot {
    pub id: DebtId,
    pub balance: Money,
    pub interest_rate: Rate,
    pub min_payment: Money,
}

impl DebtSnapshot {
    pub fn new(id: DebtId, balance: Money, interest_rate: Rate, min_payment: Money) -> Self {
        Self {
            id,
            balance,
            interest_rate,
            min_payment,
        }
    }

    /// re-validate the invariants upstream CRUD should already enforce
    pub fn validate(&self) -> Result<()> {
        if self.balance.is_negative() {
            return Err(DebtError::InvalidDebtData {
                debt_id: self.id,
                reason: format!("negative balance {}", self.balance),
            });
        }

        if self.min_payment.is_negative() {
            return Err(DebtError::InvalidDebtData {
                debt_id: self.id,
                reason: format!("negative minimum payment {}", self.min_payment),
            });
        }

        if !self.interest_rate.is_valid_percentage() {
            return Err(DebtError::InvalidDebtData {
                debt_id: self.id,
                reason: format!("interest rate {} outside the 0-100% range", self.interest_rate),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn snapshot(balance: Money, rate: Rate, min_payment: Money) -> DebtSnapshot {
        DebtSnapshot::new(Uuid::from_u128(7), balance, rate, min_payment)
    }

    #[test]
    fn test_valid_snapshot_passes() {
        let debt = snapshot(
            Money::from_major(5000),
            Rate::from_percentage(dec!(19.99)),
            Money::from_major(150),
        );
        assert!(debt.validate().is_ok());
    }

    #[test]
    fn test_negative_balance_rejected() {
        let debt = snapshot(
            Money::from_cents(-1),
            Rate::from_percentage(dec!(10)),
            Money::ZERO,
        );
        assert!(matches!(debt.validate(), Err(DebtError::InvalidDebtData { .. })));
    }

    #[test]
    fn test_negative_minimum_rejected() {
        let debt = snapshot(
            Money::from_major(100),
            Rate::from_percentage(dec!(10)),
            Money::from_cents(-50),
        );
        assert!(matches!(debt.validate(), Err(DebtError::InvalidDebtData { .. })));
    }

    #[test]
    fn test_out_of_range_rate_rejected() {
        let debt = snapshot(
            Money::from_major(100),
            Rate::from_percentage(dec!(101)),
            Money::from_major(10),
        );
        let err = debt.validate().unwrap_err();
        assert!(err.to_string().contains("interest rate"));
    }
}
