pub mod compare;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod interest;
pub mod payments;
pub mod schedule;
pub mod simulate;
pub mod strategy;
pub mod types;

// re-export key types
pub use compare::{compare_strategies, compare_with_config, StrategyComparison};
pub use config::{SimulationConfig, DEFAULT_MAX_MONTHS};
pub use decimal::{Money, Rate};
pub use errors::{DebtError, Result};
pub use events::{Event, EventStore};
pub use payments::{balance_history, record_payment, BalancePoint, RecordedPayment};
pub use schedule::{MonthSchedule, PaymentScheduler, ScheduledPayment};
pub use simulate::{
    calculate_payoff_plan, DebtPaymentShare, DebtSummary, MonthlyPayment, PayoffPlan,
    PayoffSimulator,
};
pub use strategy::{Allocatable, PayoffStrategy};
pub use types::{DebtId, DebtSnapshot};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
