use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::strategy::PayoffStrategy;
use crate::types::DebtId;

/// all events that can be emitted by the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    SimulationStarted {
        strategy: PayoffStrategy,
        debt_count: usize,
        monthly_amount: Money,
        start_date: NaiveDate,
    },
    DebtRetired {
        debt_id: DebtId,
        month: u32,
    },
    SimulationCompleted {
        strategy: PayoffStrategy,
        months: u32,
        total_interest: Money,
    },
    PaymentRecorded {
        debt_id: DebtId,
        amount: Money,
        date: NaiveDate,
        updated_balance: Money,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
