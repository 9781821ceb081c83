//! Expense primitives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, ResultEngine};

/// A recorded out-of-pocket expense (fuel, food, maintenance, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub amount_minor: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Input for [`crate::Engine::add_expense`]: everything but the generated id
/// and the creation instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount_minor: i64,
}

impl ExpenseDraft {
    pub fn new(description: impl Into<String>, amount_minor: i64) -> ResultEngine<Self> {
        if amount_minor < 0 {
            return Err(EngineError::InvalidAmount(
                "amount_minor must be >= 0".to_string(),
            ));
        }
        Ok(Self {
            description: description.into(),
            amount_minor,
        })
    }

    pub(crate) fn into_expense(self, occurred_at: DateTime<Utc>) -> Expense {
        Expense {
            id: Uuid::new_v4(),
            description: self.description,
            amount_minor: self.amount_minor,
            occurred_at,
        }
    }
}
