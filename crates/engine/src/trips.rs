//! Trip primitives.
//!
//! A `Trip` is one completed delivery for a customer, recorded with the
//! earnings it produced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, ResultEngine};

/// A recorded delivery trip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    pub customer_name: String,
    /// Raw phone string as entered. Normalization is a display concern and
    /// never happens here; customer identity uses the exact string.
    pub customer_phone: String,
    pub earnings_minor: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Input for [`crate::Engine::add_trip`]: everything but the generated id and
/// the creation instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripDraft {
    pub customer_name: String,
    pub customer_phone: String,
    pub earnings_minor: i64,
}

impl TripDraft {
    pub fn new(
        customer_name: impl Into<String>,
        customer_phone: impl Into<String>,
        earnings_minor: i64,
    ) -> ResultEngine<Self> {
        if earnings_minor < 0 {
            return Err(EngineError::InvalidAmount(
                "earnings_minor must be >= 0".to_string(),
            ));
        }
        Ok(Self {
            customer_name: customer_name.into(),
            customer_phone: customer_phone.into(),
            earnings_minor,
        })
    }

    pub(crate) fn into_trip(self, occurred_at: DateTime<Utc>) -> Trip {
        Trip {
            id: Uuid::new_v4(),
            customer_name: self.customer_name,
            customer_phone: self.customer_phone,
            earnings_minor: self.earnings_minor,
            occurred_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_rejects_negative_earnings() {
        let err = TripDraft::new("Amna", "111", -1).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidAmount("earnings_minor must be >= 0".to_string())
        );
    }

    #[test]
    fn draft_allows_zero_earnings() {
        assert!(TripDraft::new("Amna", "111", 0).is_ok());
    }
}
