//! In-memory bookkeeping engine for a delivery driver's trips and expenses.
//!
//! The [`Engine`] owns the two record sequences and is their only writer; all
//! reporting (dashboard windows, per-customer summaries, chart buckets) is a
//! pure function of the current snapshot plus a reference "now", recomputed on
//! every query. Nothing is persisted: the book lives for one session.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

pub use aggregates::{DashboardSummary, Window, WindowTotals, dashboard, window_totals};
pub use buckets::{Bucket, Granularity, time_buckets};
pub use currency::Currency;
pub use customers::{Customer, customers, trips_for_customer};
pub use error::EngineError;
pub use expenses::{Expense, ExpenseDraft};
pub use money::Money;
pub use trips::{Trip, TripDraft};

mod aggregates;
mod buckets;
mod currency;
mod customers;
mod error;
mod expenses;
mod money;
pub mod seed;
mod trips;

type ResultEngine<T> = Result<T, EngineError>;

/// Result of a full-record replacement. A missing id is a defined no-op, not
/// an error: the caller obtained the record from this engine moments ago.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    NotFound,
}

/// Result of [`Engine::delete_entry`]. Ids never collide across the two
/// collections, so at most one record is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    DeletedTrip,
    DeletedExpense,
    NotFound,
}

/// The entity store: the ordered trip and expense sequences.
#[derive(Debug, Default)]
pub struct Engine {
    trips: Vec<Trip>,
    expenses: Vec<Expense>,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new trip stamped with `recorded_at` and a fresh id.
    pub fn add_trip(&mut self, draft: TripDraft, recorded_at: DateTime<Utc>) -> Uuid {
        let trip = draft.into_trip(recorded_at);
        let id = trip.id;
        tracing::debug!(%id, customer = %trip.customer_name, "add trip");
        self.trips.push(trip);
        id
    }

    /// Appends a new expense stamped with `recorded_at` and a fresh id.
    pub fn add_expense(&mut self, draft: ExpenseDraft, recorded_at: DateTime<Utc>) -> Uuid {
        let expense = draft.into_expense(recorded_at);
        let id = expense.id;
        tracing::debug!(%id, description = %expense.description, "add expense");
        self.expenses.push(expense);
        id
    }

    /// Replaces the trip with `trip.id`, keeping its position in the
    /// sequence.
    pub fn update_trip(&mut self, trip: Trip) -> UpdateOutcome {
        match self.trips.iter_mut().find(|t| t.id == trip.id) {
            Some(slot) => {
                tracing::debug!(id = %trip.id, "update trip");
                *slot = trip;
                UpdateOutcome::Updated
            }
            None => {
                tracing::debug!(id = %trip.id, "update trip: no match");
                UpdateOutcome::NotFound
            }
        }
    }

    /// Replaces the expense with `expense.id`, keeping its position in the
    /// sequence.
    pub fn update_expense(&mut self, expense: Expense) -> UpdateOutcome {
        match self.expenses.iter_mut().find(|e| e.id == expense.id) {
            Some(slot) => {
                tracing::debug!(id = %expense.id, "update expense");
                *slot = expense;
                UpdateOutcome::Updated
            }
            None => {
                tracing::debug!(id = %expense.id, "update expense: no match");
                UpdateOutcome::NotFound
            }
        }
    }

    /// Removes the record with `id` from whichever collection holds it.
    ///
    /// Calling it again with the same id is a no-op.
    pub fn delete_entry(&mut self, id: Uuid) -> DeleteOutcome {
        if let Some(at) = self.trips.iter().position(|t| t.id == id) {
            tracing::debug!(%id, "delete trip");
            self.trips.remove(at);
            return DeleteOutcome::DeletedTrip;
        }
        if let Some(at) = self.expenses.iter().position(|e| e.id == id) {
            tracing::debug!(%id, "delete expense");
            self.expenses.remove(at);
            return DeleteOutcome::DeletedExpense;
        }
        tracing::debug!(%id, "delete: no match");
        DeleteOutcome::NotFound
    }

    /// Current trip snapshot, in insertion order.
    #[must_use]
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Current expense snapshot, in insertion order.
    #[must_use]
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    #[must_use]
    pub fn trip(&self, id: Uuid) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Dashboard totals for the four calendar windows as of `now`.
    #[must_use]
    pub fn dashboard<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> DashboardSummary {
        aggregates::dashboard(&self.trips, &self.expenses, now)
    }

    /// Per-customer summaries in first-appearance order.
    #[must_use]
    pub fn customers(&self) -> Vec<Customer> {
        customers::customers(&self.trips)
    }

    /// Trips of one customer, in insertion order.
    #[must_use]
    pub fn customer_trips(&self, customer: &Customer) -> Vec<&Trip> {
        customers::trips_for_customer(customer, &self.trips)
    }

    /// Dense chart buckets, oldest to newest.
    #[must_use]
    pub fn time_buckets<Tz: TimeZone>(
        &self,
        granularity: Granularity,
        count: usize,
        now: &DateTime<Tz>,
    ) -> Vec<Bucket> {
        buckets::time_buckets(&self.trips, &self.expenses, granularity, count, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, earnings_minor: i64) -> TripDraft {
        TripDraft::new(name, "050-000-0000", earnings_minor).unwrap()
    }

    #[test]
    fn added_records_are_retrievable_by_id() {
        let mut book = Engine::new();
        let now = Utc::now();

        let t1 = book.add_trip(draft("Amna", 1550), now);
        let t2 = book.add_trip(draft("Badr", 2200), now);
        let e1 = book.add_expense(ExpenseDraft::new("fuel", 3000).unwrap(), now);

        assert_eq!(book.trips().len(), 2);
        assert_eq!(book.expenses().len(), 1);
        assert_eq!(book.trip(t1).map(|t| t.earnings_minor), Some(1550));
        assert_eq!(book.trip(t2).map(|t| t.earnings_minor), Some(2200));
        assert_eq!(book.expense(e1).map(|e| e.amount_minor), Some(3000));
    }

    #[test]
    fn update_replaces_exactly_one_record() {
        let mut book = Engine::new();
        let now = Utc::now();
        let id = book.add_trip(draft("Amna", 1550), now);
        book.add_trip(draft("Badr", 2200), now);

        let mut edited = book.trip(id).cloned().unwrap();
        edited.earnings_minor = 1800;
        assert_eq!(book.update_trip(edited), UpdateOutcome::Updated);

        assert_eq!(book.trips().len(), 2);
        assert_eq!(book.trip(id).map(|t| t.earnings_minor), Some(1800));
    }

    #[test]
    fn update_with_unknown_id_is_a_noop() {
        let mut book = Engine::new();
        let now = Utc::now();
        book.add_trip(draft("Amna", 1550), now);
        let before = book.trips().to_vec();

        let stray = TripDraft::new("Ghost", "000", 1).unwrap().into_trip(now);
        assert_eq!(book.update_trip(stray), UpdateOutcome::NotFound);
        assert_eq!(book.trips(), before.as_slice());
    }

    #[test]
    fn update_preserves_original_timestamp_unless_changed() {
        let mut book = Engine::new();
        let recorded = Utc::now();
        let id = book.add_trip(draft("Amna", 1550), recorded);

        let mut edited = book.trip(id).cloned().unwrap();
        edited.customer_name = "Amna K.".to_string();
        book.update_trip(edited);

        assert_eq!(book.trip(id).map(|t| t.occurred_at), Some(recorded));
    }

    #[test]
    fn delete_touches_only_the_owning_collection() {
        let mut book = Engine::new();
        let now = Utc::now();
        let trip_id = book.add_trip(draft("Amna", 1550), now);
        book.add_expense(ExpenseDraft::new("fuel", 3000).unwrap(), now);

        assert_eq!(book.delete_entry(trip_id), DeleteOutcome::DeletedTrip);
        assert_eq!(book.trips().len(), 0);
        assert_eq!(book.expenses().len(), 1);

        // Second call with the same id is a no-op.
        assert_eq!(book.delete_entry(trip_id), DeleteOutcome::NotFound);
        assert_eq!(book.expenses().len(), 1);
    }
}
