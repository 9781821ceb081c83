//! Calendar bucket series for the analytics charts.
//!
//! Buckets share the dashboard's calendar semantics (weeks start Monday) and
//! are always **dense**: a period with no activity is still emitted with
//! zero totals, so chart rendering never has to special-case gaps.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone};
use std::collections::HashMap;

use crate::{Expense, Trip, aggregates};

/// Chart bucket width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Granularity {
    Day,
    Week,
    Month,
}

impl Granularity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "Daily",
            Self::Week => "Weekly",
            Self::Month => "Monthly",
        }
    }
}

/// Totals of one calendar period.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bucket {
    /// Short calendar label ("09 Mar" for days and weeks, "Mar" for months).
    pub label: String,
    /// First day of the period; buckets are ordered by this, oldest first.
    pub starts_on: NaiveDate,
    pub earnings_minor: i64,
    pub expenses_minor: i64,
}

fn period_start(granularity: Granularity, date: NaiveDate) -> NaiveDate {
    match granularity {
        Granularity::Day => date,
        Granularity::Week => aggregates::week_start(date),
        Granularity::Month => first_of_month(date.year(), date.month(), date),
    }
}

fn prev_period_start(granularity: Granularity, start: NaiveDate) -> NaiveDate {
    match granularity {
        Granularity::Day => start - Duration::days(1),
        Granularity::Week => start - Duration::days(7),
        Granularity::Month => {
            let (year, month) = if start.month() == 1 {
                (start.year() - 1, 12)
            } else {
                (start.year(), start.month() - 1)
            };
            first_of_month(year, month, start)
        }
    }
}

// Day 1 exists in every month; the fallback is unreachable.
fn first_of_month(year: i32, month: u32, fallback: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(fallback)
}

fn period_label(granularity: Granularity, start: NaiveDate) -> String {
    match granularity {
        Granularity::Day | Granularity::Week => start.format("%d %b").to_string(),
        Granularity::Month => start.format("%b").to_string(),
    }
}

/// Produces the `count` most recent buckets (current period included),
/// ordered oldest to newest.
pub fn time_buckets<Tz: TimeZone>(
    trips: &[Trip],
    expenses: &[Expense],
    granularity: Granularity,
    count: usize,
    now: &DateTime<Tz>,
) -> Vec<Bucket> {
    let tz = now.timezone();

    let mut starts = Vec::with_capacity(count);
    let mut cursor = period_start(granularity, now.date_naive());
    for _ in 0..count {
        starts.push(cursor);
        cursor = prev_period_start(granularity, cursor);
    }
    starts.reverse();

    let mut totals: HashMap<NaiveDate, (i64, i64)> = HashMap::new();
    for trip in trips {
        let key = period_start(granularity, aggregates::local_date(&trip.occurred_at, &tz));
        totals.entry(key).or_default().0 += trip.earnings_minor;
    }
    for expense in expenses {
        let key = period_start(
            granularity,
            aggregates::local_date(&expense.occurred_at, &tz),
        );
        totals.entry(key).or_default().1 += expense.amount_minor;
    }

    starts
        .into_iter()
        .map(|starts_on| {
            let (earnings_minor, expenses_minor) =
                totals.get(&starts_on).copied().unwrap_or_default();
            Bucket {
                label: period_label(granularity, starts_on),
                starts_on,
                earnings_minor,
                expenses_minor,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone as _, Utc};
    use uuid::Uuid;

    use super::*;

    fn trip(earnings_minor: i64, occurred_at: DateTime<Utc>) -> Trip {
        Trip {
            id: Uuid::new_v4(),
            customer_name: "A".to_string(),
            customer_phone: "1".to_string(),
            earnings_minor,
            occurred_at,
        }
    }

    fn expense(amount_minor: i64, occurred_at: DateTime<Utc>) -> Expense {
        Expense {
            id: Uuid::new_v4(),
            description: "fuel".to_string(),
            amount_minor,
            occurred_at,
        }
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn emits_exactly_count_buckets_even_when_empty() {
        let now = at(2026, 3, 10);
        let buckets = time_buckets(&[], &[], Granularity::Day, 7, &now);
        assert_eq!(buckets.len(), 7);
        assert!(buckets
            .iter()
            .all(|b| b.earnings_minor == 0 && b.expenses_minor == 0));
    }

    #[test]
    fn buckets_are_chronological_and_dense() {
        let now = at(2026, 3, 10);
        let trips = vec![trip(1000, at(2026, 3, 10)), trip(500, at(2026, 3, 8))];
        let expenses = vec![expense(300, at(2026, 3, 9))];

        let buckets = time_buckets(&trips, &expenses, Granularity::Day, 4, &now);
        assert_eq!(buckets.len(), 4);
        for pair in buckets.windows(2) {
            assert!(pair[0].starts_on < pair[1].starts_on);
        }

        // 07, 08, 09, 10 March.
        assert_eq!(buckets[0].earnings_minor, 0);
        assert_eq!(buckets[1].earnings_minor, 500);
        assert_eq!(buckets[2].expenses_minor, 300);
        assert_eq!(buckets[3].earnings_minor, 1000);
    }

    #[test]
    fn week_buckets_start_on_monday() {
        // 2026-03-10 is a Tuesday; its week starts 2026-03-09.
        let now = at(2026, 3, 10);
        let buckets = time_buckets(&[], &[], Granularity::Week, 2, &now);
        assert_eq!(
            buckets[1].starts_on,
            NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
        );
        assert_eq!(
            buckets[0].starts_on,
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
        );
    }

    #[test]
    fn month_buckets_wrap_the_year_boundary() {
        let now = at(2026, 1, 15);
        let trips = vec![trip(1000, at(2025, 12, 31)), trip(500, at(2026, 1, 2))];

        let buckets = time_buckets(&trips, &[], Granularity::Month, 3, &now);
        assert_eq!(buckets.len(), 3);
        assert_eq!(
            buckets[0].starts_on,
            NaiveDate::from_ymd_opt(2025, 11, 1).unwrap()
        );
        assert_eq!(buckets[1].earnings_minor, 1000);
        assert_eq!(buckets[1].label, "Dec");
        assert_eq!(buckets[2].earnings_minor, 500);
        assert_eq!(buckets[2].label, "Jan");
    }

    #[test]
    fn activity_outside_the_range_is_dropped() {
        let now = at(2026, 3, 10);
        let trips = vec![trip(1000, at(2026, 1, 1))];
        let buckets = time_buckets(&trips, &[], Granularity::Day, 7, &now);
        assert!(buckets.iter().all(|b| b.earnings_minor == 0));
    }
}
