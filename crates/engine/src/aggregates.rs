//! Dashboard aggregation over the trip and expense sequences.
//!
//! Windows use **local calendar semantics** (the caller's timezone decides
//! where a day ends), not rolling 24h/7d/30d durations. Weeks start on
//! Monday.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};

use crate::{Expense, Trip};

/// The four reporting windows shown on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Window {
    Today,
    ThisWeek,
    ThisMonth,
    AllTime,
}

impl Window {
    pub const ALL: [Window; 4] = [
        Window::Today,
        Window::ThisWeek,
        Window::ThisMonth,
        Window::AllTime,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::ThisWeek => "This Week",
            Self::ThisMonth => "This Month",
            Self::AllTime => "All Time",
        }
    }
}

/// Totals for one window. Empty windows are all zeros.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WindowTotals {
    pub earnings_minor: i64,
    pub expenses_minor: i64,
    pub trip_count: usize,
}

impl WindowTotals {
    /// Earnings minus expenses.
    #[must_use]
    pub fn net_minor(&self) -> i64 {
        self.earnings_minor - self.expenses_minor
    }
}

/// One fixed-shape totals record per window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub today: WindowTotals,
    pub this_week: WindowTotals,
    pub this_month: WindowTotals,
    pub all_time: WindowTotals,
}

impl DashboardSummary {
    #[must_use]
    pub fn window(&self, window: Window) -> &WindowTotals {
        match window {
            Window::Today => &self.today,
            Window::ThisWeek => &self.this_week,
            Window::ThisMonth => &self.this_month,
            Window::AllTime => &self.all_time,
        }
    }
}

/// Projects a stored UTC instant onto the calendar of `tz`.
pub(crate) fn local_date<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

/// Monday of the week containing `date`.
pub(crate) fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

fn in_window(date: NaiveDate, today: NaiveDate, window: Window) -> bool {
    match window {
        Window::Today => date == today,
        Window::ThisWeek => week_start(date) == week_start(today),
        Window::ThisMonth => (date.year(), date.month()) == (today.year(), today.month()),
        Window::AllTime => true,
    }
}

/// Computes the totals of a single window as of `now`.
pub fn window_totals<Tz: TimeZone>(
    trips: &[Trip],
    expenses: &[Expense],
    window: Window,
    now: &DateTime<Tz>,
) -> WindowTotals {
    let tz = now.timezone();
    let today = now.date_naive();

    let mut totals = WindowTotals::default();
    for trip in trips {
        if in_window(local_date(&trip.occurred_at, &tz), today, window) {
            totals.earnings_minor += trip.earnings_minor;
            totals.trip_count += 1;
        }
    }
    for expense in expenses {
        if in_window(local_date(&expense.occurred_at, &tz), today, window) {
            totals.expenses_minor += expense.amount_minor;
        }
    }
    totals
}

/// Computes all four windows in one pass per collection.
pub fn dashboard<Tz: TimeZone>(
    trips: &[Trip],
    expenses: &[Expense],
    now: &DateTime<Tz>,
) -> DashboardSummary {
    DashboardSummary {
        today: window_totals(trips, expenses, Window::Today, now),
        this_week: window_totals(trips, expenses, Window::ThisWeek, now),
        this_month: window_totals(trips, expenses, Window::ThisMonth, now),
        all_time: window_totals(trips, expenses, Window::AllTime, now),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;
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

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn today_window_matches_calendar_day() {
        let now = at(2026, 3, 10, 12);
        let trips = vec![
            trip(1000, at(2026, 3, 10, 1)),
            trip(500, at(2026, 3, 9, 23)),
        ];
        let totals = window_totals(&trips, &[], Window::Today, &now);
        assert_eq!(totals.earnings_minor, 1000);
        assert_eq!(totals.trip_count, 1);
    }

    #[test]
    fn week_window_is_monday_aligned() {
        // 2026-03-09 is a Monday, 2026-03-15 a Sunday, 2026-03-08 the
        // Sunday before.
        let now = at(2026, 3, 11, 12);
        let trips = vec![
            trip(100, at(2026, 3, 9, 8)),
            trip(200, at(2026, 3, 15, 8)),
            trip(400, at(2026, 3, 8, 8)),
        ];
        let totals = window_totals(&trips, &[], Window::ThisWeek, &now);
        assert_eq!(totals.earnings_minor, 300);
        assert_eq!(totals.trip_count, 2);
    }

    #[test]
    fn month_window_compares_year_and_month() {
        let now = at(2026, 3, 1, 0);
        let trips = vec![
            trip(100, at(2026, 3, 31, 23)),
            trip(200, at(2026, 2, 28, 12)),
            trip(400, at(2025, 3, 15, 12)),
        ];
        let totals = window_totals(&trips, &[], Window::ThisMonth, &now);
        assert_eq!(totals.earnings_minor, 100);
    }

    #[test]
    fn week_scenario_totals_match() {
        // Monday and Tuesday of the same week; one expense on Monday.
        let monday = at(2026, 3, 9, 9);
        let tuesday = at(2026, 3, 10, 9);
        let trips = vec![trip(1000, monday), trip(500, tuesday), trip(700, monday)];
        let expenses = vec![expense(300, monday)];

        let totals = window_totals(&trips, &expenses, Window::ThisWeek, &tuesday);
        assert_eq!(totals.earnings_minor, 2200);
        assert_eq!(totals.expenses_minor, 300);
        assert_eq!(totals.net_minor(), 1900);
        assert_eq!(totals.trip_count, 3);
    }

    #[test]
    fn empty_windows_are_zero() {
        let now = at(2026, 3, 10, 12);
        let summary = dashboard(&[], &[], &now);
        for window in Window::ALL {
            assert_eq!(*summary.window(window), WindowTotals::default());
        }
    }

    #[test]
    fn windows_follow_the_reference_timezone() {
        // 2026-03-10 22:30 UTC is already 2026-03-11 in Riyadh (UTC+3).
        let instant = Utc.with_ymd_and_hms(2026, 3, 10, 22, 30, 0).unwrap();
        let trips = vec![trip(1000, instant)];

        let now_utc = Utc.with_ymd_and_hms(2026, 3, 11, 6, 0, 0).unwrap();
        let utc_today = window_totals(&trips, &[], Window::Today, &now_utc);
        assert_eq!(utc_today.trip_count, 0);

        let now_riyadh = now_utc.with_timezone(&chrono_tz::Asia::Riyadh);
        let local_today = window_totals(&trips, &[], Window::Today, &now_riyadh);
        assert_eq!(local_today.trip_count, 1);
    }
}
