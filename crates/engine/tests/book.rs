use chrono::{DateTime, TimeZone, Utc};

use engine::{
    DeleteOutcome, Engine, ExpenseDraft, Granularity, TripDraft, UpdateOutcome, Window, seed,
};

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

fn trip_draft(name: &str, phone: &str, earnings_minor: i64) -> TripDraft {
    TripDraft::new(name, phone, earnings_minor).unwrap()
}

#[test]
fn collection_length_tracks_adds_and_every_id_resolves() {
    let mut book = Engine::new();
    let now = Utc::now();

    let mut trip_ids = Vec::new();
    for i in 0..5 {
        trip_ids.push(book.add_trip(trip_draft("A", "1", i * 100), now));
    }
    let expense_id = book.add_expense(ExpenseDraft::new("fuel", 500).unwrap(), now);

    assert_eq!(book.trips().len(), 5);
    assert_eq!(book.expenses().len(), 1);
    for id in trip_ids {
        assert!(book.trip(id).is_some());
    }
    assert!(book.expense(expense_id).is_some());
}

#[test]
fn update_expense_matches_by_id_only() {
    let mut book = Engine::new();
    let now = Utc::now();
    let id = book.add_expense(ExpenseDraft::new("fuel", 3000).unwrap(), now);
    book.add_expense(ExpenseDraft::new("lunch", 1250).unwrap(), now);

    let mut edited = book.expense(id).cloned().unwrap();
    edited.description = "fuel (highway)".to_string();
    edited.amount_minor = 3500;
    assert_eq!(book.update_expense(edited), UpdateOutcome::Updated);

    assert_eq!(book.expenses().len(), 2);
    assert_eq!(book.expense(id).map(|e| e.amount_minor), Some(3500));
}

#[test]
fn delete_entry_spans_both_collections() {
    let mut book = Engine::new();
    let now = Utc::now();
    let trip_id = book.add_trip(trip_draft("A", "1", 1000), now);
    let expense_id = book.add_expense(ExpenseDraft::new("fuel", 500).unwrap(), now);

    assert_eq!(book.delete_entry(expense_id), DeleteOutcome::DeletedExpense);
    assert_eq!(book.trips().len(), 1);
    assert_eq!(book.expenses().len(), 0);

    assert_eq!(book.delete_entry(trip_id), DeleteOutcome::DeletedTrip);
    assert_eq!(book.delete_entry(trip_id), DeleteOutcome::NotFound);
}

#[test]
fn dashboard_today_equals_manual_sum_over_same_day_trips() {
    let mut book = Engine::new();
    let now = at(2026, 3, 10, 15);

    book.add_trip(trip_draft("A", "1", 1550), at(2026, 3, 10, 9));
    book.add_trip(trip_draft("B", "2", 2200), at(2026, 3, 10, 13));
    book.add_trip(trip_draft("C", "3", 1275), at(2026, 3, 9, 20));

    let summary = book.dashboard(&now);
    let manual: i64 = book
        .trips()
        .iter()
        .filter(|t| t.occurred_at.date_naive() == now.date_naive())
        .map(|t| t.earnings_minor)
        .sum();

    assert_eq!(summary.today.earnings_minor, manual);
    assert_eq!(summary.today.trip_count, 2);
}

#[test]
fn week_aggregate_scenario() {
    // Trips on Monday and Tuesday of one week, one Monday expense: the
    // weekly window seen from Tuesday covers all of them.
    let monday = at(2026, 3, 9, 10);
    let tuesday = at(2026, 3, 10, 10);

    let mut book = Engine::new();
    book.add_trip(trip_draft("A", "1", 1000), monday);
    book.add_trip(trip_draft("A", "1", 500), tuesday);
    book.add_trip(trip_draft("B", "2", 700), monday);
    book.add_expense(ExpenseDraft::new("fuel", 300).unwrap(), monday);

    let customers = book.customers();
    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].trip_count, 2);
    assert_eq!(customers[0].total_earnings_minor, 1500);
    assert_eq!(customers[1].trip_count, 1);
    assert_eq!(customers[1].total_earnings_minor, 700);

    let week = book.dashboard(&tuesday).this_week;
    assert_eq!(week.earnings_minor, 2200);
    assert_eq!(week.expenses_minor, 300);
    assert_eq!(week.net_minor(), 1900);
    assert_eq!(week.trip_count, 3);
}

#[test]
fn customer_totals_conserve_the_trip_list() {
    let book = seed::sample_book(Utc::now());

    let customers = book.customers();
    let trip_count: usize = customers.iter().map(|c| c.trip_count).sum();
    let earnings: i64 = customers.iter().map(|c| c.total_earnings_minor).sum();

    assert_eq!(trip_count, book.trips().len());
    assert_eq!(
        earnings,
        book.trips().iter().map(|t| t.earnings_minor).sum::<i64>()
    );
}

#[test]
fn customer_detail_reads_back_only_that_customer() {
    let book = seed::sample_book(Utc::now());
    let customers = book.customers();

    let amna = &customers[0];
    assert_eq!(amna.trip_count, 2);

    let trips = book.customer_trips(amna);
    assert_eq!(trips.len(), 2);
    assert!(trips.iter().all(|t| amna.matches(t)));
}

#[test]
fn buckets_stay_dense_across_sparse_history() {
    let mut book = Engine::new();
    let now = at(2026, 3, 10, 12);
    book.add_trip(trip_draft("A", "1", 1000), at(2026, 3, 10, 9));
    book.add_trip(trip_draft("B", "2", 700), at(2026, 2, 1, 9));

    for granularity in [Granularity::Day, Granularity::Week, Granularity::Month] {
        let buckets = book.time_buckets(granularity, 6, &now);
        assert_eq!(buckets.len(), 6);
        for pair in buckets.windows(2) {
            assert!(pair[0].starts_on < pair[1].starts_on);
        }
    }

    // The February trip lands in the month series but outside the 6-day one.
    let months = book.time_buckets(Granularity::Month, 6, &now);
    assert_eq!(months.iter().map(|b| b.earnings_minor).sum::<i64>(), 1700);
    let days = book.time_buckets(Granularity::Day, 6, &now);
    assert_eq!(days.iter().map(|b| b.earnings_minor).sum::<i64>(), 1000);
}

#[test]
fn all_time_window_is_unfiltered() {
    let book = seed::sample_book(at(2026, 3, 10, 12));
    let summary = book.dashboard(&at(2026, 3, 10, 12));

    assert_eq!(summary.window(Window::AllTime).trip_count, 4);
    assert_eq!(summary.window(Window::AllTime).earnings_minor, 6850);
    assert_eq!(summary.window(Window::AllTime).expenses_minor, 4250);
}
