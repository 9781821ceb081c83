//! Sample records loaded on startup.
//!
//! The book has no persistence, so every session starts from the same small
//! set of recent trips and expenses spread over the last three days.

use chrono::{DateTime, Duration, Utc};

use crate::{Engine, ExpenseDraft, TripDraft};

/// Builds an [`Engine`] pre-loaded with the demo records, stamped relative to
/// `now`.
pub fn sample_book(now: DateTime<Utc>) -> Engine {
    let yesterday = now - Duration::days(1);
    let two_days_ago = now - Duration::days(2);

    let mut book = Engine::new();

    for (name, phone, earnings_minor, at) in [
        ("آمنة", "111-222-3333", 15_50, now),
        ("بدر", "222-333-4444", 22_00, now),
        ("جاسم", "333-444-5555", 12_75, yesterday),
        ("آمنة", "111-222-3333", 18_25, two_days_ago),
    ] {
        if let Ok(draft) = TripDraft::new(name, phone, earnings_minor) {
            book.add_trip(draft, at);
        }
    }

    for (description, amount_minor, at) in [("وقود", 30_00, now), ("غداء", 12_50, yesterday)] {
        if let Ok(draft) = ExpenseDraft::new(description, amount_minor) {
            book.add_expense(draft, at);
        }
    }

    book
}
