use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use engine::Engine;

use crate::{
    app::AppState,
    ui::{components::charts::render_bar_chart, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, engine: &Engine, state: &AppState) {
    let theme = Theme::default();
    let now = Utc::now().with_timezone(&state.timezone);

    let granularity = state.analytics.granularity;
    let buckets = engine.time_buckets(granularity, state.analytics.bucket_count(), &now);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Charts show major units; the bucket labels carry the calendar.
    let earnings: Vec<(String, u64)> = buckets
        .iter()
        .map(|b| (b.label.clone(), (b.earnings_minor.max(0) / 100) as u64))
        .collect();
    let earnings_refs: Vec<(&str, u64)> = earnings
        .iter()
        .map(|(label, value)| (label.as_str(), *value))
        .collect();
    render_bar_chart(
        frame,
        layout[0],
        &format!("Earnings — {}", granularity.label()),
        &earnings_refs,
        theme.positive,
        &theme,
    );

    let expenses: Vec<(String, u64)> = buckets
        .iter()
        .map(|b| (b.label.clone(), (b.expenses_minor.max(0) / 100) as u64))
        .collect();
    let expenses_refs: Vec<(&str, u64)> = expenses
        .iter()
        .map(|(label, value)| (label.as_str(), *value))
        .collect();
    render_bar_chart(
        frame,
        layout[1],
        &format!("Expenses — {}", granularity.label()),
        &expenses_refs,
        theme.negative,
        &theme,
    );
}
