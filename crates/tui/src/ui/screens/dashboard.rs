use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use engine::{Engine, Granularity, Money, Window, WindowTotals};

use crate::{
    app::{self, AppState, LogEntry},
    ui::{
        components::{
            card::{Card, StatCard},
            charts::mini_bar_chart,
            money::styled_amount,
        },
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, engine: &Engine, state: &AppState) {
    let theme = Theme::default();
    let now = Utc::now().with_timezone(&state.timezone);
    let summary = engine.dashboard(&now);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Today / This Week / This Month
            Constraint::Length(5), // All Time + earnings trend
            Constraint::Min(4),    // Recent activity
        ])
        .split(area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(layout[0]);

    for (i, window) in [Window::Today, Window::ThisWeek, Window::ThisMonth]
        .into_iter()
        .enumerate()
    {
        render_window_card(frame, cols[i], window, summary.window(window), state, &theme);
    }

    let bottom_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[1]);

    render_window_card(
        frame,
        bottom_cols[0],
        Window::AllTime,
        summary.window(Window::AllTime),
        state,
        &theme,
    );

    // Sparkline of daily earnings over the last week.
    let days = engine.time_buckets(Granularity::Day, 7, &now);
    let series: Vec<u64> = days
        .iter()
        .map(|bucket| bucket.earnings_minor.max(0) as u64)
        .collect();
    StatCard::new("Earnings, Last 7 Days", mini_bar_chart(&series), &theme)
        .value_style(Style::default().fg(theme.accent))
        .subtitle(format!(
            "{} total",
            Money::new(days.iter().map(|b| b.earnings_minor).sum()).format(state.currency)
        ))
        .render(frame, bottom_cols[1]);

    render_recent_activity(frame, layout[2], engine, state, &theme);
}

fn render_window_card(
    frame: &mut Frame<'_>,
    area: Rect,
    window: Window,
    totals: &WindowTotals,
    state: &AppState,
    theme: &Theme,
) {
    let net = totals.net_minor();
    let net_color = if net >= 0 {
        theme.positive
    } else {
        theme.negative
    };

    StatCard::new(
        window.label(),
        Money::new(net).format(state.currency),
        theme,
    )
    .value_style(Style::default().fg(net_color).add_modifier(Modifier::BOLD))
    .subtitle(format!(
        "▲ {}  ▼ {}  · {} trips",
        Money::new(totals.earnings_minor).format(state.currency),
        Money::new(totals.expenses_minor).format(state.currency),
        totals.trip_count,
    ))
    .render(frame, area);
}

fn render_recent_activity(
    frame: &mut Frame<'_>,
    area: Rect,
    engine: &Engine,
    state: &AppState,
    theme: &Theme,
) {
    let card = Card::new("Recent Activity", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let entries = app::log_entries(engine);
    let items: Vec<ListItem> = entries
        .iter()
        .take(inner.height as usize)
        .map(|entry| {
            let date = entry
                .occurred_at()
                .with_timezone(&state.timezone)
                .format("%d %b")
                .to_string();
            let (kind, amount) = match entry {
                LogEntry::Trip(trip) => ("▲ Trip", trip.earnings_minor),
                LogEntry::Expense(expense) => ("▼ Expense", -expense.amount_minor),
            };
            let kind_color = if amount >= 0 {
                theme.positive
            } else {
                theme.negative
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{date:<8}"), Style::default().fg(theme.dim)),
                Span::styled(format!("{kind:<11}"), Style::default().fg(kind_color)),
                styled_amount(amount, state.currency, theme),
                Span::raw("  "),
                Span::styled(entry.label().to_string(), Style::default().fg(theme.text)),
            ]))
        })
        .collect();

    if items.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No activity yet",
                Style::default().fg(theme.dim),
            )),
            inner,
        );
    } else {
        frame.render_widget(List::new(items), inner);
    }
}
