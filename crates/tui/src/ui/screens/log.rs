use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use engine::Engine;

use crate::{
    app::{self, AppState, LogEntry},
    phone,
    ui::{components::card::Card, components::money::styled_amount, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, engine: &Engine, state: &AppState) {
    let theme = Theme::default();

    let card = Card::new("Log", &theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let entries = app::log_entries(engine);
    if entries.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw("No entries yet. Press "),
                Span::styled("a", Style::default().fg(theme.accent)),
                Span::raw(" to add a trip or "),
                Span::styled("x", Style::default().fg(theme.accent)),
                Span::raw(" to add an expense."),
            ])),
            inner,
        );
        return;
    }

    // Keep the selection visible when the list outgrows the card.
    let visible = inner.height as usize;
    let selected = state.log.selected.min(entries.len() - 1);
    let skip = (selected + 1).saturating_sub(visible);

    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .skip(skip)
        .take(visible)
        .map(|(i, entry)| {
            let date = entry
                .occurred_at()
                .with_timezone(&state.timezone)
                .format("%d %b %H:%M")
                .to_string();

            let (kind, amount, detail) = match entry {
                LogEntry::Trip(trip) => (
                    "▲ Trip",
                    trip.earnings_minor,
                    format!(
                        "{}  {}",
                        trip.customer_name,
                        phone::dial_format(&trip.customer_phone)
                    ),
                ),
                LogEntry::Expense(expense) => {
                    ("▼ Expense", -expense.amount_minor, expense.description.clone())
                }
            };
            let kind_color = if amount >= 0 {
                theme.positive
            } else {
                theme.negative
            };

            let mut line = Line::from(vec![
                Span::styled(format!("{date:<14}"), Style::default().fg(theme.dim)),
                Span::styled(format!("{kind:<11}"), Style::default().fg(kind_color)),
                styled_amount(amount, state.currency, &theme),
                Span::raw("  "),
                Span::styled(detail, Style::default().fg(theme.text)),
            ]);
            if i == selected {
                line = line.style(Style::default().add_modifier(Modifier::REVERSED));
            }
            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}
