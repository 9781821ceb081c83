use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use engine::{Customer, Engine, Money};

use crate::{
    app::{self, AppState},
    phone,
    ui::{
        components::{card::Card, charts::ascii_bar, money::styled_amount},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, engine: &Engine, state: &AppState) {
    let theme = Theme::default();

    match &state.customers.detail {
        Some(customer) => render_detail(frame, area, engine, customer, state, &theme),
        None => render_list(frame, area, engine, state, &theme),
    }
}

fn render_list(
    frame: &mut Frame<'_>,
    area: Rect,
    engine: &Engine,
    state: &AppState,
    theme: &Theme,
) {
    let card = Card::new("Customers", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let customers = app::sorted_customers(engine);
    if customers.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No customers yet — they appear with the first trip.",
                Style::default().fg(theme.dim),
            )),
            inner,
        );
        return;
    }

    let max_earnings = customers
        .iter()
        .map(|c| c.total_earnings_minor.max(0) as u64)
        .max()
        .unwrap_or(0);

    let visible = inner.height as usize;
    let selected = state.customers.selected.min(customers.len() - 1);
    let skip = (selected + 1).saturating_sub(visible);

    let items: Vec<ListItem> = customers
        .iter()
        .enumerate()
        .skip(skip)
        .take(visible)
        .map(|(i, customer)| {
            let bar = ascii_bar(customer.total_earnings_minor.max(0) as u64, max_earnings, 10);

            let mut line = Line::from(vec![
                Span::styled(
                    format!("{:<14}", customer.name),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    format!("{:<14}", phone::dial_format(&customer.phone)),
                    Style::default().fg(theme.text_muted),
                ),
                Span::styled(
                    format!("{:>3} trips  ", customer.trip_count),
                    Style::default().fg(theme.dim),
                ),
                styled_amount(customer.total_earnings_minor, state.currency, theme),
                Span::raw(" "),
                Span::styled(bar, Style::default().fg(theme.dim)),
            ]);
            if i == selected {
                line = line.style(Style::default().add_modifier(Modifier::REVERSED));
            }
            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}

fn render_detail(
    frame: &mut Frame<'_>,
    area: Rect,
    engine: &Engine,
    customer: &Customer,
    state: &AppState,
    theme: &Theme,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    let card = Card::new(&customer.name, theme).focused(true);
    let inner = card.inner(layout[0]);
    card.render_frame(frame, layout[0]);

    let lines = vec![
        Line::from(vec![
            Span::styled("Phone   ", Style::default().fg(theme.dim)),
            Span::styled(
                phone::dial_format(&customer.phone),
                Style::default().fg(theme.text),
            ),
        ]),
        Line::from(vec![
            Span::styled("Trips   ", Style::default().fg(theme.dim)),
            Span::styled(
                customer.trip_count.to_string(),
                Style::default().fg(theme.text),
            ),
        ]),
        Line::from(vec![
            Span::styled("Total   ", Style::default().fg(theme.dim)),
            Span::styled(
                Money::new(customer.total_earnings_minor).format(state.currency),
                Style::default()
                    .fg(theme.positive)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    let trips_card = Card::new("Trips", theme);
    let trips_inner = trips_card.inner(layout[1]);
    trips_card.render_frame(frame, layout[1]);

    let items: Vec<ListItem> = engine
        .customer_trips(customer)
        .iter()
        .take(trips_inner.height as usize)
        .map(|trip| {
            let date = trip
                .occurred_at
                .with_timezone(&state.timezone)
                .format("%d %b %H:%M")
                .to_string();
            ListItem::new(Line::from(vec![
                Span::styled(format!("{date:<14}"), Style::default().fg(theme.dim)),
                styled_amount(trip.earnings_minor, state.currency, theme),
            ]))
        })
        .collect();

    if items.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No trips recorded",
                Style::default().fg(theme.dim),
            )),
            trips_inner,
        );
    } else {
        frame.render_widget(List::new(items), trips_inner);
    }
}
