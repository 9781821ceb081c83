use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::{forms::EntryForm, ui::components::card::Card, ui::theme::Theme};

/// Renders the add/edit overlay centered over the current screen.
pub fn render(frame: &mut Frame<'_>, area: Rect, form: &EntryForm) {
    let theme = Theme::default();
    let fields = form.fields();

    // Fields + message line + hint line, plus the card borders.
    let height = (fields.len() as u16) + 4;
    let rect = centered_rect(area, 46, height);
    frame.render_widget(Clear, rect);

    let card = Card::new(form.title(), &theme).focused(true);
    let inner = card.inner(rect);
    card.render_frame(frame, rect);

    let mut constraints: Vec<Constraint> = vec![Constraint::Length(1); fields.len()];
    constraints.push(Constraint::Length(1)); // message
    constraints.push(Constraint::Length(1)); // hints
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, (label, value)) in fields.iter().enumerate() {
        let focused = i == form.focus;
        let marker = if focused { "› " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim)
        };
        let cursor = if focused { "▏" } else { "" };

        let line = Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.accent)),
            Span::styled(format!("{label:<12}"), label_style),
            Span::styled((*value).to_string(), Style::default().fg(theme.text)),
            Span::styled(cursor, Style::default().fg(theme.accent)),
        ]);
        frame.render_widget(Paragraph::new(line), rows[i]);
    }

    if let Some(message) = &form.message {
        frame.render_widget(
            Paragraph::new(Span::styled(
                message.as_str(),
                Style::default().fg(theme.error),
            )),
            rows[fields.len()],
        );
    }

    let hints = Line::from(vec![
        Span::styled("Tab", Style::default().fg(theme.accent)),
        Span::raw(" next  "),
        Span::styled("Enter", Style::default().fg(theme.accent)),
        Span::raw(" save  "),
        Span::styled("Esc", Style::default().fg(theme.accent)),
        Span::raw(" cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), rows[fields.len() + 1]);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
