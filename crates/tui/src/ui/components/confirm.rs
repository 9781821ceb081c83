use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::{app::PendingDelete, ui::components::card::Card, ui::theme::Theme};

/// Renders the delete confirmation overlay. Deletion cannot be undone, so it
/// always asks.
pub fn render(frame: &mut Frame<'_>, area: Rect, pending: &PendingDelete) {
    let theme = Theme::default();

    let message = format!("Delete \"{}\"?", pending.label);
    let width = (message.len() as u16 + 6).clamp(30, area.width);
    let rect = centered_rect(area, width, 5);
    frame.render_widget(Clear, rect);

    let card = Card::new("Confirm Delete", &theme).focused(true);
    let inner = card.inner(rect);
    card.render_frame(frame, rect);

    let lines = vec![
        Line::from(Span::styled(message, Style::default().fg(theme.text))),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" delete  "),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::raw(" keep"),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
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
