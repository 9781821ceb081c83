pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use engine::Engine;

use crate::app::{AppState, Section};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, engine: &Engine, state: &AppState) {
    let area = frame.area();
    let theme = Theme::default();

    frame.render_widget(
        ratatui::widgets::Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    // Main layout: info bar, tabs, content, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Length(2), // Tab bar (label + gap)
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], engine, state, &theme);
    components::tabs::render_tabs(frame, layout[1], state.section, &theme);

    let content = layout[2];
    match state.section {
        Section::Dashboard => screens::dashboard::render(frame, content, engine, state),
        Section::Log => screens::log::render(frame, content, engine, state),
        Section::Analytics => screens::analytics::render(frame, content, engine, state),
        Section::Customers => screens::customers::render(frame, content, engine, state),
    }

    render_bottom_bar(frame, layout[3], state, &theme);

    if let Some(form) = &state.form {
        components::entry_form::render(frame, area, form);
    }
    if let Some(pending) = &state.confirm {
        components::confirm::render(frame, area, pending);
    }
    components::toast::render(frame, area, state.toast.as_ref());
}

fn render_info_bar(
    frame: &mut Frame<'_>,
    area: Rect,
    engine: &Engine,
    state: &AppState,
    theme: &Theme,
) {
    let now = Utc::now().with_timezone(&state.timezone);

    let line = Line::from(vec![
        Span::styled("Mishwar", Style::default().fg(theme.accent)),
        Span::raw("  "),
        Span::styled("Trips", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", engine.trips().len())),
        Span::styled("Expenses", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", engine.expenses().len())),
        Span::styled("Tz", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", state.timezone)),
        Span::styled(
            now.format("%a %d %b %H:%M").to_string(),
            Style::default().fg(theme.dim),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    // Global shortcuts (always shown, compact)
    let mut parts = components::tabs::tab_shortcuts(theme);

    // Context-specific hints based on section and mode
    let context_hints = get_context_hints(state, theme);
    if !context_hints.is_empty() {
        parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
        parts.extend(context_hints);
    }

    // Quit hint at the end
    parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
    parts.push(Span::styled("q", Style::default().fg(theme.accent)));
    parts.push(Span::raw(" quit"));

    let bar = Paragraph::new(Line::from(parts));
    frame.render_widget(bar, area);
}

/// Returns context-specific keyboard hints based on current section and mode.
fn get_context_hints(state: &AppState, theme: &Theme) -> Vec<Span<'static>> {
    if state.form.is_some() || state.confirm.is_some() {
        return vec![
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" confirm  "),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::raw(" cancel"),
        ];
    }

    match state.section {
        Section::Dashboard => Vec::new(),
        Section::Log => vec![
            Span::styled("a", Style::default().fg(theme.accent)),
            Span::raw(" trip  "),
            Span::styled("x", Style::default().fg(theme.accent)),
            Span::raw(" expense  "),
            Span::styled("e", Style::default().fg(theme.accent)),
            Span::raw(" edit  "),
            Span::styled("d", Style::default().fg(theme.accent)),
            Span::raw(" delete  "),
            Span::styled("j/k", Style::default().fg(theme.accent)),
            Span::raw(" move"),
        ],
        Section::Analytics => vec![
            Span::styled("g", Style::default().fg(theme.accent)),
            Span::raw(" granularity"),
        ],
        Section::Customers => {
            if state.customers.detail.is_some() {
                vec![
                    Span::styled("b", Style::default().fg(theme.accent)),
                    Span::raw(" back"),
                ]
            } else {
                vec![
                    Span::styled("j/k", Style::default().fg(theme.accent)),
                    Span::raw(" move  "),
                    Span::styled("Enter", Style::default().fg(theme.accent)),
                    Span::raw(" detail"),
                ]
            }
        }
    }
}
