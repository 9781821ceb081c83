use engine::{Currency, Money};
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::theme::Theme;

/// Creates a styled span for a money amount with semantic coloring.
///
/// - Positive amounts: green with `+` prefix
/// - Negative amounts: red (no prefix, negative sign shown)
/// - Zero: neutral text color
#[must_use]
pub fn styled_amount(amount: i64, currency: Currency, theme: &Theme) -> Span<'static> {
    let money = Money::new(amount);
    let formatted = money.format(currency);

    let (color, prefix) = if amount > 0 {
        (theme.positive, "+")
    } else if amount < 0 {
        (theme.negative, "")
    } else {
        (theme.text, "")
    };

    Span::styled(format!("{prefix}{formatted}"), Style::default().fg(color))
}

/// Creates a styled span with bold modifier for emphasis (e.g., totals).
#[must_use]
pub fn styled_amount_bold(amount: i64, currency: Currency, theme: &Theme) -> Span<'static> {
    let money = Money::new(amount);
    let formatted = money.format(currency);

    let (color, prefix) = if amount > 0 {
        (theme.positive, "+")
    } else if amount < 0 {
        (theme.negative, "")
    } else {
        (theme.text, "")
    };

    Span::styled(
        format!("{prefix}{formatted}"),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}
