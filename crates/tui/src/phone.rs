//! Phone number cleanup for display and dialing.
//!
//! This is a presentation utility only: customer identity in the engine uses
//! the raw string, so two spellings of one number stay distinct there.

/// Strips everything but digits and rewrites a local `05…` prefix into the
/// international `966…` prefix.
///
/// Numbers already entered as `9665…` (or `+9665…`, whose `+` is stripped)
/// pass through unchanged.
#[must_use]
pub fn dial_format(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(char::is_ascii_digit).collect();

    if let Some(rest) = cleaned.strip_prefix('0')
        && rest.starts_with('5')
    {
        return format!("966{rest}");
    }

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_non_digit_characters() {
        assert_eq!(dial_format("111-222-3333"), "1112223333");
        assert_eq!(dial_format(" (050) 123 4567 "), "966501234567");
    }

    #[test]
    fn rewrites_local_prefix() {
        assert_eq!(dial_format("0512345678"), "966512345678");
    }

    #[test]
    fn keeps_international_numbers() {
        assert_eq!(dial_format("966512345678"), "966512345678");
        assert_eq!(dial_format("+966512345678"), "966512345678");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(dial_format(""), "");
    }

    #[test]
    fn leading_zero_without_five_is_untouched() {
        assert_eq!(dial_format("0112345678"), "0112345678");
    }
}
