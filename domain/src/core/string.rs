//! String utilities for the domain layer.

/// Collapse a message into a single-line preview of at most `max_chars`
/// characters, with an ellipsis when shortened.
///
/// Used for log lines, where multi-line itineraries would be noise.
pub fn preview(s: &str, max_chars: usize) -> String {
    let single_line = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= max_chars {
        return single_line;
    }
    let kept: String = single_line
        .chars()
        .take(max_chars.saturating_sub(3))
        .collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("Visit Paris", 20), "Visit Paris");
    }

    #[test]
    fn test_preview_collapses_whitespace() {
        assert_eq!(preview("Day 1:\n  Louvre\n\nDay 2", 40), "Day 1: Louvre Day 2");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        assert_eq!(preview("Generating itinerary... please wait ⏳", 13), "Generating...");
        assert_eq!(preview("⏳⏳⏳⏳⏳", 4), "⏳...");
    }

    #[test]
    fn test_preview_tiny_limit() {
        assert_eq!(preview("abcdef", 2), "...");
    }
}
