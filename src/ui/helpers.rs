//! Shared rendering utilities.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row`/`col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Shortens `text` to at most `max` characters, ending in `...` when cut.
///
/// Counts characters rather than bytes so multi-byte input never splits.
///
/// ```
/// use zform::ui::helpers::truncate;
///
/// assert_eq!(truncate("Registration", 8), "Regis...");
/// assert_eq!(truncate("short", 8), "short");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let mut out: String = text.chars().take(max - 3).collect();
    out.push_str("...");
    out
}

/// Prints `text` left-aligned and pads with spaces to `width` characters.
pub fn print_padded(text: &str, width: usize) {
    let len = text.chars().count();
    print!("{text}{}", " ".repeat(width.saturating_sub(len)));
}

/// Draws a horizontal rule across the pane and returns the next row.
pub fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{}{}", Theme::fg(color), "\u{2500}".repeat(cols), Theme::reset());
    row + 1
}

/// Column where `len` characters start when centered in `cols`.
#[must_use]
pub const fn centered_padding(len: usize, cols: usize) -> usize {
    cols.saturating_sub(len) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}", 4), "\u{e9}...");
        assert_eq!(truncate("abcdef", 2), "ab");
        assert_eq!(truncate("abc", 3), "abc");
    }

    #[test]
    fn centering_splits_the_slack() {
        assert_eq!(centered_padding(4, 10), 3);
        assert_eq!(centered_padding(20, 10), 0);
    }
}
