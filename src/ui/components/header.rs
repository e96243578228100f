//! Title bar.

use crate::ui::helpers::{centered_padding, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Draws the centered, bold title across the full width and returns the
/// next row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = truncate(&header.title, cols);
    let len = title.chars().count();
    let padding = centered_padding(len, cols);

    position_cursor(row, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!(
        "{}{title}{}",
        " ".repeat(padding),
        " ".repeat(cols.saturating_sub(padding + len))
    );
    print!("{}", Theme::reset());
    row + 1
}
