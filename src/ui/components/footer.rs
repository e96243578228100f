//! Key hint bar.

use crate::ui::helpers::{centered_padding, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let hints = truncate(&footer.keybindings, cols);
    let len = hints.chars().count();
    let padding = centered_padding(len, cols);

    position_cursor(row, 1);
    print!(
        "{}{}{hints}{}{}",
        Theme::fg(&theme.colors.text_dim),
        " ".repeat(padding),
        " ".repeat(cols.saturating_sub(padding + len)),
        Theme::reset()
    );
    row + 1
}
