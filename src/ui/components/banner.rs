//! Submit notification line.

use crate::ui::helpers::{position_cursor, print_padded, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BannerInfo;

/// Draws the banner in the error or success color and returns the next row.
pub fn render_banner(row: usize, banner: &BannerInfo, theme: &Theme, cols: usize) -> usize {
    let (icon, color) = if banner.is_error {
        ('\u{2717}', &theme.colors.error_fg)
    } else {
        ('\u{2713}', &theme.colors.success_fg)
    };

    position_cursor(row, 1);
    print!("{}{}", Theme::bold(), Theme::fg(color));
    print_padded(&truncate(&format!(" {icon} {}", banner.message), cols), cols);
    print!("{}", Theme::reset());
    row + 1
}
