//! Read-only view of a submitted form.

use crate::ui::helpers::{position_cursor, print_padded, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SummaryView;

/// Draws the submission time, one `label: value` line per field and the
/// export status. Stops before `last_row` and returns the next row.
pub fn render_summary(row: usize, summary: &SummaryView, theme: &Theme, cols: usize, last_row: usize) -> usize {
    let mut current_row = row;

    position_cursor(current_row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_padded(&truncate(&format!("  Submitted: {}", summary.submitted_at), cols), cols);
    print!("{}", Theme::reset());
    current_row += 2;

    let label_width = summary
        .lines
        .iter()
        .map(|line| line.label.chars().count())
        .max()
        .unwrap_or(0);
    let value_width = cols.saturating_sub(label_width + 4);

    for line in &summary.lines {
        if current_row >= last_row {
            return current_row;
        }
        let value = truncate(&line.value.replace('\n', " \u{21b5} "), value_width);
        position_cursor(current_row, 1);
        print!(
            "  {}{:>label_width$}:{} {}",
            Theme::fg(&theme.colors.label_fg),
            line.label,
            Theme::reset(),
            Theme::fg(&theme.colors.text_normal)
        );
        print_padded(&value, value_width);
        print!("{}", Theme::reset());
        current_row += 1;
    }

    if let Some(status) = &summary.export_status {
        current_row += 1;
        if current_row < last_row {
            position_cursor(current_row, 1);
            print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent_fg));
            print_padded(&truncate(&format!("  {status}"), cols), cols);
            print!("{}", Theme::reset());
            current_row += 1;
        }
    }
    current_row
}
