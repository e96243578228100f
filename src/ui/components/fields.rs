//! Form field list.
//!
//! Each field takes two lines: the label and value, then the validation
//! message (blank when the field is valid).

use crate::ui::helpers::{position_cursor, print_padded, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FieldRow;

/// Focus marker plus label, padded to the label column.
const LABEL_WIDTH: usize = 12;

/// Draws the visible fields starting at `row` and returns the next row.
pub fn render_fields(row: usize, fields: &[FieldRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for field in fields {
        current_row = render_field(current_row, field, theme, cols);
    }
    current_row
}

fn render_field(row: usize, field: &FieldRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    if field.is_focused {
        print!(
            "{}{}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.focus_fg),
            Theme::bg(&theme.colors.focus_bg)
        );
        print!("\u{203a} {:<LABEL_WIDTH$} {}", field.label, field.value);
        let used = 2 + LABEL_WIDTH.max(field.label.chars().count()) + 1 + field.value.chars().count();
        print!("{}{}", " ".repeat(cols.saturating_sub(used)), Theme::reset());
    } else {
        print!(
            "  {}{:<LABEL_WIDTH$}{} {}{}{}",
            Theme::fg(&theme.colors.label_fg),
            field.label,
            Theme::reset(),
            Theme::fg(&theme.colors.text_normal),
            field.value,
            Theme::reset()
        );
    }

    position_cursor(row + 1, 1);
    match &field.error {
        Some(error) => {
            print!("{}", Theme::fg(&theme.colors.error_fg));
            print_padded(&truncate(&format!("{:w$}{error}", "", w = LABEL_WIDTH + 3), cols), cols);
            print!("{}", Theme::reset());
        }
        None => print!("{}", " ".repeat(cols)),
    }
    row + 2
}

/// Right-aligns a scroll marker on `row`, over whatever is already drawn.
pub fn render_scroll_marker(row: usize, marker: &str, theme: &Theme, cols: usize) {
    let len = marker.chars().count();
    position_cursor(row, cols.saturating_sub(len).max(1));
    print!("{}{marker}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
}
