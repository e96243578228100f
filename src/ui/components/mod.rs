//! Composable UI component renderers.
//!
//! Each component draws one part of the frame starting at a given row and
//! returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Centered title bar
//! - [`banner`]: Result of the last submit
//! - [`fields`]: The form's field list with inline errors
//! - [`summary`]: The submitted record and export status
//! - [`footer`]: Keybinding hints
//!
//! # Layout Modes
//!
//! - [`render_form_mode`]: Header + Banner + Fields + Footer
//! - [`render_summary_mode`]: Header + Banner + Summary + Footer

mod banner;
mod fields;
mod footer;
mod header;
mod summary;

use crate::ui::helpers::render_border;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormViewModel, SummaryView};

use banner::render_banner;
use fields::{render_fields, render_scroll_marker};
use footer::render_footer;
use header::render_header;
use summary::render_summary;

/// Renders the editable form.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]                ▲ more
/// [Banner]                (optional)
/// [Field / error line] ...
/// [Border]                ▼ more
/// [Footer]
/// ```
pub fn render_form_mode(vm: &FormViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    let top_border = current_row;
    current_row = render_border(current_row, &theme.colors.border, cols);
    if vm.more_above {
        render_scroll_marker(top_border, " \u{25b2} more ", theme, cols);
    }
    if let Some(banner) = &vm.banner {
        current_row = render_banner(current_row, banner, theme, cols);
    }
    let _current_row = render_fields(current_row, &vm.fields, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    if vm.more_below {
        render_scroll_marker(border_row, " \u{25bc} more ", theme, cols);
    }
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the read-only summary of a submitted form.
pub fn render_summary_mode(vm: &FormViewModel, summary: &SummaryView, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(banner) = &vm.banner {
        current_row = render_banner(current_row, banner, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    let _current_row = render_summary(current_row, summary, theme, cols, border_row);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
