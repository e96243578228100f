//! Top-level rendering coordinator.
//!
//! Rendering is two steps: [`AppState::compute_viewmodel`] turns the state
//! into a [`FormViewModel`], then the layout for the current view draws it.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FormViewModel;

/// Renders the plugin UI to stdout.
///
/// Does not clear the screen; Zellij hands the plugin a fresh pane each frame.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &FormViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(summary) = &vm.summary {
        components::render_summary_mode(vm, summary, theme, cols, rows);
    } else {
        components::render_form_mode(vm, theme, cols, rows);
    }
}
