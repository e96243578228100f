//! Renderable view of the application state.
//!
//! Built by `AppState::compute_viewmodel()` and consumed by the renderer.
//! Everything here is display-ready text; no further formatting decisions
//! are left to the components.

use crate::export::SummaryLine;

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormViewModel {
    pub header: HeaderInfo,

    /// Visible slice of the field list, windowed around the focused field.
    /// Empty in the summary view.
    pub fields: Vec<FieldRow>,

    /// Whether fields exist above or below the visible window.
    pub more_above: bool,
    pub more_below: bool,

    pub banner: Option<BannerInfo>,

    /// Present only once the form is submitted.
    pub summary: Option<SummaryView>,

    pub footer: FooterInfo,
}

/// One form field as shown in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub label: &'static str,

    /// Current value, already truncated to the available width.
    pub value: String,

    /// Validation message shown under the value.
    pub error: Option<String>,

    pub is_focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// The last submit notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerInfo {
    pub message: String,
    pub is_error: bool,
}

/// Read-only summary of the submitted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    /// Formatted submission time, e.g. `2023-11-14 22:13:20 UTC`.
    pub submitted_at: String,
    pub lines: Vec<SummaryLine>,
    /// Outcome of the most recent export request.
    pub export_status: Option<String>,
}
