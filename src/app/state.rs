//! Application state and view model computation.
//!
//! [`AppState`] owns the single live [`FormState`] plus the UI-only state
//! around it: which field has focus, the subject cursor, the resume path
//! being typed, the last banner and the last export outcome. The event
//! handler mutates it; [`AppState::compute_viewmodel`] turns a snapshot of it
//! into display-ready rows.

use super::modes::{InputKind, ViewMode};
use crate::domain::{Choice, Field, Gender, Subject};
use crate::export::summary_lines;
use crate::form::{FormPhase, FormState, Notification, Severity};
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BannerInfo, FieldRow, FooterInfo, FormViewModel, HeaderInfo, SummaryView};

/// Width reserved for the label column, including the focus marker.
const LABEL_COLUMN: usize = 14;

/// Lines used by blank line, header, two borders and footer.
const CHROME_ROWS: usize = 5;

/// Each field takes its value line plus an error line.
const ROWS_PER_FIELD: usize = 2;

#[derive(Debug, Clone)]
pub struct AppState {
    /// The form session: record, error map, phase and snapshot.
    pub form: FormState,

    /// Focused field; moves in display order and wraps.
    pub focus: Field,

    /// Subject under the cursor while the subjects field has focus.
    pub subject_cursor: Subject,

    /// Path typed into the resume field, inspected on Enter.
    pub resume_draft: String,

    /// Banner from the last submit, cleared on reset and dismiss.
    pub banner: Option<Notification>,

    /// Outcome of the last export request in the summary view.
    pub export_status: Option<String>,

    pub theme: Theme,

    /// Export directory as configured (may start with `~`).
    pub export_dir: String,
}

impl AppState {
    #[must_use]
    pub fn new(theme: Theme, export_dir: String) -> Self {
        Self {
            form: FormState::new(),
            focus: Field::FirstName,
            subject_cursor: Subject::English,
            resume_draft: String::new(),
            banner: None,
            export_status: None,
            theme,
            export_dir,
        }
    }

    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        ViewMode::of(self.form.phase())
    }

    #[must_use]
    pub const fn input_kind(&self) -> InputKind {
        InputKind::of(self.focus)
    }

    /// Clears the UI state that belongs to one form session.
    pub(crate) fn clear_session_ui(&mut self) {
        self.focus = Field::FirstName;
        self.subject_cursor = Subject::English;
        self.resume_draft.clear();
        self.banner = None;
        self.export_status = None;
    }

    /// Builds the view model for a `rows` x `cols` pane.
    ///
    /// In the form view only as many fields as fit are listed, in a window
    /// kept around the focused field.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> FormViewModel {
        let header = self.compute_header();
        let banner = self.banner.as_ref().map(|n| BannerInfo {
            message: n.message.clone(),
            is_error: n.severity == Severity::Error,
        });
        let footer = self.compute_footer();

        if let Some(summary) = self.compute_summary() {
            return FormViewModel {
                header,
                fields: vec![],
                more_above: false,
                more_below: false,
                banner,
                summary: Some(summary),
                footer,
            };
        }

        let banner_rows = usize::from(banner.is_some());
        let window = (rows.saturating_sub(CHROME_ROWS + banner_rows) / ROWS_PER_FIELD).max(1);
        let total = Field::ALL.len();
        let focus_idx = Field::ALL.iter().position(|f| *f == self.focus).unwrap_or(0);

        let start = focus_idx
            .saturating_sub(window / 2)
            .min(total.saturating_sub(window));
        let end = (start + window).min(total);

        let value_width = cols.saturating_sub(LABEL_COLUMN + 1);
        let fields = Field::ALL[start..end]
            .iter()
            .map(|&field| self.compute_field_row(field, value_width))
            .collect();

        FormViewModel {
            header,
            fields,
            more_above: start > 0,
            more_below: end < total,
            banner,
            summary: None,
            footer,
        }
    }

    fn compute_field_row(&self, field: Field, value_width: usize) -> FieldRow {
        let is_focused = field == self.focus;
        FieldRow {
            label: field.label(),
            value: truncate(&self.display_value(field, is_focused), value_width),
            error: self.form.errors().get(field).map(str::to_string),
            is_focused,
        }
    }

    fn display_value(&self, field: Field, is_focused: bool) -> String {
        let record = self.form.record();
        match field {
            Field::Gender => radio_row(&Gender::ALL, record.gender, Gender::as_str),
            Field::Choice => radio_row(&Choice::ALL, record.choice, Choice::as_str),
            Field::Subjects => Subject::ALL
                .iter()
                .map(|&s| {
                    let mark = if record.subjects.contains(&s) { 'x' } else { ' ' };
                    if is_focused && s == self.subject_cursor {
                        format!("<[{mark}] {}>", s.as_str())
                    } else {
                        format!("[{mark}] {}", s.as_str())
                    }
                })
                .collect::<Vec<_>>()
                .join("  "),
            Field::Resume => {
                if is_focused && !self.resume_draft.is_empty() {
                    format!("{}_", self.resume_draft)
                } else {
                    match &record.resume {
                        Some(a) => format!("{} ({})", a.name, a.human_size()),
                        None if is_focused => "type a path, Enter to attach".to_string(),
                        None => "No file chosen".to_string(),
                    }
                }
            }
            text => {
                let value = record.text(text).unwrap_or_default().replace('\n', " \u{21b5} ");
                if is_focused {
                    format!("{value}_")
                } else {
                    value
                }
            }
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.form.phase() {
            FormPhase::Submitted => " Submission Summary ".to_string(),
            FormPhase::Editing | FormPhase::Rejected => match self.form.errors().len() {
                0 => " Registration Form ".to_string(),
                1 => " Registration Form (1 error) ".to_string(),
                n => format!(" Registration Form ({n} errors) "),
            },
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.view_mode() {
            ViewMode::Summary => {
                "j: export JSON  d: export document  Esc: edit  r: reset  q: quit".to_string()
            }
            ViewMode::Form => {
                let field_keys = match self.input_kind() {
                    InputKind::Text => "Type to edit",
                    InputKind::SingleChoice => "\u{2190}/\u{2192}: choose  Backspace: clear",
                    InputKind::MultiChoice => "\u{2190}/\u{2192}: move  Space: toggle",
                    InputKind::Attachment => "Type a path  Enter: attach",
                };
                format!("{field_keys}  Tab/Shift+Tab: field  Ctrl+s: submit  Ctrl+r: reset  Esc: quit")
            }
        };
        FooterInfo { keybindings }
    }

    fn compute_summary(&self) -> Option<SummaryView> {
        let submission = self.form.submission()?;
        Some(SummaryView {
            submitted_at: submission
                .submitted_at_utc()
                .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                .unwrap_or_default(),
            lines: summary_lines(submission.record()),
            export_status: self.export_status.clone(),
        })
    }
}

fn radio_row<T: Copy + PartialEq>(options: &[T], selected: Option<T>, name: fn(T) -> &'static str) -> String {
    options
        .iter()
        .map(|&option| {
            let mark = if selected == Some(option) { '\u{2022}' } else { ' ' };
            format!("({mark}) {}", name(option))
        })
        .collect::<Vec<_>>()
        .join("  ")
}
