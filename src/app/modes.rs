//! View and input mode types.
//!
//! Both are derived, never stored: the view follows the form's lifecycle
//! phase, and the input kind follows the focused field. Key mapping in the
//! plugin shim and the footer hints read them.

use crate::domain::Field;
use crate::form::FormPhase;

/// Which screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Field list with inline errors (editing or rejected).
    Form,
    /// Read-only summary of the submitted record.
    Summary,
}

impl ViewMode {
    #[must_use]
    pub const fn of(phase: FormPhase) -> Self {
        match phase {
            FormPhase::Editing | FormPhase::Rejected => Self::Form,
            FormPhase::Submitted => Self::Summary,
        }
    }
}

/// How keystrokes are interpreted for the focused field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Typed characters edit the value.
    Text,
    /// Left/right cycle through a single-choice option set.
    SingleChoice,
    /// Left/right move a cursor; space toggles the option under it.
    MultiChoice,
    /// Typed characters build a path; Enter attaches the file.
    Attachment,
}

impl InputKind {
    #[must_use]
    pub const fn of(field: Field) -> Self {
        match field {
            Field::FirstName
            | Field::LastName
            | Field::Email
            | Field::Phone
            | Field::Url
            | Field::About => Self::Text,
            Field::Gender | Field::Choice => Self::SingleChoice,
            Field::Subjects => Self::MultiChoice,
            Field::Resume => Self::Attachment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_submitted_phase_shows_summary() {
        assert_eq!(ViewMode::of(FormPhase::Editing), ViewMode::Form);
        assert_eq!(ViewMode::of(FormPhase::Rejected), ViewMode::Form);
        assert_eq!(ViewMode::of(FormPhase::Submitted), ViewMode::Summary);
    }

    #[test]
    fn input_kind_agrees_with_text_fields() {
        for field in Field::ALL {
            assert_eq!(InputKind::of(field) == InputKind::Text, field.is_text(), "{field}");
        }
    }
}
