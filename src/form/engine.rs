//! Submission engine: the state transitions of a form session.
//!
//! Every transition takes a [`FormState`] by value and returns a
//! [`Transition`] carrying the next state plus the notification to surface,
//! if any. Nothing here renders, performs I/O, or keeps hidden state, so the
//! whole lifecycle can be driven from tests without a UI.
//!
//! ```text
//!            edit (per-field validation)
//!          ┌─────────┐
//!          ▼         │
//!       Editing ─────┘──── submit ──┬── errors ──▶ Rejected ── edit ──▶ Editing
//!          ▲                        │
//!          │                        └── clean ───▶ Submitted (frozen)
//!          │                                          │
//!          └──────────── reset / dismiss ─────────────┘
//! ```

use super::store::{FormPhase, FormState, Submission};
use crate::domain::{Attachment, Choice, Field, FormRecord, Gender, Subject};
use crate::validation::{validate_field, validate_form, ValidationPass};

/// Banner text after a successful submit.
pub const SUBMIT_SUCCESS: &str = "Form submitted successfully";

/// Banner text after a rejected submit.
pub const SUBMIT_REJECTED: &str = "Please fix the highlighted errors before submitting";

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A transient banner message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Result of applying a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The state after the transition.
    pub state: FormState,
    /// Notification to emit, set only when a submit completes.
    pub notification: Option<Notification>,
}

impl Transition {
    const fn quiet(state: FormState) -> Self {
        Self {
            state,
            notification: None,
        }
    }
}

/// A single mutation of one field, as produced by one input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    FirstName(String),
    LastName(String),
    Email(String),
    Phone(String),
    Url(String),
    About(String),
    Gender(Option<Gender>),
    Choice(Option<Choice>),
    /// Checks or unchecks one subject.
    Subject { subject: Subject, selected: bool },
    /// Replaces the picked resume; `None` clears it.
    Resume(Option<Attachment>),
}

impl FieldInput {
    /// Builds the input that sets a text field to `value`.
    ///
    /// Returns `None` when `field` is not a text field.
    #[must_use]
    pub fn text(field: Field, value: String) -> Option<Self> {
        Some(match field {
            Field::FirstName => Self::FirstName(value),
            Field::LastName => Self::LastName(value),
            Field::Email => Self::Email(value),
            Field::Phone => Self::Phone(value),
            Field::Url => Self::Url(value),
            Field::About => Self::About(value),
            Field::Gender | Field::Subjects | Field::Resume | Field::Choice => return None,
        })
    }

    /// The field this input mutates.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::FirstName(_) => Field::FirstName,
            Self::LastName(_) => Field::LastName,
            Self::Email(_) => Field::Email,
            Self::Phone(_) => Field::Phone,
            Self::Url(_) => Field::Url,
            Self::About(_) => Field::About,
            Self::Gender(_) => Field::Gender,
            Self::Choice(_) => Field::Choice,
            Self::Subject { .. } => Field::Subjects,
            Self::Resume(_) => Field::Resume,
        }
    }

    fn apply(self, record: &mut FormRecord) {
        match self {
            Self::FirstName(value) => record.first_name = value,
            Self::LastName(value) => record.last_name = value,
            Self::Email(value) => record.email = value,
            Self::Phone(value) => record.phone = value,
            Self::Url(value) => record.url = value,
            Self::About(value) => record.about = value,
            Self::Gender(value) => record.gender = value,
            Self::Choice(value) => record.choice = value,
            Self::Subject { subject, selected } => {
                if selected {
                    record.subjects.insert(subject);
                } else {
                    record.subjects.remove(&subject);
                }
            }
            Self::Resume(value) => record.resume = value,
        }
    }
}

/// Applies one field mutation and re-validates that field only.
///
/// A rejected form goes back to editing while keeping its error map, which
/// then updates field by field. A submitted form is frozen and returns
/// unchanged.
#[must_use]
pub fn edit(mut state: FormState, input: FieldInput) -> Transition {
    let field = input.field();
    let _span = tracing::debug_span!("edit", field = %field, phase = ?state.phase).entered();

    if state.is_frozen() {
        tracing::debug!("record is frozen, edit ignored");
        return Transition::quiet(state);
    }

    input.apply(&mut state.record);
    let outcome = validate_field(field, &state.record, ValidationPass::Live);
    state.errors.record(field, outcome);
    state.phase = FormPhase::Editing;

    tracing::trace!(valid = outcome.is_none(), "field revalidated");
    Transition::quiet(state)
}

/// Submits the form, stamping a successful submission with the current time.
#[must_use]
pub fn submit(state: FormState) -> Transition {
    submit_at(state, chrono::Utc::now().timestamp())
}

/// Submits the form with an explicit submission time (Unix seconds).
///
/// The error map is replaced by a fresh whole-form pass. An empty map freezes
/// the record and yields a success notification; anything else rejects the
/// submit with a single error notification and leaves every value untouched.
/// Submitting an already submitted form does nothing.
#[must_use]
pub fn submit_at(mut state: FormState, submitted_at: i64) -> Transition {
    let _span = tracing::debug_span!("submit", phase = ?state.phase).entered();

    if state.is_frozen() {
        tracing::debug!("form already submitted");
        return Transition::quiet(state);
    }

    state.errors = validate_form(&state.record);

    if state.errors.is_empty() {
        state.phase = FormPhase::Submitted;
        state.submission = Some(Submission::new(state.record.clone(), submitted_at));
        tracing::debug!(submitted_at, "form submitted");
        Transition {
            state,
            notification: Some(Notification::success(SUBMIT_SUCCESS)),
        }
    } else {
        state.phase = FormPhase::Rejected;
        tracing::debug!(error_count = state.errors.len(), "submit rejected");
        Transition {
            state,
            notification: Some(Notification::error(SUBMIT_REJECTED)),
        }
    }
}

/// Returns the empty default form, whatever the current phase.
#[must_use]
pub fn reset(state: FormState) -> Transition {
    tracing::debug!(previous_phase = ?state.phase, "form reset");
    Transition::quiet(FormState::default())
}

/// Leaves the summary of a submitted form and resumes editing its values.
///
/// The snapshot is dropped; the record keeps its values. Outside the
/// submitted phase this does nothing.
#[must_use]
pub fn dismiss(mut state: FormState) -> Transition {
    if state.is_frozen() {
        tracing::debug!("summary dismissed");
        state.phase = FormPhase::Editing;
        state.submission = None;
    }
    Transition::quiet(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::rules;

    fn fill_valid(state: FormState) -> FormState {
        [
            FieldInput::FirstName("John".to_string()),
            FieldInput::LastName("Doe".to_string()),
            FieldInput::Email("john@doe.com".to_string()),
            FieldInput::Phone("1234567890".to_string()),
            FieldInput::Gender(Some(Gender::Male)),
            FieldInput::Subject {
                subject: Subject::Maths,
                selected: true,
            },
            FieldInput::Resume(Some(Attachment::new("cv.pdf", 1000))),
            FieldInput::Url("https://x.com".to_string()),
            FieldInput::Choice(Some(Choice::Yes)),
            FieldInput::About("hi".to_string()),
        ]
        .into_iter()
        .fold(state, |state, input| edit(state, input).state)
    }

    #[test]
    fn edit_validates_only_the_edited_field() {
        let t = edit(FormState::new(), FieldInput::FirstName("Al".to_string()));
        assert_eq!(t.state.errors().get(Field::FirstName), Some(rules::MIN_LENGTH));
        assert_eq!(t.state.errors().len(), 1);
        assert!(t.notification.is_none());

        let t = edit(t.state, FieldInput::FirstName("Ali".to_string()));
        assert!(t.state.errors().is_empty());
        assert_eq!(t.state.record().first_name, "Ali");
    }

    #[test]
    fn live_choice_error_uses_generic_message() {
        let t = edit(FormState::new(), FieldInput::Choice(None));
        assert_eq!(t.state.errors().get(Field::Choice), Some(rules::REQUIRED));
    }

    #[test]
    fn unchecking_last_subject_reports_it() {
        let state = edit(
            FormState::new(),
            FieldInput::Subject {
                subject: Subject::English,
                selected: true,
            },
        )
        .state;
        assert!(state.errors().is_empty());

        let state = edit(
            state,
            FieldInput::Subject {
                subject: Subject::English,
                selected: false,
            },
        )
        .state;
        assert_eq!(state.errors().get(Field::Subjects), Some(rules::SELECT_SUBJECT));
    }

    #[test]
    fn valid_record_submits_and_freezes() {
        let t = submit_at(fill_valid(FormState::new()), 1_700_000_000);

        assert_eq!(t.state.phase(), FormPhase::Submitted);
        assert!(t.state.errors().is_empty());
        assert_eq!(t.notification, Some(Notification::success(SUBMIT_SUCCESS)));

        let submission = t.state.submission().expect("snapshot present");
        assert_eq!(submission.record(), t.state.record());
        assert_eq!(submission.submitted_at(), 1_700_000_000);
    }

    #[test]
    fn invalid_record_is_rejected_without_touching_values() {
        let state = edit(FormState::new(), FieldInput::Email("nope".to_string())).state;
        let before = state.record().clone();

        let t = submit_at(state, 0);
        assert_eq!(t.state.phase(), FormPhase::Rejected);
        assert_eq!(t.notification, Some(Notification::error(SUBMIT_REJECTED)));
        assert_eq!(t.state.record(), &before);
        assert!(t.state.submission().is_none());
        assert_eq!(t.state.errors().get(Field::Email), Some(rules::INVALID_EMAIL));
        assert_eq!(t.state.errors().get(Field::Choice), Some(rules::SELECT_CHOICE));
    }

    #[test]
    fn submit_replaces_stale_errors() {
        let mut state = fill_valid(FormState::new());
        state = edit(state, FieldInput::FirstName("Al".to_string())).state;
        state = edit(state, FieldInput::FirstName("Alice".to_string())).state;
        state.errors.record(Field::Url, Some("stale"));

        let t = submit_at(state, 0);
        assert_eq!(t.state.phase(), FormPhase::Submitted);
        assert!(t.state.errors().is_empty());
    }

    #[test]
    fn editing_after_rejection_returns_to_editing() {
        let rejected = submit_at(FormState::new(), 0).state;
        let full = rejected.errors().len();

        let state = edit(rejected, FieldInput::About("hello".to_string())).state;
        assert_eq!(state.phase(), FormPhase::Editing);
        assert_eq!(state.errors().len(), full - 1);
    }

    #[test]
    fn submitted_record_ignores_edits_and_resubmits() {
        let submitted = submit_at(fill_valid(FormState::new()), 5).state;

        let after_edit = edit(submitted.clone(), FieldInput::FirstName("X".to_string())).state;
        assert_eq!(after_edit, submitted);

        let again = submit_at(submitted.clone(), 99);
        assert_eq!(again.state, submitted);
        assert!(again.notification.is_none());
    }

    #[test]
    fn reset_restores_the_empty_default_from_any_phase() {
        let editing = edit(FormState::new(), FieldInput::Phone("12".to_string())).state;
        let rejected = submit_at(editing.clone(), 0).state;
        let submitted = submit_at(fill_valid(FormState::new()), 0).state;

        for state in [editing, rejected, submitted] {
            let t = reset(state);
            assert_eq!(t.state, FormState::default());
            assert_eq!(t.state.record(), &FormRecord::default());
            assert!(t.state.errors().is_empty());
            assert_eq!(t.state.phase(), FormPhase::Editing);
        }
    }

    #[test]
    fn dismiss_unfreezes_but_keeps_values() {
        let submitted = submit_at(fill_valid(FormState::new()), 0).state;
        let record = submitted.record().clone();

        let state = dismiss(submitted).state;
        assert_eq!(state.phase(), FormPhase::Editing);
        assert!(state.submission().is_none());
        assert_eq!(state.record(), &record);

        let untouched = dismiss(FormState::new()).state;
        assert_eq!(untouched, FormState::new());
    }

    #[test]
    fn text_input_builder_rejects_selection_fields() {
        assert!(FieldInput::text(Field::Gender, String::new()).is_none());
        assert_eq!(
            FieldInput::text(Field::Url, "u".to_string()).map(|i| i.field()),
            Some(Field::Url)
        );
    }
}
