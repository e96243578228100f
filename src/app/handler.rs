//! Event handling.
//!
//! [`handle_event`] is the only place the live [`FormState`] is replaced. Key
//! events become [`FieldInput`]s for the focused field and go through the
//! submission engine; engine notifications and I/O needs come back out as
//! [`Action`]s for the plugin shim.
//!
//! [`FormState`]: crate::form::FormState

use super::modes::InputKind;
use crate::app::{Action, AppState};
use crate::domain::record::cycle;
use crate::domain::{Attachment, Choice, Field, Gender, Result, Subject};
use crate::export::ExportKind;
use crate::form::{self, FieldInput, FormPhase, Transition};
use crate::infrastructure::expand_tilde;
use crate::worker::{ExportMessage, ExportResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves focus to the next field (wraps).
    FocusNext,
    /// Moves focus to the previous field (wraps).
    FocusPrev,
    /// A typed character for the focused field.
    Char(char),
    Backspace,
    /// Right arrow: next option or subject cursor.
    OptionNext,
    /// Left arrow: previous option or subject cursor.
    OptionPrev,
    /// Enter on the resume field: inspect the typed path.
    PickResume,
    /// Result of inspecting the typed resume path; `None` if it failed.
    ResumePicked(Option<Attachment>),
    Submit,
    Reset,
    /// Leaves the summary and resumes editing the submitted values.
    DismissSummary,
    /// Exports the submitted record through the worker.
    Export(ExportKind),
    CloseFocus,
    WorkerResponse(ExportResponse),
}

/// Applies one event to the state.
///
/// Returns whether the pane must be redrawn, plus the side effects to run.
///
/// # Errors
///
/// No event currently fails; the `Result` keeps the shim's error path for
/// handlers that need I/O.
///
/// # Example
///
/// ```
/// use zform::app::{handle_event, AppState, Event};
/// use zform::ui::Theme;
///
/// let mut state = AppState::new(Theme::default(), "~/zform-exports".to_string());
/// let (render, actions) = handle_event(&mut state, &Event::Char('J'))?;
/// assert!(render && actions.is_empty());
/// assert_eq!(state.form.record().first_name, "J");
/// # Ok::<(), zform::ZformError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, phase = ?state.form.phase()).entered();

    match event {
        Event::FocusNext => {
            state.focus = state.focus.next();
            Ok((true, vec![]))
        }
        Event::FocusPrev => {
            state.focus = state.focus.prev();
            Ok((true, vec![]))
        }
        Event::Char(c) => Ok((handle_char(state, *c), vec![])),
        Event::Backspace => Ok((handle_backspace(state), vec![])),
        Event::OptionNext => Ok((handle_option(state, true), vec![])),
        Event::OptionPrev => Ok((handle_option(state, false), vec![])),
        Event::PickResume => {
            if state.form.is_frozen() || state.focus != Field::Resume {
                return Ok((false, vec![]));
            }
            let path = state.resume_draft.trim();
            if path.is_empty() {
                tracing::debug!("empty resume path, clearing attachment");
                apply_edit(state, FieldInput::Resume(None));
                return Ok((true, vec![]));
            }
            Ok((false, vec![Action::InspectResume { path: path.to_string() }]))
        }
        Event::ResumePicked(attachment) => {
            if attachment.is_some() {
                state.resume_draft.clear();
            }
            tracing::debug!(attached = attachment.is_some(), "resume picked");
            apply_edit(state, FieldInput::Resume(attachment.clone()));
            Ok((true, vec![]))
        }
        Event::Submit => {
            let Transition { state: next, notification } = form::submit(state.form.clone());
            state.form = next;
            if state.form.phase() == FormPhase::Submitted {
                state.export_status = None;
            }
            let actions = notification.into_iter().map(Action::Notify).collect();
            Ok((true, actions))
        }
        Event::Reset => {
            state.form = form::reset(state.form.clone()).state;
            state.clear_session_ui();
            Ok((true, vec![]))
        }
        Event::DismissSummary => {
            if !state.form.is_frozen() {
                return Ok((false, vec![]));
            }
            state.form = form::dismiss(state.form.clone()).state;
            state.banner = None;
            state.export_status = None;
            Ok((true, vec![]))
        }
        Event::Export(kind) => {
            let Some(submission) = state.form.submission() else {
                tracing::debug!(kind = %kind, "export ignored outside the summary");
                return Ok((false, vec![]));
            };
            let message = ExportMessage::export(*kind, submission.clone(), expand_tilde(&state.export_dir));
            state.export_status = Some(format!("Exporting {kind}..."));
            Ok((true, vec![Action::PostToWorker(message)]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::WorkerResponse(response) => {
            if !state.form.is_frozen() {
                tracing::debug!(response = ?response, "export finished after leaving the summary");
                return Ok((false, vec![]));
            }
            state.export_status = Some(match response {
                ExportResponse::Exported { kind, path } => format!("{kind} saved to {path}"),
                ExportResponse::Error { message } => {
                    tracing::warn!(error = %message, "export failed");
                    message.clone()
                }
            });
            Ok((true, vec![]))
        }
    }
}

/// Applies an edit. Leaving the rejected phase drops the rejection banner.
fn apply_edit(state: &mut AppState, input: FieldInput) {
    let was_rejected = state.form.phase() == FormPhase::Rejected;
    state.form = form::edit(state.form.clone(), input).state;
    if was_rejected && state.form.phase() == FormPhase::Editing {
        state.banner = None;
    }
}

fn handle_char(state: &mut AppState, c: char) -> bool {
    if state.form.is_frozen() {
        return false;
    }

    match state.input_kind() {
        InputKind::Text => {
            let mut value = state.form.record().text(state.focus).unwrap_or_default().to_string();
            value.push(c);
            match FieldInput::text(state.focus, value) {
                Some(input) => {
                    apply_edit(state, input);
                    true
                }
                None => false,
            }
        }
        InputKind::SingleChoice if c == ' ' => handle_option(state, true),
        InputKind::MultiChoice if c == ' ' => {
            let subject = state.subject_cursor;
            let selected = !state.form.record().subjects.contains(&subject);
            apply_edit(state, FieldInput::Subject { subject, selected });
            true
        }
        InputKind::Attachment if c != '\n' => {
            state.resume_draft.push(c);
            true
        }
        InputKind::SingleChoice | InputKind::MultiChoice | InputKind::Attachment => false,
    }
}

fn handle_backspace(state: &mut AppState) -> bool {
    if state.form.is_frozen() {
        return false;
    }

    match state.focus {
        Field::Gender => {
            apply_edit(state, FieldInput::Gender(None));
            true
        }
        Field::Choice => {
            apply_edit(state, FieldInput::Choice(None));
            true
        }
        Field::Subjects => false,
        Field::Resume => state.resume_draft.pop().is_some(),
        text => {
            let mut value = state.form.record().text(text).unwrap_or_default().to_string();
            if value.pop().is_none() {
                return false;
            }
            FieldInput::text(text, value).is_some_and(|input| {
                apply_edit(state, input);
                true
            })
        }
    }
}

fn handle_option(state: &mut AppState, forward: bool) -> bool {
    if state.form.is_frozen() {
        return false;
    }

    let record = state.form.record();
    let input = match state.focus {
        Field::Gender => FieldInput::Gender(cycle(&Gender::ALL, record.gender, forward)),
        Field::Choice => FieldInput::Choice(cycle(&Choice::ALL, record.choice, forward)),
        Field::Subjects => {
            if let Some(next) = cycle(&Subject::ALL, Some(state.subject_cursor), forward) {
                state.subject_cursor = next;
            }
            return true;
        }
        _ => return false,
    };
    apply_edit(state, input);
    true
}
