//! Form state container.
//!
//! [`FormState`] bundles the record being edited, the error map derived from
//! it, the lifecycle phase and, once submitted, the frozen [`Submission`].
//! Its fields are private: the only way to change a `FormState` is through
//! the transitions in [`engine`](super::engine), which keeps the error map a
//! function of the record.

use crate::domain::FormRecord;
use crate::validation::ErrorMap;
use serde::{Deserialize, Serialize};

/// Lifecycle phase of the form.
///
/// Submission is also a phase conceptually, but it is transient: it begins and
/// ends inside a single call to [`submit`](super::engine::submit), so it never
/// appears here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// The user is filling in fields; errors update per edited field.
    #[default]
    Editing,
    /// The last submit failed; every invalid field carries its error.
    Rejected,
    /// The last submit succeeded; the record is frozen.
    Submitted,
}

/// Immutable copy of the record taken at the moment of a successful submit.
///
/// Feeds the summary view and the exports. Nothing can mutate it once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    record: FormRecord,
    submitted_at: i64,
}

impl Submission {
    /// Freezes a record with its submission time (Unix seconds).
    #[must_use]
    pub const fn new(record: FormRecord, submitted_at: i64) -> Self {
        Self {
            record,
            submitted_at,
        }
    }

    #[must_use]
    pub const fn record(&self) -> &FormRecord {
        &self.record
    }

    /// Unix timestamp (seconds) of the submission.
    #[must_use]
    pub const fn submitted_at(&self) -> i64 {
        self.submitted_at
    }

    /// Submission time as a UTC date-time, if the timestamp is representable.
    #[must_use]
    pub fn submitted_at_utc(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp(self.submitted_at, 0)
    }
}

/// Complete state of one form session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub(super) record: FormRecord,
    pub(super) errors: ErrorMap,
    pub(super) phase: FormPhase,
    pub(super) submission: Option<Submission>,
}

impl FormState {
    /// Returns a fresh, empty form in the editing phase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn record(&self) -> &FormRecord {
        &self.record
    }

    #[must_use]
    pub const fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    /// The frozen snapshot, present only in the submitted phase.
    #[must_use]
    pub const fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    /// Whether edits are currently refused.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.phase == FormPhase::Submitted
    }
}
