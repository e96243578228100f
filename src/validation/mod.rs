//! Field validation for the form record.
//!
//! Validation is a pure function of the record: [`validate_field`] judges a
//! single field (used for live feedback after every edit) and
//! [`validate_form`] runs the very same rules across every field (used on
//! submit). The result of a pass is an [`ErrorMap`].
//!
//! # Example
//!
//! ```
//! use zform::domain::{Field, FormRecord};
//! use zform::validation::{validate_field, validate_form, ValidationPass};
//!
//! let mut record = FormRecord::default();
//! record.first_name = "Al".to_string();
//!
//! assert_eq!(
//!     validate_field(Field::FirstName, &record, ValidationPass::Live),
//!     Some("Minimum 3 characters required")
//! );
//!
//! let errors = validate_form(&record);
//! assert_eq!(errors.get(Field::Choice), Some("Please select a choice"));
//! ```

pub mod rules;

use crate::domain::{Field, FormRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Which validation granularity is running.
///
/// Both passes share one rule table; the pass only selects the wording of the
/// choice field's missing-value message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationPass {
    /// Per-field validation after an edit.
    Live,
    /// Whole-form validation on submit.
    Submit,
}

/// Current validation error per field.
///
/// A field missing from the map is valid. Entries are written only by a
/// validation pass; outside the crate the map is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<Field, String>);

impl ErrorMap {
    /// Returns the error message for a field, if it is invalid.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Whether the field currently has an error.
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Whether every field is valid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of invalid fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over invalid fields in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Stores the outcome of validating one field.
    pub(crate) fn record(&mut self, field: Field, outcome: Option<&str>) {
        match outcome {
            Some(message) => {
                self.0.insert(field, message.to_string());
            }
            None => {
                self.0.remove(&field);
            }
        }
    }
}

/// Validates one field of the record.
///
/// Returns `None` when the field is valid, otherwise the message to show
/// next to it.
#[must_use]
pub fn validate_field(field: Field, record: &FormRecord, pass: ValidationPass) -> Option<&'static str> {
    rules::check(field, record, pass)
}

/// Validates every field of the record and returns a fresh error map.
///
/// The map is built from scratch; it never carries entries from an earlier
/// pass.
#[must_use]
pub fn validate_form(record: &FormRecord) -> ErrorMap {
    let _span = tracing::debug_span!("validate_form").entered();

    let mut errors = ErrorMap::default();
    for field in Field::ALL {
        errors.record(field, validate_field(field, record, ValidationPass::Submit));
    }

    tracing::debug!(error_count = errors.len(), "form validated");
    errors
}
