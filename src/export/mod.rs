//! Exports of a submitted form.
//!
//! Both exports are pure transforms of the frozen [`Submission`]: they read it
//! and produce bytes, never mutating it. Writing those bytes to disk is a
//! separate step ([`writer`]) that runs on the background worker.
//!
//! # Modules
//!
//! - [`json`]: Pretty-printed JSON of the record
//! - [`document`]: Ordered label/value summary lines and a plain-text document
//! - [`writer`]: Atomic file output into the export directory

pub mod document;
pub mod json;
pub mod writer;

use crate::domain::Result;
use crate::form::Submission;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use document::{render_document, summary_lines, SummaryLine};
pub use json::to_json_bytes;
pub use writer::write_export;

/// The kinds of export a submission can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportKind {
    /// The record as JSON.
    Json,
    /// The summary lines as a text document.
    Document,
}

impl ExportKind {
    /// File extension used for exported files of this kind.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Document => "txt",
        }
    }

    /// Produces the export bytes for a submission.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON encoding fails.
    pub fn render(self, submission: &Submission) -> Result<Vec<u8>> {
        match self {
            Self::Json => to_json_bytes(submission.record()),
            Self::Document => Ok(render_document(submission)),
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("JSON"),
            Self::Document => f.write_str("document"),
        }
    }
}
