//! Summary lines and the plain-text submission document.
//!
//! [`summary_lines`] derives the ordered label/value pairs shown in the
//! summary view and written to the document. The order is fixed: First Name,
//! Last Name, Email, Contact, Gender, Subjects, Resume, URL, Choice, About.

use crate::domain::{Field, FormRecord};
use crate::form::Submission;
use std::fmt::Write as _;

/// Title at the top of the exported document.
const DOCUMENT_TITLE: &str = "Form Submission";

/// Placeholder for a missing resume.
const NO_RESUME: &str = "N/A";

/// One label/value line of the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
}

/// Derives the summary lines of a record in display order.
///
/// # Example
///
/// ```
/// use zform::domain::FormRecord;
/// use zform::export::summary_lines;
///
/// let lines = summary_lines(&FormRecord::default());
/// assert_eq!(lines[3].label, "Contact");
/// assert_eq!(lines[6].value, "N/A");
/// ```
#[must_use]
pub fn summary_lines(record: &FormRecord) -> Vec<SummaryLine> {
    Field::ALL
        .into_iter()
        .map(|field| SummaryLine {
            label: field.label(),
            value: display_value(record, field),
        })
        .collect()
}

fn display_value(record: &FormRecord, field: Field) -> String {
    match field {
        Field::Gender => record.gender.map(|g| g.as_str().to_string()).unwrap_or_default(),
        Field::Choice => record.choice.map(|c| c.as_str().to_string()).unwrap_or_default(),
        Field::Subjects => record.subjects_joined(),
        Field::Resume => record
            .resume
            .as_ref()
            .map_or_else(|| NO_RESUME.to_string(), |r| r.name.clone()),
        text => record.text(text).unwrap_or_default().to_string(),
    }
}

/// Renders the submission as a plain-text document.
///
/// Layout:
///
/// ```text
/// Form Submission
/// ===============
/// Submitted: 2023-11-14 22:13:20 UTC
///
/// First Name: John
/// ...
/// ```
///
/// Multi-line values keep their line breaks, indented under the label.
#[must_use]
pub fn render_document(submission: &Submission) -> Vec<u8> {
    let mut out = String::new();

    let _ = writeln!(out, "{DOCUMENT_TITLE}");
    let _ = writeln!(out, "{}", "=".repeat(DOCUMENT_TITLE.len()));
    if let Some(at) = submission.submitted_at_utc() {
        let _ = writeln!(out, "Submitted: {}", at.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    out.push('\n');

    for line in summary_lines(submission.record()) {
        let mut parts = line.value.lines();
        let first = parts.next().unwrap_or_default();
        let _ = writeln!(out, "{}: {first}", line.label);
        for rest in parts {
            let _ = writeln!(out, "    {rest}");
        }
    }

    out.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Attachment, Choice, Gender, Subject};

    fn reference_record() -> FormRecord {
        let mut record = FormRecord {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@doe.com".to_string(),
            phone: "1234567890".to_string(),
            gender: Some(Gender::Female),
            resume: Some(Attachment::new("cv.pdf", 1000)),
            url: "https://x.com".to_string(),
            choice: Some(Choice::Yes),
            about: "hi".to_string(),
            ..FormRecord::default()
        };
        record.subjects.insert(Subject::Physics);
        record.subjects.insert(Subject::English);
        record
    }

    #[test]
    fn lines_follow_fixed_label_order() {
        let labels: Vec<&str> = summary_lines(&reference_record()).iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            vec![
                "First Name",
                "Last Name",
                "Email",
                "Contact",
                "Gender",
                "Subjects",
                "Resume",
                "URL",
                "Choice",
                "About"
            ]
        );
    }

    #[test]
    fn values_are_rendered_for_display() {
        let lines = summary_lines(&reference_record());
        assert_eq!(lines[3].value, "1234567890");
        assert_eq!(lines[4].value, "Female");
        assert_eq!(lines[5].value, "English, Physics");
        assert_eq!(lines[6].value, "cv.pdf");
        assert_eq!(lines[8].value, "Yes");
    }

    #[test]
    fn missing_selections_render_empty_or_placeholder() {
        let lines = summary_lines(&FormRecord::default());
        assert_eq!(lines[5].value, "");
        assert_eq!(lines[6].value, "N/A");
        assert_eq!(lines[8].value, "");
    }

    #[test]
    fn document_has_title_timestamp_and_lines() {
        let mut record = reference_record();
        record.about = "line one\nline two".to_string();
        let submission = Submission::new(record, 1_700_000_000);

        let text = String::from_utf8(render_document(&submission)).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Form Submission"));
        assert_eq!(lines.next(), Some("==============="));
        assert_eq!(lines.next(), Some("Submitted: 2023-11-14 22:13:20 UTC"));
        assert!(text.contains("First Name: John\n"));
        assert!(text.contains("Resume: cv.pdf\n"));
        assert!(text.ends_with("About: line one\n    line two\n"));
    }
}
