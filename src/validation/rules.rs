//! Per-field validation rules and their user-facing messages.
//!
//! Every rule is a pure function of the record. The rule table here is the
//! only definition of what a valid field is; live validation and submit-time
//! validation both go through [`check`].

use super::ValidationPass;
use crate::domain::{Attachment, Field, FormRecord};
use once_cell::sync::Lazy;
use regex::Regex;

pub const REQUIRED: &str = "This field is required";
pub const MIN_LENGTH: &str = "Minimum 3 characters required";
pub const INVALID_EMAIL: &str = "Invalid email";
pub const INVALID_PHONE: &str = "Must be 10 digits";
pub const INVALID_URL: &str = "Enter a valid URL";
pub const SELECT_CHOICE: &str = "Please select a choice";
pub const SELECT_SUBJECT: &str = "Please select at least one subject";
pub const UPLOAD_RESUME: &str = "Please upload your resume";
pub const RESUME_TYPE: &str = "Only PDF or DOC files are allowed";
pub const RESUME_SIZE: &str = "File size must be under 2MB";

/// Minimum number of characters in a trimmed first or last name.
pub const MIN_NAME_CHARS: usize = 3;

/// Largest accepted resume size (2 MiB).
pub const MAX_RESUME_BYTES: u64 = 2 * 1024 * 1024;

/// Accepted resume extensions, compared case-insensitively.
pub const RESUME_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

// ASCII classes on purpose: `\w` and `\d` are Unicode-aware in `regex`.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@[a-zA-Z_-]+\.[a-zA-Z]{2,3}$").expect("email pattern is valid")
});

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://.+$").expect("url pattern is valid"));

/// Runs the rule for one field against the record.
///
/// Required-ness is checked before any format rule, so a blank value always
/// reports the required message rather than a format message.
pub(crate) fn check(field: Field, record: &FormRecord, pass: ValidationPass) -> Option<&'static str> {
    match field {
        Field::FirstName => name(&record.first_name),
        Field::LastName => name(&record.last_name),
        Field::Email => pattern(&record.email, &EMAIL_REGEX, INVALID_EMAIL),
        Field::Phone => pattern(&record.phone, &PHONE_REGEX, INVALID_PHONE),
        Field::Url => pattern(&record.url, &URL_REGEX, INVALID_URL),
        Field::About => required(&record.about),
        Field::Gender => record.gender.is_none().then_some(REQUIRED),
        Field::Choice => record.choice.is_none().then(|| match pass {
            ValidationPass::Live => REQUIRED,
            ValidationPass::Submit => SELECT_CHOICE,
        }),
        Field::Subjects => record.subjects.is_empty().then_some(SELECT_SUBJECT),
        Field::Resume => record.resume.as_ref().map_or(Some(UPLOAD_RESUME), resume),
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn required(value: &str) -> Option<&'static str> {
    is_blank(value).then_some(REQUIRED)
}

fn name(value: &str) -> Option<&'static str> {
    required(value).or_else(|| (value.trim().chars().count() < MIN_NAME_CHARS).then_some(MIN_LENGTH))
}

fn pattern(value: &str, regex: &Regex, message: &'static str) -> Option<&'static str> {
    required(value).or_else(|| (!regex.is_match(value)).then_some(message))
}

/// Judges a picked resume.
///
/// Both checks run; when the extension and the size are both wrong the size
/// message wins.
fn resume(attachment: &Attachment) -> Option<&'static str> {
    let mut outcome = None;

    let extension = attachment.extension.to_lowercase();
    if !RESUME_EXTENSIONS.contains(&extension.as_str()) {
        outcome = Some(RESUME_TYPE);
    }

    if attachment.size_bytes > MAX_RESUME_BYTES {
        outcome = Some(RESUME_SIZE);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Choice, Subject};

    fn live(field: Field, record: &FormRecord) -> Option<&'static str> {
        check(field, record, ValidationPass::Live)
    }

    fn with_text(field: Field, value: &str) -> FormRecord {
        let mut record = FormRecord::default();
        let slot = match field {
            Field::FirstName => &mut record.first_name,
            Field::LastName => &mut record.last_name,
            Field::Email => &mut record.email,
            Field::Phone => &mut record.phone,
            Field::Url => &mut record.url,
            Field::About => &mut record.about,
            _ => unreachable!("not a text field"),
        };
        *slot = value.to_string();
        record
    }

    #[test]
    fn blank_text_fields_are_required() {
        for field in Field::ALL.into_iter().filter(|f| f.is_text()) {
            assert_eq!(live(field, &with_text(field, "")), Some(REQUIRED), "{field}");
            assert_eq!(live(field, &with_text(field, "   \t")), Some(REQUIRED), "{field}");
        }
    }

    #[test]
    fn names_need_three_trimmed_characters() {
        assert_eq!(live(Field::FirstName, &with_text(Field::FirstName, "Al")), Some(MIN_LENGTH));
        assert_eq!(live(Field::FirstName, &with_text(Field::FirstName, "Ali")), None);
        assert_eq!(live(Field::LastName, &with_text(Field::LastName, "  Al  ")), Some(MIN_LENGTH));
        assert_eq!(live(Field::LastName, &with_text(Field::LastName, "Doe")), None);
    }

    #[test]
    fn email_top_level_domain_is_two_or_three_letters() {
        assert_eq!(live(Field::Email, &with_text(Field::Email, "a@b.co")), None);
        assert_eq!(live(Field::Email, &with_text(Field::Email, "a@b.com")), None);
        assert_eq!(live(Field::Email, &with_text(Field::Email, "a@b.c")), Some(INVALID_EMAIL));
        assert_eq!(live(Field::Email, &with_text(Field::Email, "a@b.coma")), Some(INVALID_EMAIL));
        assert_eq!(live(Field::Email, &with_text(Field::Email, "john.doe@x.io")), None);
        assert_eq!(live(Field::Email, &with_text(Field::Email, "john@sub.x.io")), Some(INVALID_EMAIL));
    }

    #[test]
    fn phone_is_exactly_ten_digits() {
        assert_eq!(live(Field::Phone, &with_text(Field::Phone, "12345")), Some(INVALID_PHONE));
        assert_eq!(live(Field::Phone, &with_text(Field::Phone, "1234567890")), None);
        assert_eq!(live(Field::Phone, &with_text(Field::Phone, "12345678901")), Some(INVALID_PHONE));
        assert_eq!(live(Field::Phone, &with_text(Field::Phone, "12345abcde")), Some(INVALID_PHONE));
    }

    #[test]
    fn url_requires_http_scheme() {
        assert_eq!(live(Field::Url, &with_text(Field::Url, "ftp://x.com")), Some(INVALID_URL));
        assert_eq!(live(Field::Url, &with_text(Field::Url, "https://x.com")), None);
        assert_eq!(live(Field::Url, &with_text(Field::Url, "http://x")), None);
        assert_eq!(live(Field::Url, &with_text(Field::Url, "https://")), Some(INVALID_URL));
    }

    #[test]
    fn about_only_needs_content() {
        assert_eq!(live(Field::About, &with_text(Field::About, "hi")), None);
    }

    #[test]
    fn choice_message_depends_on_pass() {
        let record = FormRecord::default();
        assert_eq!(check(Field::Choice, &record, ValidationPass::Live), Some(REQUIRED));
        assert_eq!(check(Field::Choice, &record, ValidationPass::Submit), Some(SELECT_CHOICE));

        let answered = FormRecord {
            choice: Some(Choice::Maybe),
            ..FormRecord::default()
        };
        assert_eq!(check(Field::Choice, &answered, ValidationPass::Submit), None);
    }

    #[test]
    fn gender_is_required_when_cleared() {
        let record = FormRecord {
            gender: None,
            ..FormRecord::default()
        };
        assert_eq!(live(Field::Gender, &record), Some(REQUIRED));
        assert_eq!(live(Field::Gender, &FormRecord::default()), None);
    }

    #[test]
    fn subjects_must_not_be_empty() {
        let mut record = FormRecord::default();
        assert_eq!(live(Field::Subjects, &record), Some(SELECT_SUBJECT));
        record.subjects.insert(Subject::Maths);
        assert_eq!(live(Field::Subjects, &record), None);
    }

    #[test]
    fn resume_rules_report_missing_type_and_size() {
        let mut record = FormRecord::default();
        assert_eq!(live(Field::Resume, &record), Some(UPLOAD_RESUME));

        record.resume = Some(Attachment::new("virus.exe", 500));
        assert_eq!(live(Field::Resume, &record), Some(RESUME_TYPE));

        record.resume = Some(Attachment::new("cv.pdf", 3_000_000));
        assert_eq!(live(Field::Resume, &record), Some(RESUME_SIZE));

        record.resume = Some(Attachment::new("cv.docx", MAX_RESUME_BYTES));
        assert_eq!(live(Field::Resume, &record), None);

        record.resume = Some(Attachment::new("CV.DOC", 10));
        assert_eq!(live(Field::Resume, &record), None);
    }

    #[test]
    fn oversized_wrong_type_reports_size() {
        let record = FormRecord {
            resume: Some(Attachment::new("virus.exe", 3_000_000)),
            ..FormRecord::default()
        };
        assert_eq!(live(Field::Resume, &record), Some(RESUME_SIZE));
    }

    #[test]
    fn resume_without_extension_is_a_type_error() {
        let record = FormRecord {
            resume: Some(Attachment {
                name: "resume".to_string(),
                size_bytes: 100,
                extension: String::new(),
            }),
            ..FormRecord::default()
        };
        assert_eq!(live(Field::Resume, &record), Some(RESUME_TYPE));
    }
}
