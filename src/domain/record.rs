//! Form record domain model.
//!
//! This module defines [`FormRecord`], the in-memory representation of every
//! field value for one form-filling session, together with the typed values it
//! holds ([`Gender`], [`Subject`], [`Choice`], [`Attachment`]) and the
//! [`Field`] identifiers used by validation, error maps and the UI.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

/// Number of bytes in one kibibyte.
const BYTES_PER_KIB: u64 = 1024;

/// Number of bytes in one mebibyte.
const BYTES_PER_MIB: u64 = 1024 * 1024;

/// Identifies one field of the form.
///
/// Variants are declared in display order, so the derived `Ord` sorts error
/// maps and summaries the same way the form is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Gender,
    Subjects,
    Resume,
    Url,
    Choice,
    About,
}

impl Field {
    /// Every field in display order.
    pub const ALL: [Self; 10] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Gender,
        Self::Subjects,
        Self::Resume,
        Self::Url,
        Self::Choice,
        Self::About,
    ];

    /// Returns the camelCase key used in serialized records.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Gender => "gender",
            Self::Subjects => "subjects",
            Self::Resume => "resume",
            Self::Url => "url",
            Self::Choice => "choice",
            Self::About => "about",
        }
    }

    /// Returns the human-readable label shown in the form and the summary.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Phone => "Contact",
            Self::Gender => "Gender",
            Self::Subjects => "Subjects",
            Self::Resume => "Resume",
            Self::Url => "URL",
            Self::Choice => "Choice",
            Self::About => "About",
        }
    }

    /// Whether the field accepts free-form typed text.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(
            self,
            Self::FirstName | Self::LastName | Self::Email | Self::Phone | Self::Url | Self::About
        )
    }

    /// Returns the field after this one, wrapping to the first.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Returns the field before this one, wrapping to the last.
    #[must_use]
    pub fn prev(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Gender selection. Required; the empty record starts on `Male`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

/// Answer to the "select your choice" question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Yes,
    No,
    Maybe,
}

impl Choice {
    pub const ALL: [Self; 3] = [Self::Yes, Self::No, Self::Maybe];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Maybe => "Maybe",
        }
    }
}

/// A subject the user can mark as a best subject.
///
/// Ordered so that a `BTreeSet<Subject>` always lists subjects the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Subject {
    English,
    Maths,
    Physics,
}

impl Subject {
    pub const ALL: [Self; 3] = [Self::English, Self::Maths, Self::Physics];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Maths => "Maths",
            Self::Physics => "Physics",
        }
    }
}

/// Cycles through a fixed option list, wrapping at both ends.
///
/// `None` steps onto the first option going forward and the last option going
/// backward.
pub(crate) fn cycle<T: Copy + PartialEq>(options: &[T], current: Option<T>, forward: bool) -> Option<T> {
    if options.is_empty() {
        return None;
    }
    let len = options.len();
    let next_idx = match current.and_then(|c| options.iter().position(|o| *o == c)) {
        Some(idx) if forward => (idx + 1) % len,
        Some(idx) => (idx + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    Some(options[next_idx])
}

/// Metadata of a picked resume file.
///
/// The form never reads file contents; it only judges the name, size and
/// extension reported by the attachment source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub name: String,
    pub size_bytes: u64,
    pub extension: String,
}

impl Attachment {
    /// Creates an attachment, deriving the extension from the file name.
    ///
    /// The extension is lowercased; a name without one gets an empty
    /// extension, which validation treats as a disallowed type.
    ///
    /// # Examples
    ///
    /// ```
    /// use zform::domain::Attachment;
    ///
    /// let cv = Attachment::new("CV.PDF", 1000);
    /// assert_eq!(cv.extension, "pdf");
    ///
    /// let bare = Attachment::new("resume", 10);
    /// assert_eq!(bare.extension, "");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        let name = name.into();
        let extension = Path::new(&name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        Self {
            name,
            size_bytes,
            extension,
        }
    }

    /// Returns the size formatted for display ("512 B", "1.5 KB", "2.0 MB").
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn human_size(&self) -> String {
        if self.size_bytes < BYTES_PER_KIB {
            format!("{} B", self.size_bytes)
        } else if self.size_bytes < BYTES_PER_MIB {
            format!("{:.1} KB", self.size_bytes as f64 / BYTES_PER_KIB as f64)
        } else {
            format!("{:.1} MB", self.size_bytes as f64 / BYTES_PER_MIB as f64)
        }
    }
}

/// All field values for one form-filling session.
///
/// Serialized with camelCase keys; this is exactly the shape the JSON export
/// writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub gender: Option<Gender>,
    pub subjects: BTreeSet<Subject>,
    pub resume: Option<Attachment>,
    pub url: String,
    pub choice: Option<Choice>,
    pub about: String,
}

impl Default for FormRecord {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            gender: Some(Gender::Male),
            subjects: BTreeSet::new(),
            resume: None,
            url: String::new(),
            choice: None,
            about: String::new(),
        }
    }
}

impl FormRecord {
    /// Returns the text value of a text field, or `None` for selection fields.
    #[must_use]
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => Some(&self.first_name),
            Field::LastName => Some(&self.last_name),
            Field::Email => Some(&self.email),
            Field::Phone => Some(&self.phone),
            Field::Url => Some(&self.url),
            Field::About => Some(&self.about),
            Field::Gender | Field::Subjects | Field::Resume | Field::Choice => None,
        }
    }

    /// Returns the subjects joined with ", " in their canonical order.
    #[must_use]
    pub fn subjects_joined(&self) -> String {
        self.subjects
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
