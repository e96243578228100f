//! Domain layer for the zform plugin.
//!
//! Holds the form's data model and error types, independent of Zellij APIs
//! and of the rendering layer.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: The form record, its field identifiers and value types
//!
//! # Examples
//!
//! ```
//! use zform::domain::{Attachment, FormRecord};
//!
//! let mut record = FormRecord::default();
//! record.first_name = "John".to_string();
//! record.resume = Some(Attachment::new("cv.pdf", 1000));
//! assert_eq!(record.resume.unwrap().extension, "pdf");
//! ```

pub mod error;
pub mod record;

pub use error::{Result, ZformError};
pub use record::{Attachment, Choice, Field, FormRecord, Gender, Subject};
