//! Resume attachment inspection.
//!
//! The form only needs the name, size and extension of a picked file; the
//! file contents are never read.

use crate::domain::{Attachment, Result, ZformError};
use crate::infrastructure::paths::expand_tilde;
use std::path::Path;

/// Builds an [`Attachment`] from a path typed by the user.
///
/// A leading `~` is mapped into the sandbox first. The path must name a
/// regular file.
///
/// # Errors
///
/// Returns [`ZformError::Io`] if the file cannot be inspected and
/// [`ZformError::Attachment`] if the path is a directory or has no file name.
pub fn inspect(path: &str) -> Result<Attachment> {
    let expanded = expand_tilde(path.trim());
    let path = Path::new(&expanded);
    let _span = tracing::debug_span!("inspect_attachment", path = %path.display()).entered();

    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(ZformError::Attachment(format!("not a file: {}", path.display())));
    }

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ZformError::Attachment(format!("no file name in {}", path.display())))?;

    let attachment = Attachment::new(name, metadata.len());
    tracing::debug!(name = %attachment.name, size = attachment.size_bytes, "attachment inspected");
    Ok(attachment)
}
