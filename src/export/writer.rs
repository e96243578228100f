//! Writes export bytes into the export directory.
//!
//! Files are named after the submission time, `submission-YYYYmmdd-HHMMSS`,
//! with the kind's extension. An existing file is never overwritten: a numeric
//! suffix (`-1`, `-2`, ...) is appended until the name is free. Writes go to a
//! temporary file first and are renamed into place.

use super::ExportKind;
use crate::domain::{Result, ZformError};
use std::path::{Path, PathBuf};

/// Upper bound on the numeric suffixes tried for a single timestamp.
const MAX_SUFFIX: u32 = 1000;

/// Writes `bytes` as a new export file in `dir` and returns its path.
///
/// The directory is created if missing.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, no free file name is
/// found, or the write or rename fails.
///
/// # Example
///
/// ```no_run
/// use zform::export::{write_export, ExportKind};
/// use std::path::Path;
///
/// let path = write_export(Path::new("/tmp/exports"), ExportKind::Json, 0, b"{}\n")?;
/// assert!(path.ends_with("submission-19700101-000000.json"));
/// # Ok::<(), zform::ZformError>(())
/// ```
pub fn write_export(dir: &Path, kind: ExportKind, submitted_at: i64, bytes: &[u8]) -> Result<PathBuf> {
    let _span = tracing::debug_span!("write_export", dir = %dir.display(), kind = %kind).entered();

    std::fs::create_dir_all(dir)?;

    let stem = file_stem(submitted_at)?;
    let target = free_path(dir, &stem, kind.extension())?;

    let tmp_path = target.with_extension("tmp");
    tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
    std::fs::write(&tmp_path, bytes)?;

    if let Err(e) = std::fs::rename(&tmp_path, &target) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    tracing::debug!(path = %target.display(), size = bytes.len(), "export written");
    Ok(target)
}

fn file_stem(submitted_at: i64) -> Result<String> {
    let at = chrono::DateTime::from_timestamp(submitted_at, 0)
        .ok_or_else(|| ZformError::Export(format!("invalid submission time: {submitted_at}")))?;
    Ok(format!("submission-{}", at.format("%Y%m%d-%H%M%S")))
}

fn free_path(dir: &Path, stem: &str, extension: &str) -> Result<PathBuf> {
    let first = dir.join(format!("{stem}.{extension}"));
    if !first.exists() {
        return Ok(first);
    }

    (1..=MAX_SUFFIX)
        .map(|n| dir.join(format!("{stem}-{n}.{extension}")))
        .find(|candidate| !candidate.exists())
        .ok_or_else(|| ZformError::Export(format!("no free file name for {stem} in {}", dir.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_file_named_after_submission_time() {
        let dir = tempfile::tempdir().unwrap();

        let path = write_export(dir.path(), ExportKind::Json, 1_700_000_000, b"{}\n").unwrap();

        assert_eq!(path, dir.path().join("submission-20231114-221320.json"));
        assert_eq!(std::fs::read(&path).unwrap(), b"{}\n");
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let path = write_export(&nested, ExportKind::Document, 0, b"doc").unwrap();

        assert!(path.starts_with(&nested));
        assert!(path.ends_with("submission-19700101-000000.txt"));
    }

    #[test]
    fn never_overwrites_existing_exports() {
        let dir = tempfile::tempdir().unwrap();

        let first = write_export(dir.path(), ExportKind::Json, 0, b"one").unwrap();
        let second = write_export(dir.path(), ExportKind::Json, 0, b"two").unwrap();
        let third = write_export(dir.path(), ExportKind::Json, 0, b"three").unwrap();

        assert_eq!(std::fs::read(&first).unwrap(), b"one");
        assert!(second.ends_with("submission-19700101-000000-1.json"));
        assert!(third.ends_with("submission-19700101-000000-2.json"));
    }

    #[test]
    fn leaves_no_temporary_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        write_export(dir.path(), ExportKind::Document, 0, b"doc").unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn out_of_range_timestamp_is_an_export_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_export(dir.path(), ExportKind::Json, i64::MAX, b"").unwrap_err();
        assert!(matches!(err, ZformError::Export(_)));
    }
}
