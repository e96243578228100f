//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which
//! points at the working directory Zellij was started from (usually the
//! user's home). Paths typed by the user or read from configuration are
//! mapped into the sandbox before use and mapped back for display.

use std::path::PathBuf;

const HOST_ROOT: &str = "/host";

/// Directory holding the plugin's trace file.
///
/// Resolves to `/host/.local/share/zellij/zform`, which is
/// `~/.local/share/zellij/zform` on the host when Zellij runs from home.
///
/// ```
/// use zform::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/zform"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij").join("zform")
}

/// Maps a leading `~` onto the sandbox's `/host` mount.
///
/// ```
/// use zform::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/zform-exports"), "/host/zform-exports");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/tmp/out"), "/tmp/out");
/// assert_eq!(expand_tilde("~user/x"), "~user/x");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}

/// Removes the `/host` mount prefix so paths read as they do on the host.
///
/// Only a whole leading component is stripped.
///
/// ```
/// use zform::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/zform-exports/a.json"), "/zform-exports/a.json");
/// assert_eq!(strip_host_prefix("/hostile/a.json"), "/hostile/a.json");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    match path.strip_prefix(HOST_ROOT) {
        Some("") => "/".to_string(),
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_then_strip_gives_home_relative_path() {
        let expanded = expand_tilde("~/docs/cv.pdf");
        assert_eq!(expanded, "/host/docs/cv.pdf");
        assert_eq!(strip_host_prefix(&expanded), "/docs/cv.pdf");
    }

    #[test]
    fn bare_host_root_strips_to_slash() {
        assert_eq!(strip_host_prefix("/host"), "/");
    }

    #[test]
    fn relative_paths_are_untouched() {
        assert_eq!(expand_tilde("cv.pdf"), "cv.pdf");
        assert_eq!(strip_host_prefix("cv.pdf"), "cv.pdf");
    }
}
