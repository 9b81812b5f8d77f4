//! Path manipulation utilities for the Zellij sandbox environment.

use std::path::PathBuf;

/// Returns the data directory for Daybook files (the log file).
///
/// The directory is `/host/.local/share/zellij/daybook` in the Zellij sandbox. In
/// Zellij's plugin environment, `/host` points to the cwd of the last focused
/// terminal, or the folder where Zellij was started, which is typically the user's
/// home directory.
///
/// # Examples
///
/// ```
/// use daybook::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/daybook");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("daybook")
}

/// Expands tilde paths to use the `/host` prefix for the Zellij sandbox.
///
/// # Examples
///
/// ```
/// use daybook::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/mine.toml"), "/host/themes/mine.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
