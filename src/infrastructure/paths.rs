//! Path helpers for the Zellij sandbox.

use std::path::PathBuf;

/// Returns the directory holding the plugin's trace file.
///
/// `/host` is the folder Zellij was started from, usually the home
/// directory, so this resolves to `~/.local/share/zellij/advocate-directory`.
///
/// ```
/// use advocate_directory::infrastructure::get_data_dir;
///
/// assert_eq!(
///     get_data_dir().to_str(),
///     Some("/host/.local/share/zellij/advocate-directory")
/// );
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("advocate-directory")
}

/// Rewrites a leading `~` to the sandbox's `/host` mount.
///
/// Used for the `theme_file` option, which users write as a host path.
///
/// ```
/// use advocate_directory::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// assert_eq!(expand_tilde("~other/theme.toml"), "~other/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}
