use std::path::Path;

/// Replaces a leading home directory with `~`
///
/// The match is per path component, so a home of `/home/al` leaves `/home/alice` alone.
///
/// # Examples
///
/// ```no_run
/// use pi_fzf::format_path_with_tilde;
///
/// // Returns "~/projects/app" if the home directory is /Users/alice
/// let formatted = format_path_with_tilde("/Users/alice/projects/app");
/// ```
pub fn format_path_with_tilde(path: &str) -> String {
    format_path_with_tilde_internal(path, dirs::home_dir().as_deref())
}

/// Same as [`format_path_with_tilde`] with an explicit home directory
pub fn format_path_with_tilde_internal(path: &str, home: Option<&Path>) -> String {
    // An empty or root home would turn every absolute path into ~
    let home = home.filter(|h| h.parent().is_some());

    if let Some(home) = home
        && let Ok(rest) = Path::new(path).strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }

    path.to_string()
}
