//! User-supplied config paths (`--config`, `SLEEPY_CONFIG`).

use std::path::PathBuf;

/// Resolve a leading `~` or `~/` against the home directory. Other paths,
/// and `~user` forms, are returned unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with('/') || rest.starts_with('\\') => &rest[1..],
        _ => return PathBuf::from(path),
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}
