//! URL assembly helpers.

/// Join a base URL and an absolute path without doubling the slash.
///
/// Trailing slashes on `base` and leading slashes on `path` collapse to a
/// single `/`.
pub fn join_path(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}
