//! Profile utility functions.

use std::path::{Path, PathBuf};

/// Find the profile file by searching upward from the current directory.
///
/// Starts from cwd and walks up parent directories until `config_name` is
/// found. Returns the absolute path if found, `None` when the built-in
/// profile should be used instead.
///
/// # Example
/// ```text
/// /home/user/blog/content/posts/  ← cwd
/// /home/user/blog/site.toml       ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    // An absolute path is used as-is, no searching
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(&path, "[site]\n").unwrap();
        assert_eq!(find_config_file(&path), Some(path));
    }

    #[test]
    fn test_absolute_path_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert_eq!(find_config_file(&path), None);
    }
}
