//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for profile field paths.
///
/// Fixed paths are declared once in per-section `FIELDS` consts;
/// list entries get their path built on demand with [`FieldPath::indexed`].
///
/// # Example
///
/// ```ignore
/// diag.error(SiteInfoConfig::FIELDS.title, "required");
/// diag.error(FieldPath::indexed("header.nav", 2, "href"), "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    /// Build a path for one entry of a list field (e.g. `social[1].icon`).
    ///
    /// Leaks the formatted string; only ever called on the diagnostic path,
    /// which runs once per load.
    pub fn indexed(list: &str, index: usize, field: &str) -> Self {
        Self(Box::leak(
            format!("{list}[{index}].{field}").into_boxed_str(),
        ))
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_path() {
        let path = FieldPath::indexed("social", 3, "href");
        assert_eq!(path.as_str(), "social[3].href");
    }
}
