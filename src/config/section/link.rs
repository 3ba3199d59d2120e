//! Navigation link entries.
//!
//! Used by the `[header]`, `[page]` and `[footer]` sections. Entry order
//! in the profile is display order.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// One navigation entry.
///
/// `enabled = false` keeps a planned destination in the profile without
/// rendering it; disabled entries are exempt from the non-empty `href`
/// rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavLink {
    /// Display label.
    pub text: String,

    /// Navigation target (site path or URL).
    pub href: String,

    /// Whether the entry is rendered. Omitted from serialized output
    /// when true, so active entries round-trip without noise.
    #[serde(skip_serializing_if = "is_true")]
    pub enabled: bool,
}

const fn is_true(value: &bool) -> bool {
    *value
}

impl Default for NavLink {
    fn default() -> Self {
        Self {
            text: String::new(),
            href: String::new(),
            enabled: true,
        }
    }
}

impl NavLink {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
            enabled: true,
        }
    }

    /// A planned entry that is kept in the profile but not rendered.
    pub fn disabled(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            enabled: false,
            ..Self::new(text, href)
        }
    }

    /// Validate one entry of the list at `list` (e.g. "footer.nav").
    fn validate(&self, list: &'static str, index: usize, diag: &mut ConfigDiagnostics) {
        if self.text.is_empty() {
            diag.error(
                FieldPath::indexed(list, index, "text"),
                "display label must not be empty",
            );
        }

        // An enabled entry with no target renders as a dead link
        if self.enabled && self.href.is_empty() {
            diag.error_with_hint(
                FieldPath::indexed(list, index, "href"),
                "enabled entry has no navigation target",
                "set href, or keep the entry with enabled = false",
            );
        }
    }
}

/// Validate every entry of a navigation list.
pub fn validate_nav_list(list: &'static str, links: &[NavLink], diag: &mut ConfigDiagnostics) {
    for (index, link) in links.iter().enumerate() {
        link.validate(list, index, diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_by_default() {
        let link: NavLink = toml::from_str("text = \"Blog\"\nhref = \"/blog\"").unwrap();
        assert!(link.enabled);
        assert_eq!(link, NavLink::new("Blog", "/blog"));
    }

    #[test]
    fn test_disabled_entry_skips_href_rule() {
        let mut diag = ConfigDiagnostics::new();
        let links = [NavLink::disabled("Notes", "")];
        validate_nav_list("header.nav", &links, &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_enabled_entry_requires_href() {
        let mut diag = ConfigDiagnostics::new();
        let links = [NavLink::new("Blog", "/blog"), NavLink::new("Notes", "")];
        validate_nav_list("header.nav", &links, &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "header.nav[1].href");
    }

    #[test]
    fn test_empty_label_is_error_even_when_disabled() {
        let mut diag = ConfigDiagnostics::new();
        let links = [NavLink::disabled("", "/projects")];
        validate_nav_list("footer.nav", &links, &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "footer.nav[0].text");
    }

    #[test]
    fn test_enabled_true_not_serialized() {
        let active = toml::to_string(&NavLink::new("Blog", "/blog")).unwrap();
        assert!(!active.contains("enabled"));

        let planned = toml::to_string(&NavLink::disabled("Notes", "/blog/notes")).unwrap();
        assert!(planned.contains("enabled = false"));
    }
}
