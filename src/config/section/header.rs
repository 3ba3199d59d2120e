//! `[header]` section: logo and header navigation.

use serde::{Deserialize, Serialize};

use super::{ImageAsset, NavLink, link::validate_nav_list};
use crate::config::{ConfigDiagnostics, FieldPath};

/// Site header: logo asset plus the main navigation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Logo displayed in the header.
    pub logo: ImageAsset,

    /// Header navigation entries, in display order.
    pub nav: Vec<NavLink>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            logo: ImageAsset::new("/favicon.svg", "Logo Image"),
            nav: vec![
                NavLink::new("Blog", "/blog"),
                // Planned destinations, not rendered yet
                NavLink::disabled("Notes", "/blog/notes"),
                NavLink::disabled("Talks", "/blog/talks"),
                NavLink::disabled("Projects", "/projects"),
            ],
        }
    }
}

impl HeaderConfig {
    pub const LOGO: FieldPath = FieldPath::new("header.logo");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.logo.validate(Self::LOGO, diag);
        validate_nav_list("header.nav", &self.nav, diag);
    }

    /// Entries that should actually be rendered, in order.
    pub fn active_nav(&self) -> impl Iterator<Item = &NavLink> {
        self.nav.iter().filter(|link| link.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_header() {
        let header = HeaderConfig::default();
        assert_eq!(header.logo, ImageAsset::new("/favicon.svg", "Logo Image"));
        assert_eq!(header.nav.len(), 4);

        // Only Blog is active; the rest are planned placeholders
        let active: Vec<_> = header.active_nav().collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].text, "Blog");
        assert_eq!(active[0].href, "/blog");

        let mut diag = ConfigDiagnostics::new();
        header.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_disabled_entries_preserve_targets() {
        let header = HeaderConfig::default();
        let planned: Vec<_> = header.nav.iter().filter(|l| !l.enabled).collect();
        assert_eq!(planned.len(), 3);
        assert_eq!(planned[0].href, "/blog/notes");
        assert_eq!(planned[2].href, "/projects");
    }
}
