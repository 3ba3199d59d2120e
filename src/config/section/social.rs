//! `[[social]]` entries: external profile links.
//!
//! # Example
//!
//! ```toml
//! [[social]]
//! text = "GitHub"
//! href = "https://github.com/taiseidev"
//! icon = "i-simple-icons-github"
//! header = "i-ri-github-line"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Where a social link is being rendered, for icon resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconPlacement {
    /// Site header; prefers the entry's `header` icon when present.
    Header,
    /// Anywhere else (footer, about page, ...).
    #[default]
    Default,
}

/// One external profile link.
///
/// An empty `href` is the sentinel for "defined but has no destination yet":
/// the entry is listed, but renderers must not make it clickable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    /// Display label (e.g. "GitHub").
    pub text: String,

    /// Destination URL; empty string means "placeholder, not clickable".
    pub href: String,

    /// Icon identifier used everywhere by default.
    pub icon: String,

    /// Alternate icon identifier for header placement.
    /// Absent means the default icon is reused in every context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
}

impl SocialLink {
    pub fn new(
        text: impl Into<String>,
        href: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
            icon: icon.into(),
            header: None,
        }
    }

    /// Set a header-specific icon.
    pub fn with_header_icon(mut self, icon: impl Into<String>) -> Self {
        self.header = Some(icon.into());
        self
    }

    /// Whether the entry has a destination.
    pub fn is_clickable(&self) -> bool {
        !self.href.is_empty()
    }

    /// Resolve the icon for a placement, falling back to the default icon
    /// when no header-specific one is supplied.
    pub fn icon_for(&self, placement: IconPlacement) -> &str {
        match placement {
            IconPlacement::Header => self.header.as_deref().unwrap_or(&self.icon),
            IconPlacement::Default => &self.icon,
        }
    }

    /// Validate one `[[social]]` entry.
    ///
    /// # Checks
    /// - `text` and `icon` must not be empty
    /// - a non-empty `href` must be an absolute http(s) URL
    pub fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        if self.text.is_empty() {
            diag.error(
                FieldPath::indexed("social", index, "text"),
                "display label must not be empty",
            );
        }

        if self.icon.is_empty() {
            diag.error_with_hint(
                FieldPath::indexed("social", index, "icon"),
                "icon identifier must not be empty",
                "use an icon name like \"i-simple-icons-github\"",
            );
        }

        // Empty href is a valid placeholder; only a set value is checked
        if !self.href.is_empty() {
            self.validate_href(index, diag);
        }
    }

    fn validate_href(&self, index: usize, diag: &mut ConfigDiagnostics) {
        let field = FieldPath::indexed("social", index, "href");
        match url::Url::parse(&self.href) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        field,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://github.com/you",
                    );
                } else if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        field,
                        "URL must have a valid host",
                        "use format like https://github.com/you",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    field,
                    format!("invalid URL: {}", e),
                    "use format like https://github.com/you",
                );
            }
        }
    }
}

/// The built-in social links, in display order.
pub(crate) fn default_social_links() -> Vec<SocialLink> {
    vec![
        SocialLink::new("GitHub", "https://github.com/taiseidev", "i-simple-icons-github")
            .with_header_icon("i-ri-github-line"),
        SocialLink::new("Twitter", "https://x.com/taisei59119317", "i-simple-icons-x")
            .with_header_icon("i-ri-twitter-x-line"),
        SocialLink::new("Linkedin", "", "i-simple-icons-linkedin"),
        SocialLink::new("Instagram", "", "i-simple-icons-instagram"),
        SocialLink::new("Youtube", "", "i-simple-icons-youtube"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_resolution_with_header_icon() {
        let github = SocialLink::new(
            "GitHub",
            "https://github.com/taiseidev",
            "i-simple-icons-github",
        )
        .with_header_icon("i-ri-github-line");

        assert!(github.is_clickable());
        assert_eq!(github.icon_for(IconPlacement::Header), "i-ri-github-line");
        assert_eq!(
            github.icon_for(IconPlacement::Default),
            "i-simple-icons-github"
        );
    }

    #[test]
    fn test_icon_fallback_without_header_icon() {
        let linkedin = SocialLink::new("Linkedin", "", "i-simple-icons-linkedin");

        // No destination: listed but not clickable
        assert!(!linkedin.is_clickable());
        // Same icon in every context
        assert_eq!(
            linkedin.icon_for(IconPlacement::Header),
            "i-simple-icons-linkedin"
        );
        assert_eq!(
            linkedin.icon_for(IconPlacement::Default),
            "i-simple-icons-linkedin"
        );
    }

    #[test]
    fn test_placeholder_href_is_valid() {
        let mut diag = ConfigDiagnostics::new();
        SocialLink::new("Youtube", "", "i-simple-icons-youtube").validate(4, &mut diag);
        assert!(diag.is_empty());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_empty_text_and_icon_are_errors() {
        let mut diag = ConfigDiagnostics::new();
        SocialLink::new("", "", "").validate(0, &mut diag);
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].field.as_str(), "social[0].text");
        assert_eq!(diag.errors()[1].field.as_str(), "social[0].icon");
    }

    #[test]
    fn test_invalid_href_is_error() {
        let mut diag = ConfigDiagnostics::new();
        SocialLink::new("GitHub", "github.com/you", "i-simple-icons-github")
            .validate(0, &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "social[0].href");
    }

    #[test]
    fn test_non_http_scheme_is_error() {
        let mut diag = ConfigDiagnostics::new();
        SocialLink::new("Mail", "mailto:me@example.com", "i-ri-mail-line")
            .validate(0, &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("mailto"));
    }

    #[test]
    fn test_header_icon_absence_round_trips() {
        let serialized = toml::to_string(&default_social_links()[2]).unwrap();
        assert!(!serialized.contains("header"));

        let parsed: SocialLink = toml::from_str(&serialized).unwrap();
        assert!(parsed.header.is_none());
        assert_eq!(parsed.href, "");
    }
}
