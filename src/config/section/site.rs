//! `[site]` section: site identity.
//!
//! # Example
//!
//! ```toml
//! [site]
//! author = "Taisei Onishi"
//! title = "taiseidev"
//! email = "onishi.taisei1997@gmail.com"
//!
//! [site.image]
//! src = "/main_image"
//! alt = "Website Main Image"
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::ImageAsset;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Fixed field paths for `[site]` diagnostics.
pub struct SiteInfoFields {
    pub author: FieldPath,
    pub title: FieldPath,
    pub email: FieldPath,
    pub image: FieldPath,
}

/// Site identity: author, title, contact, and the representative image.
///
/// `subtitle` and `description` may be empty strings: the field is present,
/// intentionally blank. Renderer-specific additions go in `[site.extra]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Author name.
    pub author: String,

    /// Site display name.
    pub title: String,

    /// Tagline shown under the title; empty means "none".
    pub subtitle: String,

    /// Site description; empty means "none".
    pub description: String,

    /// Contact email address.
    pub email: String,

    /// Representative image shown on the landing page and in link previews.
    pub image: ImageAsset,

    /// Free-form fields passed through to the rendering layer untouched.
    pub extra: FxHashMap<String, toml::Value>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            author: "Taisei Onishi".into(),
            title: "taiseidev".into(),
            subtitle: String::new(),
            description: String::new(),
            email: "onishi.taisei1997@gmail.com".into(),
            image: ImageAsset::new("/main_image", "Website Main Image"),
            extra: FxHashMap::default(),
        }
    }
}

impl SiteInfoConfig {
    pub const FIELDS: SiteInfoFields = SiteInfoFields {
        author: FieldPath::new("site.author"),
        title: FieldPath::new("site.title"),
        email: FieldPath::new("site.email"),
        image: FieldPath::new("site.image"),
    };

    /// Validate site identity.
    ///
    /// # Checks
    /// - `title` and `author` must not be empty
    /// - a non-empty `email` should look like `local@domain`
    /// - `image` src/alt pairing
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.is_empty() {
            diag.error(Self::FIELDS.title, "site title must not be empty");
        }

        if self.author.is_empty() {
            diag.error(Self::FIELDS.author, "author name must not be empty");
        }

        if !self.email.is_empty() && !looks_like_email(&self.email) {
            diag.warn(
                Self::FIELDS.email,
                format!("'{}' does not look like an email address", self.email),
            );
        }

        self.image.validate(Self::FIELDS.image, diag);
    }
}

/// Loose syntactic check: one `@`, non-empty local part, dotted domain.
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_identity() {
        let info = SiteInfoConfig::default();
        assert_eq!(info.author, "Taisei Onishi");
        assert_eq!(info.title, "taiseidev");
        // Present but intentionally blank
        assert_eq!(info.subtitle, "");
        assert_eq!(info.description, "");
        assert_eq!(info.image.src, "/main_image");

        let mut diag = ConfigDiagnostics::new();
        info.validate(&mut diag);
        assert!(diag.is_empty());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_empty_title_and_author_are_errors() {
        let info = SiteInfoConfig {
            title: String::new(),
            author: String::new(),
            ..SiteInfoConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        info.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_odd_email_warns() {
        let info = SiteInfoConfig {
            email: "not-an-address".into(),
            ..SiteInfoConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        info.validate(&mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].0.as_str(), "site.email");
    }

    #[test]
    fn test_empty_email_is_clean() {
        let info = SiteInfoConfig {
            email: String::new(),
            ..SiteInfoConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        info.validate(&mut diag);
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("onishi.taisei1997@gmail.com"));
        assert!(!looks_like_email("gmail.com"));
        assert!(!looks_like_email("@gmail.com"));
        assert!(!looks_like_email("me@localhost"));
        assert!(!looks_like_email("me@.com"));
    }
}
