//! Shared image asset descriptor.
//!
//! One reusable `{ src, alt }` shape referenced by both `[site.image]`
//! and `[header.logo]`.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// An image resource and its accessibility label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageAsset {
    /// Path to the image resource (site-root relative, e.g. "/favicon.svg").
    pub src: String,
    /// Accessibility label rendered as the `alt` attribute.
    pub alt: String,
}

impl ImageAsset {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }

    /// True when neither field is set; renderers skip the asset entirely.
    pub fn is_unset(&self) -> bool {
        self.src.is_empty() && self.alt.is_empty()
    }

    /// Validate the src/alt pairing.
    ///
    /// A half-filled descriptor is structurally valid but renders either an
    /// inaccessible image or a dangling label, so it is reported as a
    /// warning rather than an error.
    pub fn validate(&self, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if self.src.is_empty() == self.alt.is_empty() {
            return;
        }
        if self.alt.is_empty() {
            diag.warn(field, "src is set but alt is empty");
        } else {
            diag.warn(field, "alt is set but src is empty");
        }
    }
}
