//! `[footer]` section: footer navigation.

use serde::{Deserialize, Serialize};

use super::{NavLink, link::validate_nav_list};
use crate::config::ConfigDiagnostics;

/// Site footer navigation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Footer navigation entries, in display order.
    pub nav: Vec<NavLink>,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            nav: vec![
                NavLink::new("Posts Props", "/posts-props"),
                NavLink::new("Markdown Style", "/md-style"),
            ],
        }
    }
}

impl FooterConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_nav_list("footer.nav", &self.nav, diag);
    }
}
