//! `[page]` section: blog-index page navigation.

use serde::{Deserialize, Serialize};

use super::{NavLink, link::validate_nav_list};
use crate::config::ConfigDiagnostics;

/// Page-level link lists (currently just the blog index).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Links shown on the blog index page, in display order.
    pub blog: Vec<NavLink>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            blog: vec![
                NavLink::new("Blog", "/blog"),
                NavLink::disabled("Notes", "/blog/notes"),
                NavLink::disabled("Talks", "/blog/talks"),
            ],
        }
    }
}

impl PageConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_nav_list("page.blog", &self.blog, diag);
    }
}
