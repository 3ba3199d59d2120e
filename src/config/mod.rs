//! Site profile management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Profile section definitions
//! │   ├── site       # [site] identity
//! │   ├── social     # [[social]] links
//! │   ├── header     # [header] logo + nav
//! │   ├── page       # [page] blog-index links
//! │   ├── footer     # [footer] nav
//! │   ├── asset      # shared ImageAsset shape
//! │   └── link       # shared NavLink shape
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global profile handle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The crate ships a complete built-in profile (the `Default` impls);
//! `site.toml` overrides it section-wise. The profile is loaded and
//! validated once, then shared immutably through [`handle`].

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    FooterConfig, HeaderConfig, IconPlacement, ImageAsset, NavLink, PageConfig, SiteInfoConfig,
    SocialLink,
};

// Re-export from types/
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config, reload_config,
};

use crate::cli::Cli;
use crate::log;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root profile
// ============================================================================

/// Root profile structure representing site.toml.
///
/// Constructed once at startup and never mutated; consumers read fields
/// directly, there is no query or lookup API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the profile file; empty for the built-in profile
    /// (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site identity (author, title, image, ...)
    pub site: SiteInfoConfig,

    /// External profile links, in display order
    pub social: Vec<SocialLink>,

    /// Logo and header navigation
    pub header: HeaderConfig,

    /// Blog-index page links
    pub page: PageConfig,

    /// Footer navigation
    pub footer: FooterConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            site: SiteInfoConfig::default(),
            social: section::default_social_links(),
            header: HeaderConfig::default(),
            page: PageConfig::default(),
            footer: FooterConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load and validate the profile for the given CLI arguments.
    ///
    /// Searches upward from cwd for the profile file; without one, the
    /// built-in profile is used. Fails fast on any schema violation.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config = Self::load_unchecked(cli)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the profile without running the validation pass.
    ///
    /// Used by `folio check`, which reports diagnostics itself.
    pub fn load_unchecked(cli: &Cli) -> Result<Self> {
        match find_config_file(&cli.config) {
            Some(path) => Self::from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Parse a profile from TOML content.
    pub fn from_str(content: &str) -> Result<Self> {
        let config = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load the profile from a file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown profile fields");
            }
        }

        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only the filename since the profile sits at the site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    /// Whether this is the built-in profile (no backing file).
    pub fn is_builtin(&self) -> bool {
        self.config_path.as_os_str().is_empty()
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Run the full validation pass and collect everything it finds.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        for (index, link) in self.social.iter().enumerate() {
            link.validate(index, &mut diag);
        }
        self.header.validate(&mut diag);
        self.page.validate(&mut diag);
        self.footer.validate(&mut diag);

        diag
    }

    /// Validate the profile, printing warnings and failing on any error.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();

        // Semantic gaps are printed and tolerated
        diag.print_warnings();

        // Schema violations abort
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a profile from a TOML fragment over the built-in defaults.
/// Panics if there are unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test profile has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
