//! Profile file generation.
//!
//! Writes a commented `site.toml` seeded from the built-in profile.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::cli::Cli;
use crate::config::SiteConfig;
use crate::log;

/// Generate site.toml content with a comment header
pub fn generate_config_template() -> Result<String> {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# Folio site profile (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("#\n");
    out.push_str("# [site]     identity: author, title, contact, main image\n");
    out.push_str("# [[social]] external profile links; an empty href keeps the entry\n");
    out.push_str("#            listed but not clickable, `header` is an optional\n");
    out.push_str("#            alternate icon for header placement\n");
    out.push_str("# [header]   logo and header navigation\n");
    out.push_str("# [page]     blog-index page links\n");
    out.push_str("# [footer]   footer navigation\n");
    out.push_str("#\n");
    out.push_str("# Nav entries with `enabled = false` are planned destinations that\n");
    out.push_str("# stay in the profile without being rendered.\n\n");

    out.push_str(&toml::to_string_pretty(&SiteConfig::default())?);
    Ok(out)
}

/// Create a new profile file in `name` (or the current directory).
pub fn new_site(cli: &Cli, name: Option<&Path>, force: bool) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let dir = match name {
        Some(name) => cwd.join(name),
        None => cwd,
    };
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let path = dir.join(&cli.config);
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    fs::write(&path, generate_config_template()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_round_trips_builtin_profile() {
        let template = generate_config_template().unwrap();
        let parsed: SiteConfig = toml::from_str(&template).unwrap();
        assert_eq!(parsed, SiteConfig::default());
    }

    #[test]
    fn test_new_site_writes_profile() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            color: clap::ColorChoice::Never,
            config: dir.path().join("site.toml"),
            command: crate::cli::Commands::Init {
                name: None,
                force: false,
            },
        };

        new_site(&cli, None, false).unwrap();
        assert!(cli.config.exists());

        // Second run without --force must refuse to overwrite
        assert!(new_site(&cli, None, false).is_err());
        assert!(new_site(&cli, None, true).is_ok());
    }
}
