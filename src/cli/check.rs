//! Profile validation command.
//!
//! Loads the profile, runs the full validation pass, and reports every
//! schema violation and semantic gap at once.

use anyhow::{Result, bail};

use crate::cli::{CheckArgs, Cli};
use crate::config::SiteConfig;
use crate::log;
use crate::utils::{plural_count, plural_s};

/// Validate the profile and print a report.
pub fn check_profile(cli: &Cli, args: &CheckArgs) -> Result<()> {
    crate::logger::set_verbose(args.verbose);

    let config = SiteConfig::load_unchecked(cli)?;
    if config.is_builtin() {
        log!("check"; "no profile file found, checking the built-in profile");
    } else {
        log!("check"; "checking {}", config.config_path.display());
    }

    let diag = config.diagnostics();
    diag.print_warnings();

    if diag.has_errors() {
        if args.warn_only {
            for err in diag.errors() {
                eprintln!("{err}\n");
            }
            log!("check"; "{} tolerated (--warn-only)", plural_count(diag.len(), "violation"));
            return Ok(());
        }
        eprintln!("{diag}");
        bail!(
            "validation failed: {} error{}",
            diag.len(),
            plural_s(diag.len())
        );
    }

    let active_nav = config.header.active_nav().count()
        + config.page.blog.iter().filter(|l| l.enabled).count()
        + config.footer.nav.iter().filter(|l| l.enabled).count();
    let clickable = config.social.iter().filter(|s| s.is_clickable()).count();

    log!(
        "check";
        "profile ok: {} ({} clickable), {} active nav {}",
        plural_count(config.social.len(), "social link"),
        clickable,
        active_nav,
        if active_nav == 1 { "entry" } else { "entries" }
    );
    Ok(())
}
