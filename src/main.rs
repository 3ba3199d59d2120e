//! Folio - site profile toolkit for a personal blog.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use folio::cli::{self, Cli, Commands};
use folio::config::{SiteConfig, init_config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        Commands::Init { name, force } => cli::init::new_site(&cli, name.as_deref(), *force),
        Commands::Check { args } => cli::check::check_profile(&cli, args),
        Commands::Show { args } => {
            let config = init_config(SiteConfig::load(&cli)?);
            cli::show::show_profile(&config, args)
        }
    }
}
