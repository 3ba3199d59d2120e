//! Folio - a typed site profile for a personal blog.
//!
//! One immutable configuration value - author identity, social links, and
//! three navigation lists - shipped as a built-in profile, optionally
//! overridden by `site.toml`, validated once at startup, and shared
//! process-wide through a lock-free handle.
//!
//! # Example
//!
//! ```ignore
//! use folio::config::{cfg, IconPlacement};
//!
//! let profile = cfg();
//! for link in &profile.social {
//!     let icon = link.icon_for(IconPlacement::Header);
//!     // render...
//! }
//! ```

pub mod cli;
pub mod config;
pub mod logger;
pub mod utils;

pub use config::{SiteConfig, cfg, init_config, reload_config};
