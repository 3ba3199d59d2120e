//! Global profile handle with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and atomic profile replacement.
//! Readers always observe either the old or the new complete value,
//! never a partially updated one.

use crate::config::SiteConfig;
use anyhow::Result;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global profile storage.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Global hash of the current profile file content.
static CONFIG_HASH: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Install a loaded profile as the process-wide value.
#[inline]
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    use std::fs;

    if config.config_path.exists()
        && let Ok(content) = fs::read_to_string(&config.config_path)
    {
        let hash = crate::utils::hash::compute(content.as_bytes());
        CONFIG_HASH.store(hash, std::sync::atomic::Ordering::Relaxed);
    }

    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

/// Reload the profile from disk if its content changed.
///
/// The built-in profile has no backing file and never reloads.
/// A profile that fails validation is rejected without swapping,
/// so readers keep the last good value.
///
/// Returns `Ok(true)` if the profile was updated, `Ok(false)` if unchanged.
pub fn reload_config() -> Result<bool> {
    use std::fs;

    let current = cfg();
    if current.is_builtin() {
        return Ok(false);
    }

    let content = fs::read_to_string(&current.config_path)?;
    let new_hash = crate::utils::hash::compute(content.as_bytes());

    let old_hash = CONFIG_HASH.load(std::sync::atomic::Ordering::Relaxed);
    if new_hash == old_hash {
        return Ok(false);
    }

    let mut new_config = SiteConfig::from_str(&content)?;
    new_config.config_path = current.config_path.clone();
    new_config.validate()?;

    CONFIG.store(Arc::new(new_config));
    CONFIG_HASH.store(new_hash, std::sync::atomic::Ordering::Relaxed);

    Ok(true)
}
