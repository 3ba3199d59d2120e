//! Utility modules for the profile toolkit.

pub mod hash;
mod plural;

pub use plural::{plural_count, plural_s};
