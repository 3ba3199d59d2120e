//! Profile utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Profile error and diagnostic types           |
//! | `field`  | Type-safe field paths for diagnostics        |
//! | `handle` | Global profile handle (thread-safe)          |

mod error;
mod field;
pub mod handle;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use handle::{cfg, init_config, reload_config};
