//! # cmpy - Streaming Many-File Comparison
//!
//! Every pair, one pass, bounded memory.
//!
//! Compares two or more byte streams (files, or standard input via the
//! `stdin` identity) pairwise in a single synchronized pass, using one
//! fixed-size buffer per input regardless of file size.

// Module declarations
pub mod combinations;
pub mod commands;
pub mod config;
pub mod session;
pub mod source;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use combinations::{count_combinations, CombinationSet};
pub use config::Config;
pub use session::Session;
pub use source::{Source, STDIN_IDENTITY};
pub use types::{CmpyError, Pair, Verdict};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
