//! Library root for stunneler-conf
pub mod conf;
pub mod import;
pub mod logging;

pub mod commands;

// Convenience re-exports
pub use conf::{ConfDocument, ConfError, Result};
