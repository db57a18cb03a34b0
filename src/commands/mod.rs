//! CLI command implementations, one module per subcommand.
pub mod field;
pub mod import;
pub mod init;
pub mod show;

use log::warn;

/// Warn when a just-recorded key path does not exist on disk yet.
pub(crate) fn warn_missing_key(key: &str) {
    let expanded = shellexpand::tilde(key).to_string();
    if !std::path::Path::new(&expanded).exists() {
        warn!("ssh key {expanded} not found on disk");
    }
}
