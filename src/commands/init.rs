use std::path::PathBuf;

use inquire::{Confirm, Text};

use crate::conf::{ConfDocument, ConfError, Result};

/// Interactively build a fresh config and write it to `path`.
///
/// A cancelled prompt aborts without touching the file.
pub fn run(path: &PathBuf) -> Result<()> {
    if path.exists() {
        let overwrite = Confirm::new(&format!("{} exists. Overwrite?", path.display()))
            .with_default(false)
            .prompt()
            .unwrap_or(false);
        if !overwrite {
            println!("Left {} untouched.", path.display());
            return Ok(());
        }
    }

    let login = match Text::new("Remote login:").with_initial_value("root").prompt() {
        Ok(v) => v,
        Err(_) => return Ok(()),
    };
    let address = match Text::new("Remote address:").prompt() {
        Ok(v) => v,
        Err(_) => return Ok(()),
    };
    let ssh_key = match Text::new("SSH key:").with_initial_value("~/.ssh/id_rsa").prompt() {
        Ok(v) => v,
        Err(_) => return Ok(()),
    };
    let port: u16 = match Text::new("Remote port:").with_initial_value("22").prompt() {
        Ok(v) => v.trim().parse().unwrap_or(22),
        Err(_) => return Ok(()),
    };
    let log_level: i64 = match Text::new("Log level (0-4):").with_initial_value("2").prompt() {
        Ok(v) => v.trim().parse().unwrap_or(2),
        Err(_) => return Ok(()),
    };

    let mut doc = ConfDocument::new();
    doc.set_login(&login);
    doc.set_address(&address);
    doc.set_ssh_key(&ssh_key);
    doc.set_port(port);
    doc.set_log_level(log_level);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfError::Write {
            path: path.clone(),
            source: e,
        })?;
    }
    doc.save(path)?;
    println!("Wrote {}", path.display());
    super::warn_missing_key(&ssh_key);
    Ok(())
}
