use std::path::PathBuf;

use crate::conf::{ensure_conf_file, ConfDocument, ConfError, Result};
use crate::import::import_alias;

/// Seed the remote fields from an `~/.ssh/config` alias and save.
pub fn run(path: &PathBuf, alias: &str) -> Result<()> {
    ensure_conf_file(path).map_err(|e| ConfError::Write {
        path: path.clone(),
        source: e,
    })?;
    let mut doc = ConfDocument::load(path)?;
    import_alias(&mut doc, alias)?;
    doc.save(path)?;
    println!("Imported '{}' into {}", alias, path.display());
    Ok(())
}
