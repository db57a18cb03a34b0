use std::path::PathBuf;

use log::debug;
use prettytable::{row, Table};

use crate::conf::{ConfDocument, Result};

/// Print the recognized fields as a table. Unset fields render as "-".
pub fn run(path: &PathBuf) -> Result<()> {
    debug!("showing config from {}", path.display());
    let doc = ConfDocument::load(path)?;

    let mut table = Table::new();
    table.add_row(row!["Field", "Value"]);
    table.add_row(row!["login", doc.login().unwrap_or("-")]);
    table.add_row(row!["address", doc.address().unwrap_or("-")]);
    table.add_row(row!["ssh key", doc.ssh_key().unwrap_or("-")]);
    table.add_row(row![
        "port",
        doc.port().map(|p| p.to_string()).unwrap_or_else(|_| "-".into())
    ]);
    table.add_row(row![
        "log level",
        doc.log_level().map(|l| l.to_string()).unwrap_or_else(|_| "-".into())
    ]);
    table.printstd();
    Ok(())
}

/// Print the raw config JSON to stdout.
pub fn dump(path: &PathBuf) -> Result<()> {
    let doc = ConfDocument::load(path)?;
    println!("{}", doc.dump()?);
    Ok(())
}
