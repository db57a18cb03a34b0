use std::fs;
use std::path::PathBuf;

use ssh_config::SSHConfig;

use crate::conf::{ConfDocument, ConfError, Result};

/// Seed the remote fields from one `~/.ssh/config` alias.
///
/// `HostName`, `User`, `Port` and `IdentityFile` map onto `rem_address`,
/// `rem_login`, `rem_port` and `rem_ssh_key`. Fallbacks follow ssh itself:
/// the alias stands in for a missing `HostName`, port defaults to 22, and
/// the key stays untouched when no `IdentityFile` is declared.
pub fn import_alias(doc: &mut ConfDocument, alias: &str) -> Result<()> {
    let path = ssh_config_path();
    let text = fs::read_to_string(&path).map_err(|e| ConfError::SshConfigRead {
        path: path.clone(),
        source: e,
    })?;
    let Ok(cfg) = SSHConfig::parse_str(&text) else {
        return Err(ConfError::SshConfigParse(path));
    };

    if !declared_aliases(&text).iter().any(|a| a == alias) {
        return Err(ConfError::UnknownAlias(alias.to_string()));
    }

    let settings = cfg.query(alias);
    let get = |k: &str| settings.get(k).map(|s| s.to_string());
    let address = get("HostName")
        .or_else(|| get("Hostname"))
        .unwrap_or_else(|| alias.to_string());
    let login = get("User")
        .or_else(|| get("Username"))
        .unwrap_or_else(|| "root".into());
    let port = get("Port").and_then(|p| p.parse::<u16>().ok()).unwrap_or(22);

    doc.set_address(&address);
    doc.set_login(&login);
    doc.set_port(port);
    if let Some(key) = get("IdentityFile") {
        doc.set_ssh_key(&key);
    }
    Ok(())
}

fn ssh_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".ssh/config")
}

/// Literal aliases declared on `Host` lines (wildcard patterns skipped).
fn declared_aliases(text: &str) -> Vec<String> {
    let mut aliases: Vec<String> = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix("Host ") {
            for tok in rest.split(|c: char| c.is_whitespace() || c == ',') {
                let alias = tok.trim();
                if alias.is_empty() { continue; }
                if alias.contains('*') || alias.contains('?') || alias.starts_with('!') { continue; }
                aliases.push(alias.to_string());
            }
        }
    }
    aliases.sort();
    aliases.dedup();
    aliases
}
