use std::io;
use std::path::PathBuf;

/// Default location: `<config dir>/stunneler/stunneler.json`.
pub fn default_conf_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
    });
    base.join("stunneler/stunneler.json")
}

/// Pick the active config path: explicit override first, then the
/// STUNNELER_CONF environment variable, then the default location.
pub fn resolve_conf_path(cli_override: Option<String>) -> PathBuf {
    if let Some(p) = cli_override {
        return PathBuf::from(p);
    }
    if let Ok(p) = std::env::var("STUNNELER_CONF") {
        if !p.is_empty() {
            return PathBuf::from(p);
        }
    }
    default_conf_path()
}

/// Create parent directories and seed an empty JSON object if the file
/// does not exist yet.
pub fn ensure_conf_file(path: &PathBuf) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    if !path.exists() {
        std::fs::write(path, "{}\n")?;
    }
    Ok(())
}
