use std::path::PathBuf;

use log::debug;

use crate::conf::document::{KEY_LOG_LEVEL, KEY_PORT};
use crate::conf::{ensure_conf_file, ConfDocument, ConfError, Result};

/// A recognized field name on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Login,
    Address,
    SshKey,
    Port,
    LogLevel,
}

impl Field {
    /// Accepts hyphenated names plus the bare aliases people type.
    pub fn from_arg(name: &str) -> Option<Field> {
        match name {
            "login" => Some(Field::Login),
            "address" => Some(Field::Address),
            "ssh-key" | "sshkey" | "key" => Some(Field::SshKey),
            "port" => Some(Field::Port),
            "log-level" | "loglevel" => Some(Field::LogLevel),
            _ => None,
        }
    }
}

/// Print one field's value, or fail with the typed field error.
pub fn get(path: &PathBuf, field: Field) -> Result<()> {
    let doc = ConfDocument::load(path)?;
    match field {
        Field::Login => println!("{}", doc.login()?),
        Field::Address => println!("{}", doc.address()?),
        Field::SshKey => println!("{}", doc.ssh_key()?),
        Field::Port => println!("{}", doc.port()?),
        Field::LogLevel => println!("{}", doc.log_level()?),
    }
    Ok(())
}

/// Upsert one field and save. Creates the file first if it is absent.
pub fn set(path: &PathBuf, field: Field, value: &str) -> Result<()> {
    ensure_conf_file(path).map_err(|e| ConfError::Write {
        path: path.clone(),
        source: e,
    })?;
    let mut doc = ConfDocument::load(path)?;

    match field {
        Field::Login => doc.set_login(value),
        Field::Address => doc.set_address(value),
        Field::SshKey => {
            doc.set_ssh_key(value);
            super::warn_missing_key(value);
        }
        Field::Port => {
            let port: u16 = value.parse().map_err(|_| ConfError::WrongType {
                key: KEY_PORT,
                expected: "port number",
            })?;
            doc.set_port(port);
        }
        Field::LogLevel => {
            let level: i64 = value.parse().map_err(|_| ConfError::WrongType {
                key: KEY_LOG_LEVEL,
                expected: "integer",
            })?;
            doc.set_log_level(level);
        }
    }

    doc.save(path)?;
    debug!("updated {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn field_names_map_to_fields() {
        assert_eq!(Field::from_arg("login"), Some(Field::Login));
        assert_eq!(Field::from_arg("address"), Some(Field::Address));
        assert_eq!(Field::from_arg("ssh-key"), Some(Field::SshKey));
        assert_eq!(Field::from_arg("sshkey"), Some(Field::SshKey));
        assert_eq!(Field::from_arg("port"), Some(Field::Port));
        assert_eq!(Field::from_arg("log-level"), Some(Field::LogLevel));
        assert_eq!(Field::from_arg("bogus"), None);
    }

    #[test]
    fn set_creates_the_file_and_updates_one_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stunneler.json");

        set(&path, Field::Login, "adam").unwrap();
        set(&path, Field::Port, "2022").unwrap();
        // Re-set replaces rather than duplicating.
        set(&path, Field::Login, "eve").unwrap();

        let doc = ConfDocument::load(&path).unwrap();
        assert_eq!(doc.login().unwrap(), "eve");
        assert_eq!(doc.port().unwrap(), 2022);
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn set_rejects_unparseable_integers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stunneler.json");

        let err = set(&path, Field::Port, "not-a-port").unwrap_err();
        assert!(matches!(err, ConfError::WrongType { key: KEY_PORT, .. }));
        let err = set(&path, Field::LogLevel, "loud").unwrap_err();
        assert!(matches!(
            err,
            ConfError::WrongType {
                key: KEY_LOG_LEVEL,
                ..
            }
        ));
    }
}
