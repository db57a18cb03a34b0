use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong in the configuration layer.
///
/// Load failures keep the offending path and the underlying cause so a
/// caller can report or retry; field errors name the key involved.
#[derive(Debug, Error)]
pub enum ConfError {
    #[error("cannot read config file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write config file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid config syntax: {0}")]
    Syntax(serde_json::Error),

    #[error("config root is not a JSON object (found {0})")]
    NotAnObject(&'static str),

    #[error("cannot serialize config: {0}")]
    Dump(serde_json::Error),

    #[error("missing config field '{0}'")]
    MissingField(&'static str),

    #[error("config field '{key}' is not a {expected}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
    },

    #[error("no usable ssh config at {path}: {source}")]
    SshConfigRead { path: PathBuf, source: io::Error },

    #[error("cannot parse ssh config at {0}")]
    SshConfigParse(PathBuf),

    #[error("alias '{0}' not found in ssh config")]
    UnknownAlias(String),
}

pub type Result<T> = std::result::Result<T, ConfError>;
