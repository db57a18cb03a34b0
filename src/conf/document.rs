use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::{ConfError, Result};

// Top-level keys as they appear in the file. Fixed names, the daemon
// reads the same ones.
pub const KEY_LOGIN: &str = "rem_login";
pub const KEY_ADDRESS: &str = "rem_address";
pub const KEY_SSH_KEY: &str = "rem_ssh_key";
pub const KEY_LOG_LEVEL: &str = "rem_log_level";
pub const KEY_PORT: &str = "rem_port";

/// Parsed stunneler configuration.
///
/// Wraps the JSON object so the rest of the crate never handles the
/// serde_json tree directly. Unrecognized keys are kept as-is and
/// survive a load → dump round trip; key order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfDocument {
    root: Map<String, Value>,
}

impl ConfDocument {
    /// New empty document (no fields set).
    pub fn new() -> Self {
        Self { root: Map::new() }
    }

    /// Read and parse the config file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parse a document from JSON text. The root must be an object.
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(ConfError::Syntax)?;
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(ConfError::NotAnObject(json_type(&other))),
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn dump(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.root).map_err(ConfError::Dump)
    }

    /// Persist to `path`: write a sibling temp file, then rename into place.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = self.dump()?;
        let werr = |source| ConfError::Write {
            path: path.to_path_buf(),
            source,
        };

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &json).map_err(werr)?;
        // On Windows, rename fails if the destination exists; remove it first.
        let _ = fs::remove_file(path);
        if fs::rename(&tmp, path).is_err() {
            let _ = fs::remove_file(&tmp);
            fs::write(path, &json).map_err(werr)?;
        }
        Ok(())
    }

    /// Remote login user (`rem_login`).
    pub fn login(&self) -> Result<&str> {
        self.str_field(KEY_LOGIN)
    }

    /// Remote host address (`rem_address`).
    pub fn address(&self) -> Result<&str> {
        self.str_field(KEY_ADDRESS)
    }

    /// SSH key path or material (`rem_ssh_key`).
    pub fn ssh_key(&self) -> Result<&str> {
        self.str_field(KEY_SSH_KEY)
    }

    /// Logging verbosity (`rem_log_level`).
    pub fn log_level(&self) -> Result<i64> {
        self.int_field(KEY_LOG_LEVEL)
    }

    /// Remote service port (`rem_port`). Out-of-range values are an error.
    pub fn port(&self) -> Result<u16> {
        let n = self.int_field(KEY_PORT)?;
        u16::try_from(n).map_err(|_| ConfError::WrongType {
            key: KEY_PORT,
            expected: "port number",
        })
    }

    // Setters replace any existing value, so each key holds one entry.

    pub fn set_login(&mut self, login: &str) {
        self.root.insert(KEY_LOGIN.to_string(), Value::from(login));
    }

    pub fn set_address(&mut self, address: &str) {
        self.root.insert(KEY_ADDRESS.to_string(), Value::from(address));
    }

    pub fn set_ssh_key(&mut self, ssh_key: &str) {
        self.root.insert(KEY_SSH_KEY.to_string(), Value::from(ssh_key));
    }

    pub fn set_log_level(&mut self, level: i64) {
        self.root.insert(KEY_LOG_LEVEL.to_string(), Value::from(level));
    }

    pub fn set_port(&mut self, port: u16) {
        self.root.insert(KEY_PORT.to_string(), Value::from(port));
    }

    /// Number of top-level entries, recognized or not.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    fn str_field(&self, key: &'static str) -> Result<&str> {
        match self.root.get(key) {
            None => Err(ConfError::MissingField(key)),
            Some(v) => v.as_str().ok_or(ConfError::WrongType {
                key,
                expected: "string",
            }),
        }
    }

    fn int_field(&self, key: &'static str) -> Result<i64> {
        match self.root.get(key) {
            None => Err(ConfError::MissingField(key)),
            Some(v) => v.as_i64().ok_or(ConfError::WrongType {
                key,
                expected: "integer",
            }),
        }
    }
}

fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
