//! Couche configuration : document JSON + erreurs typées + chemins.
pub mod document;
pub mod error;
pub mod path;

pub use document::ConfDocument;
pub use error::{ConfError, Result};
pub use path::{default_conf_path, ensure_conf_file, resolve_conf_path};
