pub mod ssh_config;

pub use ssh_config::import_alias;
