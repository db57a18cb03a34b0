// End-to-end configuration scenario: build a document field by field,
// dump it, and read everything back through memory and through disk.

use stunneler_conf::conf::{ConfDocument, ConfError};
use tempfile::TempDir;

fn sample_document() -> ConfDocument {
    let mut doc = ConfDocument::new();
    doc.set_login("bob");
    doc.set_address("10.0.0.5");
    doc.set_ssh_key("/home/bob/.ssh/id_rsa");
    doc.set_port(2222);
    doc.set_log_level(3);
    doc
}

#[test]
fn build_dump_reload_scenario() {
    let doc = sample_document();
    let json = doc.dump().unwrap();

    // The dump is a plain JSON object holding exactly the five fields.
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 5);
    assert_eq!(obj["rem_login"], "bob");
    assert_eq!(obj["rem_address"], "10.0.0.5");
    assert_eq!(obj["rem_ssh_key"], "/home/bob/.ssh/id_rsa");
    assert_eq!(obj["rem_port"], 2222);
    assert_eq!(obj["rem_log_level"], 3);

    let reloaded = ConfDocument::parse(&json).unwrap();
    assert_eq!(reloaded.login().unwrap(), "bob");
    assert_eq!(reloaded.address().unwrap(), "10.0.0.5");
    assert_eq!(reloaded.ssh_key().unwrap(), "/home/bob/.ssh/id_rsa");
    assert_eq!(reloaded.port().unwrap(), 2222);
    assert_eq!(reloaded.log_level().unwrap(), 3);
}

#[test]
fn scenario_survives_the_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stunneler.json");

    sample_document().save(&path).unwrap();
    let loaded = ConfDocument::load(&path).unwrap();

    assert_eq!(loaded, sample_document());
    assert_eq!(loaded.port().unwrap(), 2222);
}

#[test]
fn editing_a_loaded_config_keeps_foreign_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stunneler.json");
    std::fs::write(
        &path,
        "{\"rem_login\": \"bob\", \"keepalive\": 30, \"rem_port\": 22}\n",
    )
    .unwrap();

    let mut doc = ConfDocument::load(&path).unwrap();
    doc.set_port(2222);
    doc.save(&path).unwrap();

    let again = ConfDocument::load(&path).unwrap();
    assert_eq!(again.port().unwrap(), 2222);
    assert_eq!(again.login().unwrap(), "bob");
    assert_eq!(again.len(), 3, "foreign key must survive the rewrite");
}

#[test]
fn missing_file_and_bad_syntax_are_distinct_errors() {
    let dir = TempDir::new().unwrap();

    let missing = dir.path().join("absent.json");
    assert!(matches!(
        ConfDocument::load(&missing),
        Err(ConfError::Read { .. })
    ));

    let garbled = dir.path().join("garbled.json");
    std::fs::write(&garbled, "{\"rem_login\": }").unwrap();
    assert!(matches!(
        ConfDocument::load(&garbled),
        Err(ConfError::Syntax(_))
    ));
}
