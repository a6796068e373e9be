use std::path::PathBuf;

use spendbook_config::{Config, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_uses_standard_file_names() {
    let cfg = Config::default();

    assert_eq!(cfg.transactions_file, "transactions.txt");
    assert_eq!(cfg.categories_file, "categories.txt");
    assert!(!cfg.currency.is_empty());
}

#[test]
fn missing_config_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());

    assert_eq!(manager.load().expect("load config"), Config::default());
    assert!(!manager.config_path().exists());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("spendbook"));

    let mut cfg = Config::default();
    cfg.data_dir = Some(PathBuf::from("/var/lib/spendbook"));
    cfg.ui_color_enabled = false;

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
}

#[test]
fn corrupt_config_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
    std::fs::write(manager.config_path(), "not json").unwrap();

    assert!(manager.load().is_err());
}

#[test]
fn load_or_create_writes_defaults_once() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("spendbook"));

    let created = manager.load_or_create().expect("create config");
    assert_eq!(created, Config::default());
    assert!(manager.config_path().exists());

    let mut edited = created.clone();
    edited.currency = "HUF".into();
    manager.save(&edited).expect("save edited config");

    assert_eq!(manager.load_or_create().expect("reload config"), edited);
}
