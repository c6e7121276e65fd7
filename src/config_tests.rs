#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_resolve_uses_override() {
    let config = Config::resolve(Some(PathBuf::from("/tmp/spendtui-test"))).unwrap();
    assert_eq!(config.data_dir, PathBuf::from("/tmp/spendtui-test"));
}

#[test]
fn test_derived_paths() {
    let config = Config::resolve(Some(PathBuf::from("/data"))).unwrap();
    assert_eq!(config.db_path(), PathBuf::from("/data/spendtui.db"));
    assert_eq!(config.log_path(), PathBuf::from("/data/spendtui.log"));
}

#[test]
fn test_ensure_data_dir_creates_nested() {
    let tmp = tempfile::tempdir().unwrap();
    let nested = tmp.path().join("a").join("b");
    let config = Config::resolve(Some(nested.clone())).unwrap();
    assert!(!nested.exists());
    config.ensure_data_dir().unwrap();
    assert!(nested.is_dir());
    // Idempotent on an existing directory
    config.ensure_data_dir().unwrap();
}

#[test]
fn test_ensure_data_dir_fails_on_file() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("not-a-dir");
    std::fs::write(&file, "x").unwrap();
    let config = Config::resolve(Some(file)).unwrap();
    let err = config.ensure_data_dir().unwrap_err();
    assert!(err.to_string().contains("Failed to create data directory"));
}
