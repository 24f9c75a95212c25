use super::*;

use lucid_protocols::{ContextWindow, Language, ModelId};

#[test]
fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = TomlFileStore::new(dir.path().join("settings.toml"));

    let settings = Settings {
        api_key: "user-key".to_string(),
        model: ModelId::Gemini25Flash,
        language: Language::parse("Korean").unwrap(),
        extra_instructions: "Keep examples concrete.".to_string(),
        context_window: ContextWindow::SelectionOnly,
    };

    store.save(&settings).unwrap();
    let loaded = store.load().unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_file_store_missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = TomlFileStore::new(dir.path().join("nope.toml"));

    let loaded = store.load().unwrap();
    assert_eq!(loaded, Settings::default());
}

#[test]
fn test_file_store_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let store = TomlFileStore::new(dir.path().join("nested/deep/settings.toml"));

    store.save(&Settings::default()).unwrap();
    assert!(store.path().exists());
}

#[test]
fn test_file_store_invalid_toml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "model = [unclosed").unwrap();

    let store = TomlFileStore::new(path);
    assert!(store.load().is_err());
}

#[test]
fn test_file_store_rejects_unknown_model() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "model = \"gpt-4\"").unwrap();

    let store = TomlFileStore::new(path);
    assert!(store.load().is_err());
}

#[test]
fn test_memory_store_round_trip() {
    let store = MemoryStore::default();
    let mut settings = Settings::default();
    settings.api_key = "abc".to_string();

    store.save(&settings).unwrap();
    assert_eq!(store.load().unwrap().api_key, "abc");
}

#[test]
fn test_failing_memory_store() {
    let store = MemoryStore::failing();
    assert!(store.load().is_err());
}
