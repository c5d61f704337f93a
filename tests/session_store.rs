use jobtrack::models::Session;
use jobtrack::session::{FilesystemSessionStore, SessionStore};
use chrono::Local;
use std::fs;
use std::sync::Mutex;
use tempfile::TempDir;

// Tests mutate HOME, so they must not interleave
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn create_test_session(name: &str) -> Session {
    Session {
        token: "abc".to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        saved_at: Local::now(),
    }
}

#[test]
fn test_save_and_load_session() {
    let _guard = ENV_LOCK.lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("HOME", temp_dir.path().to_str().unwrap());

    let store = FilesystemSessionStore::new();
    let session = create_test_session("X");

    store.save(&session).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, session);
    assert_eq!(loaded.token, "abc");
}

#[test]
fn test_save_replaces_prior_session() {
    let _guard = ENV_LOCK.lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("HOME", temp_dir.path().to_str().unwrap());

    let store = FilesystemSessionStore::new();
    store.save(&create_test_session("First")).unwrap();
    store.save(&create_test_session("Second")).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.name, "Second");
}

#[test]
fn test_load_without_session() {
    let _guard = ENV_LOCK.lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("HOME", temp_dir.path().to_str().unwrap());

    let store = FilesystemSessionStore::new();
    assert!(store.load().is_none());
}

#[test]
fn test_clear_session() {
    let _guard = ENV_LOCK.lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("HOME", temp_dir.path().to_str().unwrap());

    let store = FilesystemSessionStore::new();
    store.save(&create_test_session("X")).unwrap();

    store.clear().unwrap();
    assert!(store.load().is_none());

    // Clearing again must not fail
    store.clear().unwrap();
}

#[test]
fn test_corrupt_session_file_loads_as_none() {
    let _guard = ENV_LOCK.lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("HOME", temp_dir.path().to_str().unwrap());

    let dir = temp_dir.path().join(".config").join("jobtrack");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("session.json"), "{not json at all").unwrap();

    let store = FilesystemSessionStore::new();
    assert!(store.load().is_none());
}
