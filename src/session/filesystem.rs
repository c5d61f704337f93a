use super::storage::SessionStore;
use crate::models::Session;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const SESSION_FILE: &str = "session.json";

pub struct FilesystemSessionStore;

impl FilesystemSessionStore {
    pub fn new() -> Self {
        Self
    }

    fn config_dir(&self) -> PathBuf {
        // HOME takes precedence so tests can redirect the store
        let base = env::var("HOME")
            .map(|home| Path::new(&home).join(".config"))
            .ok()
            .or_else(dirs::config_dir)
            .expect("no home directory available");
        let dir = base.join("jobtrack");
        if !dir.exists() {
            fs::create_dir_all(&dir).expect("Failed to create config directory");
        }
        dir
    }

    fn session_path(&self) -> PathBuf {
        self.config_dir().join(SESSION_FILE)
    }
}

impl SessionStore for FilesystemSessionStore {
    fn load(&self) -> Option<Session> {
        let content = fs::read_to_string(self.session_path()).ok()?;
        // A corrupt record is indistinguishable from being logged out
        serde_json::from_str(&content).ok()
    }

    fn save(&self, session: &Session) -> Result<(), Box<dyn std::error::Error>> {
        let content = serde_json::to_string_pretty(session)?;
        fs::write(self.session_path(), content)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = self.session_path();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

impl Default for FilesystemSessionStore {
    fn default() -> Self {
        Self::new()
    }
}
