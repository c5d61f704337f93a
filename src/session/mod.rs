mod filesystem;
mod storage;

pub use filesystem::FilesystemSessionStore;
pub use storage::SessionStore;

use crate::models::Session;
use chrono::Local;

/// Build a session record from the fields an auth endpoint returned
pub fn session_from_auth(token: String, name: String, email: String) -> Session {
    Session {
        token,
        name,
        email,
        saved_at: Local::now(),
    }
}
