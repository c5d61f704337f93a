use crate::models::Session;

/// Trait for session storage backends
pub trait SessionStore: Send + Sync {
    /// Load the stored session, if any. A missing or unparseable record
    /// must come back as `None`, never as an error.
    fn load(&self) -> Option<Session>;

    /// Persist a session, replacing any prior record
    fn save(&self, session: &Session) -> Result<(), Box<dyn std::error::Error>>;

    /// Remove the stored session unconditionally
    fn clear(&self) -> Result<(), Box<dyn std::error::Error>>;
}
