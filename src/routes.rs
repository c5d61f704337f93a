/// Logical screens of the client. `Unknown` captures any route the CLI
/// does not recognize (the catch-all).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Signup,
    Dashboard,
    Unknown,
}

impl Screen {
    pub fn requires_auth(&self) -> bool {
        matches!(self, Screen::Dashboard)
    }
}

/// Decide which screen actually renders for a requested one. Called
/// fresh on every invocation with the current result of loading the
/// session store; the outcome is never cached.
pub fn resolve(requested: Screen, authenticated: bool) -> Screen {
    match requested {
        Screen::Login | Screen::Signup if authenticated => Screen::Dashboard,
        Screen::Dashboard if !authenticated => Screen::Login,
        Screen::Unknown => {
            if authenticated {
                Screen::Dashboard
            } else {
                Screen::Login
            }
        }
        other => other,
    }
}
