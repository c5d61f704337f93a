use crate::api::models::AuthResponse;
use crate::error::JobTrackError;
use crate::models::Session;
use crate::session::session_from_auth;

/// Pull the server's `message` field out of an error body, if it sent one
pub fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<super::models::ApiMessage>(body)
        .ok()
        .and_then(|m| m.message)
}

/// Map a failed login response to an error
pub fn login_error(status: u16, body: &str) -> JobTrackError {
    if (400..500).contains(&status) {
        let message =
            server_message(body).unwrap_or_else(|| "Invalid credentials".to_string());
        JobTrackError::InvalidCredentials(message)
    } else {
        JobTrackError::ApiError {
            status,
            message: body.to_string(),
        }
    }
}

/// Map a failed register response to an error
pub fn register_error(status: u16, body: &str) -> JobTrackError {
    if (400..500).contains(&status) {
        let message =
            server_message(body).unwrap_or_else(|| "Registration failed".to_string());
        JobTrackError::RegistrationFailed(message)
    } else {
        JobTrackError::ApiError {
            status,
            message: body.to_string(),
        }
    }
}

/// Map a failed job-endpoint response to an error. 401 means the stored
/// token was rejected; 404 means the id does not exist server-side.
pub fn job_error(status: u16, body: &str, id: Option<&str>) -> JobTrackError {
    match (status, id) {
        (401, _) => JobTrackError::Unauthenticated,
        (404, Some(id)) => JobTrackError::NotFound(id.to_string()),
        _ => JobTrackError::ApiError {
            status,
            message: server_message(body).unwrap_or_else(|| body.to_string()),
        },
    }
}

/// Turn a successful auth response into the session record we persist
pub fn session_from_response(auth: AuthResponse) -> Session {
    session_from_auth(auth.token, auth.name, auth.email)
}
