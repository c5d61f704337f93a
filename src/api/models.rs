use crate::models::JobStatus;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Body shared by POST /api/jobs and PUT /api/jobs/:id
#[derive(Serialize)]
pub struct JobRequest<'a> {
    pub company: &'a str,
    pub role: &'a str,
    pub status: JobStatus,
}

/// Successful response of both auth endpoints. The server returns more
/// fields than these; the extras are ignored.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub name: String,
    pub email: String,
}

/// Error body the server attaches to non-success statuses
#[derive(Debug, Deserialize)]
pub struct ApiMessage {
    pub message: Option<String>,
}
