use crate::api::models::{JobRequest, LoginRequest, RegisterRequest};
use crate::api::response::{job_error, login_error, register_error, session_from_response};
use crate::error::{JobTrackError, Result};
use crate::models::{Job, JobStatus, Session};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

/// HTTP client for the job tracker API. Holds the session explicitly;
/// nothing here reads ambient global state.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, session: Option<&Session>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(session) = session {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", session.token)).map_err(|e| {
                    JobTrackError::Other(format!("Invalid authorization header: {}", e))
                })?,
            );
        }

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: session.map(|s| s.token.clone()),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn require_token(&self) -> Result<()> {
        if self.token.is_none() {
            return Err(JobTrackError::Unauthenticated);
        }
        Ok(())
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(login_error(status.as_u16(), &body));
        }

        Ok(session_from_response(response.json().await?))
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<Session> {
        let response = self
            .http
            .post(self.url("/api/auth/register"))
            .json(&RegisterRequest {
                name,
                email,
                password,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(register_error(status.as_u16(), &body));
        }

        Ok(session_from_response(response.json().await?))
    }

    /// Fetch all jobs, in whatever order the server returns them
    pub async fn list_jobs(&self) -> Result<Vec<Job>> {
        self.require_token()?;

        let response = self.http.get(self.url("/api/jobs")).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(job_error(status.as_u16(), &body, None));
        }

        Ok(response.json().await?)
    }

    pub async fn create_job(
        &self,
        company: &str,
        role: &str,
        status: JobStatus,
    ) -> Result<Job> {
        self.require_token()?;

        let response = self
            .http
            .post(self.url("/api/jobs"))
            .json(&JobRequest {
                company,
                role,
                status,
            })
            .send()
            .await?;

        let http_status = response.status();
        if !http_status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(job_error(http_status.as_u16(), &body, None));
        }

        Ok(response.json().await?)
    }

    pub async fn update_job(
        &self,
        id: &str,
        company: &str,
        role: &str,
        status: JobStatus,
    ) -> Result<Job> {
        self.require_token()?;

        let response = self
            .http
            .put(self.url(&format!("/api/jobs/{}", id)))
            .json(&JobRequest {
                company,
                role,
                status,
            })
            .send()
            .await?;

        let http_status = response.status();
        if !http_status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(job_error(http_status.as_u16(), &body, Some(id)));
        }

        Ok(response.json().await?)
    }

    /// Delete a job. A repeated delete of an already-deleted id comes back
    /// as `NotFound`, which callers treat as recoverable.
    pub async fn delete_job(&self, id: &str) -> Result<()> {
        self.require_token()?;

        let response = self
            .http
            .delete(self.url(&format!("/api/jobs/{}", id)))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(job_error(status.as_u16(), &body, Some(id)));
        }

        Ok(())
    }
}
