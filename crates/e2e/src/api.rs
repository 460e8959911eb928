//! HTTP client for a running Catty app.

use reqwest::header::{COOKIE, LOCATION};
use reqwest::redirect::Policy;
use reqwest::{StatusCode, Url};

use crate::error::{E2eError, Result};
use crate::inputs::User;
use crate::page::RemindersPage;

/// Name of the session cookie the app sets after login.
pub const SESSION_COOKIE: &str = "reminders_session";

/// HTTP client for the Catty app. Redirects are not followed so that the
/// login redirect can be inspected.
#[derive(Debug, Clone)]
pub struct CattyApi {
    client: reqwest::Client,
    base_url: String,
}

/// Outcome of a login attempt.
#[derive(Debug, Clone)]
pub struct LoginResponse {
    pub status: StatusCode,
    /// Absolute redirect target, if the app redirected.
    pub location: Option<Url>,
    /// Value of the session cookie, if the app set one.
    pub session: Option<String>,
}

impl LoginResponse {
    /// Returns true if the app redirected to `path`.
    pub fn redirects_to(&self, path: &str) -> bool {
        self.location
            .as_ref()
            .is_some_and(|location| location.path() == path)
    }
}

impl CattyApi {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Posts the login form for `user`.
    pub async fn login(&self, user: &User) -> Result<LoginResponse> {
        let response = self
            .client
            .post(self.url("/login"))
            .form(&[
                ("username", user.username.as_str()),
                ("password", user.password.as_str()),
            ])
            .send()
            .await?;

        let location = match response.headers().get(LOCATION) {
            Some(value) => {
                let value = value
                    .to_str()
                    .map_err(|e| E2eError::InvalidResponse(format!("Location header: {e}")))?;
                let url = response
                    .url()
                    .join(value)
                    .map_err(|e| E2eError::InvalidResponse(format!("Location header: {e}")))?;
                Some(url)
            }
            None => None,
        };

        Ok(LoginResponse {
            status: response.status(),
            location,
            session: session_cookie(&response),
        })
    }

    /// Follows a login redirect with the session cookie and returns the
    /// page it lands on.
    pub async fn follow_login(&self, login: &LoginResponse) -> Result<RemindersPage> {
        let location = login
            .location
            .as_ref()
            .ok_or_else(|| E2eError::InvalidResponse("login did not redirect".to_string()))?;
        let session = login
            .session
            .as_deref()
            .ok_or_else(|| E2eError::InvalidResponse(format!("{SESSION_COOKIE} not set")))?;

        let response = self
            .client
            .get(location.clone())
            .header(COOKIE, format!("{SESSION_COOKIE}={session}"))
            .send()
            .await?;

        let status = response.status();
        let html = response.text().await?;
        Ok(RemindersPage::new(status, html))
    }
}

/// Value of the session cookie set by `response`, if any.
fn session_cookie(response: &reqwest::Response) -> Option<String> {
    response
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
}
