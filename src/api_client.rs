pub mod auth;
pub mod cases;
pub mod dashboard;
pub mod notifications;

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use web_sys::{AbortController, FormData};

use crate::session;
use crate::settings;

/// Error taxonomy for API calls.
///
/// The distinction matters to callers: timeouts are transient for the
/// notification poller, 401/403 means the stored token is stale, and
/// everything else is a generic failure surfaced to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,
    #[error("{}", message.clone().unwrap_or_else(|| format!("HTTP error: {status}")))]
    Http { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response: {0}")]
    Parse(String),
}

impl ApiError {
    /// True for responses that signal a stale or missing session.
    pub fn is_session_invalid(&self) -> bool {
        matches!(self, ApiError::Http { status: 401 | 403, .. })
    }
}

/// Error body shape used by the API for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Abort deadline tied to one in-flight request.
///
/// Dropping the deadline cancels the timer, so the timer can never
/// outlive the call regardless of how it completed.
struct AbortDeadline {
    controller: AbortController,
    _timer: Timeout,
}

impl AbortDeadline {
    fn arm(timeout_ms: u32) -> Result<Self, ApiError> {
        let controller = AbortController::new()
            .map_err(|_| ApiError::Network("AbortController unavailable".to_string()))?;
        let handle = controller.clone();
        let timer = Timeout::new(timeout_ms, move || handle.abort());
        Ok(Self {
            controller,
            _timer: timer,
        })
    }

    fn signal(&self) -> web_sys::AbortSignal {
        self.controller.signal()
    }
}

/// Attach the stored token, if any. Callers gate authenticated requests
/// on the session guard first; this wrapper does not enforce it.
fn with_authorization(builder: RequestBuilder) -> RequestBuilder {
    match session::token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

fn send_error(error: gloo_net::Error) -> ApiError {
    match error {
        gloo_net::Error::JsError(js) if js.name == "AbortError" => ApiError::Timeout,
        other => ApiError::Network(other.to_string()),
    }
}

async fn read_response<T>(method: &str, endpoint: &str, response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    if !response.ok() {
        let status = response.status();
        log::warn!("{} {} - Non-OK response: {}", method, endpoint, status);
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .map(|body| body.error);
        return Err(ApiError::Http { status, message });
    }

    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    let parsed = response.json::<T>().await.map_err(|e| {
        log::error!("{} {} - Failed to parse response: {}", method, endpoint, e);
        ApiError::Parse(e.to_string())
    })?;

    log::info!("{} {} - Success", method, endpoint);
    Ok(parsed)
}

/// Authenticated GET with the configured abort deadline.
pub async fn get_authenticated<T>(endpoint: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let url = api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let deadline = AbortDeadline::arm(settings::get_settings().request_timeout_ms)?;
    let response = with_authorization(Request::get(&url))
        .abort_signal(Some(&deadline.signal()))
        .send()
        .await
        .map_err(send_error)?;
    drop(deadline);

    read_response("GET", endpoint, response).await
}

/// Authenticated POST without a body (the dashboard endpoint).
pub async fn post_authenticated<T>(endpoint: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let deadline = AbortDeadline::arm(settings::get_settings().request_timeout_ms)?;
    let response = with_authorization(Request::post(&url))
        .abort_signal(Some(&deadline.signal()))
        .send()
        .await
        .map_err(send_error)?;
    drop(deadline);

    read_response("POST", endpoint, response).await
}

/// Authenticated multipart POST. The browser sets the content type
/// and boundary from the `FormData` body.
pub async fn post_authenticated_multipart<T>(endpoint: &str, body: FormData) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let url = api_url(endpoint);
    log::debug!("POST (multipart) request to: {}", url);

    let deadline = AbortDeadline::arm(settings::get_settings().request_timeout_ms)?;
    let response = with_authorization(Request::post(&url))
        .abort_signal(Some(&deadline.signal()))
        .body(body)
        .map_err(send_error)?
        .send()
        .await
        .map_err(send_error)?;
    drop(deadline);

    read_response("POST", endpoint, response).await
}

/// Unauthenticated JSON POST (waitlist, login, signup).
pub async fn post_public_json<T, B>(endpoint: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let deadline = AbortDeadline::arm(settings::get_settings().request_timeout_ms)?;
    let response = Request::post(&url)
        .abort_signal(Some(&deadline.signal()))
        .json(body)
        .map_err(send_error)?
        .send()
        .await
        .map_err(send_error)?;
    drop(deadline);

    read_response("POST", endpoint, response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_prefers_the_server_message() {
        let err = ApiError::Http {
            status: 400,
            message: Some("Submission failed".to_string()),
        };
        assert_eq!(err.to_string(), "Submission failed");

        let bare = ApiError::Http {
            status: 500,
            message: None,
        };
        assert_eq!(bare.to_string(), "HTTP error: 500");
    }

    #[test]
    fn only_auth_statuses_invalidate_the_session() {
        for status in [401, 403] {
            let err = ApiError::Http {
                status,
                message: None,
            };
            assert!(err.is_session_invalid());
        }
        let err = ApiError::Http {
            status: 500,
            message: None,
        };
        assert!(!err.is_session_invalid());
        assert!(!ApiError::Timeout.is_session_invalid());
    }
}
