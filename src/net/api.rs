//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Fallible calls return `Result<T, ApiError>` with the backend's `detail`
//! convention already normalized to a display string. Best-effort calls
//! (profile enrichment) return `Option` so failures degrade UI behavior
//! without crashing hydration. The bearer header is omitted entirely, not
//! sent empty, when no token is held.

#![allow(clippy::unused_async)]

use super::error::ApiError;
use super::types::{AnalysisFeedback, Problem, Submission, TokenResponse, UserProfile};

#[cfg(feature = "hydrate")]
use super::error::normalize_error_text;

/// Build the `Authorization` header value for a held token.
#[cfg(feature = "hydrate")]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Turn a non-2xx response into an `ApiError`, normalizing the body.
#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response, operation: &str) -> ApiError {
    let status = resp.status();
    let message = match resp.text().await {
        Ok(raw) => normalize_error_text(&raw, operation),
        Err(_) => format!("{operation} failed (invalid error response)"),
    };
    ApiError::http(status, message)
}

/// Exchange credentials for a bearer token via `POST /api/auth/login`.
///
/// The endpoint is OAuth2-form-shaped: the email is sent under the
/// `username` key, form-encoded.
///
/// # Errors
///
/// Returns a normalized `ApiError` on transport failure or non-2xx.
pub async fn login(email: &str, password: &str) -> Result<TokenResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::UrlSearchParams::new()
            .map_err(|_| ApiError::network("form encoding unavailable"))?;
        form.append("username", email);
        form.append("password", password);
        let body = String::from(form.to_string());

        let resp = gloo_net::http::Request::post("/api/auth/login")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| ApiError::network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp, "Login").await);
        }
        resp.json::<TokenResponse>()
            .await
            .map_err(|e| ApiError::network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::network("not available on server"))
    }
}

/// Register a new account via `POST /api/auth/register`.
///
/// The display name is sent under the backend's `username` key. Success
/// body is unused; the caller navigates to login.
///
/// # Errors
///
/// Returns a normalized `ApiError` on transport failure or non-2xx.
pub async fn register(name: &str, email: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "email": email,
            "username": name,
            "password": password,
        });
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(&payload)
            .map_err(|e| ApiError::network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp, "Registration").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err(ApiError::network("not available on server"))
    }
}

/// Fetch the authenticated user's profile from `/api/auth/me`.
/// Returns `None` on any failure; profile enrichment is best-effort.
pub async fn fetch_current_user(token: &str) -> Option<UserProfile> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<UserProfile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Fetch the problem catalog from `/api/problems/`.
///
/// Works without a session; the bearer header is attached only when a
/// token is held.
///
/// # Errors
///
/// Returns a normalized `ApiError` on transport failure or non-2xx.
pub async fn fetch_problems(token: Option<&str>) -> Result<Vec<Problem>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::get("/api/problems/");
        if let Some(token) = token {
            req = req.header("Authorization", &bearer(token));
        }
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp, "Problem list").await);
        }
        resp.json::<Vec<Problem>>()
            .await
            .map_err(|e| ApiError::network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::network("not available on server"))
    }
}

/// Fetch the caller's submission history from `/api/submissions/me`.
///
/// # Errors
///
/// Returns a normalized `ApiError` on transport failure or non-2xx.
pub async fn fetch_my_submissions(token: &str) -> Result<Vec<Submission>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/submissions/me")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp, "Submission history").await);
        }
        resp.json::<Vec<Submission>>()
            .await
            .map_err(|e| ApiError::network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::network("not available on server"))
    }
}

/// Request a personalized AI-generated problem via
/// `POST /api/recommendations/ai-problem`.
///
/// # Errors
///
/// Returns a normalized `ApiError` on transport failure or non-2xx.
pub async fn fetch_ai_problem(token: &str) -> Result<Problem, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/recommendations/ai-problem")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp, "Recommendation").await);
        }
        resp.json::<Problem>()
            .await
            .map_err(|e| ApiError::network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::network("not available on server"))
    }
}

/// Fetch AI analysis for a submission from `/api/analysis/{id}`.
///
/// # Errors
///
/// Returns a normalized `ApiError` on transport failure or non-2xx.
pub async fn fetch_analysis(token: &str, submission_id: i64) -> Result<AnalysisFeedback, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/analysis/{submission_id}");
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp, "Analysis").await);
        }
        resp.json::<AnalysisFeedback>()
            .await
            .map_err(|e| ApiError::network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, submission_id);
        Err(ApiError::network("not available on server"))
    }
}
