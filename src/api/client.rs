//! HTTP API Client
//!
//! Functions for communicating with the Job Tracker Service. The service
//! owns all job data; every call here either authenticates or operates on
//! the caller's job collection. Authenticated calls send the session token
//! verbatim in the `Authorization` header.

use gloo_net::http::{Request, Response};

use crate::state::global::{Job, JobStatus};

/// Default service base URL
pub const DEFAULT_API_BASE: &str = "https://job-tracker-backend-ntvx.onrender.com";

/// Local-storage slot overriding the service base URL
const API_URL_KEY: &str = "jobtrack_api_url";

/// Get the service base URL from local storage or use the default. The slot
/// is an escape hatch for pointing a deployed client at another service; the
/// app itself never writes it.
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Error decoding ============

#[derive(Debug, Default, serde::Deserialize)]
struct ApiError {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Best-effort decode of the service's error body, with a fallback.
async fn error_message(response: Response, fallback: &str) -> String {
    match response.json::<ApiError>().await {
        Ok(body) => body
            .error
            .or(body.message)
            .unwrap_or_else(|| fallback.to_string()),
        Err(_) => fallback.to_string(),
    }
}

// ============ Auth ============

/// Log in with credentials; returns the opaque session token.
pub async fn login(email: &str, password: &str) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        email: String,
        password: String,
    }

    #[derive(serde::Deserialize)]
    struct LoginResponse {
        token: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/auth/login", api_base))
        .json(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Login failed").await);
    }

    let result: LoginResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.token)
}

/// Register a new account. The success body is ignored; registration does
/// not authenticate.
pub async fn register(name: &str, email: &str, password: &str) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct RegisterRequest {
        name: String,
        email: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/auth/register", api_base))
        .json(&RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Registration failed").await);
    }

    Ok(())
}

// ============ Jobs ============

/// Fetch the caller's full job list
pub async fn fetch_jobs(token: &str) -> Result<Vec<Job>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/jobs", api_base))
        .header("Authorization", token)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to load jobs").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a job. The created record in the response is unused; callers
/// re-fetch the full list instead.
pub async fn add_job(token: &str, company: &str, role: &str) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct AddJobRequest {
        company: String,
        role: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/jobs/add", api_base))
        .header("Authorization", token)
        .json(&AddJobRequest {
            company: company.to_string(),
            role: role.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to add job").await);
    }

    Ok(())
}

/// Change a job's status. Only the status field is sent.
pub async fn update_status(token: &str, id: &str, status: JobStatus) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct UpdateStatusRequest {
        status: JobStatus,
    }

    let api_base = get_api_base();

    let response = Request::put(&format!("{}/jobs/{}", api_base, id))
        .header("Authorization", token)
        .json(&UpdateStatusRequest { status })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to update job").await);
    }

    Ok(())
}

/// Delete a job by identifier
pub async fn delete_job(token: &str, id: &str) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::delete(&format!("{}/jobs/{}", api_base, id))
        .header("Authorization", token)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to delete job").await);
    }

    Ok(())
}
