//! HTTP access to the listings endpoint.

use contracts::Listing;
use gloo_net::http::Request;
use thiserror::Error;

/// Port the data server listens on.
const API_PORT: u16 = 3001;

/// What went wrong talking to the data server. Fetch failures replace the
/// page content; they are never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport-level failure: server unreachable, request aborted.
    #[error("request failed: {0}")]
    Network(String),
    /// Non-2xx response.
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Body did not parse as the expected JSON shape.
    #[error("failed to parse response: {0}")]
    Decode(String),
}

/// Base URL of the data server, built from the current window location so
/// the same build works whether the site is opened via localhost or a LAN
/// hostname.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Fetches the whole catalogue.
pub async fn fetch_listings() -> Result<Vec<Listing>, ApiError> {
    let url = format!("{}/logements", api_base());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetches one listing by id. A 404 means the id is unknown.
pub async fn fetch_listing(id: &str) -> Result<Listing, ApiError> {
    let url = format!("{}/logements/{}", api_base(), urlencoding::encode(id));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
