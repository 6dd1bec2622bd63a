//! Minimal Facebook Graph API client: OAuth authorization URL, code exchange
//! and the `/me` profile query.

use log::debug;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::form_urlencoded;

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod me;

pub use client::GraphClient;
pub use config::Config;
pub use error::{Error, Result};

pub const API_VERSION: &str = "v2.3";

pub(crate) fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

pub(crate) fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Comma-joined list with each item escaped; the separators stay literal
/// since Graph expects `a,b` rather than `a%2Cb`.
pub(crate) fn encode_list<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(|v| encode(v.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Joins already-encoded `key=value` pairs.
pub(crate) fn query_string(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

/// GET `url?query` and decode a 200 response as JSON.
///
/// The query carries secrets, so it stays out of logs and out of transport
/// errors.
pub(crate) async fn request<T: DeserializeOwned>(
    http: &reqwest::Client,
    url: &str,
    query: &str,
) -> Result<T> {
    debug!("GET {}", url);
    let response = http
        .get(format!("{}?{}", url, query))
        .send()
        .await
        .map_err(|e| e.without_url())?;
    let status = response.status();
    let body = response.text().await.map_err(|e| e.without_url())?;
    if status != StatusCode::OK {
        debug!("GET {} -> {}", url, status);
        return Err(Error::Upstream { status, body });
    }
    Ok(serde_json::from_str(&body)?)
}
