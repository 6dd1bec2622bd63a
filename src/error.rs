use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// No access token has been obtained yet.
    #[error("not authenticated: exchange an authorization code first")]
    NotAuthenticated,

    /// The Graph API answered with something other than 200 OK.
    #[error("graph api returned {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    #[error("malformed response body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("cannot load config {path}: {reason}")]
    Config { path: String, reason: String },
}
