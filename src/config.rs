use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tokio::fs;

pub const CONF_FILE: &str = ".fbgraph.json";
pub const GRAPH_URL: &str = "https://graph.facebook.com";
pub const DIALOG_URL: &str = "https://www.facebook.com";

/// Application credentials registered with Facebook.
#[derive(Deserialize, Clone, Eq, PartialEq)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
    #[serde(default = "default_graph_url")]
    pub graph_url: String,
    #[serde(default = "default_dialog_url")]
    pub dialog_url: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("callback_url", &self.callback_url)
            .field("graph_url", &self.graph_url)
            .field("dialog_url", &self.dialog_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

// On-disk layout is `{ "facebook": { ... } }` so other providers can share the file.
#[derive(Deserialize)]
struct AuthFile {
    facebook: Config,
}

fn default_graph_url() -> String {
    GRAPH_URL.to_owned()
}

fn default_dialog_url() -> String {
    DIALOG_URL.to_owned()
}

impl Config {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Config {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            callback_url: callback_url.into(),
            graph_url: default_graph_url(),
            dialog_url: default_dialog_url(),
            timeout_secs: None,
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let AuthFile { facebook } = serde_json::from_str(json)?;
        Ok(facebook)
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_error = |reason: String| Error::Config {
            path: path.display().to_string(),
            reason,
        };
        let data = fs::read_to_string(path)
            .await
            .map_err(|e| config_error(e.to_string()))?;
        Config::from_json(&data).map_err(|e| config_error(e.to_string()))
    }
}

pub fn conf_path() -> std::result::Result<String, std::env::VarError> {
    Ok(format!("{}/{}", std::env::var("HOME")?, CONF_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_applied() {
        let config = Config::from_json(
            r#"{"facebook": {"client_id": "123", "client_secret": "s3cret", "callback_url": "http://localhost:3000/auth/facebook/callback"}}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            Config::new("123", "s3cret", "http://localhost:3000/auth/facebook/callback")
        );
        assert_eq!(config.graph_url, GRAPH_URL);
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn overrides_are_read() {
        let config = Config::from_json(
            r#"{"facebook": {"client_id": "1", "client_secret": "2", "callback_url": "3",
                "graph_url": "http://127.0.0.1:9000", "timeout_secs": 5}}"#,
        )
        .unwrap();
        assert_eq!(config.graph_url, "http://127.0.0.1:9000");
        assert_eq!(config.dialog_url, DIALOG_URL);
        assert_eq!(config.timeout_secs, Some(5));
    }

    #[test]
    fn debug_redacts_secret() {
        let config = Config::new("123", "s3cret", "http://cb");
        let printed = format!("{:?}", config);
        assert!(printed.contains("123"));
        assert!(!printed.contains("s3cret"));
    }

    #[test]
    fn missing_provider_is_rejected() {
        assert!(Config::from_json(r#"{"twitter": {}}"#).is_err());
    }

    #[tokio::test]
    async fn load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        match Config::load(&path).await {
            Err(Error::Config { path: p, .. }) => assert_eq!(p, path.display().to_string()),
            other => panic!("unexpected {:?}", other),
        }

        let path = dir.path().join("auth.json");
        std::fs::write(
            &path,
            r#"{"facebook": {"client_id": "a", "client_secret": "b", "callback_url": "c"}}"#,
        )
        .unwrap();
        assert_eq!(Config::load(&path).await.unwrap(), Config::new("a", "b", "c"));
    }
}
