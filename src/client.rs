use crate::config::Config;
use crate::error::{Error, Result};
use crate::{auth, me};
use log::{info, warn};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Graph API session: the app credentials plus the access token obtained for
/// the current user. Clones share the same token.
#[derive(Clone)]
pub struct GraphClient {
    config: Arc<Config>,
    http: reqwest::Client,
    token: Arc<RwLock<String>>,
}

impl GraphClient {
    pub fn new(config: Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(GraphClient {
            config: Arc::new(config),
            http: builder.build()?,
            token: Arc::new(RwLock::new(String::new())),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn authorization_url(&self) -> String {
        auth::authorization_url(&self.config)
    }

    pub async fn access_token(&self) -> String {
        self.token.read().await.clone()
    }

    pub async fn set_access_token(&self, token: impl Into<String>) {
        *self.token.write().await = token.into();
    }

    pub async fn is_authenticated(&self) -> bool {
        !self.token.read().await.is_empty()
    }

    /// Trade an authorization code for an access token and keep it.
    ///
    /// On failure the previous token stays in place.
    pub async fn exchange_token(&self, code: &str) -> Result<()> {
        match auth::code_to_token(&self.http, &self.config, code).await {
            Ok(token) => {
                self.set_access_token(token).await;
                info!("Facebook access token updated");
                Ok(())
            }
            Err(e) => {
                warn!("Facebook token exchange failed: {}", e);
                Err(e)
            }
        }
    }

    /// Fetch profile `fields` of the authenticated user.
    ///
    /// Fails with [`Error::NotAuthenticated`] without touching the network
    /// when no token has been obtained.
    pub async fn query<S: AsRef<str>>(&self, fields: &[S]) -> Result<Value> {
        let token = self.access_token().await;
        if token.is_empty() {
            return Err(Error::NotAuthenticated);
        }
        me::me(&self.http, &self.config.graph_url, fields, &token).await
    }
}
