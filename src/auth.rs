use crate::config::Config;
use crate::{encode, encode_list, endpoint, query_string, request, Result, API_VERSION};
use serde::Deserialize;

pub const SCOPES: [&str; 2] = ["read_insights", "manage_pages"];

#[derive(Deserialize, Debug, Clone, Eq, PartialEq)]
struct AuthToken {
    pub access_token: String,
}

/// URL of the consent dialog the end user is redirected to.
pub fn authorization_url(config: &Config) -> String {
    let query = query_string(&[
        ("client_id", encode(&config.client_id)),
        ("redirect_uri", encode(&config.callback_url)),
        ("scope", encode_list(&SCOPES)),
    ]);
    format!("{}?{}", endpoint(&config.dialog_url, "/dialog/oauth"), query)
}

pub(crate) async fn code_to_token(
    http: &reqwest::Client,
    config: &Config,
    code: &str,
) -> Result<String> {
    let url = endpoint(
        &config.graph_url,
        &format!("/{}/oauth/access_token", API_VERSION),
    );
    let auth: AuthToken = request(
        http,
        &url,
        &query_string(&[
            ("client_id", encode(&config.client_id)),
            ("client_secret", encode(&config.client_secret)),
            ("redirect_uri", encode(&config.callback_url)),
            ("code", encode(code)),
        ]),
    )
    .await?;

    Ok(auth.access_token)
}
