use crate::{encode, encode_list, endpoint, query_string, request, Result};
use serde_json::Value;

/// Fetch `fields` of the token owner's profile. The body is returned as-is.
pub async fn me<S: AsRef<str>>(
    http: &reqwest::Client,
    graph_url: &str,
    fields: &[S],
    token: &str,
) -> Result<Value> {
    let query = query_string(&[
        ("fields", encode_list(fields)),
        ("access_token", encode(token)),
    ]);
    request(http, &endpoint(graph_url, "/me"), &query).await
}
