use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::FetchError;
use crate::config::UpstreamConfig;

/// Build the HTTP client shared by every upstream client.
pub fn build_http_client(config: &UpstreamConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
}

/// Send a request and decode a JSON body.
///
/// Transport errors (timeouts included), non-2xx statuses and bodies that do
/// not decode as `T` all become `FetchError::SourceUnavailable`.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    context: &'static str,
) -> Result<T, FetchError> {
    let response = request
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| {
            tracing::warn!(error = %e, "{context}");
            FetchError::unavailable(context, e)
        })?;

    response.json::<T>().await.map_err(|e| {
        tracing::warn!(error = %e, "{context}: undecodable body");
        FetchError::unavailable(context, e)
    })
}
