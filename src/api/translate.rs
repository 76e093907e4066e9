use serde::Deserialize;

use super::FetchError;
use super::http::send_json;
use crate::domain::{TranslateRequest, Translation};

const CONTEXT: &str = "Translation failed";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryResponse {
    #[serde(default)]
    response_data: Option<MyMemoryData>,
    /// A number on success, sometimes a string on errors
    #[serde(default)]
    response_status: serde_json::Value,
    #[serde(default)]
    response_details: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryData {
    translated_text: String,
}

/// Client for the MyMemory translation endpoint
#[derive(Debug, Clone)]
pub struct TranslateClient {
    http: reqwest::Client,
    url: String,
}

impl TranslateClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    pub async fn translate(&self, request: &TranslateRequest) -> Result<Translation, FetchError> {
        if request.text.trim().is_empty() {
            return Err(FetchError::InvalidInput("Text cannot be empty".to_string()));
        }

        let langpair = request.langpair();
        let http_request = self
            .http
            .get(self.url.as_str())
            .query(&[("q", request.text.as_str()), ("langpair", langpair.as_str())]);
        let response: MyMemoryResponse = send_json(http_request, CONTEXT).await?;

        match response {
            MyMemoryResponse {
                response_data: Some(data),
                response_status,
                ..
            } if response_status.as_u64() == Some(200) => Ok(Translation {
                translated_text: data.translated_text,
                source: request.text.clone(),
                source_lang: request.source_lang.clone(),
                target_lang: request.target_lang.clone(),
            }),
            MyMemoryResponse {
                response_details, ..
            } => {
                let message = response_details
                    .filter(|d| !d.is_empty())
                    .unwrap_or_else(|| CONTEXT.to_string());
                tracing::warn!(%langpair, %message, "translation rejected");
                Err(FetchError::Rejected {
                    context: CONTEXT,
                    message,
                })
            }
        }
    }
}
