use crate::domain::model::{SortReply, SortRequest};
use crate::domain::ports::{ConfigProvider, NumberSorter};
use crate::utils::error::{credential_guidance, RemoteStatus, Result, SortError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Adapter that submits a sort request to the OpenAI Responses API with a
/// strict output schema. Each call builds its own HTTP client and shares no
/// state with other invocations.
pub struct OpenAiSorter<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> OpenAiSorter<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    fn responses_url(&self) -> String {
        format!("{}/responses", self.config.base_url().trim_end_matches('/'))
    }
}

#[derive(Serialize)]
struct ResponsesApiRequest<'a> {
    model: &'a str,
    input: Vec<InputMessage>,
    text: TextFormat,
}

#[derive(Serialize)]
struct InputMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct TextFormat {
    format: SchemaFormat,
}

#[derive(Serialize)]
struct SchemaFormat {
    #[serde(rename = "type")]
    kind: &'static str,
    name: &'static str,
    strict: bool,
    schema: serde_json::Value,
}

#[derive(Deserialize)]
struct ResponsesApiReply {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: Option<String>,
    text: Option<String>,
}

#[async_trait]
impl<C: ConfigProvider> NumberSorter for OpenAiSorter<C> {
    async fn sort(&self, request: &SortRequest) -> Result<SortReply> {
        let Some(api_key) = self.config.credential() else {
            tracing::warn!("{}", credential_guidance());
            return Err(SortError::MissingCredential);
        };

        let client = reqwest::Client::builder()
            .timeout(self.config.request_timeout())
            .build()
            .map_err(|e| SortError::config(format!("Failed to create HTTP client: {}", e)))?;

        let payload = serde_json::to_string(request)
            .map_err(|e| SortError::invalid_input(format!("Unserializable input: {}", e)))?;

        let api_request = ResponsesApiRequest {
            model: self.config.model(),
            input: vec![InputMessage {
                role: "user",
                content: payload,
            }],
            text: TextFormat {
                format: SchemaFormat {
                    kind: "json_schema",
                    name: "vibesort",
                    strict: true,
                    schema: SortReply::schema(),
                },
            },
        };

        let url = self.responses_url();
        tracing::debug!("POST {}", url);

        let response = client
            .post(&url)
            .bearer_auth(api_key)
            .json(&api_request)
            .send()
            .await
            .map_err(|e| remote_failure(RemoteStatus::Unknown, &e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(remote_failure(
                RemoteStatus::from_http(status.as_u16()),
                &body,
            ));
        }

        let reply: ResponsesApiReply = response
            .json()
            .await
            .map_err(|e| remote_failure(RemoteStatus::Unknown, &format!("invalid reply JSON: {}", e)))?;

        let text = extract_output_text(&reply).ok_or_else(|| {
            remote_failure(RemoteStatus::Unknown, "reply contained no output text")
        })?;

        let sorted: SortReply = serde_json::from_str(&text).map_err(|e| {
            remote_failure(
                RemoteStatus::Unknown,
                &format!("reply did not match the sort schema: {}", e),
            )
        })?;

        Ok(sorted)
    }
}

/// Translate a failed exchange into the guidance error, logging the composed
/// message and keeping the raw detail at debug level.
fn remote_failure(status: RemoteStatus, detail: &str) -> SortError {
    if !detail.is_empty() {
        tracing::debug!("remote failure detail: {}", detail);
    }
    let err = SortError::remote(status);
    tracing::error!("{}", err);
    err
}

fn extract_output_text(reply: &ResponsesApiReply) -> Option<String> {
    for item in &reply.output {
        for part in &item.content {
            if part.kind.as_deref() == Some("output_text") {
                if let Some(text) = &part.text {
                    if !text.trim().is_empty() {
                        return Some(text.clone());
                    }
                }
            }
        }
    }
    None
}
