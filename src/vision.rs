use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::{config::VisionSettings, encoder::EncodedImage, error::VisionError};

pub const MODEL: &str = "gpt-4-vision-preview";
pub const MAX_TOKENS: u32 = 300;
pub const FOOD_TABLE_PROMPT: &str = "Identify the food items in this image and provide their calorie breakdown. no long sentences just structure them in a table. also give the total calorie";

const CONTENT_POINTER: &str = "/choices/0/message/content";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

impl<'a> ChatRequest<'a> {
    fn food_table(image: &EncodedImage) -> Self {
        Self {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: vec![
                    ContentPart::Text {
                        text: FOOD_TABLE_PROMPT,
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: image.data_uri(),
                        },
                    },
                ],
            }],
            max_tokens: MAX_TOKENS,
        }
    }
}

/// Whatever the vision API sent back, parsed as JSON but otherwise unchecked.
#[derive(Debug, Clone)]
pub struct VisionReply {
    pub status: u16,
    pub body: Value,
}

#[derive(Clone)]
pub struct VisionClient {
    api_key: String,
    endpoint: String,
    timeout_secs: u64,
    client: Client,
}

impl VisionClient {
    pub fn new(settings: VisionSettings) -> Result<Self, VisionError> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(VisionError::Transport)?;

        Ok(Self {
            api_key: settings.api_key,
            endpoint: settings.endpoint,
            timeout_secs: settings.timeout.map_or(0, |t| t.as_secs()),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one chat-completion request for `image`. Every call goes to the
    /// network; nothing is cached.
    pub async fn complete(&self, image: &EncodedImage) -> Result<VisionReply, VisionError> {
        let request = ChatRequest::food_table(image);

        info!(model = MODEL, endpoint = %self.endpoint, "sending image to vision API");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        debug!(%status, "vision API responded");

        let body: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                self.transport_error(e)
            } else {
                error!(%status, "vision API body is not JSON: {}", e);
                VisionError::Decode(e)
            }
        })?;

        Ok(VisionReply {
            status: status.as_u16(),
            body,
        })
    }

    fn transport_error(&self, err: reqwest::Error) -> VisionError {
        error!("vision API request failed: {}", err);
        if err.is_timeout() {
            VisionError::Timeout {
                secs: self.timeout_secs,
            }
        } else {
            VisionError::Transport(err)
        }
    }
}

/// Pulls the model's text out of `choices[0].message.content`.
///
/// When the content is absent, an `{"error": {"message": ...}}` object from
/// the API is reported instead of a bare "missing content".
pub fn extract_table_text(reply: &VisionReply) -> Result<String, VisionError> {
    if let Some(content) = reply.body.pointer(CONTENT_POINTER).and_then(Value::as_str) {
        return Ok(content.to_owned());
    }

    if let Some(message) = reply.body.pointer("/error/message").and_then(Value::as_str) {
        return Err(VisionError::Api {
            status: reply.status,
            message: message.to_owned(),
        });
    }

    Err(VisionError::MissingContent {
        path: "choices[0].message.content",
    })
}
