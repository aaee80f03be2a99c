//! Text-to-speech through the Hugging Face inference router.

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::{AudioPayload, Credential, SynthesisError, Synthesizer};

pub const DEFAULT_ENDPOINT: &str = "https://router.huggingface.co/hf-inference";

const USER_AGENT: &str = concat!("hf-tts/", env!("CARGO_PKG_VERSION"));

pub struct InferenceClient {
    client: reqwest::Client,
    endpoint: String,
}

impl InferenceClient {
    pub fn new(endpoint: impl AsRef<str>, credential: &Credential) -> Result<Self, SynthesisError> {
        let endpoint = endpoint.as_ref().trim().trim_end_matches('/');
        let url = Url::parse(endpoint).map_err(|e| {
            SynthesisError::InvalidRequest(format!("invalid endpoint `{endpoint}`: {e}"))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SynthesisError::InvalidRequest(format!(
                "endpoint `{endpoint}` must use http or https"
            )));
        }

        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", credential.expose()))
            .map_err(|_| {
                SynthesisError::InvalidRequest(
                    "credential contains characters that cannot be sent in a header".to_string(),
                )
            })?;
        authorization.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, authorization);

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/models/{}", self.endpoint, model)
    }
}

/// Model ids look like `name` or `owner/name`.
fn validate_model(model: &str) -> Result<(), SynthesisError> {
    let reason = if model.is_empty() {
        Some("model identifier is empty")
    } else if model.chars().any(char::is_whitespace) {
        Some("model identifier contains whitespace")
    } else if model.split('/').count() > 2 || model.split('/').any(str::is_empty) {
        Some("model identifier must look like `owner/name`")
    } else if !model
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '/'))
    {
        Some("model identifier may only contain letters, digits, `.`, `_` and `-`")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(SynthesisError::UnsupportedModel {
            model: model.to_string(),
            message: reason.to_string(),
        }),
        None => Ok(()),
    }
}

fn is_audio(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime.starts_with("audio/") || mime == "application/octet-stream"
}

#[async_trait]
impl Synthesizer for InferenceClient {
    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn synthesize(&self, text: &str, model: &str) -> Result<AudioPayload, SynthesisError> {
        if text.trim().is_empty() {
            return Err(SynthesisError::InvalidRequest(
                "text to synthesize is empty".to_string(),
            ));
        }
        validate_model(model)?;

        let res = self
            .client
            .post(self.model_url(model))
            .json(&json!({ "inputs": text }))
            .send()
            .await?;

        let status = res.status();
        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = res.bytes().await?;
        debug!(%status, bytes = body.len(), content_type = ?content_type, "inference provider responded");

        if !status.is_success() {
            return Err(SynthesisError::from_response(status, model, &body));
        }
        if let Some(content_type) = content_type.as_deref().filter(|ct| !is_audio(ct)) {
            return Err(SynthesisError::RemoteService {
                status,
                message: format!("expected audio but received `{content_type}`"),
            });
        }
        if body.is_empty() {
            return Err(SynthesisError::RemoteService {
                status,
                message: "response contained no audio".to_string(),
            });
        }

        Ok(AudioPayload::new(body, content_type))
    }
}
