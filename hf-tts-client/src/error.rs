use reqwest::StatusCode;
use serde::Deserialize;

/// Longest slice of a non-JSON error body kept in error messages.
const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("invalid synthesis request: {0}")]
    InvalidRequest(String),
    #[error(
        "model `{model}` is not supported: {message} (HF_INFERENCE_ENDPOINT selects the provider)"
    )]
    UnsupportedModel { model: String, message: String },
    #[error("credential rejected by the inference provider ({status}): {message}")]
    Authentication { status: StatusCode, message: String },
    #[error("inference provider error {status}: {message}")]
    RemoteService { status: StatusCode, message: String },
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl SynthesisError {
    /// Transport failures and unexpected provider answers.
    pub fn is_remote_service(&self) -> bool {
        matches!(self, Self::RemoteService { .. } | Self::Transport(_))
    }

    pub(crate) fn from_response(status: StatusCode, model: &str, body: &[u8]) -> Self {
        let message = error_message(body);
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Self::Authentication { status, message }
            }
            StatusCode::NOT_FOUND => Self::UnsupportedModel {
                model: model.to_string(),
                message,
            },
            StatusCode::BAD_REQUEST if message.to_ascii_lowercase().contains("not supported") => {
                Self::UnsupportedModel {
                    model: model.to_string(),
                    message,
                }
            }
            _ => Self::RemoteService { status, message },
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorMessage,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

fn error_message(body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        return match parsed.error {
            ErrorMessage::One(message) => message,
            ErrorMessage::Many(messages) => messages.join("; "),
        };
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return "<empty response body>".to_string();
    }
    text.chars().take(MAX_ERROR_BODY_CHARS).collect()
}
