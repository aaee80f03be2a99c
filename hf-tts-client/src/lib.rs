mod credential;
mod error;
mod payload;
mod synthesizer;

pub use credential::Credential;
pub use error::SynthesisError;
pub use payload::AudioPayload;
pub use synthesizer::{
    Synthesizer,
    inference::{self, DEFAULT_ENDPOINT, InferenceClient},
};

pub use reqwest::StatusCode;
