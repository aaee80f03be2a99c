use async_trait::async_trait;

use crate::{AudioPayload, SynthesisError};

pub mod inference;

#[async_trait]
pub trait Synthesizer {
    /// Turn `text` into audio using the remote voice named by `model`.
    async fn synthesize(&self, text: &str, model: &str) -> Result<AudioPayload, SynthesisError>;
}
