use std::path::PathBuf;

use hf_tts_client::{SynthesisError, Synthesizer};
use tracing::info;

use crate::{
    config::{AppConfig, ConfigError, Environment, HubConfig},
    output::{OutputError, write_audio},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub text: String,
    pub model: String,
    pub output: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("configuration failed: {0}")]
    Config(#[from] ConfigError),
    #[error("synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),
    #[error("output failed: {0}")]
    Output(#[from] OutputError),
}

/// Returns the number of bytes written.
pub async fn run<S, F>(env: &Environment, connect: F, job: &Job) -> Result<usize, PipelineError>
where
    S: Synthesizer,
    F: FnOnce(&HubConfig) -> Result<S, SynthesisError>,
{
    let config = AppConfig::from_env(env)?;
    let synthesizer = connect(&config.hub)?;

    info!(model = %job.model, "requesting speech");
    let payload = synthesizer.synthesize(&job.text, &job.model).await?;
    info!(
        bytes = payload.len(),
        content_type = payload.content_type().unwrap_or("unknown"),
        "received audio"
    );

    write_audio(&job.output, &payload)?;
    Ok(payload.len())
}
