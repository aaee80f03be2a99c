use clap::Parser;
use hf_tts_client::InferenceClient;
use tracing::info;

use crate::{
    cli::Cli,
    config::Environment,
    pipeline::{self, PipelineError},
    telemetry::{get_subscriber, init_subscriber},
};

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Init logger
    let subscriber = get_subscriber("hf-tts", "info", std::io::stderr);
    init_subscriber(subscriber)?;

    let env = Environment::load(&cli.env_file).map_err(PipelineError::from)?;
    let job = cli.job();

    let written = pipeline::run(
        &env,
        |hub| InferenceClient::new(&hub.endpoint, &hub.credential),
        &job,
    )
    .await?;

    info!(bytes = written, path = %job.output.display(), "audio written");
    println!("Wrote {written} bytes to {}", job.output.display());

    Ok(())
}
