use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;

use crate::pipeline::Job;

pub const DEFAULT_TEXT: &str = "The answer to the universe is 42";
pub const DEFAULT_MODEL: &str = "hexgrad/Kokoro-82M";
pub const DEFAULT_OUTPUT: &str = "output.wav";

#[derive(clap::Parser, Debug)]
#[command(version, about = "Synthesize speech with a Hugging Face text-to-speech model")]
pub struct Cli {
    /// Text to synthesize
    #[arg(default_value = DEFAULT_TEXT, value_parser = NonEmptyStringValueParser::new())]
    pub text: String,
    /// Model id on the Hugging Face Hub, served by the endpoint in HF_INFERENCE_ENDPOINT
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    pub model: String,
    /// Destination file, replaced if it exists
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
    /// Optional KEY=VALUE file read before looking up the access token
    #[arg(long, default_value = ".env")]
    pub env_file: PathBuf,
}

impl Cli {
    pub fn job(&self) -> Job {
        Job {
            text: self.text.clone(),
            model: self.model.clone(),
            output: self.output.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_reproduce_the_stock_request() {
        let cli = Cli::try_parse_from(["hf-tts"]).unwrap();
        assert_eq!(cli.text, DEFAULT_TEXT);
        assert_eq!(cli.model, DEFAULT_MODEL);
        assert_eq!(cli.output, PathBuf::from("output.wav"));
        assert_eq!(cli.env_file, PathBuf::from(".env"));
    }

    #[test]
    fn arguments_override_defaults() {
        let cli = Cli::try_parse_from([
            "hf-tts",
            "Hello there",
            "-m",
            "facebook/mms-tts-eng",
            "--output",
            "hello.flac",
        ])
        .unwrap();
        let job = cli.job();
        assert_eq!(job.text, "Hello there");
        assert_eq!(job.model, "facebook/mms-tts-eng");
        assert_eq!(job.output, PathBuf::from("hello.flac"));
    }

    #[test]
    fn model_help_names_the_endpoint_variable() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("HF_INFERENCE_ENDPOINT"));
    }

    #[test]
    fn empty_text_is_rejected() {
        assert!(Cli::try_parse_from(["hf-tts", ""]).is_err());
    }
}
