use std::{
    collections::HashMap,
    env, fs, io,
    path::{Path, PathBuf},
};

use hf_tts_client::{Credential, DEFAULT_ENDPOINT};
use tracing::debug;

const TOKEN_VARS: [&str; 2] = ["HF_TOKEN", "HUGGING_FACE_HUB_TOKEN"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no access token found: set HF_TOKEN or store a token in the Hugging Face token file")]
    MissingCredential,
    #[error("failed to read env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        source: dotenvy::Error,
    },
    #[error("failed to read token file {}: {source}", .path.display())]
    TokenFile { path: PathBuf, source: io::Error },
}

/// Process environment layered over an optional `.env` file.
#[derive(Debug, Default, Clone)]
pub struct Environment {
    vars: HashMap<String, String>,
    inherit: bool,
}

impl Environment {
    pub fn load(dotenv: &Path) -> Result<Self, ConfigError> {
        let env_file_error = |source| ConfigError::EnvFile {
            path: dotenv.to_path_buf(),
            source,
        };

        let mut vars = HashMap::new();
        match dotenvy::from_path_iter(dotenv) {
            Ok(iter) => {
                for item in iter {
                    let (key, value) = item.map_err(env_file_error)?;
                    vars.entry(key).or_insert(value);
                }
                debug!(path = %dotenv.display(), entries = vars.len(), "loaded env file");
            }
            Err(err) if err.not_found() => {
                debug!(path = %dotenv.display(), "no env file");
            }
            Err(err) => return Err(env_file_error(err)),
        }

        Ok(Self {
            vars,
            inherit: true,
        })
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            inherit: false,
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let from_process = if self.inherit {
            env::var(key).ok()
        } else {
            None
        };
        from_process
            .filter(|value| !value.trim().is_empty())
            .or_else(|| {
                self.vars
                    .get(key)
                    .filter(|value| !value.trim().is_empty())
                    .cloned()
            })
    }
}

pub struct AppConfig {
    pub hub: HubConfig,
}

impl AppConfig {
    pub fn from_env(env: &Environment) -> Result<Self, ConfigError> {
        Ok(Self {
            hub: HubConfig::from_env(env)?,
        })
    }
}

pub struct HubConfig {
    pub credential: Credential,
    pub endpoint: String,
}

impl HubConfig {
    pub fn from_env(env: &Environment) -> Result<Self, ConfigError> {
        Ok(Self {
            credential: load_credential(env)?,
            endpoint: env
                .get("HF_INFERENCE_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        })
    }
}

fn load_credential(env: &Environment) -> Result<Credential, ConfigError> {
    for key in TOKEN_VARS {
        if let Some(credential) = env.get(key).and_then(Credential::new) {
            debug!(source = key, "using access token from environment");
            return Ok(credential);
        }
    }

    if let Some(path) = token_file_path(env) {
        match fs::read_to_string(&path) {
            Ok(contents) => {
                if let Some(credential) = Credential::new(contents) {
                    debug!(path = %path.display(), "using access token from token file");
                    return Ok(credential);
                }
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(source) => return Err(ConfigError::TokenFile { path, source }),
        }
    }

    Err(ConfigError::MissingCredential)
}

fn token_file_path(env: &Environment) -> Option<PathBuf> {
    if let Some(path) = env.get("HF_TOKEN_PATH") {
        return Some(PathBuf::from(path));
    }
    if let Some(hf_home) = env.get("HF_HOME") {
        return Some(Path::new(&hf_home).join("token"));
    }
    env.get("HOME")
        .map(|home| Path::new(&home).join(".cache").join("huggingface").join("token"))
}
