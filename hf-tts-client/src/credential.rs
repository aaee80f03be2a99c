use secrecy::{ExposeSecret, SecretString};

/// Access token for the inference provider. Never empty.
#[derive(Debug)]
pub struct Credential(SecretString);

impl Credential {
    /// Returns `None` when the token is empty after trimming.
    pub fn new(token: impl AsRef<str>) -> Option<Self> {
        let token = token.as_ref().trim();
        if token.is_empty() {
            return None;
        }
        Some(Self(SecretString::new(token.to_string())))
    }

    pub(crate) fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}
