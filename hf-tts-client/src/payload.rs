use bytes::Bytes;

/// Audio returned by the provider, kept exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload {
    bytes: Bytes,
    content_type: Option<String>,
}

impl AudioPayload {
    pub fn new(bytes: impl Into<Bytes>, content_type: Option<String>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `Content-Type` reported by the provider, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}
