/// Convenience result type used across deckmorph.
pub type DeckmorphResult<T> = Result<T, DeckmorphError>;

/// Top-level error taxonomy used by the extraction and diff APIs.
///
/// Recoverable document defects (unknown colors, unsupported shapes, missing geometry) never
/// surface here; they degrade to documented fallback values instead.
#[derive(thiserror::Error, Debug)]
pub enum DeckmorphError {
    /// Invalid deck input or an inconsistent record list handed to the differ.
    #[error("validation error: {0}")]
    Validation(String),

    /// A record of a kind whose required payload is absent (e.g. a table without cells).
    #[error("construction error: {0}")]
    Construction(String),

    /// The image persistence collaborator failed to store a payload.
    #[error("image store error: {0}")]
    ImageStore(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeckmorphError {
    /// Build a [`DeckmorphError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DeckmorphError::Construction`] value.
    pub fn construction(msg: impl Into<String>) -> Self {
        Self::Construction(msg.into())
    }

    /// Build a [`DeckmorphError::ImageStore`] value.
    pub fn image_store(msg: impl Into<String>) -> Self {
        Self::ImageStore(msg.into())
    }

    /// Build a [`DeckmorphError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for DeckmorphError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
