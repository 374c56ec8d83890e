//! Error types for the Pirate Radio skill

/// Result type alias for skill operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading the station registry or dispatching a request
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No registered handler accepted the request
    #[error("No handler matched request: {0}")]
    NoHandlerMatched(String),

    /// A slot is missing or has no synonym resolution
    #[error("Slot '{0}' has no resolved value")]
    UnresolvedSlot(String),

    /// Station not found
    #[error("Station not found: {0}")]
    UnknownStation(String),

    /// The station file could not be turned into a registry
    #[error("Invalid station registry: {0}")]
    InvalidRegistry(String),

    /// The envelope was sent for another skill
    #[error("Skill id mismatch: expected {expected}, received {}", received.as_deref().unwrap_or("none"))]
    SkillIdMismatch {
        expected: String,
        received: Option<String>,
    },

    /// No exception handler accepted the error
    #[error("Unhandled error: {0}")]
    Unhandled(Box<Error>),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error (from pirateconfig/anyhow)
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),
}

impl Error {
    /// Create a registry loading error
    pub fn invalid_registry(msg: impl Into<String>) -> Self {
        Self::InvalidRegistry(msg.into())
    }

    /// Errors that come from the caller's request rather than from the skill
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Json(_) | Error::SkillIdMismatch { .. })
    }
}
