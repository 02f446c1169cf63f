use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("malformed command '{command}': {reason}")]
    MalformedCommand { command: String, reason: String },
    #[error("({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },
    #[error("invalid canvas dimension {width}x{height}")]
    InvalidDimension { width: i64, height: i64 },
    #[error("display target failed: {0}")]
    Target(String),
}

impl EditorError {
    pub(crate) fn malformed(command: &str, reason: impl Into<String>) -> Self {
        EditorError::MalformedCommand {
            command: command.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;
