//! Error types for yt-pick

use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of failures, used to pick how a run ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Setup errors
    InvalidConfig,
    MissingDependency,

    // Probe errors
    ProbeFailed,
    ProbeParseError,

    // User errors
    NoSelection,
    Cancelled,

    // System errors
    FileError,
    SpawnError,
}

/// Main error type for yt-pick
#[derive(Error, Debug)]
pub enum YtPickError {
    #[error("Output directory not found: {}", .0.display())]
    OutputDirMissing(PathBuf),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0} not found. Please install it or fix its path in the config.")]
    MissingDependency(String),

    #[error("Probe failed:\n{stderr}")]
    ProbeFailed { stderr: String },

    #[error("Unexpected probe format: {0}")]
    UnexpectedProbeFormat(String),

    #[error("Neither audio nor video selected, nothing to download")]
    NothingSelected,

    #[error("Cancelled")]
    Cancelled,

    #[error("File error: {0}")]
    File(#[from] std::io::Error),

    #[error("Failed to spawn process: {0}")]
    Spawn(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl YtPickError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::OutputDirMissing(_) => ErrorCode::InvalidConfig,
            Self::InvalidConfig(_) => ErrorCode::InvalidConfig,
            Self::MissingDependency(_) => ErrorCode::MissingDependency,
            Self::ProbeFailed { .. } => ErrorCode::ProbeFailed,
            Self::UnexpectedProbeFormat(_) => ErrorCode::ProbeParseError,
            Self::NothingSelected => ErrorCode::NoSelection,
            Self::Cancelled => ErrorCode::Cancelled,
            Self::File(_) => ErrorCode::FileError,
            Self::Spawn(_) => ErrorCode::SpawnError,
            Self::Json(_) => ErrorCode::InvalidConfig,
        }
    }
}

impl From<dialoguer::Error> for YtPickError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
                Self::Cancelled
            }
            dialoguer::Error::IO(io) => Self::File(io),
            #[allow(unreachable_patterns)]
            other => Self::File(std::io::Error::other(other.to_string())),
        }
    }
}

pub type Result<T> = std::result::Result<T, YtPickError>;
