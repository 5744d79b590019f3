use thiserror::Error;

use crate::errors::domain::DomainError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("AI error: {detail}")]
    Ai { detail: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Input error: {detail}")]
    Input { detail: String },
}

impl AppError {
    /// Stable machine-readable code for this error variant
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(DomainError::Invariant(_)) => "INVARIANT_VIOLATED",
            AppError::Domain(_) => "DOMAIN_ERROR",
            AppError::Ai { .. } => "AI_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Json(_) => "JSON_ERROR",
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Input { .. } => "INPUT_ERROR",
        }
    }

    /// Whether the engine state can no longer be trusted after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::Domain(DomainError::Invariant(_)))
    }

    /// Process exit status: 70 (internal software error) when the engine
    /// state is corrupt, 1 otherwise.
    pub fn exit_status(&self) -> u8 {
        if self.is_fatal() {
            70
        } else {
            1
        }
    }

    pub fn ai(detail: String) -> Self {
        Self::Ai { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    pub fn input(detail: String) -> Self {
        Self::Input { detail }
    }
}
