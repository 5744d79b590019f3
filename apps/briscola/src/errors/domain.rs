//! Domain-level error type used by the engine, the AI and the adapters.
//!
//! This error type is I/O-agnostic. Front ends return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation kinds to distinguish rule violations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    CardNotInHand,
    EmptyHand,
    InvalidMatchLength,
    PhaseMismatch,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input or business rule violation
    Validation(ValidationKind, String),
    /// Malformed card code
    ParseCard(String),
    /// Engine bookkeeping is inconsistent; never recoverable
    Invariant(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::ParseCard(s) => write!(f, "parse card: {s}"),
            DomainError::Invariant(d) => write!(f, "invariant violated: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// The validation kind, if this is a validation error.
    pub fn kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_detail() {
        let err = DomainError::validation(ValidationKind::CardNotInHand, "AB not held");
        assert_eq!(
            err.to_string(),
            "validation error CardNotInHand: AB not held"
        );
        assert_eq!(err.kind(), Some(ValidationKind::CardNotInHand));
    }

    #[test]
    fn invariant_has_no_kind() {
        let err = DomainError::invariant("41 cards");
        assert_eq!(err.kind(), None);
        assert_eq!(err.to_string(), "invariant violated: 41 cards");
    }
}
