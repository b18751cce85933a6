//! Error type for the stroke pipeline.

use thiserror::Error;

/// Errors surfaced by geometry and render calls.
///
/// Degenerate-but-valid input (coincident points, zero-length windows) is clamped
/// locally and never reaches this type; only broken preconditions and collaborator
/// failures do.
#[derive(Debug, Error)]
pub enum DrawError {
    #[error("draw shape has no segments")]
    EmptySegments,

    #[error("draw shape has no points")]
    EmptyPoints,

    #[error("stroke outline generator returned no points")]
    EmptyOutline,

    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("failed to parse draw shape: {0}")]
    Parse(#[from] serde_json::Error),
}

/// `serde_json::Error` has no equality, so parse failures compare by message.
impl PartialEq for DrawError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::EmptySegments, Self::EmptySegments)
            | (Self::EmptyPoints, Self::EmptyPoints)
            | (Self::EmptyOutline, Self::EmptyOutline) => true,
            (Self::InvalidDimension(a), Self::InvalidDimension(b)) => a == b,
            (Self::Parse(a), Self::Parse(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, DrawError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn parse_error_keeps_the_json_error_as_source() {
        let err = DrawError::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
        let source = err.source().expect("parse errors carry their cause");
        assert!(source.is::<serde_json::Error>());
        assert!(err.to_string().starts_with("failed to parse draw shape: "));
    }

    #[test]
    fn errors_compare_by_variant_and_payload() {
        assert_eq!(DrawError::EmptyPoints, DrawError::EmptyPoints);
        assert_ne!(DrawError::EmptyPoints, DrawError::EmptySegments);
        assert_ne!(
            DrawError::InvalidDimension("x".into()),
            DrawError::InvalidDimension("y".into())
        );
    }
}
