//! Error types for the domain layer.

use thiserror::Error;

/// A campaign or client draft that cannot be saved yet.
///
/// `field` names use the same camelCase spelling as the JSON payloads so the
/// frontend can point at the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A text field is empty or whitespace only.
    #[error("{field} is required")]
    Required {
        /// Offending field.
        field: &'static str,
    },
    /// A list field needs at least one entry.
    #[error("select at least one {field}")]
    Empty {
        /// Offending field.
        field: &'static str,
    },
    /// A numeric field must be strictly positive.
    #[error("{field} must be greater than zero")]
    NotPositive {
        /// Offending field.
        field: &'static str,
    },
    /// A text field exceeds its character limit.
    #[error("{field} is {len} characters, limit is {max}")]
    TooLong {
        /// Offending field.
        field: &'static str,
        /// Current length in characters.
        len: usize,
        /// Allowed maximum.
        max: usize,
    },
    /// The lower bound of a range is above the upper bound.
    #[error("{field} minimum {min} exceeds maximum {max}")]
    InvalidRange {
        /// Offending field.
        field: &'static str,
        /// Lower bound as entered.
        min: u32,
        /// Upper bound as entered.
        max: u32,
    },
}

/// Errors raised while turning user input into domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A string did not match any variant of a wire enum.
    #[error("unknown {kind}: {value:?}")]
    UnknownVariant {
        /// Enum type name.
        kind: &'static str,
        /// Rejected input.
        value: String,
    },
    /// A draft failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A campaign draft has no client selected.
    #[error("no client selected")]
    MissingClient,
    /// A campaign draft has no platform selected.
    #[error("no platform selected")]
    MissingPlatform,
}
