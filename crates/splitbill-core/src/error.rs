//! # Error Types
//!
//! Domain-specific error types for splitbill-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  BillError            - why split_bill() refused the input             │
//! │  ├── InvalidDate      - date is not a YYYY-MM-DD calendar date         │
//! │  ├── NoParticipants   - nobody to split between                        │
//! │  ├── InvalidItem      - wraps a ValidationError for one item           │
//! │  └── InvalidTipRate   - tip rate above the accepted maximum            │
//! │                                                                         │
//! │  ValidationError      - field-level rule violations                    │
//! │                                                                         │
//! │  Flow: ValidationError → BillError → caller                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure is deterministic: the same input fails the same way.

use thiserror::Error;

// =============================================================================
// Bill Error
// =============================================================================

/// Reasons a bill cannot be split.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillError {
    /// The date is not a dash-separated `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    /// No personal item names a participant, so shared items have nobody
    /// to be divided between.
    ///
    /// ## When This Occurs
    /// - The item list is empty
    /// - Every item is shared
    #[error("Bill has no participants: at least one personal item is required")]
    NoParticipants,

    /// One item broke a validation rule.
    #[error("Invalid item #{index} ('{name}'): {source}")]
    InvalidItem {
        index: usize,
        name: String,
        #[source]
        source: ValidationError,
    },

    /// The bill's tip rate broke a validation rule.
    #[error("Invalid tip rate: {0}")]
    InvalidTipRate(#[source] ValidationError),
}

impl BillError {
    pub(crate) fn invalid_date(input: &str, reason: impl Into<String>) -> Self {
        BillError::InvalidDate {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with BillError.
pub type BillResult<T> = Result<T, BillError>;

// =============================================================================
// Unit Tests
// =============================================================================
