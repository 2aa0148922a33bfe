//! # Error Types
//!
//! Domain-specific error types for medibook-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  medibook-core errors (this file)                                      │
//! │  ├── CoreError        - Booking transition failures                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  medibook-widget errors (separate crate)                               │
//! │  ├── SeedError        - Bundled seed data failures                     │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (provider, slot, index)
//! 3. Errors are enum variants, never String
//! 4. Conditions the original web widget swallowed (missing provider on
//!    cancellation, out-of-range index) are explicit variants here

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Booking logic errors.
///
/// These errors represent rejected state transitions. They should be caught
/// at the display boundary and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Provider cannot be found by id.
    ///
    /// ## When This Occurs
    /// - A stale provider id from the rendering layer
    /// - An appointment whose provider id no longer resolves (providers are
    ///   never deleted at runtime, so this indicates corrupt state)
    #[error("Provider not found: {0}")]
    ProviderNotFound(String),

    /// The chosen slot is not in the provider's availability.
    ///
    /// ## When This Occurs
    /// - The slot was booked moments earlier and is no longer offered
    /// - The rendering layer sent a label the provider never had
    #[error("Slot '{slot}' is not available with {provider}")]
    SlotUnavailable { provider: String, slot: String },

    /// No appointment exists at the requested index.
    #[error("No appointment at index {index} (have {len})")]
    AppointmentNotFound { index: usize, len: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when input doesn't meet requirements.
/// Used for early validation before booking logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate provider id in the seed).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::SlotUnavailable {
            provider: "Dr. Sarah Chen".to_string(),
            slot: "Mon 10am".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Slot 'Mon 10am' is not available with Dr. Sarah Chen"
        );

        let err = CoreError::AppointmentNotFound { index: 3, len: 1 };
        assert_eq!(err.to_string(), "No appointment at index 3 (have 1)");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "slot".to_string(),
            max: 50,
        };
        assert_eq!(err.to_string(), "slot must be at most 50 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
