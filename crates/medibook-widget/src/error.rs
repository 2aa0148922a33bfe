//! # API Error Type
//!
//! Unified error type for widget handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Medibook                               │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  confirmAppointment()                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler                                                         │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  No selection? ──── ApiError { code: NO_SELECTION } ──┐          │  │
//! │  │         │                                             │          │  │
//! │  │         ▼                                             ▼          │  │
//! │  │  Core rejection? ── CoreError::SlotUnavailable ── ApiError ────► │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  try {                                                                  │
//! │    await widget.confirmAppointment()                                    │
//! │  } catch (e) {                                                          │
//! │    // e.message = "Slot 'Mon 10am' is not available with Dr. Chen"      │
//! │    // e.code = "SLOT_UNAVAILABLE"                                       │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The original web widget swallowed most of these conditions as silent
//! no-ops. Here every failed handler call carries a machine-readable `code`
//! and a human-readable `message`.

use serde::Serialize;
use medibook_core::CoreError;

/// API error returned from widget handlers.
///
/// ## Serialization
/// This is what the frontend receives when a handler fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Provider not found: 0b8f2a4e-..."
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await widget.confirmAppointment();
/// } catch (e) {
///   switch (e.code) {
///     case 'NO_SELECTION':
///       keepConfirmDisabled();
///       break;
///     case 'SLOT_UNAVAILABLE':
///       refreshDialog(e.message);
///       break;
///     default:
///       showError('An error occurred');
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (stale id, out-of-range index)
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Confirm pressed with no provider or slot chosen
    NoSelection,

    /// The chosen slot is no longer open
    SlotUnavailable,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a no-selection error (confirm with nothing chosen).
    pub fn no_selection(what: &str) -> Self {
        ApiError::new(ErrorCode::NoSelection, format!("No {} selected", what))
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProviderNotFound(id) => ApiError::not_found("Provider", &id),
            CoreError::SlotUnavailable { .. } => {
                ApiError::new(ErrorCode::SlotUnavailable, err.to_string())
            }
            CoreError::AppointmentNotFound { .. } => {
                ApiError::new(ErrorCode::NotFound, err.to_string())
            }
            CoreError::Validation(v) => ApiError::validation(v.to_string()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
