//! # Validation Module
//!
//! Input validation utilities for Medibook.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty selections)                            │
//! │  └── Immediate user feedback (disabled confirm button)                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Widget Handlers (Rust)                                       │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: field-level rules                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Schedule Transitions                                         │
//! │  └── Booking invariants (slot open, provider known, index in range)    │
//! │                                                                         │
//! │  Defense in depth: each layer catches different errors                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use medibook_core::validation::{validate_slot_label, validate_rating};
//!
//! validate_slot_label("Mon 10am").unwrap();
//! validate_rating(4.8).unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_NAME_LEN, MAX_RATING, MAX_SLOT_LABEL_LEN, MAX_SPECIALTY_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a provider display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 100 characters
pub fn validate_provider_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a specialty label.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
pub fn validate_specialty(specialty: &str) -> ValidationResult<()> {
    let specialty = specialty.trim();

    if specialty.is_empty() {
        return Err(ValidationError::Required {
            field: "specialty".to_string(),
        });
    }

    if specialty.len() > MAX_SPECIALTY_LEN {
        return Err(ValidationError::TooLong {
            field: "specialty".to_string(),
            max: MAX_SPECIALTY_LEN,
        });
    }

    Ok(())
}

/// Validates an availability slot label (e.g. "Mon 10am").
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
///
/// Labels are opaque: no attempt is made to parse them as times.
pub fn validate_slot_label(label: &str) -> ValidationResult<()> {
    let label = label.trim();

    if label.is_empty() {
        return Err(ValidationError::Required {
            field: "slot".to_string(),
        });
    }

    if label.len() > MAX_SLOT_LABEL_LEN {
        return Err(ValidationError::TooLong {
            field: "slot".to_string(),
            max: MAX_SLOT_LABEL_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a provider rating.
///
/// ## Rules
/// - Must be within 0.0 to 5.0 inclusive
/// - NaN is rejected
pub fn validate_rating(rating: f64) -> ValidationResult<()> {
    if !(0.0..=MAX_RATING).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0.0,
            max: MAX_RATING,
        });
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a UUID string format.
///
/// ## Rules
/// - Must not be empty
/// - Must parse as a UUID: xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx
///
/// ## Example
/// ```rust
/// use medibook_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
