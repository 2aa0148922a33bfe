//! # medibook-core: Pure Booking Logic for Medibook
//!
//! This crate is the **heart** of the Medibook widget. It contains all
//! booking logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Medibook Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Rendering Layer (TS frontend)                   │   │
//! │  │    Filter UI ──► Provider Cards ──► Dialog ──► Appointments    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ typed DTOs                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                   medibook-widget Handlers                      │   │
//! │  │    directory, select_provider, confirm_appointment, cancel     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ medibook-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  schedule │  │  filter   │  │ validation│  │   │
//! │  │   │  Provider │  │  Schedule │  │ predicates│  │   rules   │  │   │
//! │  │   │Appointment│  │ book/cancel│ │  options  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Provider, Appointment)
//! - [`schedule`] - The booking ledger and its two transitions
//! - [`filter`] - Filter predicates and derived option lists
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: book/cancel replace whole collections instead of
//!    mutating shared state, so derived views are always consistent
//! 2. **No I/O**: Network, file system, and persistence are FORBIDDEN here
//! 3. **Stable Identity**: Providers and appointments are linked by UUID,
//!    never by display name
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use medibook_core::{Provider, Schedule};
//!
//! let provider = Provider {
//!     id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
//!     name: "Dr. A".to_string(),
//!     specialty: "Cardiology".to_string(),
//!     rating: 4.8,
//!     availability: vec!["Mon 10am".to_string(), "Tue 2pm".to_string()],
//!     location: "Suite 100".to_string(),
//!     photo_url: String::new(),
//! };
//!
//! let mut schedule = Schedule::from_seed(vec![provider]);
//! let appointment = schedule.book(
//!     "550e8400-e29b-41d4-a716-446655440000",
//!     "Mon 10am",
//! ).unwrap();
//!
//! assert_eq!(appointment.slot, "Mon 10am");
//! assert_eq!(schedule.providers()[0].availability, vec!["Tue 2pm"]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod filter;
pub mod schedule;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use medibook_core::Schedule` instead of
// `use medibook_core::schedule::Schedule`

pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::ProviderFilter;
pub use schedule::Schedule;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sentinel value used by the rendering layer's filter dropdowns.
///
/// ## Why a constant?
/// The option lists handed to the frontend start with this literal, and the
/// handlers translate it back to "no filter". Keeping it in one place means
/// the frontend contract cannot drift.
pub const FILTER_ALL: &str = "All";

/// Maximum length of a provider or appointment display name.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of a specialty label.
pub const MAX_SPECIALTY_LEN: usize = 50;

/// Maximum length of an availability slot label (e.g. "Mon 10am").
pub const MAX_SLOT_LABEL_LEN: usize = 50;

/// Highest rating a provider can carry (ratings run 0.0 to 5.0).
pub const MAX_RATING: f64 = 5.0;
