//! # Domain Types
//!
//! Core domain types used throughout Medibook.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐          ┌─────────────────────────┐              │
//! │  │    Provider     │          │       Appointment       │              │
//! │  │  ─────────────  │  book    │  ─────────────────────  │              │
//! │  │  id (UUID)      │─────────►│  id (UUID)              │              │
//! │  │  name           │          │  provider_id (UUID)     │              │
//! │  │  specialty      │  cancel  │  provider_name (frozen) │              │
//! │  │  rating         │◄─────────│  specialty (frozen)     │              │
//! │  │  availability   │          │  location (frozen)      │              │
//! │  │  location       │          │  slot                   │              │
//! │  │  photo_url      │          │  booked_at              │              │
//! │  └─────────────────┘          └─────────────────────────┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stable-Identity Pattern
//! Appointments reference providers by UUID, never by display name. The
//! name/specialty/location on an Appointment are *frozen snapshots* taken at
//! booking time; two providers sharing a name can never cross wires.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// =============================================================================
// Provider
// =============================================================================

/// A provider (doctor) offering bookable time slots.
///
/// ## Lifecycle
/// Loaded once from the bundled seed at startup and copied into mutable
/// state. Providers are never created or deleted at runtime; only the
/// `availability` sequence shrinks and grows as slots are booked and freed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Provider {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown on cards and in the booking dialog.
    pub name: String,

    /// Medical specialty (exact-match filter key).
    pub specialty: String,

    /// Average patient rating, 0.0 to 5.0.
    pub rating: f64,

    /// Ordered sequence of open slot labels (e.g. "Mon 10am").
    /// Labels are opaque strings, not timestamps.
    pub availability: Vec<String>,

    /// Practice location shown on cards and appointments.
    pub location: String,

    /// Photo reference for card rendering.
    pub photo_url: String,
}

impl Provider {
    /// Checks whether a slot label is currently open with this provider.
    pub fn has_slot(&self, label: &str) -> bool {
        self.availability.iter().any(|slot| slot == label)
    }

    /// Returns a copy with the first occurrence of `label` removed.
    ///
    /// Removes exactly ONE occurrence: a provider listing the same label
    /// twice keeps the second copy bookable. When the label is absent the
    /// copy is unchanged; callers guard with [`Provider::has_slot`].
    pub fn without_slot(&self, label: &str) -> Provider {
        let mut updated = self.clone();
        if let Some(pos) = updated.availability.iter().position(|slot| slot == label) {
            updated.availability.remove(pos);
        }
        updated
    }

    /// Returns a copy with `label` appended and availability re-sorted.
    ///
    /// The re-sort is plain lexicographic string ordering ("Mon 10am" before
    /// "Tue 2pm", but also "Mon 10am" before "Mon 9am"). This reproduces the
    /// ordering users of the widget already see; chronological sorting would
    /// require parsing the labels, which are opaque.
    pub fn with_slot_restored(&self, label: &str) -> Provider {
        let mut updated = self.clone();
        updated.availability.push(label.to_string());
        updated.availability.sort();
        updated
    }
}

// =============================================================================
// Appointment
// =============================================================================

/// A confirmed booking linking a provider and a slot.
///
/// Uses the snapshot pattern to freeze provider display data at booking
/// time: the card stays consistent even if the provider record changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Appointment {
    /// Unique identifier (UUID v4), generated at booking time.
    pub id: String,

    /// Stable reference to the provider (UUID v4).
    /// Cancellation resolves the provider through this id.
    pub provider_id: String,

    /// Provider name at booking time (frozen).
    pub provider_name: String,

    /// Specialty at booking time (frozen).
    pub specialty: String,

    /// Location at booking time (frozen).
    pub location: String,

    /// The booked slot label.
    pub slot: String,

    /// When the booking was confirmed.
    #[ts(as = "String")]
    pub booked_at: DateTime<Utc>,
}

impl Appointment {
    /// Creates a new appointment from a provider and a chosen slot.
    ///
    /// ## Snapshot Freezing
    /// Name, specialty, and location are captured at this moment. The
    /// provider id is the only live link back to the roster.
    pub fn from_provider(provider: &Provider, slot: &str) -> Self {
        Appointment {
            id: Uuid::new_v4().to_string(),
            provider_id: provider.id.clone(),
            provider_name: provider.name.clone(),
            specialty: provider.specialty.clone(),
            location: provider.location.clone(),
            slot: slot.to_string(),
            booked_at: Utc::now(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_provider(slots: &[&str]) -> Provider {
        Provider {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            name: "Dr. Sarah Chen".to_string(),
            specialty: "Cardiology".to_string(),
            rating: 4.8,
            availability: slots.iter().map(|s| s.to_string()).collect(),
            location: "Downtown Medical Center".to_string(),
            photo_url: "https://example.com/chen.jpg".to_string(),
        }
    }

    #[test]
    fn test_has_slot() {
        let provider = test_provider(&["Mon 10am", "Tue 2pm"]);
        assert!(provider.has_slot("Mon 10am"));
        assert!(!provider.has_slot("Wed 9am"));
    }

    #[test]
    fn test_without_slot_removes_exactly_one_occurrence() {
        let provider = test_provider(&["Mon 10am", "Tue 2pm", "Mon 10am"]);
        let updated = provider.without_slot("Mon 10am");

        assert_eq!(updated.availability, vec!["Tue 2pm", "Mon 10am"]);
        // Source untouched
        assert_eq!(provider.availability.len(), 3);
    }

    #[test]
    fn test_without_slot_absent_label_is_unchanged() {
        let provider = test_provider(&["Mon 10am"]);
        let updated = provider.without_slot("Fri 4pm");
        assert_eq!(updated.availability, provider.availability);
    }

    #[test]
    fn test_with_slot_restored_sorts_lexicographically() {
        let provider = test_provider(&["Tue 2pm", "Wed 9am"]);
        let updated = provider.with_slot_restored("Mon 10am");
        assert_eq!(updated.availability, vec!["Mon 10am", "Tue 2pm", "Wed 9am"]);
    }

    #[test]
    fn test_appointment_freezes_provider_snapshot() {
        let provider = test_provider(&["Mon 10am"]);
        let appointment = Appointment::from_provider(&provider, "Mon 10am");

        assert_eq!(appointment.provider_id, provider.id);
        assert_eq!(appointment.provider_name, "Dr. Sarah Chen");
        assert_eq!(appointment.specialty, "Cardiology");
        assert_eq!(appointment.location, "Downtown Medical Center");
        assert_eq!(appointment.slot, "Mon 10am");
        assert!(!appointment.id.is_empty());
        assert_ne!(appointment.id, provider.id);
    }
}
