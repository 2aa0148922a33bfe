//! # Configuration State
//!
//! Stores widget configuration computed at startup.
//!
//! ## Frozen Option Lists
//! The filter dropdown options are derived from the seed ONCE and never
//! recomputed as availability mutates. This is an explicit load-time
//! choice: a day stays selectable even after its last slot is booked, and
//! the dropdowns never reshuffle under the user's cursor.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.
//! If hot-reloading is added later, we'd wrap in `RwLock`.

use serde::{Deserialize, Serialize};

use medibook_core::filter::{availability_options, specialty_options};
use medibook_core::Provider;

/// Widget configuration.
///
/// ## Fields
/// All fields are fixed at construction; handlers hand out clones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Clinic name shown in the widget header.
    pub clinic_name: String,

    /// Specialty dropdown options: "All" + distinct seed specialties.
    pub specialties: Vec<String>,

    /// Availability dropdown options: "All" + distinct day tokens.
    pub availabilities: Vec<String>,
}

impl ConfigState {
    /// Builds configuration from the seed roster.
    pub fn from_seed(clinic_name: &str, providers: &[Provider]) -> Self {
        ConfigState {
            clinic_name: clinic_name.to_string(),
            specialties: specialty_options(providers),
            availabilities: availability_options(providers),
        }
    }
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development: empty roster,
    /// dropdowns holding only the "All" sentinel.
    fn default() -> Self {
        ConfigState::from_seed("Medibook Dev Clinic", &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_provider(specialty: &str, slots: &[&str]) -> Provider {
        Provider {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            name: "Dr. A".to_string(),
            specialty: specialty.to_string(),
            rating: 4.5,
            availability: slots.iter().map(|s| s.to_string()).collect(),
            location: "Clinic".to_string(),
            photo_url: String::new(),
        }
    }

    #[test]
    fn test_from_seed_builds_option_lists() {
        let config = ConfigState::from_seed(
            "Test Clinic",
            &[test_provider("Cardiology", &["Mon 10am", "Tue 2pm"])],
        );

        assert_eq!(config.clinic_name, "Test Clinic");
        assert_eq!(config.specialties, vec!["All", "Cardiology"]);
        assert_eq!(config.availabilities, vec!["All", "Mon", "Tue"]);
    }

    #[test]
    fn test_default_holds_only_sentinels() {
        let config = ConfigState::default();
        assert_eq!(config.specialties, vec!["All"]);
        assert_eq!(config.availabilities, vec!["All"]);
    }
}
