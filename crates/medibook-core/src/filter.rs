//! # Filter Module
//!
//! Filter predicates producing derived, read-only views of the provider
//! roster, plus the option lists the rendering layer shows in its dropdowns.
//!
//! ## Filter Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Filter Flow                                        │
//! │                                                                         │
//! │  User picks "Cardiology" + "Tue"                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProviderFilter { specialty: Some("Cardiology"),                       │
//! │                   availability: Some("Tue") }                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  filter_providers(roster, filter)                                      │
//! │       │                                                                 │
//! │       ├── specialty: EXACT match (or None = All)                       │
//! │       │                                                                 │
//! │       ├── availability: any slot label CONTAINS the token,             │
//! │       │                 case-insensitive (or None = All)               │
//! │       │                                                                 │
//! │       └── new Vec, source order preserved, source untouched            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Frozen Option Lists
//! [`specialty_options`] and [`availability_options`] are computed ONCE from
//! the seed at startup and never recomputed as availability mutates. This is
//! a deliberate load-time freeze: the dropdowns stay stable while slots come
//! and go. The widget's read-only config state holds the results.

use crate::types::Provider;
use crate::FILTER_ALL;

// =============================================================================
// Provider Filter
// =============================================================================

/// A filter selection over the provider roster.
///
/// `None` means "All" (the sentinel the dropdowns show); the widget's
/// handlers translate the literal [`FILTER_ALL`] string to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderFilter {
    /// Exact-match specialty, or None for all specialties.
    pub specialty: Option<String>,

    /// Case-insensitive substring matched against slot labels,
    /// or None for any availability.
    pub availability: Option<String>,
}

impl ProviderFilter {
    /// The unfiltered selection (both dropdowns on "All").
    pub fn all() -> Self {
        ProviderFilter::default()
    }

    /// Checks whether a provider satisfies both predicates.
    pub fn matches(&self, provider: &Provider) -> bool {
        let matches_specialty = match &self.specialty {
            Some(specialty) => provider.specialty == *specialty,
            None => true,
        };

        let matches_availability = match &self.availability {
            Some(token) => {
                let token = token.to_lowercase();
                provider
                    .availability
                    .iter()
                    .any(|slot| slot.to_lowercase().contains(&token))
            }
            None => true,
        };

        matches_specialty && matches_availability
    }
}

/// Produces the subsequence of providers matching the filter.
///
/// ## Guarantees
/// - Returns a NEW collection; the source is never mutated
/// - Source ordering is preserved
/// - Every returned provider satisfies both predicates
pub fn filter_providers(providers: &[Provider], filter: &ProviderFilter) -> Vec<Provider> {
    providers
        .iter()
        .filter(|provider| filter.matches(provider))
        .cloned()
        .collect()
}

// =============================================================================
// Option Lists
// =============================================================================

/// Builds the specialty dropdown options: "All" followed by the distinct
/// specialties in seed order.
pub fn specialty_options(providers: &[Provider]) -> Vec<String> {
    let mut options = vec![FILTER_ALL.to_string()];
    for provider in providers {
        if !options.contains(&provider.specialty) {
            options.push(provider.specialty.clone());
        }
    }
    options
}

/// Builds the availability dropdown options: "All" followed by the distinct
/// first whitespace token of every seed slot label ("Mon 10am" → "Mon"),
/// in seed order.
pub fn availability_options(providers: &[Provider]) -> Vec<String> {
    let mut options = vec![FILTER_ALL.to_string()];
    for provider in providers {
        for slot in &provider.availability {
            if let Some(day) = slot.split_whitespace().next() {
                let day = day.to_string();
                if !options.contains(&day) {
                    options.push(day);
                }
            }
        }
    }
    options
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_provider(id: &str, name: &str, specialty: &str, slots: &[&str]) -> Provider {
        Provider {
            id: id.to_string(),
            name: name.to_string(),
            specialty: specialty.to_string(),
            rating: 4.5,
            availability: slots.iter().map(|s| s.to_string()).collect(),
            location: "Clinic".to_string(),
            photo_url: String::new(),
        }
    }

    fn roster() -> Vec<Provider> {
        vec![
            test_provider("1", "Dr. A", "Cardiology", &["Mon 10am", "Tue 2pm"]),
            test_provider("2", "Dr. B", "Dermatology", &["Wed 9am"]),
            test_provider("3", "Dr. C", "Cardiology", &["Tue 11am", "Fri 4pm"]),
        ]
    }

    #[test]
    fn test_no_filter_returns_all_in_order() {
        let providers = roster();
        let filtered = filter_providers(&providers, &ProviderFilter::all());
        assert_eq!(filtered, providers);
    }

    #[test]
    fn test_specialty_filter_is_exact_match() {
        let providers = roster();
        let filter = ProviderFilter {
            specialty: Some("Cardiology".to_string()),
            availability: None,
        };

        let filtered = filter_providers(&providers, &filter);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "Dr. A");
        assert_eq!(filtered[1].name, "Dr. C");

        // "Cardio" is not an exact specialty
        let filter = ProviderFilter {
            specialty: Some("Cardio".to_string()),
            availability: None,
        };
        assert!(filter_providers(&providers, &filter).is_empty());
    }

    #[test]
    fn test_availability_filter_is_case_insensitive_substring() {
        let providers = roster();
        let filter = ProviderFilter {
            specialty: None,
            availability: Some("tue".to_string()),
        };

        let filtered = filter_providers(&providers, &filter);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "Dr. A");
        assert_eq!(filtered[1].name, "Dr. C");
    }

    #[test]
    fn test_both_predicates_must_hold() {
        let providers = roster();
        let filter = ProviderFilter {
            specialty: Some("Cardiology".to_string()),
            availability: Some("Fri".to_string()),
        };

        let filtered = filter_providers(&providers, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Dr. C");
    }

    #[test]
    fn test_filter_does_not_mutate_source() {
        let providers = roster();
        let before = providers.clone();
        let filter = ProviderFilter {
            specialty: Some("Dermatology".to_string()),
            availability: None,
        };

        let _ = filter_providers(&providers, &filter);
        assert_eq!(providers, before);
    }

    #[test]
    fn test_specialty_options_distinct_in_seed_order() {
        let options = specialty_options(&roster());
        assert_eq!(options, vec!["All", "Cardiology", "Dermatology"]);
    }

    #[test]
    fn test_availability_options_use_day_tokens() {
        let options = availability_options(&roster());
        assert_eq!(options, vec!["All", "Mon", "Tue", "Wed", "Fri"]);
    }
}
