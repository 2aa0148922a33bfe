//! # Seed Loading
//!
//! Parses and validates the bundled provider roster.
//!
//! ## Seed Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Seed Pipeline                                      │
//! │                                                                         │
//! │  data/doctors.json (embedded via include_str!)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  serde_json ──► Vec<SeedProvider> ──── parse error? ──► SeedError      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate each record (UUID id, name, specialty,                       │
//! │  rating range, slot labels, duplicate ids)                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<Provider> ──► Schedule::from_seed                                 │
//! │                                                                         │
//! │  The seed is treated as READ-ONLY: it is copied into mutable state     │
//! │  once at startup and never written back.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The original web widget loaded its roster from a bundled JSON file with
//! no validation at all; malformed records surfaced as rendering glitches.
//! Here a bad seed is a typed [`SeedError`] at startup.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use medibook_core::validation::{
    validate_provider_name, validate_rating, validate_slot_label, validate_specialty,
    validate_uuid,
};
use medibook_core::{Provider, ValidationError};

/// The bundled provider roster.
const SEED_JSON: &str = include_str!("../data/doctors.json");

// =============================================================================
// Seed Error
// =============================================================================

/// Errors produced while loading the bundled seed.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The JSON document failed to parse.
    #[error("Seed data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record failed field validation.
    #[error("Seed record {index} ({name}): {source}")]
    InvalidRecord {
        index: usize,
        name: String,
        source: ValidationError,
    },

    /// Two records share an id.
    #[error("Seed record {index}: duplicate provider id {id}")]
    DuplicateId { index: usize, id: String },
}

// =============================================================================
// Seed Record
// =============================================================================

/// A raw seed record as it appears in `data/doctors.json`.
///
/// ## Why a separate type?
/// The JSON schema (field `photo`) predates the Rust types; keeping a
/// dedicated deserialization target means the domain [`Provider`] never
/// carries serde quirks.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedProvider {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub rating: f64,
    pub availability: Vec<String>,
    pub location: String,
    pub photo: String,
}

impl From<SeedProvider> for Provider {
    fn from(seed: SeedProvider) -> Self {
        Provider {
            id: seed.id,
            name: seed.name,
            specialty: seed.specialty,
            rating: seed.rating,
            availability: seed.availability,
            location: seed.location,
            photo_url: seed.photo,
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Loads and validates the bundled seed roster.
pub fn load_seed() -> Result<Vec<Provider>, SeedError> {
    let providers = parse_seed(SEED_JSON)?;
    info!(count = providers.len(), "Seed roster loaded");
    Ok(providers)
}

/// Parses and validates a seed document.
///
/// Exposed separately from [`load_seed`] so tests can feed in documents
/// other than the bundled one.
pub fn parse_seed(json: &str) -> Result<Vec<Provider>, SeedError> {
    let records: Vec<SeedProvider> = serde_json::from_str(json)?;

    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut providers = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        validate_record(index, &record)?;

        if !seen_ids.insert(record.id.clone()) {
            return Err(SeedError::DuplicateId {
                index,
                id: record.id,
            });
        }

        providers.push(Provider::from(record));
    }

    Ok(providers)
}

/// Applies the field-level rules to one record.
fn validate_record(index: usize, record: &SeedProvider) -> Result<(), SeedError> {
    let invalid = |source: ValidationError| SeedError::InvalidRecord {
        index,
        name: record.name.clone(),
        source,
    };

    validate_uuid(&record.id).map_err(invalid)?;
    validate_provider_name(&record.name).map_err(invalid)?;
    validate_specialty(&record.specialty).map_err(invalid)?;
    validate_rating(record.rating).map_err(invalid)?;

    for slot in &record.availability {
        validate_slot_label(slot).map_err(invalid)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_seed_loads() {
        let providers = load_seed().unwrap();
        assert!(!providers.is_empty());

        // Every record passed validation, so spot-check the mapping
        let first = &providers[0];
        assert!(!first.name.is_empty());
        assert!(!first.availability.is_empty());
        assert!(first.photo_url.starts_with("https://"));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = parse_seed("not json").unwrap_err();
        assert!(matches!(err, SeedError::Parse(_)));
    }

    #[test]
    fn test_parse_rejects_invalid_record() {
        let json = r#"[{
            "id": "not-a-uuid",
            "name": "Dr. Broken",
            "specialty": "Cardiology",
            "rating": 4.5,
            "availability": ["Mon 10am"],
            "location": "Clinic",
            "photo": ""
        }]"#;

        let err = parse_seed(json).unwrap_err();
        assert!(matches!(err, SeedError::InvalidRecord { index: 0, .. }));
    }

    #[test]
    fn test_parse_rejects_out_of_range_rating() {
        let json = r#"[{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "Dr. Eleven",
            "specialty": "Cardiology",
            "rating": 11.0,
            "availability": ["Mon 10am"],
            "location": "Clinic",
            "photo": ""
        }]"#;

        let err = parse_seed(json).unwrap_err();
        assert!(matches!(err, SeedError::InvalidRecord { .. }));
    }

    #[test]
    fn test_parse_rejects_duplicate_ids() {
        let json = r#"[
            {
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "name": "Dr. One",
                "specialty": "Cardiology",
                "rating": 4.5,
                "availability": ["Mon 10am"],
                "location": "Clinic",
                "photo": ""
            },
            {
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "name": "Dr. Two",
                "specialty": "Dermatology",
                "rating": 4.0,
                "availability": ["Tue 2pm"],
                "location": "Clinic",
                "photo": ""
            }
        ]"#;

        let err = parse_seed(json).unwrap_err();
        assert!(matches!(err, SeedError::DuplicateId { index: 1, .. }));
    }
}
