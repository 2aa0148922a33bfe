//! # Directory Handlers
//!
//! Handlers behind the provider card grid and the two filter dropdowns.
//!
//! ## Directory Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Directory Flow                                       │
//! │                                                                         │
//! │  User picks "Cardiology" in the specialty dropdown                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  widget.set_specialty_filter("Cardiology")                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  1. Store the selection on the session    │                         │
//! │  │     ("All" resets to the sentinel)        │                         │
//! │  │  2. Re-derive the filtered view           │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<ProviderCard> re-rendered as the card grid                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use medibook_core::Provider;

use crate::BookingWidget;

/// Provider DTO (Data Transfer Object) for the card grid.
///
/// ## Why DTO?
/// - Decouples the domain model from the API contract
/// - Handles serde rename to camelCase for JS consumption
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCard {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub rating: f64,
    /// Remaining open slots, joined into buttons by the frontend.
    pub availability: Vec<String>,
    pub location: String,
    pub photo_url: String,
}

impl From<&Provider> for ProviderCard {
    fn from(p: &Provider) -> Self {
        ProviderCard {
            id: p.id.clone(),
            name: p.name.clone(),
            specialty: p.specialty.clone(),
            rating: p.rating,
            availability: p.availability.clone(),
            location: p.location.clone(),
            photo_url: p.photo_url.clone(),
        }
    }
}

impl BookingWidget {
    /// Returns the filtered provider view for card rendering.
    ///
    /// ## Guarantees
    /// An order-preserving subsequence of the roster; the roster itself is
    /// never mutated by filtering.
    pub fn directory(&self) -> Vec<ProviderCard> {
        debug!("directory handler");

        let filter = self.session.with_session(|s| s.filter());
        self.schedule.with_schedule(|s| {
            s.filtered(&filter).iter().map(ProviderCard::from).collect()
        })
    }

    /// Sets the specialty dropdown and returns the re-filtered view.
    ///
    /// ## Arguments
    /// * `selection` - A value from the config's `specialties` list;
    ///   `"All"` clears the filter
    pub fn set_specialty_filter(&self, selection: &str) -> Vec<ProviderCard> {
        debug!(selection = %selection, "set_specialty_filter handler");

        self.session
            .with_session_mut(|s| s.set_specialty_filter(selection));
        self.directory()
    }

    /// Sets the availability dropdown and returns the re-filtered view.
    ///
    /// ## Arguments
    /// * `selection` - A value from the config's `availabilities` list
    ///   (a day token such as `"Tue"`); `"All"` clears the filter
    pub fn set_availability_filter(&self, selection: &str) -> Vec<ProviderCard> {
        debug!(selection = %selection, "set_availability_filter handler");

        self.session
            .with_session_mut(|s| s.set_availability_filter(selection));
        self.directory()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
