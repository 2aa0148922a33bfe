//! # Appointment Handlers
//!
//! Handlers behind the "My Appointments" summary list and cancellation.
//!
//! ## Cancellation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cancellation Flow                                    │
//! │                                                                         │
//! │  User clicks "Cancel" on list entry 0                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  widget.cancel_appointment(0)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  1. Remove the appointment at index 0     │                         │
//! │  │  2. Resolve the provider BY ID            │                         │
//! │  │  3. Return the slot to availability,      │                         │
//! │  │     re-sorted lexicographically           │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Updated Vec<AppointmentView> re-rendered; the freed slot is           │
//! │  choosable again in the provider's dialog                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use medibook_core::Appointment;

use crate::error::ApiError;
use crate::BookingWidget;

/// Appointment DTO for the summary list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentView {
    pub id: String,
    pub provider_id: String,
    pub provider_name: String,
    pub specialty: String,
    pub location: String,
    pub slot: String,
    /// RFC 3339 timestamp of when the booking was confirmed.
    pub booked_at: String,
}

impl From<&Appointment> for AppointmentView {
    fn from(a: &Appointment) -> Self {
        AppointmentView {
            id: a.id.clone(),
            provider_id: a.provider_id.clone(),
            provider_name: a.provider_name.clone(),
            specialty: a.specialty.clone(),
            location: a.location.clone(),
            slot: a.slot.clone(),
            booked_at: a.booked_at.to_rfc3339(),
        }
    }
}

impl BookingWidget {
    /// Returns the confirmed appointments, oldest first.
    ///
    /// List position is the index [`BookingWidget::cancel_appointment`]
    /// expects; it carries no other meaning.
    pub fn appointments(&self) -> Vec<AppointmentView> {
        debug!("appointments handler");

        self.schedule.with_schedule(|s| {
            s.appointments().iter().map(AppointmentView::from).collect()
        })
    }

    /// Cancels the appointment at `index` and returns the updated list.
    ///
    /// The freed slot goes back into the provider's availability (re-sorted
    /// lexicographically) and is immediately choosable again.
    ///
    /// ## Errors
    /// `NOT_FOUND` for an out-of-range index or an appointment whose
    /// provider id no longer resolves.
    pub fn cancel_appointment(&self, index: usize) -> Result<Vec<AppointmentView>, ApiError> {
        debug!(index = %index, "cancel_appointment handler");

        let cancelled = self.schedule.with_schedule_mut(|s| s.cancel(index))?;

        info!(
            provider = %cancelled.provider_name,
            slot = %cancelled.slot,
            "Appointment cancelled"
        );

        Ok(self.appointments())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
