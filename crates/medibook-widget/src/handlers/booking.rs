//! # Booking Handlers
//!
//! Handlers behind the booking dialog: opening it for a provider, choosing
//! a slot, and confirming the appointment.
//!
//! ## Booking Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Booking Lifecycle                                    │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Browsing│────►│  Dialog  │────►│   Slot   │────►│ Confirmed│       │
//! │  │  cards   │     │   open   │     │  chosen  │     │ (booked) │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                │             │
//! │                 select_provider     select_slot    confirm_appointment  │
//! │                        │                 │                │             │
//! │                        ▼                 ▼                ▼             │
//! │                   close_dialog ◄────────────────  selection cleared     │
//! │                   (discards selection)                                  │
//! │                                                                         │
//! │  Confirm with no slot chosen is an explicit NO_SELECTION error, not    │
//! │  a silent no-op: the frontend keeps the button disabled AND the        │
//! │  backend enforces the rule.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use medibook_core::validation::validate_uuid;
use medibook_core::CoreError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::handlers::appointments::AppointmentView;
use crate::handlers::directory::ProviderCard;
use crate::BookingWidget;

/// Dialog state handed to the rendering layer.
///
/// `None` from [`BookingWidget::dialog`] means no dialog is open.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogView {
    /// The provider being booked, with their CURRENT availability
    /// (already-booked slots are absent).
    pub provider: ProviderCard,

    /// The slot the user has clicked inside the dialog, if any.
    pub selected_slot: Option<String>,
}

impl BookingWidget {
    /// Opens the booking dialog for a provider.
    ///
    /// Any previously chosen slot is discarded (it belonged to the previous
    /// dialog).
    ///
    /// ## Errors
    /// - `VALIDATION_ERROR` when the id is not a well-formed UUID
    /// - `NOT_FOUND` when the id does not resolve to a roster provider
    pub fn select_provider(&self, provider_id: &str) -> Result<DialogView, ApiError> {
        debug!(provider_id = %provider_id, "select_provider handler");

        validate_uuid(provider_id).map_err(CoreError::Validation)?;

        let card = self
            .schedule
            .with_schedule(|s| s.provider_by_id(provider_id).map(ProviderCard::from))
            .ok_or_else(|| ApiError::not_found("Provider", provider_id))?;

        self.session
            .with_session_mut(|s| s.select_provider(provider_id));

        Ok(DialogView {
            provider: card,
            selected_slot: None,
        })
    }

    /// Chooses a slot inside the open dialog.
    ///
    /// ## Errors
    /// - `NO_SELECTION` when no dialog is open
    /// - `SLOT_UNAVAILABLE` when the label is not currently offered by the
    ///   selected provider
    pub fn select_slot(&self, label: &str) -> Result<DialogView, ApiError> {
        debug!(slot = %label, "select_slot handler");

        let provider_id = self
            .session
            .with_session(|s| s.selected_provider.clone())
            .ok_or_else(|| ApiError::no_selection("provider"))?;

        let card = self
            .schedule
            .with_schedule(|s| s.provider_by_id(&provider_id).map(ProviderCard::from))
            .ok_or_else(|| ApiError::not_found("Provider", &provider_id))?;

        if !card.availability.iter().any(|slot| slot == label) {
            return Err(ApiError::new(
                crate::error::ErrorCode::SlotUnavailable,
                format!("Slot '{}' is not available with {}", label, card.name),
            ));
        }

        self.session.with_session_mut(|s| s.select_slot(label));

        Ok(DialogView {
            provider: card,
            selected_slot: Some(label.to_string()),
        })
    }

    /// Closes the dialog and discards the selection.
    pub fn close_dialog(&self) {
        debug!("close_dialog handler");
        self.session.with_session_mut(|s| s.clear_selection());
    }

    /// The current dialog state, if a dialog is open.
    pub fn dialog(&self) -> Option<DialogView> {
        let (provider_id, selected_slot) = self
            .session
            .with_session(|s| (s.selected_provider.clone(), s.selected_slot.clone()));

        let provider_id = provider_id?;
        let card = self
            .schedule
            .with_schedule(|s| s.provider_by_id(&provider_id).map(ProviderCard::from))?;

        Some(DialogView {
            provider: card,
            selected_slot,
        })
    }

    /// Confirms the appointment for the selected provider and slot.
    ///
    /// ## Effect (atomic from the caller's perspective)
    /// 1. A new appointment is appended to the list
    /// 2. The slot leaves the provider's availability
    /// 3. The transient selection is cleared (dialog closes)
    ///
    /// ## Errors
    /// - `NO_SELECTION` when no provider dialog is open or no slot is chosen
    /// - `SLOT_UNAVAILABLE` / `NOT_FOUND` from the underlying transition
    pub fn confirm_appointment(&self) -> Result<AppointmentView, ApiError> {
        debug!("confirm_appointment handler");

        let (provider_id, slot) = self
            .session
            .with_session(|s| (s.selected_provider.clone(), s.selected_slot.clone()));

        let provider_id = provider_id.ok_or_else(|| ApiError::no_selection("provider"))?;
        let slot = slot.ok_or_else(|| ApiError::no_selection("slot"))?;

        let appointment = self
            .schedule
            .with_schedule_mut(|s| s.book(&provider_id, &slot))?;

        self.session.with_session_mut(|s| s.clear_selection());

        info!(
            provider = %appointment.provider_name,
            slot = %appointment.slot,
            "Appointment confirmed"
        );

        Ok(AppointmentView::from(&appointment))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
