//! # Schedule Module
//!
//! The booking ledger: the authoritative in-memory roster of providers and
//! the list of confirmed appointments, plus the two state transitions that
//! move a slot between them.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Schedule Transitions                               │
//! │                                                                         │
//! │            ┌──────────────────┐   book    ┌──────────────────┐          │
//! │            │    Provider      │──────────►│   Appointment    │          │
//! │            │   availability   │           │      list        │          │
//! │            │  ["Mon 10am",    │◄──────────│  [{Dr. A,        │          │
//! │            │   "Tue 2pm"]     │  cancel   │    Mon 10am}]    │          │
//! │            └──────────────────┘           └──────────────────┘          │
//! │                                                                         │
//! │  INVARIANT: a slot label lives in exactly one of the two places.       │
//! │                                                                         │
//! │  Both transitions REPLACE the collections wholesale (new Vecs built    │
//! │  from the old) instead of mutating in place, so every derived view     │
//! │  observes either the old state or the new state, never a mix.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::filter::{filter_providers, ProviderFilter};
use crate::types::{Appointment, Provider};

// =============================================================================
// Schedule
// =============================================================================

/// The booking ledger.
///
/// ## Ownership
/// The schedule exclusively owns both collections. Callers read through the
/// accessor slices and mutate only through [`Schedule::book`] and
/// [`Schedule::cancel`].
///
/// ## Invariants
/// - Providers are seeded once and never created or deleted afterwards
/// - Appointment order is display/cancellation-index order only
/// - A slot is either in a provider's availability or on one appointment
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    providers: Vec<Provider>,
    appointments: Vec<Appointment>,
}

impl Schedule {
    /// Creates a schedule from seed providers with no appointments.
    pub fn from_seed(providers: Vec<Provider>) -> Self {
        Schedule {
            providers,
            appointments: Vec::new(),
        }
    }

    /// The full provider roster, in seed order.
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// Confirmed appointments, oldest first.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Looks up a provider by stable id.
    pub fn provider_by_id(&self, provider_id: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == provider_id)
    }

    /// Produces the filtered, read-only view of the roster.
    pub fn filtered(&self, filter: &ProviderFilter) -> Vec<Provider> {
        filter_providers(&self.providers, filter)
    }

    /// Books a slot: moves it from the provider's availability onto a new
    /// appointment at the end of the list.
    ///
    /// ## Effect (atomic from the caller's perspective)
    /// 1. Append an [`Appointment`] carrying frozen provider snapshots
    /// 2. Remove exactly ONE occurrence of the slot from availability
    ///
    /// ## Errors
    /// - [`CoreError::ProviderNotFound`] for an unknown id
    /// - [`CoreError::SlotUnavailable`] when the label is not currently open
    pub fn book(&mut self, provider_id: &str, slot: &str) -> CoreResult<Appointment> {
        let provider = self
            .provider_by_id(provider_id)
            .ok_or_else(|| CoreError::ProviderNotFound(provider_id.to_string()))?;

        if !provider.has_slot(slot) {
            return Err(CoreError::SlotUnavailable {
                provider: provider.name.clone(),
                slot: slot.to_string(),
            });
        }

        let appointment = Appointment::from_provider(provider, slot);

        // Whole-state replacement: build the new collections before
        // publishing either, so views never see a half-applied booking.
        let providers: Vec<Provider> = self
            .providers
            .iter()
            .map(|p| {
                if p.id == provider_id {
                    p.without_slot(slot)
                } else {
                    p.clone()
                }
            })
            .collect();

        let mut appointments = self.appointments.clone();
        appointments.push(appointment.clone());

        self.providers = providers;
        self.appointments = appointments;

        Ok(appointment)
    }

    /// Cancels the appointment at `index`: removes it from the list and
    /// returns its slot to the provider's availability, re-sorted
    /// lexicographically.
    ///
    /// ## Errors
    /// - [`CoreError::AppointmentNotFound`] for an out-of-range index
    /// - [`CoreError::ProviderNotFound`] when the appointment's provider id
    ///   no longer resolves (corrupt state; providers are never deleted)
    pub fn cancel(&mut self, index: usize) -> CoreResult<Appointment> {
        if index >= self.appointments.len() {
            return Err(CoreError::AppointmentNotFound {
                index,
                len: self.appointments.len(),
            });
        }

        let appointment = self.appointments[index].clone();

        if self.provider_by_id(&appointment.provider_id).is_none() {
            return Err(CoreError::ProviderNotFound(appointment.provider_id));
        }

        let providers: Vec<Provider> = self
            .providers
            .iter()
            .map(|p| {
                if p.id == appointment.provider_id {
                    p.with_slot_restored(&appointment.slot)
                } else {
                    p.clone()
                }
            })
            .collect();

        let mut appointments = self.appointments.clone();
        appointments.remove(index);

        self.providers = providers;
        self.appointments = appointments;

        Ok(appointment)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const DR_A: &str = "550e8400-e29b-41d4-a716-446655440001";
    const DR_B: &str = "550e8400-e29b-41d4-a716-446655440002";

    fn test_provider(id: &str, name: &str, specialty: &str, slots: &[&str]) -> Provider {
        Provider {
            id: id.to_string(),
            name: name.to_string(),
            specialty: specialty.to_string(),
            rating: 4.8,
            availability: slots.iter().map(|s| s.to_string()).collect(),
            location: "Suite 100".to_string(),
            photo_url: String::new(),
        }
    }

    fn seeded() -> Schedule {
        Schedule::from_seed(vec![
            test_provider(DR_A, "Dr. A", "Cardiology", &["Mon 10am", "Tue 2pm"]),
            test_provider(DR_B, "Dr. B", "Dermatology", &["Wed 9am"]),
        ])
    }

    #[test]
    fn test_book_moves_slot_into_appointment() {
        let mut schedule = seeded();

        let appointment = schedule.book(DR_A, "Mon 10am").unwrap();

        assert_eq!(appointment.provider_name, "Dr. A");
        assert_eq!(appointment.specialty, "Cardiology");
        assert_eq!(appointment.slot, "Mon 10am");

        assert_eq!(schedule.appointments().len(), 1);
        let dr_a = schedule.provider_by_id(DR_A).unwrap();
        assert_eq!(dr_a.availability, vec!["Tue 2pm"]);
        // Other providers untouched
        let dr_b = schedule.provider_by_id(DR_B).unwrap();
        assert_eq!(dr_b.availability, vec!["Wed 9am"]);
    }

    #[test]
    fn test_book_removes_exactly_one_duplicate_occurrence() {
        let mut schedule = Schedule::from_seed(vec![test_provider(
            DR_A,
            "Dr. A",
            "Cardiology",
            &["Mon 10am", "Mon 10am"],
        )]);

        schedule.book(DR_A, "Mon 10am").unwrap();

        let dr_a = schedule.provider_by_id(DR_A).unwrap();
        assert_eq!(dr_a.availability, vec!["Mon 10am"]);
    }

    #[test]
    fn test_book_unknown_provider_fails() {
        let mut schedule = seeded();
        let err = schedule.book("not-a-real-id", "Mon 10am").unwrap_err();
        assert!(matches!(err, CoreError::ProviderNotFound(_)));
        assert_eq!(schedule.appointments().len(), 0);
    }

    #[test]
    fn test_book_unavailable_slot_fails() {
        let mut schedule = seeded();
        schedule.book(DR_A, "Mon 10am").unwrap();

        // Second booking of the same slot gets an explicit rejection
        let err = schedule.book(DR_A, "Mon 10am").unwrap_err();
        assert!(matches!(err, CoreError::SlotUnavailable { .. }));
        assert_eq!(schedule.appointments().len(), 1);
    }

    #[test]
    fn test_cancel_restores_slot_sorted() {
        let mut schedule = seeded();
        schedule.book(DR_A, "Mon 10am").unwrap();

        let cancelled = schedule.cancel(0).unwrap();

        assert_eq!(cancelled.slot, "Mon 10am");
        assert_eq!(schedule.appointments().len(), 0);
        let dr_a = schedule.provider_by_id(DR_A).unwrap();
        assert_eq!(dr_a.availability, vec!["Mon 10am", "Tue 2pm"]);
    }

    #[test]
    fn test_cancel_removes_exactly_the_indexed_appointment() {
        let mut schedule = seeded();
        schedule.book(DR_A, "Mon 10am").unwrap();
        schedule.book(DR_B, "Wed 9am").unwrap();

        schedule.cancel(0).unwrap();

        assert_eq!(schedule.appointments().len(), 1);
        assert_eq!(schedule.appointments()[0].provider_name, "Dr. B");
    }

    #[test]
    fn test_cancel_out_of_range_fails() {
        let mut schedule = seeded();
        let err = schedule.cancel(0).unwrap_err();
        assert!(matches!(
            err,
            CoreError::AppointmentNotFound { index: 0, len: 0 }
        ));
    }

    #[test]
    fn test_book_then_cancel_round_trip() {
        let mut schedule = seeded();
        let before: Vec<String> = schedule.provider_by_id(DR_A).unwrap().availability.clone();

        schedule.book(DR_A, "Tue 2pm").unwrap();
        schedule.cancel(0).unwrap();

        // Set equality; cancellation re-sorts, so compare sorted
        let mut after = schedule.provider_by_id(DR_A).unwrap().availability.clone();
        let mut expected = before;
        after.sort();
        expected.sort();
        assert_eq!(after, expected);
    }

    #[test]
    fn test_same_name_providers_never_cross_wires() {
        // Two providers sharing a display name: id linkage keeps them apart.
        let mut schedule = Schedule::from_seed(vec![
            test_provider(DR_A, "Dr. Smith", "Cardiology", &["Mon 10am"]),
            test_provider(DR_B, "Dr. Smith", "Dermatology", &["Tue 2pm"]),
        ]);

        schedule.book(DR_B, "Tue 2pm").unwrap();
        schedule.cancel(0).unwrap();

        assert_eq!(
            schedule.provider_by_id(DR_A).unwrap().availability,
            vec!["Mon 10am"]
        );
        assert_eq!(
            schedule.provider_by_id(DR_B).unwrap().availability,
            vec!["Tue 2pm"]
        );
    }

    #[test]
    fn test_filtered_view_reflects_bookings() {
        let mut schedule = seeded();

        let filter = ProviderFilter {
            specialty: None,
            availability: Some("Mon".to_string()),
        };
        assert_eq!(schedule.filtered(&filter).len(), 1);

        schedule.book(DR_A, "Mon 10am").unwrap();
        assert_eq!(schedule.filtered(&filter).len(), 0);
    }
}
