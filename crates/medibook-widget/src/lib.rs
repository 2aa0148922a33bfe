//! # Medibook Widget Library
//!
//! The stateful facade of the Medibook appointment-booking widget. The
//! rendering layer constructs one [`BookingWidget`] and invokes its handlers
//! in response to user actions.
//!
//! ## Module Organization
//! ```text
//! medibook_widget/
//! ├── lib.rs          ◄─── You are here (BookingWidget setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── schedule.rs ◄─── Schedule state wrapper
//! │   ├── session.rs  ◄─── Transient selection + filters
//! │   └── config.rs   ◄─── Frozen configuration
//! ├── handlers/
//! │   ├── mod.rs      ◄─── Handler exports
//! │   ├── directory.rs◄─── Filter dropdowns + card grid
//! │   ├── booking.rs  ◄─── Dialog: select/confirm
//! │   ├── appointments.rs ◄ Summary list + cancel
//! │   └── config.rs   ◄─── Startup configuration
//! ├── seed.rs         ◄─── Bundled roster loading
//! └── error.rs        ◄─── API error type for handlers
//! ```
//!
//! ## State Management (Multiple State Types)
//! Instead of a single `AppState` struct, the widget owns multiple focused
//! state types:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Widget State Management                              │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │  ScheduleState   │ │   SessionState   │ │    ConfigState       │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  • Roster        │ │  • Open dialog   │ │  • Clinic name       │   │
//! │  │  • Appointments  │ │  • Chosen slot   │ │  • Dropdown options  │   │
//! │  │  • Transitions   │ │  • Filters       │ │    (frozen at load)  │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! │                                                                         │
//! │  WHY: Each handler touches exactly the state it needs.                 │
//! │       Better separation of concerns and testability.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod handlers;
pub mod seed;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use medibook_core::Provider;
use seed::SeedError;
use state::{ConfigState, ScheduleState, SessionState};

/// The booking widget facade.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Widget Startup                                    │
/// │                                                                         │
/// │  1. Load Seed Roster ─────────────────────────────────────────────────► │
/// │     • Bundled JSON, parsed and validated                                │
/// │     • Read-only: copied into mutable state, never written back          │
/// │                                                                         │
/// │  2. Freeze Configuration ─────────────────────────────────────────────► │
/// │     • Dropdown option lists derived from the seed, once                 │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • ScheduleState: roster + empty appointment list                    │
/// │     • SessionState: nothing selected, filters on "All"                  │
/// │                                                                         │
/// │  All state is transient: dropping the widget loses everything,          │
/// │  exactly as a page reload did in the original.                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug)]
pub struct BookingWidget {
    pub(crate) schedule: ScheduleState,
    pub(crate) session: SessionState,
    pub(crate) config: ConfigState,
}

impl BookingWidget {
    /// Creates a widget from the bundled seed roster.
    pub fn new() -> Result<Self, SeedError> {
        let providers = seed::load_seed()?;
        Ok(Self::from_providers(providers, "Medibook Clinic"))
    }

    /// Creates a widget from an explicit roster.
    ///
    /// Used by embedders that supply their own roster, and by tests.
    pub fn from_providers(providers: Vec<Provider>, clinic_name: &str) -> Self {
        let config = ConfigState::from_seed(clinic_name, &providers);

        info!(
            providers = providers.len(),
            clinic = %config.clinic_name,
            "Booking widget initialized"
        );

        BookingWidget {
            schedule: ScheduleState::from_seed(providers),
            session: SessionState::new(),
            config,
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Called once by the embedding shell, not by the library itself.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=medibook=trace` - Show trace for medibook crates only
/// - Default: INFO level, DEBUG for medibook crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,medibook=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_boots_from_bundled_seed() {
        let widget = BookingWidget::new().unwrap();

        assert!(!widget.directory().is_empty());
        assert!(widget.appointments().is_empty());
        assert!(widget.dialog().is_none());
        assert!(widget.config().specialties.len() > 1);
    }

    #[test]
    fn test_bundled_scenario_end_to_end() {
        let widget = BookingWidget::new().unwrap();

        // Narrow to cardiologists available on Tuesday
        widget.set_specialty_filter("Cardiology");
        let cards = widget.set_availability_filter("Tue");
        assert!(!cards.is_empty());

        // Book the first offered slot
        let card = &cards[0];
        let slot = card.availability[0].clone();
        widget.select_provider(&card.id).unwrap();
        widget.select_slot(&slot).unwrap();
        let appointment = widget.confirm_appointment().unwrap();
        assert_eq!(appointment.slot, slot);

        // Cancel it; the slot is offered again
        widget.cancel_appointment(0).unwrap();
        let dialog = widget.select_provider(&card.id).unwrap();
        assert!(dialog.provider.availability.contains(&slot));
    }
}
