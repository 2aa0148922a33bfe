//! # Session State
//!
//! Manages the transient per-session selection: which provider's dialog is
//! open, which slot is chosen, and the current filter dropdowns.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  Frontend Action          Handler                 Session Change        │
//! │  ───────────────          ───────                 ──────────────        │
//! │                                                                         │
//! │  Click "Book" ───────────► select_provider() ───► provider = Some(id)  │
//! │                                                   slot = None           │
//! │                                                                         │
//! │  Click a slot ───────────► select_slot() ───────► slot = Some(label)   │
//! │                                                                         │
//! │  Click "Confirm" ────────► confirm_appointment ─► (book, then clear)   │
//! │                                                                         │
//! │  Close dialog ───────────► close_dialog() ──────► provider/slot = None │
//! │                                                                         │
//! │  Change dropdown ────────► set_*_filter() ──────► filter updated       │
//! │                                                                         │
//! │  NOTE: selection never outlives a successful booking; the schedule     │
//! │        is the only durable state.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use medibook_core::{ProviderFilter, FILTER_ALL};

/// The transient selection state behind the booking dialog and the filter
/// dropdowns.
///
/// ## Invariants
/// - A slot can only be chosen while a provider dialog is open
/// - Selecting a provider discards any previously chosen slot
#[derive(Debug, Clone)]
pub struct Session {
    /// Provider id whose booking dialog is open, if any.
    pub selected_provider: Option<String>,

    /// Slot label chosen inside the dialog, if any.
    pub selected_slot: Option<String>,

    /// Specialty dropdown value; None is the "All" sentinel.
    pub specialty_filter: Option<String>,

    /// Availability dropdown value; None is the "All" sentinel.
    pub availability_filter: Option<String>,

    /// When the session started (widget construction).
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Creates a fresh session: nothing selected, both filters on "All".
    pub fn new() -> Self {
        Session {
            selected_provider: None,
            selected_slot: None,
            specialty_filter: None,
            availability_filter: None,
            started_at: Utc::now(),
        }
    }

    /// Opens the booking dialog for a provider.
    ///
    /// Any previously chosen slot belongs to the previous dialog and is
    /// discarded.
    pub fn select_provider(&mut self, provider_id: &str) {
        self.selected_provider = Some(provider_id.to_string());
        self.selected_slot = None;
    }

    /// Chooses a slot inside the open dialog.
    pub fn select_slot(&mut self, label: &str) {
        self.selected_slot = Some(label.to_string());
    }

    /// Closes the dialog and discards the selection.
    pub fn clear_selection(&mut self) {
        self.selected_provider = None;
        self.selected_slot = None;
    }

    /// Whether a provider dialog is currently open.
    pub fn dialog_open(&self) -> bool {
        self.selected_provider.is_some()
    }

    /// Sets the specialty dropdown. The [`FILTER_ALL`] literal resets to
    /// the sentinel.
    pub fn set_specialty_filter(&mut self, selection: &str) {
        self.specialty_filter = if selection == FILTER_ALL {
            None
        } else {
            Some(selection.to_string())
        };
    }

    /// Sets the availability dropdown. The [`FILTER_ALL`] literal resets to
    /// the sentinel.
    pub fn set_availability_filter(&mut self, selection: &str) {
        self.availability_filter = if selection == FILTER_ALL {
            None
        } else {
            Some(selection.to_string())
        };
    }

    /// The current filter selection as a core predicate.
    pub fn filter(&self) -> ProviderFilter {
        ProviderFilter {
            specialty: self.specialty_filter.clone(),
            availability: self.availability_filter.clone(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Widget-managed session state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Session>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures only one handler mutates the selection at a time
#[derive(Debug)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Creates a fresh session state.
    pub fn new() -> Self {
        SessionState {
            session: Arc::new(Mutex::new(Session::new())),
        }
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        f(&mut session)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selecting_provider_discards_previous_slot() {
        let mut session = Session::new();
        session.select_provider("provider-1");
        session.select_slot("Mon 10am");

        session.select_provider("provider-2");

        assert_eq!(session.selected_provider.as_deref(), Some("provider-2"));
        assert_eq!(session.selected_slot, None);
    }

    #[test]
    fn test_clear_selection_closes_dialog() {
        let mut session = Session::new();
        session.select_provider("provider-1");
        session.select_slot("Mon 10am");
        assert!(session.dialog_open());

        session.clear_selection();

        assert!(!session.dialog_open());
        assert_eq!(session.selected_slot, None);
    }

    #[test]
    fn test_all_literal_resets_filters() {
        let mut session = Session::new();
        session.set_specialty_filter("Cardiology");
        session.set_availability_filter("Tue");
        assert_eq!(session.filter().specialty.as_deref(), Some("Cardiology"));
        assert_eq!(session.filter().availability.as_deref(), Some("Tue"));

        session.set_specialty_filter(FILTER_ALL);
        session.set_availability_filter(FILTER_ALL);
        assert_eq!(session.filter(), ProviderFilter::all());
    }

    #[test]
    fn test_filters_survive_dialog_lifecycle() {
        let mut session = Session::new();
        session.set_specialty_filter("Pediatrics");
        session.select_provider("provider-1");
        session.clear_selection();

        assert_eq!(session.filter().specialty.as_deref(), Some("Pediatrics"));
    }
}
