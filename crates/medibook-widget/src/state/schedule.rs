//! # Schedule State
//!
//! Wraps the core [`Schedule`] for shared access by handlers.
//!
//! ## Thread Safety
//! The schedule is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple handlers may access/modify the schedule
//! 2. Only one handler should modify it at a time
//! 3. The embedding shell may call handlers from more than one thread
//!
//! Logically the widget is single-threaded and event-driven: every
//! transition runs to completion inside one handler call, and nothing
//! suspends while holding the lock.

use std::sync::{Arc, Mutex};

use medibook_core::{Provider, Schedule};

/// Widget-managed schedule state.
///
/// ## Why Not RwLock?
/// Transitions are quick and most handler calls that take the lock also
/// write. A RwLock would add complexity with minimal benefit.
#[derive(Debug)]
pub struct ScheduleState {
    schedule: Arc<Mutex<Schedule>>,
}

impl ScheduleState {
    /// Creates schedule state from seed providers.
    pub fn from_seed(providers: Vec<Provider>) -> Self {
        ScheduleState {
            schedule: Arc::new(Mutex::new(Schedule::from_seed(providers))),
        }
    }

    /// Executes a function with read access to the schedule.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let cards = schedule_state.with_schedule(|s| s.filtered(&filter));
    /// ```
    pub fn with_schedule<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Schedule) -> R,
    {
        let schedule = self.schedule.lock().expect("Schedule mutex poisoned");
        f(&schedule)
    }

    /// Executes a function with write access to the schedule.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// schedule_state.with_schedule_mut(|s| s.book(&provider_id, &slot))?;
    /// ```
    pub fn with_schedule_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Schedule) -> R,
    {
        let mut schedule = self.schedule.lock().expect("Schedule mutex poisoned");
        f(&mut schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_provider(id: &str, slots: &[&str]) -> Provider {
        Provider {
            id: id.to_string(),
            name: format!("Dr. {}", id),
            specialty: "Cardiology".to_string(),
            rating: 4.5,
            availability: slots.iter().map(|s| s.to_string()).collect(),
            location: "Clinic".to_string(),
            photo_url: String::new(),
        }
    }

    #[test]
    fn test_transitions_visible_across_accesses() {
        let id = "550e8400-e29b-41d4-a716-446655440000";
        let state = ScheduleState::from_seed(vec![test_provider(id, &["Mon 10am"])]);

        state
            .with_schedule_mut(|s| s.book(id, "Mon 10am"))
            .unwrap();

        let remaining = state.with_schedule(|s| {
            s.provider_by_id(id).map(|p| p.availability.clone())
        });
        assert_eq!(remaining, Some(vec![]));
        assert_eq!(state.with_schedule(|s| s.appointments().len()), 1);
    }
}
