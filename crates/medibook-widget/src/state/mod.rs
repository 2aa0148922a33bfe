//! # State Module
//!
//! Manages widget state for the booking facade.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can construct individual states in isolation
//! 3. **Clearer Handler Signatures**: Handlers touch exactly the state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      BookingWidget                              │   │
//! │  │  schedule: ScheduleState                                        │   │
//! │  │  session:  SessionState                                         │   │
//! │  │  config:   ConfigState                                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ScheduleState │  │ SessionState │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<Mutex<  │  │  Arc<Mutex<  │  │  clinic_name     │              │
//! │  │   Schedule   │  │   Session    │  │  specialties     │              │
//! │  │  >>          │  │  >>          │  │  availabilities  │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • ScheduleState: Arc<Mutex<T>> for exclusive access per transition    │
//! │  • SessionState: Arc<Mutex<T>> for the transient selection             │
//! │  • ConfigState: Read-only after initialization (frozen option lists)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod schedule;
mod session;

pub use config::ConfigState;
pub use schedule::ScheduleState;
pub use session::{Session, SessionState};
