//! # Config Handlers
//!
//! Hands the rendering layer its startup configuration: the clinic name and
//! the frozen filter dropdown options.

use tracing::debug;

use crate::state::ConfigState;
use crate::BookingWidget;

impl BookingWidget {
    /// Returns the widget configuration.
    ///
    /// The option lists were computed from the seed at construction and do
    /// not change as availability mutates; the frontend can cache this.
    pub fn config(&self) -> ConfigState {
        debug!("config handler");
        self.config.clone()
    }
}
