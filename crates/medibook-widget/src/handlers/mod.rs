//! # Handler Module
//!
//! The command layer the rendering layer invokes on user actions. Each
//! handler is a method on [`crate::BookingWidget`], grouped by screen area:
//!
//! - [`directory`] - filter dropdowns and the provider card grid
//! - [`booking`] - the booking dialog (select provider/slot, confirm)
//! - [`appointments`] - the appointment summary list and cancellation
//! - [`config`] - clinic name and frozen dropdown options
//!
//! Every handler is synchronous, logs its invocation at `debug!`, and
//! returns camelCase-serialized DTOs (or a typed [`crate::error::ApiError`]).

pub mod appointments;
pub mod booking;
pub mod config;
pub mod directory;

pub use appointments::AppointmentView;
pub use booking::DialogView;
pub use directory::ProviderCard;
