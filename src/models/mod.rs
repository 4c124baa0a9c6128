//! Core data models for the Paytimer engine.
//!
//! This module contains the configuration values the engine consumes
//! (weekly mask, holidays, shift window, salary) and the values it produces
//! (countdown and earnings snapshots).

mod holiday;
mod salary_profile;
mod shift_window;
mod snapshot;
mod weekly_mask;

pub use holiday::{Holiday, HolidaySet};
pub use salary_profile::SalaryProfile;
pub use shift_window::ShiftWindow;
pub use snapshot::{CountdownState, EarningsSnapshot, ShiftState};
pub use weekly_mask::WeeklyMask;
