//! Settings loading for the workday and earnings engine.
//!
//! This module loads the worker's settings snapshot from YAML files, along
//! with the bundled legal-holiday calendar.
//!
//! # Example
//!
//! ```no_run
//! use paytimer_engine::config::SettingsLoader;
//!
//! let loader = SettingsLoader::load("./config/default").unwrap();
//! println!("Shift starts at {}", loader.settings().shift_start);
//! ```

mod loader;
mod types;

pub use loader::SettingsLoader;
pub use types::SettingsSnapshot;
