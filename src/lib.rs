//! Workday and earnings engine for a salaried worker.
//!
//! This crate decides which calendar days are workdays (a weekly mask
//! overridden by legal holidays), counts down to the next shift boundary, and
//! accrues a monthly salary over today, the month and the year.
//!
//! The engine is driven from outside: callers pass the current local time to
//! [`engine::Engine::recompute`] and receive a fresh countdown and earnings
//! snapshot.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
