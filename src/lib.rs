//! Webinar registration form
//!
//! Field validation, completion tracking and a guarded submission
//! lifecycle for a webinar sign-up, with a Ratatui front end.

pub mod app;
pub mod config;
pub mod error;
pub mod platform;
pub mod state;
pub mod submission;
pub mod ui;
