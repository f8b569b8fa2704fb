//! Commands module for clockwiz CLI
//!
//! Provides command implementations for submitting punches, listing timer
//! commands, and managing saved settings.

pub mod list;
pub mod settings;
pub mod submit;
