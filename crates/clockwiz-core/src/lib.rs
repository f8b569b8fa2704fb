//! Clockwiz-core - Core types and client logic for Time Clock Wizard punches
//!
//! This crate provides:
//! - The closed set of timer commands and their labels
//! - Credential validation
//! - Session cookie and verification token handling
//! - The login form and the HTTP client that submits it
//! - Persisted settings and layered configuration

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod client;
pub mod command;
pub mod config;
pub mod cookies;
pub mod credentials;
pub mod error;
pub mod form;
pub mod outcome;
pub mod settings;

pub use client::ClockClient;
pub use command::TimerCommand;
pub use config::{Config, PartialConfig};
pub use cookies::SessionCookies;
pub use credentials::{Credentials, Email, Password, Subdomain};
pub use error::{Error, Result};
pub use form::LoginForm;
pub use outcome::PunchOutcome;
pub use settings::{Settings, SettingsStore};
