//! Clockwiz - Time Clock Wizard from the terminal
//!
//! Validates credentials, remembers the last email and subdomain, and
//! submits clock-in / clock-out punches.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod output;
