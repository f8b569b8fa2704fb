//! Timer commands
//!
//! The closed set of punches a user can submit. Each variant carries one
//! immutable display label; the set is fixed at compile time so every
//! `match` over it is checked for exhaustiveness.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter};

use crate::{Error, Result};

/// A punch the user can submit.
///
/// # Examples
///
/// ```
/// use clockwiz_core::TimerCommand;
///
/// assert_eq!(TimerCommand::ClockIn.label(), "Clock in");
/// assert_eq!(TimerCommand::ClockOut.label(), "Clock out");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumCount,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum TimerCommand {
    #[default]
    ClockIn,
    ClockOut,
}

impl TimerCommand {
    /// Every command, in declaration order.
    pub const ALL: [Self; Self::COUNT] = [Self::ClockIn, Self::ClockOut];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ClockIn => "Clock in",
            Self::ClockOut => "Clock out",
        }
    }

    /// Value of the `command` field in the login form.
    #[must_use]
    pub const fn form_value(self) -> &'static str {
        match self {
            Self::ClockIn => "ClockIn",
            Self::ClockOut => "ClockOut",
        }
    }

    /// Phrase used when reporting a successful punch.
    #[must_use]
    pub const fn past_tense(self) -> &'static str {
        match self {
            Self::ClockIn => "clocked in",
            Self::ClockOut => "clocked out",
        }
    }

    /// Short kebab-case name, as accepted on the command line.
    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::ClockIn => "clock-in",
            Self::ClockOut => "clock-out",
        }
    }
}

impl std::fmt::Display for TimerCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimerCommand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // At most one separator, and only between "clock" and "in"/"out".
        match s.trim().to_lowercase().as_str() {
            "clock-in" | "clock in" | "clock_in" | "clockin" | "in" => Ok(Self::ClockIn),
            "clock-out" | "clock out" | "clock_out" | "clockout" | "out" => Ok(Self::ClockOut),
            _ => Err(Error::UnknownCommand(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(TimerCommand::ClockIn.label(), "Clock in");
        assert_eq!(TimerCommand::ClockOut.label(), "Clock out");
    }

    #[test]
    fn test_labels_are_stable_and_non_empty() {
        for command in TimerCommand::iter() {
            let first = command.label();
            assert!(!first.is_empty());
            assert_eq!(first, command.label());
        }
    }

    #[test]
    fn test_exactly_two_variants() {
        assert_eq!(TimerCommand::COUNT, 2);
        let all: Vec<_> = TimerCommand::iter().collect();
        assert_eq!(all, vec![TimerCommand::ClockIn, TimerCommand::ClockOut]);
        assert_eq!(TimerCommand::ALL.to_vec(), all);
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels: HashSet<_> = TimerCommand::iter().map(TimerCommand::label).collect();
        assert_eq!(labels.len(), TimerCommand::COUNT);
        assert_ne!(TimerCommand::ClockIn.label(), TimerCommand::ClockOut.label());
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(TimerCommand::ClockOut.to_string(), "Clock out");
    }

    #[test]
    fn test_form_value_is_discriminator_name() {
        assert_eq!(TimerCommand::ClockIn.form_value(), "ClockIn");
        assert_eq!(TimerCommand::ClockOut.form_value(), "ClockOut");
    }

    #[test]
    fn test_past_tense() {
        assert_eq!(TimerCommand::ClockIn.past_tense(), "clocked in");
        assert_eq!(TimerCommand::ClockOut.past_tense(), "clocked out");
    }

    #[test]
    fn test_default_is_clock_in() {
        assert_eq!(TimerCommand::default(), TimerCommand::ClockIn);
    }

    #[test]
    fn test_parse_accepts_known_spellings() -> Result<()> {
        for input in ["clock-in", "clockin", "in", "ClockIn", "Clock in", "Clock In", "CLOCK_IN"] {
            assert_eq!(input.parse::<TimerCommand>()?, TimerCommand::ClockIn, "{input}");
        }
        for input in ["clock-out", "OUT", "ClockOut", "Clock Out", " clock out "] {
            assert_eq!(input.parse::<TimerCommand>()?, TimerCommand::ClockOut, "{input}");
        }
        Ok(())
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for input in [
            "",
            "clock",
            "lunch",
            "clock-inn",
            "i_n",
            "o u t",
            "c-l-o-c-k-i-n",
            "CLOCK---OUT",
            "clock  in",
            "clock-_out",
        ] {
            assert!(matches!(
                input.parse::<TimerCommand>(),
                Err(Error::UnknownCommand(_))
            ), "{input:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_round_trips_labels_and_cli_names() -> Result<()> {
        for command in TimerCommand::iter() {
            assert_eq!(command.label().parse::<TimerCommand>()?, command);
            assert_eq!(command.cli_name().parse::<TimerCommand>()?, command);
            assert_eq!(command.form_value().parse::<TimerCommand>()?, command);
        }
        Ok(())
    }

    #[test]
    fn test_serde_kebab_case() -> std::result::Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&TimerCommand::ClockOut)?, "\"clock-out\"");
        let parsed: TimerCommand = serde_json::from_str("\"clock-in\"")?;
        assert_eq!(parsed, TimerCommand::ClockIn);
        Ok(())
    }

    #[test]
    fn test_exhaustive_match() {
        // Adding a variant without handling it here fails to compile.
        let describe = |c: TimerCommand| match c {
            TimerCommand::ClockIn => 0,
            TimerCommand::ClockOut => 1,
        };
        assert_eq!(describe(TimerCommand::ClockOut), 1);
    }
}
