//! Result of a punch attempt

use serde::Serialize;

use crate::TimerCommand;

/// What happened when a punch form was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PunchOutcome {
    /// The service accepted the punch
    Accepted { command: TimerCommand },
    /// The service answered but did not start a session
    Rejected { command: TimerCommand },
}

impl PunchOutcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    #[must_use]
    pub const fn command(&self) -> TimerCommand {
        match self {
            Self::Accepted { command } | Self::Rejected { command } => *command,
        }
    }

    /// Message shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Accepted { command } => {
                format!("You have been successfully {}", command.past_tense())
            }
            Self::Rejected { .. } => {
                "Authorization unsuccessful. Check your credentials, please.".to_string()
            }
        }
    }
}

impl std::fmt::Display for PunchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}
