//! Text or JSON output on stdout, errors on stderr

use clap::ArgMatches;
use serde::Serialize;
use serde_json::json;

use crate::cli::global_flag;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

impl OutputMode {
    #[must_use]
    pub const fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }

    #[must_use]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self::from_json_flag(global_flag(matches, "json"))
    }

    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Print `value` as JSON, or the text rendering otherwise.
///
/// # Errors
/// Returns an error if `value` cannot be serialized
#[allow(clippy::print_stdout)]
pub fn emit<T, F>(mode: OutputMode, value: &T, text: F) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    match mode {
        OutputMode::Json => println!("{}", serde_json::to_string(value)?),
        OutputMode::Text => println!("{}", text()),
    }
    Ok(())
}

/// Failure whose report already went to stdout; only the exit code is left.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct AlreadyReported(pub String);

/// True when the user can fix the failure by changing their input.
#[must_use]
pub fn is_user_error(err: &anyhow::Error) -> bool {
    err.downcast_ref::<clockwiz_core::Error>()
        .is_some_and(clockwiz_core::Error::is_validation)
}

/// JSON body for a failed command.
#[must_use]
pub fn error_json(err: &anyhow::Error) -> serde_json::Value {
    json!({
        "success": false,
        "error": {
            "message": err.to_string(),
            "chain": err.chain().skip(1).map(ToString::to_string).collect::<Vec<_>>(),
        }
    })
}

#[allow(clippy::print_stdout, clippy::print_stderr)]
pub fn print_error(mode: OutputMode, err: &anyhow::Error) {
    if err.is::<AlreadyReported>() {
        return;
    }
    match mode {
        OutputMode::Json => println!("{}", error_json(err)),
        OutputMode::Text => eprintln!("Error: {err:#}"),
    }
}
