//! List the timer commands and their labels

use anyhow::Result;
use clockwiz_core::TimerCommand;
use serde::Serialize;

use crate::output::{self, OutputMode};

/// One line of the listing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CommandRow {
    pub name: &'static str,
    pub label: &'static str,
    pub form_value: &'static str,
}

impl From<TimerCommand> for CommandRow {
    fn from(command: TimerCommand) -> Self {
        Self {
            name: command.cli_name(),
            label: command.label(),
            form_value: command.form_value(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CommandList {
    commands: Vec<CommandRow>,
}

#[must_use]
pub fn rows() -> Vec<CommandRow> {
    TimerCommand::ALL.into_iter().map(CommandRow::from).collect()
}

fn render_text(rows: &[CommandRow]) -> String {
    let width = rows.iter().map(|row| row.name.len()).max().unwrap_or(0);
    rows.iter()
        .map(|row| format!("{:<width$}  {}", row.name, row.label))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run the commands listing
///
/// # Errors
///
/// Returns an error if JSON serialization fails
pub fn run(mode: OutputMode) -> Result<()> {
    let list = CommandList { commands: rows() };
    output::emit(mode, &list, || render_text(&list.commands))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_cover_every_command() {
        let rows = rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "Clock in");
        assert_eq!(rows[1].label, "Clock out");
        assert_eq!(rows[1].name, "clock-out");
    }

    #[test]
    fn test_render_text_aligns_labels() {
        let text = render_text(&rows());
        assert_eq!(text, "clock-in   Clock in\nclock-out  Clock out");
    }
}
