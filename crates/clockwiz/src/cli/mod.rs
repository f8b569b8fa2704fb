pub mod handlers;
pub mod setup;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use clockwiz_core::TimerCommand;

pub fn build_cli() -> Command {
    Command::new("clockwiz")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Clock in and out of Time Clock Wizard")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print one JSON object instead of text"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v debug, -vv trace)"),
        )
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .global(true)
                .value_name("URL")
                .help("Service base URL (overrides config and CLOCKWIZ_BASE_URL)"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .global(true)
                .value_name("SECS")
                .value_parser(value_parser!(u64))
                .help("Request timeout in seconds"),
        )
        .arg(
            Arg::new("settings-file")
                .long("settings-file")
                .global(true)
                .value_name("PATH")
                .env("CLOCKWIZ_SETTINGS")
                .hide(true)
                .help("Settings file to use instead of the platform default"),
        )
        .subcommand(cmd_submit())
        .subcommand(cmd_commands())
        .subcommand(cmd_settings())
}

fn cmd_submit() -> Command {
    Command::new("submit")
        .about("Log in and clock in or out")
        .arg(
            Arg::new("command")
                .short('c')
                .long("command")
                .value_name("COMMAND")
                .default_value(TimerCommand::default().cli_name())
                .value_parser(|s: &str| s.parse::<TimerCommand>())
                .help("clock-in or clock-out"),
        )
        .arg(
            Arg::new("email")
                .short('e')
                .long("email")
                .value_name("EMAIL")
                .help("Account email (defaults to the saved one)"),
        )
        .arg(
            Arg::new("subdomain")
                .short('s')
                .long("subdomain")
                .value_name("SUBDOMAIN")
                .help("Company subdomain (defaults to the saved one)"),
        )
        .arg(
            Arg::new("password")
                .short('p')
                .long("password")
                .value_name("PASSWORD")
                .env("CLOCKWIZ_PASSWORD")
                .hide_env_values(true)
                .help("Account password"),
        )
        .arg(
            Arg::new("password-stdin")
                .long("password-stdin")
                .action(ArgAction::SetTrue)
                .help("Read the password from the first line of stdin (wins over --password)"),
        )
}

fn cmd_commands() -> Command {
    Command::new("commands").about("List the available timer commands")
}

fn cmd_settings() -> Command {
    Command::new("settings")
        .about("Show or change the saved email and subdomain")
        .subcommand_required(true)
        .subcommand(Command::new("show").about("Show saved settings"))
        .subcommand(
            Command::new("set-email")
                .about("Save the account email")
                .arg(Arg::new("email").required(true).value_name("EMAIL")),
        )
        .subcommand(
            Command::new("set-subdomain")
                .about("Save the company subdomain")
                .arg(Arg::new("subdomain").required(true).value_name("SUBDOMAIN")),
        )
}

/// Matches from the root down to the leaf subcommand.
fn match_chain(matches: &ArgMatches) -> Vec<&ArgMatches> {
    std::iter::successors(Some(matches), |&m| m.subcommand().map(|(_, sub)| sub)).collect()
}

/// True if a global flag was set at any level.
pub fn global_flag(matches: &ArgMatches, id: &str) -> bool {
    match_chain(matches)
        .into_iter()
        .any(|m| m.try_get_one::<bool>(id).ok().flatten().copied().unwrap_or(false))
}

/// Highest count of a global counter across levels.
pub fn global_count(matches: &ArgMatches, id: &str) -> u8 {
    match_chain(matches)
        .into_iter()
        .filter_map(|m| m.try_get_one::<u8>(id).ok().flatten().copied())
        .max()
        .unwrap_or(0)
}

/// Value of a global option, preferring the deepest level that set it.
pub fn global_value<T>(matches: &ArgMatches, id: &str) -> Option<T>
where
    T: Clone + Send + Sync + 'static,
{
    match_chain(matches)
        .into_iter()
        .rev()
        .find_map(|m| m.try_get_one::<T>(id).ok().flatten().cloned())
}
