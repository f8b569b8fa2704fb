use anyhow::Result;
use clap::ArgMatches;

use super::Context;
use crate::commands::settings::{self, SettingsAction};

fn action_from(matches: &ArgMatches) -> Result<SettingsAction> {
    match matches.subcommand() {
        Some(("show", _)) => Ok(SettingsAction::Show),
        Some(("set-email", m)) => m
            .get_one::<String>("email")
            .map(|email| SettingsAction::SetEmail(email.clone()))
            .ok_or_else(|| anyhow::anyhow!("Email required for set-email")),
        Some(("set-subdomain", m)) => m
            .get_one::<String>("subdomain")
            .map(|subdomain| SettingsAction::SetSubdomain(subdomain.clone()))
            .ok_or_else(|| anyhow::anyhow!("Subdomain required for set-subdomain")),
        _ => anyhow::bail!("Unknown settings subcommand. Run 'clockwiz settings --help' for usage."),
    }
}

pub async fn handle(matches: &ArgMatches, ctx: &Context) -> Result<()> {
    let action = action_from(matches)?;
    let store = ctx.settings_store()?;
    settings::run(&action, &store, ctx.mode).await
}
