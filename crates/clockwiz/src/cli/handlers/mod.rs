mod settings;
mod submit;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::ArgMatches;
use clockwiz_core::{config, Config, PartialConfig, SettingsStore};

use super::global_value;
use crate::{commands, output::OutputMode};

/// Global options shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Context {
    pub mode: OutputMode,
    pub overrides: PartialConfig,
    pub settings_path: Option<PathBuf>,
}

impl Context {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            mode: OutputMode::from_matches(matches),
            overrides: PartialConfig {
                base_url: global_value::<String>(matches, "base-url"),
                user_agent: None,
                timeout_secs: global_value::<u64>(matches, "timeout"),
            },
            settings_path: global_value::<String>(matches, "settings-file").map(PathBuf::from),
        }
    }

    pub fn settings_store(&self) -> Result<SettingsStore> {
        match &self.settings_path {
            Some(path) => Ok(SettingsStore::new(path.clone())),
            None => Ok(SettingsStore::default_location()?),
        }
    }

    pub async fn config(&self) -> Result<Config> {
        config::load_config(self.overrides.clone())
            .await
            .context("Failed to load configuration")
    }
}

pub async fn dispatch(matches: &ArgMatches) -> Result<()> {
    let ctx = Context::from_matches(matches);

    match matches.subcommand() {
        Some(("submit", sub_m)) => submit::handle(sub_m, &ctx).await,
        Some(("commands", _)) => commands::list::run(ctx.mode),
        Some(("settings", sub_m)) => settings::handle(sub_m, &ctx).await,
        _ => anyhow::bail!("Unknown command. Run 'clockwiz --help' for usage."),
    }
}
