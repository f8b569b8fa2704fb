use anyhow::{Context as _, Result};
use clap::ArgMatches;
use clockwiz_core::TimerCommand;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::Context;
use crate::{
    commands::submit::{self, SubmitOptions, SubmitReport},
    output::{self, AlreadyReported},
};

async fn read_password_line() -> Result<String> {
    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .context("Failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

async fn options_from(matches: &ArgMatches) -> Result<SubmitOptions> {
    let password = if matches.get_flag("password-stdin") {
        Some(read_password_line().await?)
    } else {
        matches.get_one::<String>("password").cloned()
    };

    Ok(SubmitOptions {
        command: matches
            .get_one::<TimerCommand>("command")
            .copied()
            .unwrap_or_default(),
        email: matches.get_one::<String>("email").cloned(),
        subdomain: matches.get_one::<String>("subdomain").cloned(),
        password,
    })
}

pub async fn handle(matches: &ArgMatches, ctx: &Context) -> Result<()> {
    let options = options_from(matches).await?;
    let store = ctx.settings_store()?;
    let config = ctx.config().await?;

    let report = SubmitReport::from(submit::run(&options, &store, &config).await?);
    if report.success {
        return output::emit(ctx.mode, &report, || report.message.clone());
    }

    // A rejection still prints one JSON object, then exits non-zero.
    if ctx.mode.is_json() {
        output::emit(ctx.mode, &report, || report.message.clone())?;
        return Err(AlreadyReported(report.message).into());
    }
    anyhow::bail!(report.message)
}
