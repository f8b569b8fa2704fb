//! Clockwiz CLI - clock in and out of Time Clock Wizard
//!
//! Binary name: `clockwiz`

use std::process;

use clockwiz::{
    cli::{build_cli, handlers, setup},
    output,
};

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();
    let mode = output::OutputMode::from_matches(&matches);

    if let Err(e) = setup::init_tracing(setup::verbosity(&matches)) {
        #[allow(clippy::print_stderr)]
        {
            eprintln!("Warning: {e}");
        }
    }

    if let Err(e) = handlers::dispatch(&matches).await {
        if output::is_user_error(&e) {
            tracing::debug!(error = %e, "Rejected input");
        } else {
            tracing::info!(error = ?e, "Command failed");
        }
        output::print_error(mode, &e);
        #[allow(clippy::exit)]
        process::exit(1);
    }
}
