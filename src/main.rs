//! drivepost - Google Drive uploads with PIN-unlocked remote credentials.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use drivepost::cli::output;
use drivepost::cli::{execute, Cli};
use drivepost::error::{BundleError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("DRIVEPOST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("drivepost=debug")
        } else {
            EnvFilter::new("drivepost=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, &cli.globals) {
        output::error(&e.to_string());
        if let Some(hint) = suggestion(&e) {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

/// Next step to suggest for a failed command, if there is an obvious one.
fn suggestion(e: &Error) -> Option<&'static str> {
    match e {
        Error::Bundle(BundleError::AuthenticationFailed) => Some("check the PIN or the bundle URL"),
        Error::Bundle(
            BundleError::MalformedEncoding(_)
            | BundleError::TruncatedCiphertext { .. }
            | BundleError::MalformedPayload(_),
        ) => Some("the published bundle is damaged; re-run: drivepost seal"),
        Error::Fetch(_) => Some("check the configured URLs and your network connection"),
        Error::Reference(_) => Some("pass a file ID or a drive.google.com link"),
        Error::Config(_) => Some("check the config file and DRIVEPOST_* variables"),
        _ => None,
    }
}
