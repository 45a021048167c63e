mod commands;
mod error;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::commands::{email, verify, Context};
use crate::error::{exit_code_for, report_error};

#[derive(Debug, Parser)]
#[command(name = "mailgate", version, about = "mailgate CLI")]
struct Cli {
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate an email address without touching the password checks
    #[command(name = "check-email")]
    CheckEmail(email::CheckEmailArgs),
    /// Run the full verification sequence
    Verify(verify::VerifyArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        json,
        verbose: _,
        command,
    } = cli;

    let ctx = Context { json };

    match command {
        Command::CheckEmail(args) => email::check_email(&ctx, args),
        Command::Verify(args) => verify::verify(&ctx, args),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
