mod api;
mod commands;
mod config;
mod error;
mod logger;
mod runner;
mod writer;
use crate::commands::Commands;
use crate::error::Error;
use crate::logger::Logger;
use crate::runner::{Context, Runnable, Runner};
use crate::writer::Writer;
use clap::Parser;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    arg_required_else_help = true,
    name = "zeta",
    version,
    about = "CLI tool for managing zeta functions",
    long_about = "Create, delete, list, inspect and run zeta functions hosted by the zeta control service."
)]
struct Cli {
    /// Base URL of the control service
    #[arg(
        long,
        global = true,
        value_name = "URL",
        env = "ZETA_API_URL",
        default_value = config::DEFAULT_API_BASE
    )]
    url: String,

    /// Give up on a request after this many seconds
    #[arg(
        long,
        global = true,
        value_name = "SECONDS",
        env = "ZETA_TIMEOUT",
        default_value = config::DEFAULT_TIMEOUT_SECS
    )]
    timeout: String,

    /// Print JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Derive a runner from the command and run it
async fn run(command: &impl Runnable, context: &Context) -> Result<(), Error> {
    command.runner(context).run().await
}

#[tokio::main]
async fn main() -> ExitCode {
    Logger::init();
    let cli = Cli::parse();

    let context = Context {
        api_base: cli.url,
        timeout_secs: cli.timeout,
        writer: Writer::new(cli.json),
    };

    // Match all commands here, in one place
    let result = match &cli.command {
        Commands::Create(cmd) => run(cmd, &context).await,
        Commands::Delete(cmd) => run(cmd, &context).await,
        Commands::List(cmd) => run(cmd, &context).await,
        Commands::Ps(cmd) => run(cmd, &context).await,
        Commands::Run(cmd) => run(cmd, &context).await,
        Commands::Version(cmd) => run(cmd, &context).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if let Err(output_error) = context.writer.failure(&error) {
                log::error!("{output_error:?}");
            }

            ExitCode::FAILURE
        }
    }
}
