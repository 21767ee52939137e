use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use commands::{
    compare,
    export::{self, ExportArgs},
    show::{self, ShowArgs},
    summary::{self, SummaryArgs},
    trace::{self, TraceArgs},
    transition::{self, TransitionArgs},
    types, Context,
};
use config::CliConfig;
use sgram_core::Family;

mod catalog;
mod commands;
mod config;
mod logging;
mod markdown;
mod render;

#[derive(Parser, Debug)]
#[command(
    name = "sgrams",
    version,
    about = "N-Grams state transformation explorer (1st, 2nd, 3rd power and Catalan families)"
)]
struct Cli {
    /// N-Gram type: 1st, 2nd, 3rd, 2d or 3d.
    #[arg(long = "type", value_name = "TYPE", global = true)]
    family: Option<String>,
    /// YAML configuration file; falls back to $SGRAMS_CONFIG.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Raise log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all available N-Gram types.
    Types,
    /// Display a summary table of the configured index range.
    Summary(SummaryArgs),
    /// Show details, cycles and transition tables for one index.
    Show(ShowArgs),
    /// Show the neighbours of a state on every cycle containing it.
    Transition(TransitionArgs),
    /// Trace a path through the state space of one index.
    Trace(TraceArgs),
    /// Compare primary cycles, growth and shared labels across indices.
    Compare,
    /// Export tables to markdown or JSON.
    Export(ExportArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = CliConfig::resolve(cli.config.as_deref())?;
    logging::init(cli.verbose, &config.log_filter);
    let family = match cli.family.as_deref() {
        Some(raw) => raw.parse::<Family>()?,
        None => config.default_family,
    };
    tracing::debug!(family = family.key(), ?config, "resolved options");
    let ctx = Context { family, config };
    match cli.command {
        Command::Types => types::run(),
        Command::Summary(args) => summary::run(&args, &ctx),
        Command::Show(args) => show::run(&args, &ctx),
        Command::Transition(args) => transition::run(&args, &ctx),
        Command::Trace(args) => trace::run(&args, &ctx),
        Command::Compare => compare::run(&ctx),
        Command::Export(args) => export::run(&args, &ctx),
    }
}
