//! gmod-fastdl - generate a FastDL resource script for a Garry's Mod server.

mod asset;
mod cli;
mod logger;
mod output;
mod root;
mod script;
mod workshop;

use anyhow::Result;
use clap::ColorChoice;
use cli::Cli;
use cli::fastdl::{Outcome, RunOptions, run_fastdl};
use cli::prompt::Prompt;
use logger::TerminalStatus;
use output::{Destination, OutputWriter};
use std::process::ExitCode;
use workshop::HttpSource;

/// Exit code used when the run is interrupted with Ctrl+C
const INTERRUPTED: i32 = 130;

fn main() -> Result<ExitCode> {
    setup_interrupt_handler()?;

    let cli = Cli::parse_env();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let outcome = run_fastdl(
        &RunOptions::from(&cli),
        &mut Prompt::stdio(),
        &HttpSource,
        &mut TerminalStatus::new(),
        &OutputWriter::default(),
    )?;

    match outcome {
        Outcome::Declined => return Ok(ExitCode::SUCCESS),
        Outcome::Cancelled => log!("fastdl"; "cancelled, nothing written"),
        Outcome::Written {
            destination,
            declarations,
        } => match destination {
            Destination::Terminal => {
                log!("fastdl"; "{} resource(s) declared, echoed to terminal", declarations)
            }
            path => log!("fastdl"; "{} resource(s) declared in {}", declarations, path),
        },
    }

    println!("Bye Bye!");
    Ok(ExitCode::SUCCESS)
}

/// Leave the prompt line cleanly on Ctrl+C.
fn setup_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        println!();
        std::process::exit(INTERRUPTED);
    })
    .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {}", e))
}
