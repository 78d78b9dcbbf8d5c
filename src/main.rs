//! MKM Inventory Tool
//!
//! Prints per-country Cardmarket valuations of a tracked MTG inventory.

use clap::Parser;
use mkm_inventory::cardmarket::DEFAULT_TIMEOUT;
use mkm_inventory::{run, CardmarketClient, Documents, ReportSession, Result, RunOutcome};
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

/// Cardmarket inventory valuation - prints cost, value and gain per country
#[derive(Parser, Debug)]
#[command(name = "mkm_inventory")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing config.yaml, inventory.yaml and api.yaml
    #[arg(short, long, default_value = "config")]
    config_dir: PathBuf,

    /// Timeout for each price request, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// Print the report without color escape codes (also set by NO_COLOR)
    #[arg(long, default_value_t = false)]
    no_color: bool,

    /// Exit without waiting for a keypress
    #[arg(long, default_value_t = false)]
    no_prompt: bool,
}

fn main() {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=mkm_inventory=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Starting mkm_inventory...");
    log::info!("Config directory: {}", args.config_dir.display());

    match execute(&args) {
        Ok(RunOutcome::Completed) => log::info!("Run completed."),
        Ok(RunOutcome::Stopped) => log::info!("Run stopped by configuration."),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    if !args.no_prompt {
        wait_for_exit();
    }
}

fn execute(args: &Args) -> Result<RunOutcome> {
    let documents = Documents::load_dir(&args.config_dir)?;
    let client = CardmarketClient::new(
        &documents.config.base_url,
        documents.config.credentials.clone(),
        Duration::from_secs(args.timeout_secs),
    )?;

    let color = color_enabled(args.no_color, std::env::var_os("NO_COLOR"));
    if !color {
        log::debug!("Color output disabled");
    }
    let palette = documents.config.colors.for_output(color);

    let stdout = io::stdout();
    let mut session = ReportSession::begin(stdout.lock(), &palette)?;
    run(&documents, &client, &mut session)
}

/// Color is on unless `--no-color` is given or NO_COLOR is set and non-empty
fn color_enabled(no_color_flag: bool, no_color_env: Option<OsString>) -> bool {
    let env_set = no_color_env.is_some_and(|v| !v.is_empty());
    !(no_color_flag || env_set)
}

fn wait_for_exit() {
    println!("\n Press any key to exit.");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
