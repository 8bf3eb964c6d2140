//! Lineup CLI - interactive desk for three cashier lines
//!
//! Reads commands from stdin (`add <name>`, `serve <n>`, `show`, `dismiss`).

mod logging;
mod repl;
mod settings;

use anyhow::Result;
use clap::Parser;
use lineup_core::application::LineDesk;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::info;

use repl::Session;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "lineup")]
#[command(about = "Lineup - register names and serve three cashier lines", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (TOML). Defaults to the platform config dir.
    #[arg(long, env = "LINEUP_CONFIG")]
    config: Option<PathBuf>,

    /// Seed for line assignment (reproducible sessions)
    #[arg(long)]
    seed: Option<u64>,

    /// Print one JSON object per outcome instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Initialize logging
    logging::init()?;

    // 2. Load configuration (flags override file and environment)
    let mut desk_config = settings::load(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        desk_config.selector.seed = Some(seed);
    }

    info!(
        version = VERSION,
        seed = ?desk_config.selector.seed,
        ids = ?desk_config.ids.scheme,
        "Lineup desk starting"
    );

    // 3. Wire the desk
    let desk = LineDesk::from_config(desk_config)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if cli.json || !stdout.is_terminal() {
        colored::control::set_override(false);
    }

    let interactive = stdin.is_terminal() && !cli.json;
    let mut session = Session::new(desk, stdout.lock(), cli.json).with_prompt(interactive);
    session.run(stdin.lock())?;

    info!("Lineup desk closed");
    Ok(())
}
