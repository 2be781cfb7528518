//! flashdeck CLI — the interactive flashcard trainer.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use flashdeck_core::config::{load_config_from, FlashdeckConfig};
use flashdeck_core::console::{Console, StdConsole, Transcript};

mod commands;
mod shell;

use shell::Shell;

#[derive(Parser)]
#[command(name = "flashdeck", version, about = "Interactive flashcard trainer")]
struct Cli {
    /// Load cards from this file before the session starts
    #[arg(long, alias = "import_from")]
    import_from: Option<PathBuf>,

    /// Save the deck to this file on exit
    #[arg(long, alias = "export_to")]
    export_to: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Transcript file (overrides the config)
    #[arg(long, conflicts_with = "no_transcript")]
    transcript: Option<PathBuf>,

    /// Do not write a session transcript
    #[arg(long)]
    no_transcript: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flashdeck=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<()> {
    let mut config = load_config_from(cli.config.as_deref())?;
    if let Some(path) = cli.transcript {
        config.transcript = true;
        config.transcript_file = path;
    }
    if cli.no_transcript {
        config.transcript = false;
    }

    if config.transcript {
        let console = Transcript::new(StdConsole::new(), config.transcript_file.clone());
        session(console, config, cli.import_from, cli.export_to)
    } else {
        session(StdConsole::new(), config, cli.import_from, cli.export_to)
    }
}

fn session<C: Console>(
    console: C,
    config: FlashdeckConfig,
    import_from: Option<PathBuf>,
    export_to: Option<PathBuf>,
) -> Result<()> {
    let mut shell = Shell::new(console, config);
    shell.export_on_exit = export_to;

    if let Some(path) = import_from {
        commands::import::execute(&mut shell, Some(path))?;
    }

    shell.run()
}
