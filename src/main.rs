//! slidenav CLI
//!
//! Present a markdown deck in the terminal.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use slidenav::deck::Deck;
use slidenav::tui::run::run;
use slidenav::tui::state::App;
use slidenav::types::PresentConfig;

#[derive(Parser)]
#[command(name = "slidenav")]
#[command(about = "Present markdown slides in the terminal")]
#[command(version)]
struct Cli {
    /// Markdown deck to present (`-` reads stdin)
    file: PathBuf,

    /// Slide to open on (1-based, clamped to the deck)
    #[arg(long, short)]
    slide: Option<usize>,

    /// Write debug logs to this file
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,
}

impl From<Cli> for PresentConfig {
    fn from(cli: Cli) -> Self {
        PresentConfig {
            deck_path: cli.file,
            start_slide: cli.slide,
            log_file: cli.log,
        }
    }
}

fn main() -> ExitCode {
    let config = PresentConfig::from(Cli::parse());

    match present(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize file logging. The terminal belongs to the TUI, so logs
/// never go to stdout/stderr.
fn init_logging(path: &Path) -> Result<(), String> {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    let log_file = File::create(path)
        .map_err(|e| format!("Could not create log file {}: {}", path.display(), e))?;

    WriteLogger::init(LevelFilter::Debug, log_config, log_file).map_err(|e| e.to_string())
}

fn present(config: PresentConfig) -> Result<(), String> {
    if let Some(path) = &config.log_file {
        init_logging(path)?;
    }

    log::info!("slidenav starting with {:?}", config);

    let deck = Deck::load(&config.deck_path).map_err(|e| e.to_string())?;

    let app = match config.start_slide {
        Some(slide) => App::at_slide(deck, slide),
        None => App::new(deck),
    };

    run(app).map_err(|e| format!("Terminal error: {}", e))?;

    log::info!("slidenav exiting");
    Ok(())
}
