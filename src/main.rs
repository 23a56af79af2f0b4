//! Grid Breakout entry point
//!
//! Reads driver messages from stdin, one per line, and writes replies to
//! stdout. Pass `--config <path>` to load board settings from JSON.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use grid_breakout::{Game, Host, HostError, Settings};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Grid Breakout starting...");

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let game = match Game::new(settings) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid settings: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(Host::new(game)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("I/O error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_settings() -> Result<Settings, String> {
    let mut args = std::env::args().skip(1);
    match (args.next().as_deref(), args.next()) {
        (None, _) => Ok(Settings::default()),
        (Some("--config"), Some(path)) => {
            Settings::load(&path).map_err(|e| format!("Failed to load {path}: {e}"))
        }
        (Some(other), _) => Err(format!("Usage: grid-breakout [--config <path>] (got `{other}`)")),
    }
}

fn run(mut host: Host) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        match host.handle_line(&line) {
            Ok(replies) => {
                for reply in replies {
                    writeln!(out, "{reply}")?;
                }
                out.flush()?;
            }
            Err(HostError::InvalidDirection(e)) => {
                log::warn!("Invalid input to breakout game: {e}");
            }
            Err(e) => log::warn!("{e}"),
        }
    }

    log::info!("Input closed, exiting");
    Ok(())
}
