mod command;
mod session;

use anyhow::{Context, Result};
use ds_config::Config;
use std::io::{self, BufRead, Write};
use std::{env, process};

use command::Command;
use session::{Outcome, Session};

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let values = env::args()
        .skip(1)
        .map(|arg| {
            arg.parse::<i64>()
                .with_context(|| format!("initial value '{arg}' is not an integer"))
        })
        .collect::<Result<Vec<_>>>()?;

    log::info!(
        "Starting with {} values, capacity {:?}",
        values.len(),
        config.cursor.capacity
    );

    let mut session = Session::new(&values, &config.cursor);
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                log::warn!("Rejected input {line:?}: {e}");
                writeln!(out, "error: {e}")?;
                continue;
            }
        };

        log::debug!("Executing {command:?}");
        match session.execute(command) {
            Ok(Outcome::Print(text)) => writeln!(out, "{text}")?,
            Ok(Outcome::Quit) => break,
            Err(e) => writeln!(out, "error: {e}")?,
        }
    }

    Ok(())
}
