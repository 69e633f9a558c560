//! Blockfall terminal runner (default binary).
//!
//! Configuration comes from `BLOCKFALL_*` environment variables; see
//! [`blockfall::runtime::Config`].

use anyhow::{Context, Result};

use blockfall::runtime::{logging, run, Config, CrosstermEvents, ExitReason};
use blockfall::TerminalFrontend;

fn main() -> Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    let _log = logging::init(config.log_path.as_deref(), config.log_level)
        .context("failed to open log file")?;

    let mut frontend = TerminalFrontend::default();
    frontend.enter()?;

    let result = run(&config, &mut frontend, CrosstermEvents);

    // Always try to restore terminal state.
    let restored = frontend.exit();
    if let Err(err) = &result {
        log::error!("run failed: {err:#}");
    }
    if let Err(err) = &restored {
        log::error!("terminal restore failed: {err:#}");
    }
    let reason = result?;
    restored?;

    if reason == ExitReason::GameOver {
        println!("Game over.");
    }
    log::info!("exit: {reason:?}");
    Ok(())
}
