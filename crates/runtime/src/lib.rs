//! Blockfall runtime: configuration, logging and the async game loop.
//!
//! A gravity ticker, an input relay and a signal listener feed one command
//! queue; the game loop drains it and owns the engine.

pub mod command;
pub mod config;
pub mod game_loop;
pub mod logging;
pub mod shutdown;
pub mod tasks;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_types as types;

pub use command::Command;
pub use config::{parse_spawn_script, Config, ConfigError, Randomizer};
pub use game_loop::{build_engine, run, run_loop, run_session, DynEngine, ExitReason, Frontend};
pub use logging::{JsonFileLogger, LogGuard};
pub use shutdown::{shutdown_channel, ShutdownSignal, ShutdownTrigger};
pub use tasks::{CrosstermEvents, EventSource, ScriptedEvents};
