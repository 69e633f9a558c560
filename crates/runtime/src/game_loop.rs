//! The game loop actor.
//!
//! The loop owns the engine outright. Ticks, key presses and resizes all
//! arrive on one queue and are applied one at a time, so gravity and player
//! input can never interleave inside a single step. Every change is
//! presented before the next command is taken.

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::command::Command;
use crate::config::{Config, Randomizer};
use crate::core::{
    BagSpawner, Board, GameEngine, GameSnapshot, ScriptedSpawner, SpawnSelector, UniformSpawner,
};
use crate::shutdown::{shutdown_channel, ShutdownSignal};
use crate::tasks::{spawn_input_relay, spawn_signal_listener, spawn_ticker, EventSource};

/// Pending commands before producers start waiting.
pub const COMMAND_QUEUE: usize = 64;

/// Something that can show the game.
pub trait Frontend {
    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()>;

    /// The output area changed; the next frame must be drawn from scratch.
    fn resize(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Why the loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Quit,
    GameOver,
    Shutdown,
    /// Every command producer is gone.
    Closed,
}

pub type DynEngine = GameEngine<Box<dyn SpawnSelector + Send>>;

/// Engine configured from `config`. A non-empty spawn script wins over the
/// randomizer.
pub fn build_engine(config: &Config) -> DynEngine {
    let scripted = config.spawn_script.clone().and_then(ScriptedSpawner::new);
    let spawner: Box<dyn SpawnSelector + Send> = match (scripted, config.randomizer) {
        (Some(script), _) => Box::new(script),
        (None, Randomizer::Uniform) => Box::new(UniformSpawner::new(config.seed)),
        (None, Randomizer::Bag) => Box::new(BagSpawner::new(config.seed)),
    };
    GameEngine::with_spawner(Board::new(config.width, config.height), spawner)
}

/// Apply commands from `rx` until quit, shutdown, or (optionally) game over.
pub async fn run_loop<S, F>(
    engine: &mut GameEngine<S>,
    frontend: &mut F,
    rx: &mut mpsc::Receiver<Command>,
    shutdown: &mut ShutdownSignal,
    exit_on_game_over: bool,
) -> Result<ExitReason>
where
    S: SpawnSelector,
    F: Frontend + ?Sized,
{
    let mut snapshot = GameSnapshot::default();
    engine.snapshot_into(&mut snapshot);
    frontend.present(&snapshot)?;

    loop {
        if exit_on_game_over && engine.is_game_over() {
            return Ok(ExitReason::GameOver);
        }

        let command = tokio::select! {
            biased;
            _ = shutdown.wait() => return Ok(ExitReason::Shutdown),
            command = rx.recv() => command,
        };
        let Some(command) = command else {
            return Ok(ExitReason::Closed);
        };

        let redraw = match command {
            Command::Input(action) => engine.handle_input(action).needs_redraw(),
            Command::Tick => engine.tick().needs_redraw(),
            Command::Resize => {
                frontend.resize()?;
                true
            }
        };

        if engine.quit_requested() {
            return Ok(ExitReason::Quit);
        }
        if redraw {
            engine.snapshot_into(&mut snapshot);
            frontend.present(&snapshot)?;
        }
    }
}

/// Wire producers to the loop and run one game to completion.
///
/// Producers are stopped before this returns.
pub async fn run_session<S, F, E>(
    mut engine: GameEngine<S>,
    config: &Config,
    frontend: &mut F,
    events: E,
) -> Result<ExitReason>
where
    S: SpawnSelector,
    F: Frontend + ?Sized,
    E: EventSource,
{
    let (tx, mut rx) = mpsc::channel(COMMAND_QUEUE);
    let (trigger, mut shutdown) = shutdown_channel();

    let ticker = spawn_ticker(config.tick, tx.clone(), trigger.subscribe());
    let relay = spawn_input_relay(events, tx, trigger.subscribe());
    let signals = spawn_signal_listener(trigger.clone());

    let result = run_loop(
        &mut engine,
        frontend,
        &mut rx,
        &mut shutdown,
        config.exit_on_game_over,
    )
    .await;
    log::info!("game loop finished: {result:?}");

    trigger.trigger();
    drop(rx);
    let _ = ticker.await;
    let _ = signals.await;
    match relay.await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => log::warn!("input relay failed: {err:#}"),
        Err(err) => log::warn!("input relay panicked: {err}"),
    }

    result
}

/// Blocking entry point: build a runtime, run a session, tear down.
pub fn run<F, E>(config: &Config, frontend: &mut F, events: E) -> Result<ExitReason>
where
    F: Frontend + ?Sized,
    E: EventSource,
{
    log::info!(
        "starting {}x{} board, tick {:?}, seed {}, {:?} spawns",
        config.width,
        config.height,
        config.tick,
        config.seed,
        config.randomizer
    );

    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;
    let engine = build_engine(config);
    let result = rt.block_on(run_session(engine, config, frontend, events));
    rt.shutdown_timeout(Duration::from_millis(250));
    result
}
