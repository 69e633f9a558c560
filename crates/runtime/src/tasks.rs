//! Producer tasks feeding the game loop: gravity ticker, input relay and
//! signal listener. All of them stop when the shutdown token fires.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::command::Command;
use crate::input::{map_event, InputEvent};
use crate::shutdown::{ShutdownSignal, ShutdownTrigger};

/// How long the input relay blocks before re-checking shutdown.
pub const INPUT_POLL: Duration = Duration::from_millis(50);

/// A blocking source of input events.
pub trait EventSource: Send + 'static {
    /// Wait at most `timeout` for the next relevant event.
    fn next_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>>;
}

/// Reads the real terminal through crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        if !crossterm::event::poll(timeout)? {
            return Ok(None);
        }
        let event = crossterm::event::read()?;
        Ok(map_event(&event))
    }
}

/// Replays a fixed list of events, then stays idle.
#[derive(Debug, Default, Clone)]
pub struct ScriptedEvents {
    events: VecDeque<InputEvent>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        match self.events.pop_front() {
            Some(event) => Ok(Some(event)),
            None => {
                std::thread::sleep(timeout);
                Ok(None)
            }
        }
    }
}

/// Send [`Command::Tick`] every `period`. The first tick fires one period
/// after start.
pub fn spawn_ticker(
    period: Duration,
    tx: mpsc::Sender<Command>,
    mut shutdown: ShutdownSignal,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = shutdown.wait() => break,
                _ = interval.tick() => {
                    if tx.send(Command::Tick).await.is_err() {
                        break;
                    }
                }
            }
        }
        log::debug!("ticker stopped");
    })
}

/// Forward events from a blocking source until shutdown, end of the
/// receiver, or a read error.
pub fn spawn_input_relay<E: EventSource>(
    mut source: E,
    tx: mpsc::Sender<Command>,
    shutdown: ShutdownSignal,
) -> JoinHandle<Result<()>> {
    tokio::task::spawn_blocking(move || {
        while !shutdown.is_triggered() {
            let Some(event) = source.next_event(INPUT_POLL)? else {
                continue;
            };
            if tx.blocking_send(Command::from(event)).is_err() {
                break;
            }
        }
        log::debug!("input relay stopped");
        Ok(())
    })
}

/// Fire `trigger` on Ctrl-C or SIGTERM.
pub fn spawn_signal_listener(trigger: ShutdownTrigger) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut shutdown = trigger.subscribe();
        tokio::select! {
            _ = shutdown.wait() => {}
            received = wait_for_signal() => {
                match received {
                    Ok(name) => log::info!("received {name}, shutting down"),
                    Err(err) => log::warn!("signal listener failed: {err}"),
                }
                trigger.trigger();
            }
        }
    })
}

#[cfg(unix)]
async fn wait_for_signal() -> std::io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut term = signal(SignalKind::terminate())?;
    tokio::select! {
        res = tokio::signal::ctrl_c() => res.map(|_| "SIGINT"),
        _ = term.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> std::io::Result<&'static str> {
    tokio::signal::ctrl_c().await.map(|_| "Ctrl-C")
}
