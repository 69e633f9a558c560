//! End-to-end runs of the game loop with scripted input and a recording
//! frontend.

use std::time::Duration;

use anyhow::Result;
use blockfall::core::{Board, GameEngine, GameSnapshot, ScriptedSpawner};
use blockfall::input::InputEvent;
use blockfall::runtime::{run, run_session, Config, ExitReason, Frontend, ScriptedEvents};
use blockfall::types::{GameAction, PieceKind, Rotation};

#[derive(Default)]
struct Recorder {
    frames: Vec<GameSnapshot>,
    resizes: usize,
}

impl Frontend for Recorder {
    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.frames.push(snapshot.clone());
        Ok(())
    }

    fn resize(&mut self) -> Result<()> {
        self.resizes += 1;
        Ok(())
    }
}

fn quiet_config() -> Config {
    Config {
        // Long enough that no tick lands during a test.
        tick: Duration::from_secs(60),
        seed: 1,
        ..Config::default()
    }
}

fn action(a: GameAction) -> InputEvent {
    InputEvent::Action(a)
}

#[tokio::test]
async fn scripted_input_reaches_the_engine_in_order() {
    let engine = GameEngine::with_spawner(
        Board::new(10, 20),
        ScriptedSpawner::repeat(PieceKind::O, Rotation::North),
    );
    let events = ScriptedEvents::new([
        action(GameAction::MoveRight),
        action(GameAction::MoveRight),
        InputEvent::Resize {
            width: 100,
            height: 30,
        },
        action(GameAction::SoftDrop),
        action(GameAction::Quit),
        action(GameAction::MoveRight),
    ]);
    let mut recorder = Recorder::default();

    let reason = run_session(engine, &quiet_config(), &mut recorder, events)
        .await
        .unwrap();

    assert_eq!(reason, ExitReason::Quit);
    assert_eq!(recorder.resizes, 1);
    assert_eq!(recorder.frames.len(), 5);
    let last = recorder.frames.last().unwrap().active.unwrap();
    assert_eq!((last.x, last.y), (1, 1));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn ticks_drive_the_game_to_game_over() {
    let engine = GameEngine::with_spawner(
        Board::new(4, 4),
        ScriptedSpawner::repeat(PieceKind::O, Rotation::North),
    );
    let config = Config {
        width: 4,
        height: 4,
        tick: Duration::from_millis(1),
        exit_on_game_over: true,
        ..Config::default()
    };
    let mut recorder = Recorder::default();

    let reason = tokio::time::timeout(
        Duration::from_secs(10),
        run_session(engine, &config, &mut recorder, ScriptedEvents::default()),
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(reason, ExitReason::GameOver);
    assert!(recorder.frames.last().unwrap().game_over);
}

#[test]
fn blocking_run_returns_on_quit() {
    let config = quiet_config();
    let mut recorder = Recorder::default();
    let events = ScriptedEvents::new([action(GameAction::Rotate), action(GameAction::Quit)]);

    let reason = run(&config, &mut recorder, events).unwrap();
    assert_eq!(reason, ExitReason::Quit);
    assert!(!recorder.frames.is_empty());
    assert_eq!(recorder.frames[0].board.width(), 10);
}
