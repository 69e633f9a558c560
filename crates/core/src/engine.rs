//! Game engine - owns the board and the live piece and applies commands
//!
//! Every accepted command ends in a commit: the previously committed
//! footprint is erased (its `Falling` cells only), the current placement is
//! stamped in the piece's state, and full rows are cleared. Requests that
//! would move the piece into a wall or locked terrain leave everything as it
//! was and report [`Outcome::Blocked`].
//!
//! The engine is single-threaded and synchronous. Callers that share it
//! between a timer and an input source must serialize access themselves.

use crate::board::Board;
use crate::controller::{self, ActivePiece, Gravity, Placement};
use crate::snapshot::{BoardSnapshot, GameSnapshot};
use crate::spawn::{SpawnSelector, UniformSpawner};
use crate::types::{CellState, GameAction};

/// What a command did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command was not applicable (the game is already over).
    Ignored,
    /// The move or rotation was illegal; nothing changed.
    Blocked,
    /// The piece moved or rotated.
    Moved,
    /// The piece locked and a new one spawned.
    Locked { lines_cleared: usize },
    /// The game just ended.
    GameOver,
    /// Shutdown was requested.
    Quit,
}

impl Outcome {
    /// Whether the board changed and should be drawn again.
    pub fn needs_redraw(&self) -> bool {
        matches!(
            self,
            Outcome::Moved | Outcome::Locked { .. } | Outcome::GameOver
        )
    }
}

pub struct GameEngine<S = UniformSpawner> {
    board: Board,
    piece: ActivePiece,
    spawner: S,
    game_over: bool,
    quit: bool,
}

impl GameEngine<UniformSpawner> {
    /// Empty `width x height` board with uniformly random spawns.
    pub fn new(width: u8, height: u8, seed: u32) -> Self {
        Self::with_spawner(Board::new(width, height), UniformSpawner::new(seed))
    }
}

impl<S: SpawnSelector> GameEngine<S> {
    /// Start a game on `board`, spawning the first piece immediately.
    ///
    /// Rows that are already full are cleared before the first spawn.
    pub fn with_spawner(mut board: Board, mut spawner: S) -> Self {
        board.clear_full_rows();
        let (kind, rotation) = spawner.next_spawn();
        let mut engine = Self {
            board,
            piece: ActivePiece::new(Placement::spawn(kind, rotation)),
            spawner,
            game_over: false,
            quit: false,
        };
        engine.enter_piece();
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.piece
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Apply one player command.
    ///
    /// After game over only `Quit` has an effect.
    pub fn handle_input(&mut self, action: GameAction) -> Outcome {
        match action {
            GameAction::Quit => {
                self.quit = true;
                Outcome::Quit
            }
            _ if self.game_over => Outcome::Ignored,
            GameAction::MoveLeft => {
                let moved = controller::move_left(self.piece.placement, &self.board);
                self.apply(moved)
            }
            GameAction::MoveRight => {
                let moved = controller::move_right(self.piece.placement, &self.board);
                self.apply(moved)
            }
            GameAction::Rotate => {
                let rotated = controller::rotate(self.piece.placement, &self.board);
                self.apply(rotated)
            }
            GameAction::SoftDrop => self.step(),
        }
    }

    /// Advance gravity by one row.
    pub fn tick(&mut self) -> Outcome {
        if self.game_over {
            return Outcome::Ignored;
        }
        self.step()
    }

    pub fn board_snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from(&self.board)
    }

    /// Fill `out` with the current state, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board.copy_from(&self.board);
        out.active = (!self.game_over).then_some(self.piece.placement);
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn step(&mut self) -> Outcome {
        match controller::gravity(self.piece.placement, &self.board) {
            Gravity::Fell(next) => {
                self.piece.state = CellState::Falling;
                self.apply(Some(next))
            }
            Gravity::Landed => self.lock(),
            Gravity::Stuck => {
                let p = self.piece.placement;
                log::info!("game over: {:?} stuck at spawn x={} y={}", p.kind, p.x, p.y);
                self.game_over = true;
                Outcome::GameOver
            }
        }
    }

    fn apply(&mut self, next: Option<Placement>) -> Outcome {
        match next {
            Some(placement) => {
                self.piece.placement = placement;
                self.commit();
                Outcome::Moved
            }
            None => Outcome::Blocked,
        }
    }

    fn lock(&mut self) -> Outcome {
        self.piece.state = CellState::Fixed;
        let lines_cleared = self.commit();
        let p = self.piece.placement;
        log::debug!(
            "locked {:?} {:?} at x={} y={}, cleared {} row(s)",
            p.kind,
            p.rotation,
            p.x,
            p.y,
            lines_cleared
        );

        let (kind, rotation) = self.spawner.next_spawn();
        self.piece = ActivePiece::new(Placement::spawn(kind, rotation));
        if self.enter_piece() {
            Outcome::Locked { lines_cleared }
        } else {
            Outcome::GameOver
        }
    }

    /// Stamp a freshly spawned piece, or end the game if its spawn cells are
    /// already locked.
    fn enter_piece(&mut self) -> bool {
        let p = self.piece.placement;
        if p.collides(&self.board) {
            log::info!("game over: no room to spawn {:?} {:?}", p.kind, p.rotation);
            self.game_over = true;
            return false;
        }
        log::debug!("spawned {:?} {:?} at x={} y={}", p.kind, p.rotation, p.x, p.y);
        self.commit();
        true
    }

    /// Erase the old footprint, stamp the new one, clear full rows.
    fn commit(&mut self) -> usize {
        if let Some(old) = self.piece.committed() {
            self.board.erase_footprint(old.mask(), old.x, old.y);
        }
        let p = self.piece.placement;
        self.board.stamp_footprint(p.mask(), p.x, p.y, self.piece.state);
        self.piece.mark_committed();
        self.board.clear_full_rows().len()
    }
}
