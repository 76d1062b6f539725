//! Game state module - the simulation controller.
//!
//! Owns the grid, the single live player piece, the score, and the gravity
//! timing, and orchestrates the spawn / fall / settle / clear cycle. All
//! commands are silent no-ops when illegal: a blocked move or rotation is
//! simply discarded, and the only terminal condition is the game-over flag.

use crate::core::collide::collides;
use crate::core::grid::Grid;
use crate::core::pieces::{Shape, ShapeKind};
use crate::core::rng::SimpleRng;
use crate::types::{GameAction, DROP_INTERVAL_MS, GRID_HEIGHT, GRID_WIDTH, ROW_CLEAR_SCORE};

/// The active falling piece: its shape matrix and grid-relative position.
/// `y` counts up from the floor; positions above the top edge are legal
/// transiently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub shape: Shape,
    pub x: i16,
    pub y: i16,
}

/// Emitted whenever a piece settles (and on a blocked first spawn), for UI
/// collaborators to react to score changes and the game-over transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleEvent {
    pub rows_cleared: u32,
    pub score_delta: u32,
    pub game_over: bool,
}

/// One complete game session.
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    player: Option<Player>,
    score: u32,
    game_over: bool,
    drop_counter_ms: u32,
    drop_interval_ms: u32,
    rng: SimpleRng,
    last_event: Option<SettleEvent>,
}

impl GameState {
    /// Create a fresh session. No piece exists until [`start`](Self::start).
    pub fn new(seed: u32) -> Self {
        Self {
            grid: Grid::new(),
            player: None,
            score: 0,
            game_over: false,
            drop_counter_ms: 0,
            drop_interval_ms: DROP_INTERVAL_MS,
            rng: SimpleRng::new(seed),
            last_event: None,
        }
    }

    /// Spawn the first piece. Emits a game-over event if the spawn position
    /// is already blocked (possible when the grid was pre-filled).
    pub fn start(&mut self) {
        if self.player.is_some() || self.game_over {
            return;
        }
        if !self.spawn_piece() {
            self.last_event = Some(SettleEvent {
                rows_cleared: 0,
                score_delta: 0,
                game_over: true,
            });
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access, for scenario setup in tests and demos.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    /// Take and clear the last settle event.
    pub fn take_settle_event(&mut self) -> Option<SettleEvent> {
        self.last_event.take()
    }

    /// Draw a piece uniformly at random from the catalog and spawn it.
    /// Returns false (and flags game over) if it collides immediately.
    pub fn spawn_piece(&mut self) -> bool {
        let index = self.rng.next_range(ShapeKind::ALL.len() as u32);
        let kind = ShapeKind::ALL[index as usize];
        self.spawn_shape(kind.shape())
    }

    /// Spawn a specific shape: horizontally centered, far extent on the top
    /// edge. The blocked piece stays visible on game over.
    pub fn spawn_shape(&mut self, shape: Shape) -> bool {
        let x = GRID_WIDTH / 2 - shape.width() / 2;
        let y = GRID_HEIGHT - shape.height();
        let blocked = collides(&self.grid, &shape, x, y);

        self.player = Some(Player { shape, x, y });
        if blocked {
            self.game_over = true;
        }
        !blocked
    }

    /// Shift the player one column. Deltas other than -1 and +1 are
    /// rejected; a blocked shift is reverted. No score or phase change.
    pub fn try_move(&mut self, delta: i16) -> bool {
        if self.game_over || !matches!(delta, -1 | 1) {
            return false;
        }
        let Some(player) = self.player.as_mut() else {
            return false;
        };

        player.x += delta;
        let moved = !collides(&self.grid, &player.shape, player.x, player.y);
        if !moved {
            player.x -= delta;
        }
        moved
    }

    /// Replace the player's shape with its quarter-turn rotation if the
    /// rotated matrix fits at the current position.
    pub fn try_rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(player) = self.player.as_ref() else {
            return false;
        };

        let rotated = player.shape.rotated();
        let (x, y) = (player.x, player.y);
        if collides(&self.grid, &rotated, x, y) {
            return false;
        }
        if let Some(player) = self.player.as_mut() {
            player.shape = rotated;
        }
        true
    }

    /// Move the player one row toward the floor. A blocked step settles the
    /// piece instead: merge, clear rows, spawn the next piece. Returns true
    /// while the piece keeps falling.
    pub fn step_down(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(mut player) = self.player.take() else {
            return false;
        };

        player.y -= 1;
        if collides(&self.grid, &player.shape, player.x, player.y) {
            player.y += 1;
            self.settle(player);
            return false;
        }

        self.player = Some(player);
        true
    }

    /// Merge a landed piece into the grid, clear full rows, then spawn the
    /// next piece and publish the settle event.
    fn settle(&mut self, player: Player) {
        self.grid.merge(&player.shape, player.x, player.y);

        let rows_cleared = self.clear_full_rows();
        let score_delta = rows_cleared * ROW_CLEAR_SCORE;
        self.score += score_delta;

        self.spawn_piece();
        self.last_event = Some(SettleEvent {
            rows_cleared,
            score_delta,
            game_over: self.game_over,
        });
    }

    /// Clear every full row, scanning from the floor upward and re-checking
    /// the same index after each clear since the row above shifts into it.
    fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = 0;
        while y < self.grid.height() {
            if self.grid.is_row_full(y) {
                self.grid.clear_row(y);
                cleared += 1;
            } else {
                y += 1;
            }
        }
        cleared
    }

    /// Advance the gravity timer. Once the accumulated time exceeds the drop
    /// interval, the piece steps down and the counter restarts from zero.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }

        self.drop_counter_ms += elapsed_ms;
        if self.drop_counter_ms > self.drop_interval_ms {
            self.drop_counter_ms = 0;
            self.step_down();
            return true;
        }
        false
    }

    /// Start over: fresh grid, score, and timers; the RNG sequence carries
    /// on so restarts do not replay the same pieces.
    pub fn reset(&mut self) {
        *self = Self::new(self.rng.state());
        self.start();
    }

    /// Apply an input command. Returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1),
            GameAction::MoveRight => self.try_move(1),
            GameAction::Rotate => self.try_rotate(),
            GameAction::Drop => {
                if self.game_over || self.player.is_none() {
                    return false;
                }
                self.step_down();
                true
            }
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
