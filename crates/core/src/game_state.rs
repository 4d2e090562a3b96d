//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, pieces, bag and scoring.
//! It owns the spawn → fall → lock → clear → spawn cycle, the score/level/lines
//! counters and gravity pacing.
//!
//! There is no timer inside. The driver feeds elapsed time through
//! [`GameState::advance`] and player input through [`GameState::apply`].
//! Every operation runs to completion; an illegal move or rotation simply
//! leaves the state untouched.

use crate::board::Board;
use crate::piece::{try_rotate, ActivePiece};
use crate::rng::Bag;
use crate::scoring::{drop_interval_ms, line_clear_points, reaches_next_level};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, PieceKind, BASE_DROP_MS, START_LEVEL};

/// What happened when the active piece locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Points awarded for the clear (already multiplied by the level)
    pub points: u32,
    pub level_up: bool,
    /// The score passed the previous best; the caller should persist it
    pub new_best: bool,
    /// The promoted next piece did not fit and the spawn reset path ran
    pub topped_out: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: ActivePiece,
    next: ActivePiece,
    bag: Bag,
    score: u32,
    lines: u32,
    level: u32,
    drop_interval_ms: u32,
    best: u32,
    paused: bool,
    /// Gravity accumulator, milliseconds since the last drop
    drop_counter_ms: u32,
    /// Last lock event (consumed by the driver).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed and no recorded best score
    pub fn new(seed: u32) -> Self {
        Self::with_best(seed, 0)
    }

    /// Create a new game, carrying the persisted best score
    pub fn with_best(seed: u32, best: u32) -> Self {
        let placeholder = ActivePiece::spawn(PieceKind::I);
        let mut state = Self {
            board: Board::new(),
            active: placeholder,
            next: placeholder,
            bag: Bag::new(seed),
            score: 0,
            lines: 0,
            level: START_LEVEL,
            drop_interval_ms: BASE_DROP_MS,
            best,
            paused: false,
            drop_counter_ms: 0,
            last_event: None,
        };
        state.player_reset();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn next(&self) -> &ActivePiece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    fn reset_counters(&mut self) {
        self.score = 0;
        self.lines = 0;
        self.level = START_LEVEL;
        self.drop_interval_ms = BASE_DROP_MS;
    }

    /// Spawn a fresh piece from the bag and refill the next piece
    ///
    /// If the fresh piece collides at its spawn position the game is over: the
    /// board is wiped and the counters start again. The fresh piece keeps its
    /// spawn position either way. Returns whether that reset happened.
    pub fn player_reset(&mut self) -> bool {
        self.active = ActivePiece::spawn(self.bag.draw());

        let topped_out = self.board.collide(&self.active);
        if topped_out {
            self.board.clear();
            self.reset_counters();
        }

        self.next = ActivePiece::spawn(self.bag.draw());
        topped_out
    }

    /// Gravity step: move down one row, or lock if the piece has landed
    ///
    /// Always restarts the gravity accumulator. Returns whether the piece locked.
    pub fn player_drop(&mut self) -> bool {
        let moved = self.active.shifted(0, 1);
        let locked = if self.board.collide(&moved) {
            self.lock_active();
            true
        } else {
            self.active = moved;
            false
        };
        self.drop_counter_ms = 0;
        locked
    }

    /// Merge the active piece, clear lines, score, and bring in the next piece
    fn lock_active(&mut self) {
        self.board.merge(&self.active);
        let cleared = self.board.clear_lines();

        let mut event = LockEvent {
            lines_cleared: cleared as u32,
            ..LockEvent::default()
        };

        if cleared > 0 {
            self.lines = self.lines.saturating_add(cleared as u32);
            event.points = line_clear_points(cleared, self.level);
            self.score = self.score.saturating_add(event.points);

            if reaches_next_level(self.lines, self.level) {
                self.level += 1;
                self.drop_interval_ms = drop_interval_ms(self.level);
                event.level_up = true;
            }

            if self.score > self.best {
                self.best = self.score;
                event.new_best = true;
            }
        }

        // The next piece keeps its own matrix; only its position is reset.
        self.active = ActivePiece::spawn_with(self.next.kind, self.next.matrix);
        self.next = ActivePiece::spawn(self.bag.draw());

        if self.board.collide(&self.active) {
            self.player_reset();
            event.topped_out = true;
        }

        self.last_event = Some(event);
    }

    /// Move down one row if possible; never locks
    pub fn soft_drop(&mut self) -> bool {
        self.try_shift(0, 1)
    }

    /// Drop to the landing row and lock
    pub fn hard_drop(&mut self) {
        let mut landing = self.active;
        while !self.board.collide(&landing) {
            landing.y += 1;
        }
        self.active = landing.shifted(0, -1);
        self.player_drop();
    }

    /// Shift horizontally by `dir` (-1 or +1); reverts on collision
    pub fn player_move(&mut self, dir: i8) -> bool {
        self.try_shift(dir, 0)
    }

    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        let moved = self.active.shifted(dx, dy);
        if self.board.collide(&moved) {
            return false;
        }
        self.active = moved;
        true
    }

    /// Rotate clockwise with horizontal kicks; unchanged if nothing fits
    pub fn player_rotate(&mut self) -> bool {
        match try_rotate(&self.active, &self.board) {
            Some((rotated, _kick)) => {
                self.active = rotated;
                true
            }
            None => false,
        }
    }

    /// Row the active piece would land on (the ghost piece)
    pub fn ghost_y(&self) -> i8 {
        let mut ghost = self.active;
        while !self.board.collide(&ghost) {
            ghost.y += 1;
        }
        ghost.y - 1
    }

    /// Advance simulated time by `elapsed_ms`
    ///
    /// While paused no time accumulates. Once the accumulator exceeds the drop
    /// interval a gravity step runs. Returns whether it did.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if self.paused {
            return false;
        }

        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        if self.drop_counter_ms > self.drop_interval_ms {
            self.player_drop();
            return true;
        }
        false
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Start over: empty board, counters back to their initial values, fresh piece
    ///
    /// Best score and the pause flag are kept.
    pub fn reset(&mut self) {
        self.board.clear();
        self.reset_counters();
        self.player_reset();
    }

    /// Apply a player command
    ///
    /// Pause only stops gravity; commands are accepted regardless. Returns
    /// whether the command changed anything.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.player_move(-1),
            Command::MoveRight => self.player_move(1),
            Command::SoftDrop => self.soft_drop(),
            Command::HardDrop => {
                self.hard_drop();
                true
            }
            Command::Rotate => self.player_rotate(),
            Command::TogglePause => {
                self.toggle_pause();
                true
            }
            Command::Reset => {
                self.reset();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = Some(ActiveSnapshot::from(self.active));
        out.ghost_y = Some(self.ghost_y());
        out.next = Some(ActiveSnapshot::from(self.next));
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.best = self.best;
        out.paused = self.paused;
        out.drop_interval_ms = self.drop_interval_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
