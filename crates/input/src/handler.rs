//! Hold-to-repeat handler for held keys and on-screen buttons.
//!
//! A repeatable command fires once when pressed. If it is still held after
//! an initial delay it fires again, then every [`HOLD_REPEAT_MS`]. Terminals
//! often never report key releases, so a hold also ends on its own when no
//! press has refreshed it within the release timeout. The initial delay is
//! never shorter than that timeout, so a lone tap fires exactly once.

use arrayvec::ArrayVec;

use crate::types::{Command, HOLD_REPEAT_MS};

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state. Terminal auto-repeat re-presses the
// key well inside this window, which keeps a genuinely held key alive.
const DEFAULT_RELEASE_TIMEOUT_MS: u32 = 150;

/// Hold time before the first repeat.
const DEFAULT_DELAY_MS: u32 = DEFAULT_RELEASE_TIMEOUT_MS;

/// Commands that keep firing while held.
pub fn is_repeatable(command: Command) -> bool {
    matches!(
        command,
        Command::MoveLeft | Command::MoveRight | Command::SoftDrop
    )
}

/// Tracks the currently held command and its repeat timer.
#[derive(Debug, Clone)]
pub struct HoldRepeater {
    held: Option<Command>,
    delay_ms: u32,
    repeat_ms: u32,
    /// Past the initial delay, firing every `repeat_ms`
    repeating: bool,
    accumulator_ms: u32,
    since_press_ms: u32,
    release_timeout_ms: u32,
}

impl HoldRepeater {
    pub fn new() -> Self {
        Self::with_repeat_ms(HOLD_REPEAT_MS)
    }

    pub fn with_repeat_ms(repeat_ms: u32) -> Self {
        Self {
            held: None,
            delay_ms: DEFAULT_DELAY_MS,
            repeat_ms: repeat_ms.max(1),
            repeating: false,
            accumulator_ms: 0,
            since_press_ms: 0,
            release_timeout_ms: DEFAULT_RELEASE_TIMEOUT_MS,
        }
    }

    /// Set the release timeout. The initial delay grows to match it when
    /// shorter.
    pub fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = timeout_ms;
        self.delay_ms = self.delay_ms.max(timeout_ms);
        self
    }

    /// Set the initial delay, clamped to at least the release timeout.
    pub fn with_delay_ms(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms.max(self.release_timeout_ms);
        self
    }

    pub fn held(&self) -> Option<Command> {
        self.held
    }

    /// Register a press. Returns the command to fire right away, if any.
    ///
    /// Re-pressing the command that is already held only refreshes the hold.
    pub fn press(&mut self, command: Command) -> Option<Command> {
        if !is_repeatable(command) {
            return Some(command);
        }

        self.since_press_ms = 0;
        if self.held == Some(command) {
            return None;
        }

        self.held = Some(command);
        self.repeating = false;
        self.accumulator_ms = 0;
        Some(command)
    }

    /// Register a release; ignored unless `command` is the one held.
    pub fn release(&mut self, command: Command) {
        if self.held == Some(command) {
            self.clear();
        }
    }

    /// Advance time and collect the repeats that became due.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<Command, 16> {
        let mut out = ArrayVec::new();
        let Some(command) = self.held else {
            return out;
        };

        self.since_press_ms = self.since_press_ms.saturating_add(elapsed_ms);
        if self.since_press_ms >= self.release_timeout_ms {
            self.clear();
            return out;
        }

        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed_ms);
        if !self.repeating {
            if self.accumulator_ms < self.delay_ms {
                return out;
            }
            out.push(command);
            self.accumulator_ms -= self.delay_ms;
            self.repeating = true;
        }
        while self.accumulator_ms >= self.repeat_ms {
            if out.try_push(command).is_err() {
                // Drop the backlog rather than bursting after a stall.
                self.accumulator_ms = 0;
                break;
            }
            self.accumulator_ms -= self.repeat_ms;
        }
        out
    }

    pub fn clear(&mut self) {
        self.held = None;
        self.repeating = false;
        self.accumulator_ms = 0;
        self.since_press_ms = 0;
    }
}

impl Default for HoldRepeater {
    fn default() -> Self {
        Self::new()
    }
}
