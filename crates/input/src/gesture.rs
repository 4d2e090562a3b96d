//! Swipe/tap gestures from a single pointer (touch, or a mouse drag).
//!
//! - horizontal travel of `col_step` moves the piece one column,
//! - downward travel of `row_step` soft-drops one row,
//! - a release without any step is a tap and rotates,
//! - a release after an upward swipe of at least `hard_drop` hard-drops.
//!
//! Multi-pointer gestures are ignored. Coordinates are in whatever unit the
//! thresholds use: pixels for touch, terminal cells for a mouse. A board cell
//! is square on a touch screen but two columns by one row in a terminal, so
//! the two axes have separate steps.

use arrayvec::ArrayVec;

use crate::types::{Command, HARD_DROP_SWIPE_PX, MIN_SWIPE_PX};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Stroke {
    start_y: f32,
    /// Anchor of the last horizontal step
    step_x: f32,
    /// Anchor of the last downward step
    step_y: f32,
    /// Latest pointer row
    cur_y: f32,
    moved: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    stroke: Option<Stroke>,
    col_step: f32,
    row_step: f32,
    hard_drop: f32,
}

impl SwipeTracker {
    /// Tracker with the touch-screen pixel thresholds.
    pub fn new() -> Self {
        Self::with_thresholds(MIN_SWIPE_PX, MIN_SWIPE_PX, HARD_DROP_SWIPE_PX)
    }

    /// Tracker with `col_step` horizontal and `row_step` vertical travel per
    /// step, and `hard_drop` upward travel for a hard drop.
    pub fn with_thresholds(col_step: f32, row_step: f32, hard_drop: f32) -> Self {
        Self {
            stroke: None,
            col_step,
            row_step,
            hard_drop,
        }
    }

    pub fn active(&self) -> bool {
        self.stroke.is_some()
    }

    /// Pointer down. Ignored when more than one pointer is down.
    pub fn begin(&mut self, pointers: usize, x: f32, y: f32) {
        if pointers > 1 {
            return;
        }
        self.stroke = Some(Stroke {
            start_y: y,
            step_x: x,
            step_y: y,
            cur_y: y,
            moved: false,
        });
    }

    /// Pointer moved; returns the steps it completed.
    pub fn drag(&mut self, pointers: usize, x: f32, y: f32) -> ArrayVec<Command, 2> {
        let mut out = ArrayVec::new();
        if pointers > 1 {
            return out;
        }
        let (col_step, row_step) = (self.col_step, self.row_step);
        let Some(stroke) = self.stroke.as_mut() else {
            return out;
        };

        let dx = x - stroke.step_x;
        if dx.abs() >= col_step {
            out.push(if dx > 0.0 {
                Command::MoveRight
            } else {
                Command::MoveLeft
            });
            stroke.step_x = x;
            stroke.moved = true;
        }

        let dy = y - stroke.step_y;
        if dy >= row_step {
            out.push(Command::SoftDrop);
            stroke.step_y = y;
            stroke.moved = true;
        } else if stroke.start_y - y >= row_step {
            // Upward travel never steps, but it is not a tap either.
            stroke.moved = true;
        }

        stroke.cur_y = y;
        out
    }

    /// Pointer up; returns the command the whole gesture resolves to.
    pub fn end(&mut self) -> Option<Command> {
        let stroke = self.stroke.take()?;
        if !stroke.moved {
            return Some(Command::Rotate);
        }
        if stroke.start_y - stroke.cur_y >= self.hard_drop {
            return Some(Command::HardDrop);
        }
        None
    }

    pub fn cancel(&mut self) {
        self.stroke = None;
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}
