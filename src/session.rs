//! Session driver: the single owner of the game state.
//!
//! Every input source holds a [`CommandSender`] onto one bounded channel. Each
//! frame the driver calls [`Session::pump`], which applies queued commands in
//! arrival order and then advances gravity. Lock events that raise the best
//! score are written through to the [`Store`].

use tokio::sync::mpsc;

use crate::core::{GameSnapshot, GameState, LockEvent};
use crate::store::Store;
use crate::types::Command;

/// Commands that may be queued between two frames.
pub const COMMAND_QUEUE_CAPACITY: usize = 64;

/// Cloneable handle for input sources.
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: mpsc::Sender<Command>,
}

impl CommandSender {
    /// Queue a command. Returns `false` when the queue is full and it was dropped.
    pub fn try_send(&self, command: Command) -> bool {
        self.tx.try_send(command).is_ok()
    }
}

/// What one [`Session::pump`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PumpReport {
    pub commands: usize,
    pub gravity_drop: bool,
    pub locks: usize,
}

pub struct Session {
    game: GameState,
    store: Store,
    tx: mpsc::Sender<Command>,
    rx: mpsc::Receiver<Command>,
    snapshot: GameSnapshot,
    warnings: Vec<String>,
    /// Set after the first failed best-score save; later failures stay quiet.
    best_save_failed: bool,
}

impl Session {
    pub fn new(seed: u32, store: Store) -> Self {
        Self::with_capacity(seed, store, COMMAND_QUEUE_CAPACITY)
    }

    pub fn with_capacity(seed: u32, store: Store, capacity: usize) -> Self {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        Self {
            game: GameState::with_best(seed, store.best()),
            store,
            tx,
            rx,
            snapshot: GameSnapshot::default(),
            warnings: Vec::new(),
            best_save_failed: false,
        }
    }

    pub fn sender(&self) -> CommandSender {
        CommandSender {
            tx: self.tx.clone(),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Apply every queued command, then advance time by `elapsed_ms`.
    pub fn pump(&mut self, elapsed_ms: u32) -> PumpReport {
        let mut report = PumpReport::default();

        while let Ok(command) = self.rx.try_recv() {
            self.game.apply(command);
            report.commands += 1;
            self.settle(&mut report);
        }

        report.gravity_drop = self.game.advance(elapsed_ms);
        self.settle(&mut report);
        report
    }

    fn settle(&mut self, report: &mut PumpReport) {
        if let Some(event) = self.game.take_last_event() {
            report.locks += 1;
            self.on_lock(event);
        }
    }

    fn on_lock(&mut self, event: LockEvent) {
        if !event.new_best {
            return;
        }
        match self.store.record_best(self.game.best()) {
            Ok(_) => self.best_save_failed = false,
            Err(err) if !self.best_save_failed => {
                self.best_save_failed = true;
                self.warnings.push(format!("[Store] failed to save best score: {err:#}"));
            }
            Err(_) => {}
        }
    }

    /// Whether the first-run controls overlay should be shown.
    pub fn needs_tutorial(&self) -> bool {
        !self.store.tutorial_seen()
    }

    pub fn dismiss_tutorial(&mut self) {
        if let Err(err) = self.store.mark_tutorial_seen() {
            self.warnings.push(format!("[Store] failed to save tutorial flag: {err:#}"));
        }
    }

    /// Current frame view; the buffer is reused between calls.
    pub fn snapshot(&mut self) -> &GameSnapshot {
        self.game.snapshot_into(&mut self.snapshot);
        &self.snapshot
    }

    /// Non-fatal problems collected while the terminal was busy.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_apply_in_order() {
        let mut session = Session::new(3, Store::in_memory());
        let tx = session.sender();
        let x = session.game().active().x;

        assert!(tx.try_send(Command::MoveLeft));
        assert!(tx.try_send(Command::MoveRight));
        assert!(tx.try_send(Command::MoveRight));
        let report = session.pump(0);

        assert_eq!(report.commands, 3);
        assert_eq!(session.game().active().x, x + 1);
    }

    #[test]
    fn test_full_queue_drops() {
        let session = Session::with_capacity(3, Store::in_memory(), 2);
        let tx = session.sender();
        assert!(tx.try_send(Command::Rotate));
        assert!(tx.try_send(Command::Rotate));
        assert!(!tx.try_send(Command::Rotate));
    }

    #[test]
    fn test_pause_stops_gravity_only() {
        let mut session = Session::new(3, Store::in_memory());
        let tx = session.sender();
        tx.try_send(Command::TogglePause);
        let report = session.pump(5_000);
        assert!(!report.gravity_drop);
        assert!(session.game().paused());

        let y = session.game().active().y;
        tx.try_send(Command::SoftDrop);
        session.pump(5_000);
        assert_eq!(session.game().active().y, y + 1);
    }

    #[test]
    fn test_gravity_needs_more_than_interval() {
        let mut session = Session::new(3, Store::in_memory());
        assert!(!session.pump(1000).gravity_drop);
        assert!(session.pump(1).gravity_drop);
        assert_eq!(session.game().active().y, 1);
    }

    #[test]
    fn test_hard_drop_counts_lock() {
        let mut session = Session::new(3, Store::in_memory());
        session.sender().try_send(Command::HardDrop);
        let report = session.pump(0);
        assert_eq!(report.locks, 1);
        assert_eq!(session.snapshot().board.iter().flatten().flatten().count(), 4);
    }

    #[test]
    fn test_tutorial_flag() {
        let mut session = Session::new(3, Store::in_memory());
        assert!(session.needs_tutorial());
        session.dismiss_tutorial();
        assert!(!session.needs_tutorial());
        assert!(session.warnings().is_empty());
    }

    #[test]
    fn test_unwritable_store_warns_once() {
        let path = std::env::temp_dir()
            .join(format!("tetrix-missing-{}", std::process::id()))
            .join("best.json");
        let (store, warning) = Store::open(Some(path));
        assert!(warning.is_none());
        let mut session = Session::new(3, store);

        for best in [300, 800, 1500] {
            session.game = GameState::with_best(3, best);
            session.on_lock(LockEvent {
                new_best: true,
                ..LockEvent::default()
            });
        }

        assert_eq!(session.warnings().len(), 1);
        assert!(session.warnings()[0].starts_with("[Store]"));
    }
}
