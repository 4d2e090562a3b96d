//! Terminal runner (default binary).
//!
//! Keyboard and mouse input go through `tetrix::input` into the session's
//! command queue; the session advances the game once per tick and the
//! framebuffer renderer draws a snapshot every frame.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseEventKind};

use tetrix::input::{handle_key_event, handle_mouse_event, should_quit, HoldRepeater, SwipeTracker};
use tetrix::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetrix::types::Command;
use tetrix::{AppConfig, CommandSender, Session, Store};

// A terminal mouse reports cells, so swipe thresholds are in cells too.
const MOUSE_ROW_STEP: f32 = 1.0;
const MOUSE_HARD_DROP_ROWS: f32 = 3.0;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let (store, warning) = Store::open(config.data_path.clone());
    if let Some(warning) = warning {
        eprintln!("[Store] {warning}");
    }
    let mut session = Session::new(config.seed, store);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    for warning in session.take_warnings() {
        eprintln!("{warning}");
    }
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session, config: &AppConfig) -> Result<()> {
    let mut view = GameView::default();
    view.set_help(session.needs_tutorial());

    let tx = session.sender();
    let mut held = HoldRepeater::new();
    // A board cell is `cell_w` columns wide and one row tall.
    let mut swipe = SwipeTracker::with_thresholds(
        f32::from(view.cell_w()),
        MOUSE_ROW_STEP,
        MOUSE_HARD_DROP_ROWS,
    );
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(u64::from(config.tick_ms));
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(session.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if view.show_help() {
                            view.set_help(false);
                            session.dismiss_tutorial();
                        } else if let Some(command) = handle_key_event(key) {
                            if let Some(command) = held.press(command) {
                                send(&tx, command);
                            }
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(command) = handle_key_event(key) {
                            held.release(command);
                        }
                    }
                },
                Event::Mouse(mouse) => {
                    if view.show_help() {
                        if matches!(mouse.kind, MouseEventKind::Up(_)) {
                            view.set_help(false);
                            session.dismiss_tutorial();
                        }
                    } else {
                        for command in handle_mouse_event(&mut swipe, mouse) {
                            send(&tx, command);
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);

            for command in held.update(elapsed_ms) {
                send(&tx, command);
            }

            // Gravity waits until the controls overlay is dismissed.
            let gravity_ms = if view.show_help() { 0 } else { elapsed_ms };
            session.pump(gravity_ms);
        }
    }
}

fn send(tx: &CommandSender, command: Command) {
    // Dropped when the queue is full.
    let _ = tx.try_send(command);
}
