//! Frame hot paths (commands, gravity, input adapters, snapshot, render) must not allocate.
//!
//! Single test in this binary so no other thread allocates while counting.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tetrix::core::{GameSnapshot, GameState};
use tetrix::input::{HoldRepeater, SwipeTracker};
use tetrix::term::{FrameBuffer, GameView, Viewport};
use tetrix::types::Command;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn frame_hot_paths_do_not_allocate() {
    // Setup outside counting so one-time allocations don't trip the gate.
    let mut gs = GameState::new(1);
    let mut held = HoldRepeater::new();
    let mut swipe = SwipeTracker::new();
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    // Warm-up.
    gs.snapshot_into(&mut snap);
    view.render_into(&snap, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            gs.advance(16);
        }

        for _ in 0..50 {
            gs.apply(Command::MoveLeft);
            gs.apply(Command::MoveRight);
            gs.apply(Command::Rotate);
            gs.apply(Command::SoftDrop);
        }

        // Lock, line clear, spawn and the top-out reset path.
        for _ in 0..60 {
            gs.apply(Command::HardDrop);
            let _ = gs.take_last_event();
        }

        held.press(Command::MoveLeft);
        for _ in 0..20 {
            for cmd in held.update(16) {
                gs.apply(cmd);
            }
        }

        swipe.begin(1, 0.0, 100.0);
        for cmd in swipe.drag(1, 40.0, 130.0) {
            gs.apply(cmd);
        }
        if let Some(cmd) = swipe.end() {
            gs.apply(cmd);
        }

        for _ in 0..10 {
            gs.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
