// gl_triangle
// copyright zipxing@hotmail.com 2022～2025

//! # Render Adapter Module
//!
//! An adapter owns the window, its GL context and the toolkit event loop,
//! and drives frames for a [`Render`]. Both programs go through the same
//! loop whatever toolkit sits underneath:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ run(adapter, render)                         │
//! │                                              │
//! │   while adapter.should_continue() {          │
//! │       adapter.process_input();               │
//! │       adapter.render_frame(render);  draw +  │
//! │                                      present │
//! │       adapter.poll_events(render);   resize, │
//! │                                      close   │
//! │   }                                          │
//! └──────────────────────────────────────────────┘
//!          │                       │
//!          ▼                       ▼
//!  ┌────────────────┐     ┌────────────────────┐
//!  │WinitGlowAdapter│     │WinitDisplayAdapter │
//!  │ core 3.3, poll │     │ compat 2.1, wait + │
//!  │ every frame    │     │ repaint on demand  │
//!  └────────────────┘     └────────────────────┘
//! ```

use crate::event::{Event, WindowState};
use crate::render::Render;
use log::info;

#[cfg(winit_backend)]
pub mod winit_common;

#[cfg(winit_backend)]
pub mod winit_glow_adapter;

#[cfg(winit_backend)]
pub mod winit_display_adapter;

/// Render loop state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

impl LoopState {
    pub fn from_close_flag(should_close: bool) -> Self {
        if should_close {
            LoopState::Terminated
        } else {
            LoopState::Running
        }
    }
}

/// Render loop driver bound to one windowing toolkit
pub trait Adapter {
    /// Current loop state
    fn state(&self) -> LoopState;

    fn should_continue(&self) -> bool {
        self.state() == LoopState::Running
    }

    /// Per-iteration input check, run before the frame is drawn.
    /// Adapters without key handling keep the default no-op.
    fn process_input(&mut self) {}

    /// Draw one frame with `render` and present it
    fn render_frame(&mut self, render: &mut dyn Render);

    /// Hand control to the toolkit, dispatch whatever events arrived.
    /// Resizes are forwarded to `render`.
    fn poll_events(&mut self, render: &mut dyn Render);
}

/// Fold a batch of events into `state`, forwarding resizes to `render`.
///
/// Returns true when any event asks for a repaint (redraw or resize).
pub fn dispatch_events(
    state: &mut WindowState,
    events: &[Event],
    render: &mut dyn Render,
) -> bool {
    let mut repaint = false;
    for e in events {
        if let Some(viewport) = state.handle_event(e) {
            render.resize(viewport);
            repaint = true;
        }
        if *e == Event::Redraw {
            repaint = true;
        }
    }
    repaint
}

/// Repaint bookkeeping for display-callback style loops.
///
/// Starts pending so the first frame is shown, then only events that damage
/// the window (redraw, resize) make it pending again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redisplay {
    pending: bool,
}

impl Default for Redisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Redisplay {
    pub fn new() -> Self {
        Self { pending: true }
    }

    pub fn post(&mut self) {
        self.pending = true;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Clear the pending flag, returning whether a frame is due
    pub fn take(&mut self) -> bool {
        std::mem::replace(&mut self.pending, false)
    }

    /// Dispatch `events` and post a repaint if any of them asks for one
    pub fn dispatch(
        &mut self,
        state: &mut WindowState,
        events: &[Event],
        render: &mut dyn Render,
    ) {
        if dispatch_events(state, events, render) {
            self.post();
        }
    }
}

/// Run the render loop until the adapter terminates.
/// Returns how many iterations ran.
pub fn run(adapter: &mut dyn Adapter, render: &mut dyn Render) -> u64 {
    info!("Begin run...");
    let mut iterations = 0u64;
    while adapter.should_continue() {
        adapter.process_input();
        adapter.render_frame(render);
        adapter.poll_events(render);
        iterations += 1;
    }
    info!("End run after {} iterations", iterations);
    iterations
}
