// gl_triangle
// copyright zipxing@hotmail.com 2022～2025

//! One event in this module namely Event, describing the few window I/Os the
//! triangle programs care about. Input events delivered by winit are
//! converted here to the unified Event, then folded into WindowState.

/// Keys the programs react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// Unified window event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// key went down (`pressed == true`) or up
    Key { key: Key, pressed: bool },
    /// framebuffer changed size, in pixels
    Resized { width: u32, height: u32 },
    /// window contents were damaged or a repaint was requested
    Redraw,
    /// OS close button
    CloseRequested,
}

/// Pixel rectangle normalized device coordinates are mapped onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    /// Viewport covering a whole framebuffer of the given size.
    /// Sizes beyond `i32::MAX` saturate.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width: i32::try_from(width).unwrap_or(i32::MAX),
            height: i32::try_from(height).unwrap_or(i32::MAX),
        }
    }
}

/// Per-window state shared by all adapters
#[derive(Debug, Clone)]
pub struct WindowState {
    should_close: bool,
    escape_held: bool,
    viewport: Viewport,
}

impl WindowState {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            should_close: false,
            escape_held: false,
            viewport: Viewport::from_size(width, height),
        }
    }

    /// Fold one event into the state.
    /// Returns the new viewport when the event was a resize.
    pub fn handle_event(&mut self, event: &Event) -> Option<Viewport> {
        match *event {
            Event::Key {
                key: Key::Escape,
                pressed,
            } => {
                self.escape_held = pressed;
                None
            }
            Event::Resized { width, height } => {
                self.viewport = Viewport::from_size(width, height);
                Some(self.viewport)
            }
            Event::CloseRequested => {
                self.request_close();
                None
            }
            Event::Key { .. } | Event::Redraw => None,
        }
    }

    /// Keyboard check run at the top of every modern-loop iteration:
    /// a held Escape asks the window to close.
    /// Returns true when this call set the close flag.
    pub fn process_input(&mut self) -> bool {
        if self.escape_held {
            return self.request_close();
        }
        false
    }

    /// Set the close flag. Returns true only on the first request.
    pub fn request_close(&mut self) -> bool {
        if self.should_close {
            return false;
        }
        self.should_close = true;
        true
    }

    pub fn should_close(&self) -> bool {
        self.should_close
    }

    pub fn escape_held(&self) -> bool {
        self.escape_held
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
