// gl_triangle
// copyright zipxing@hotmail.com 2022～2025

//! Render module.
//!
//! - adapter: render loop drivers bound to a windowing toolkit
//! - gl: modern pipeline (shader program, static geometry, triangle frame)
//! - legacy: immediate mode entry points and display callback

use crate::event::Viewport;

pub mod adapter;
pub mod gl;
pub mod legacy;

/// The Render interface, draws one frame into the current GL context.
/// Adapters call `draw` when a frame is due and `resize` on window size
/// changes; presenting the frame is the adapter's job.
pub trait Render {
    fn draw(&mut self);
    fn resize(&mut self, viewport: Viewport);
}
