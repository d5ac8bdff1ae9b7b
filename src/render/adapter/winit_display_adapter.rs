// gl_triangle
// copyright zipxing@hotmail.com 2022～2025

//! # Winit Display Adapter
//!
//! Drives the immediate mode triangle the way a display callback toolkit
//! does: the frame is redrawn only when the window needs it (first show,
//! expose, resize), and between frames the adapter sleeps in the event
//! pump. Keys are ignored, only the close button ends the loop.

use crate::config::{ContextConfig, WindowConfig};
use crate::error::BootstrapError;
use crate::event::WindowState;
use crate::render::adapter::{
    winit_common::{resize_surface_for, WinitContext},
    Adapter, LoopState, Redisplay,
};
use crate::render::legacy::ImmediateFns;
use crate::render::Render;
use log::{debug, info};

pub struct WinitDisplayAdapter {
    state: WindowState,
    redisplay: Redisplay,
    ctx: WinitContext,
}

impl WinitDisplayAdapter {
    pub fn new(window: &WindowConfig, context: &ContextConfig) -> Result<Self, BootstrapError> {
        info!("Initializing WinitDisplay adapter with legacy OpenGL...");
        let ctx = WinitContext::create(window, context)?;
        let (w, h) = ctx.window_size();
        Ok(Self {
            state: WindowState::new(w, h),
            redisplay: Redisplay::new(),
            ctx,
        })
    }

    /// Resolve the immediate mode entry points from this adapter's context
    pub fn load_immediate(&self) -> Result<ImmediateFns, BootstrapError> {
        ImmediateFns::load(|name| self.ctx.get_proc_address(name))
    }
}

impl Adapter for WinitDisplayAdapter {
    fn state(&self) -> LoopState {
        LoopState::from_close_flag(self.state.should_close())
    }

    fn render_frame(&mut self, render: &mut dyn Render) {
        if !self.redisplay.take() {
            return;
        }
        debug!("display");
        render.draw();
        self.ctx.swap_buffers();
    }

    fn poll_events(&mut self, render: &mut dyn Render) {
        let events = self.ctx.pump(None);
        resize_surface_for(&self.ctx, &events);
        self.redisplay.dispatch(&mut self.state, &events, render);
    }
}
