// gl_triangle
// copyright zipxing@hotmail.com 2022～2025

//! # Winit + Glow Adapter
//!
//! Drives the core profile triangle: winit for the window and events,
//! glutin for the context, glow for the GL calls.
//!
//! Every iteration draws and swaps, then pumps events without waiting, so
//! the loop spins as fast as the swap allows. A held Escape or the OS close
//! button ends it.

use crate::config::{ContextConfig, WindowConfig};
use crate::error::BootstrapError;
use crate::event::WindowState;
use crate::render::adapter::{
    dispatch_events,
    winit_common::{resize_surface_for, WinitContext},
    Adapter, LoopState,
};
use crate::render::gl::CoreGl;
use crate::render::Render;
use log::info;
use std::rc::Rc;
use std::time::Duration;

pub struct WinitGlowAdapter {
    gl: Rc<glow::Context>,
    state: WindowState,
    ctx: WinitContext,
}

impl WinitGlowAdapter {
    pub fn new(window: &WindowConfig, context: &ContextConfig) -> Result<Self, BootstrapError> {
        info!("Initializing WinitGlow adapter with OpenGL backend...");
        let ctx = WinitContext::create(window, context)?;

        if ctx.get_proc_address(c"glGetString").is_null() {
            return Err(BootstrapError::Loader(
                "glGetString not resolvable".to_string(),
            ));
        }
        let gl = unsafe { glow::Context::from_loader_function_cstr(|s| ctx.get_proc_address(s)) };
        let [vendor, version, glsl] = gl.info_strings();
        info!("GL vendor: {}", vendor);
        info!("GL version: {}", version);
        info!("GLSL version: {}", glsl);

        let (w, h) = ctx.window_size();
        Ok(Self {
            gl: Rc::new(gl),
            state: WindowState::new(w, h),
            ctx,
        })
    }

    /// Shared handle for the resources created on this context
    pub fn gl(&self) -> Rc<glow::Context> {
        self.gl.clone()
    }
}

impl Adapter for WinitGlowAdapter {
    fn state(&self) -> LoopState {
        LoopState::from_close_flag(self.state.should_close())
    }

    fn process_input(&mut self) {
        if self.state.process_input() {
            info!("Escape pressed, closing window");
        }
    }

    fn render_frame(&mut self, render: &mut dyn Render) {
        render.draw();
        self.ctx.swap_buffers();
    }

    fn poll_events(&mut self, render: &mut dyn Render) {
        let events = self.ctx.pump(Some(Duration::ZERO));
        resize_surface_for(&self.ctx, &events);
        dispatch_events(&mut self.state, &events, render);
    }
}
