// gl_triangle
// copyright zipxing@hotmail.com 2022～2025

//! # Winit Common Module
//!
//! Window + GL context bootstrap and event translation shared by
//! `WinitGlowAdapter` and `WinitDisplayAdapter`.
//!
//! ```text
//!  EventLoop::pump_app_events
//!          │
//!          ▼
//!  WinitAppHandler ── resumed ──► DisplayBuilder: window + GL config
//!          │                      glutin context + window surface
//!          │
//!          └── window_event ──► Event (Escape, resize, redraw, close)
//! ```
//!
//! The event loop is pumped rather than run, so the render loop stays in
//! the caller's hands.

use crate::config::{ContextConfig, GlProfile, WindowConfig};
use crate::error::BootstrapError;
use crate::event::{Event, Key};
use glutin::{
    config::{ConfigTemplateBuilder, GlConfig},
    context::{
        ContextApi, ContextAttributesBuilder, GlProfile as GlutinProfile, NotCurrentGlContext,
        PossiblyCurrentContext, Version,
    },
    display::{GetGlDisplay, GlDisplay},
    prelude::GlSurface,
    surface::{Surface, SurfaceAttributesBuilder, WindowSurface},
};
use glutin_winit::DisplayBuilder;
use log::{error, info};
use raw_window_handle::HasWindowHandle;
use std::ffi::{c_void, CStr};
use std::num::NonZeroU32;
use std::time::Duration;
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window, WindowId},
};

/// Pumps allowed for the toolkit to deliver `resumed` and build the window
const STARTUP_PUMPS: usize = 100;
const STARTUP_PUMP_TIMEOUT: Duration = Duration::from_millis(10);

/// A window with its current GL context.
///
/// Fields drop in order: context, surface, window.
pub struct GlWindow {
    pub context: PossiblyCurrentContext,
    pub surface: Surface<WindowSurface>,
    pub window: Window,
}

/// Convert a winit window event to the unified Event
pub fn event_from_winit(event: &WindowEvent) -> Option<Event> {
    match event {
        WindowEvent::CloseRequested => Some(Event::CloseRequested),
        WindowEvent::Resized(size) => Some(Event::Resized {
            width: size.width,
            height: size.height,
        }),
        WindowEvent::RedrawRequested => Some(Event::Redraw),
        WindowEvent::KeyboardInput { event, .. } => {
            let key = match event.physical_key {
                PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
                _ => Key::Other,
            };
            Some(Event::Key {
                key,
                pressed: event.state == ElementState::Pressed,
            })
        }
        _ => None,
    }
}

/// Winit application handler
///
/// Builds the GL window on the first `resumed` and queues translated
/// window events until the adapter drains them.
pub struct WinitAppHandler {
    window_config: WindowConfig,
    context_config: ContextConfig,
    created: bool,
    /// Filled once by `resumed`, taken by `WinitContext::create`
    pub gl_window: Option<GlWindow>,
    /// Set when `resumed` failed to build the window
    pub error: Option<BootstrapError>,
    pub pending_events: Vec<Event>,
}

impl WinitAppHandler {
    pub fn new(window_config: &WindowConfig, context_config: &ContextConfig) -> Self {
        Self {
            window_config: window_config.clone(),
            context_config: *context_config,
            created: false,
            gl_window: None,
            error: None,
            pending_events: vec![],
        }
    }
}

impl ApplicationHandler for WinitAppHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.created {
            return;
        }
        self.created = true;
        match create_gl_window(event_loop, &self.window_config, &self.context_config) {
            Ok(w) => self.gl_window = Some(w),
            Err(e) => self.error = Some(e),
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(e) = event_from_winit(&event) {
            self.pending_events.push(e);
        }
    }
}

fn create_gl_window(
    event_loop: &ActiveEventLoop,
    wc: &WindowConfig,
    cc: &ContextConfig,
) -> Result<GlWindow, BootstrapError> {
    info!("Creating OpenGL window and context...");

    let mut attributes = Window::default_attributes()
        .with_title(&wc.title)
        .with_inner_size(PhysicalSize::new(wc.width, wc.height));
    if let Some((x, y)) = wc.position {
        attributes = attributes.with_position(PhysicalPosition::new(x, y));
    }

    let template = ConfigTemplateBuilder::new();
    let display_builder = DisplayBuilder::new().with_window_attributes(Some(attributes));
    let (window, gl_config) = display_builder
        .build(event_loop, template, |configs| {
            // find_configs already errors when the platform matches nothing,
            // only EGL/GLX visual filtering can leave this empty
            most_samples(configs, |c| c.num_samples()).expect("no GL config offered")
        })
        .map_err(|e| BootstrapError::Window(e.to_string()))?;
    let window = window.ok_or_else(|| BootstrapError::Window("no window built".to_string()))?;

    let size = window.inner_size();
    info!("Window created - physical: {}x{}", size.width, size.height);

    let raw_window_handle = window
        .window_handle()
        .map_err(|e| BootstrapError::Window(e.to_string()))?
        .as_raw();

    let profile = match cc.profile {
        GlProfile::Core => GlutinProfile::Core,
        GlProfile::Compatibility => GlutinProfile::Compatibility,
    };
    let context_attributes = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(cc.major, cc.minor))))
        .with_profile(profile)
        .build(Some(raw_window_handle));

    let gl_display = gl_config.display();
    let not_current = unsafe {
        gl_display
            .create_context(&gl_config, &context_attributes)
            .map_err(|e| BootstrapError::Context(e.to_string()))?
    };

    let width = NonZeroU32::new(size.width)
        .ok_or_else(|| BootstrapError::Window("zero window width".to_string()))?;
    let height = NonZeroU32::new(size.height)
        .ok_or_else(|| BootstrapError::Window("zero window height".to_string()))?;
    let surface_attributes =
        SurfaceAttributesBuilder::<WindowSurface>::new().build(raw_window_handle, width, height);
    let surface = unsafe {
        gl_display
            .create_window_surface(&gl_config, &surface_attributes)
            .map_err(|e| BootstrapError::Context(e.to_string()))?
    };

    let context = not_current
        .make_current(&surface)
        .map_err(|e| BootstrapError::Context(e.to_string()))?;

    info!(
        "OpenGL {}.{} {:?} context current",
        cc.major, cc.minor, cc.profile
    );
    Ok(GlWindow {
        context,
        surface,
        window,
    })
}

/// Owns the event loop and the GL window made current on this thread.
///
/// The window and context are released before the event loop.
pub struct WinitContext {
    gl_window: GlWindow,
    handler: WinitAppHandler,
    event_loop: EventLoop<()>,
}

impl WinitContext {
    pub fn create(
        window_config: &WindowConfig,
        context_config: &ContextConfig,
    ) -> Result<Self, BootstrapError> {
        let mut event_loop =
            EventLoop::new().map_err(|e| BootstrapError::Window(e.to_string()))?;
        let mut handler = WinitAppHandler::new(window_config, context_config);

        for _ in 0..STARTUP_PUMPS {
            let status = event_loop.pump_app_events(Some(STARTUP_PUMP_TIMEOUT), &mut handler);
            if let Some(e) = handler.error.take() {
                return Err(e);
            }
            if let Some(gl_window) = handler.gl_window.take() {
                return Ok(Self {
                    gl_window,
                    handler,
                    event_loop,
                });
            }
            if let PumpStatus::Exit(code) = status {
                return Err(BootstrapError::Window(format!(
                    "event loop exited during startup ({})",
                    code
                )));
            }
        }
        Err(BootstrapError::Window(
            "window was not created by the event loop".to_string(),
        ))
    }

    /// Pump the toolkit once and drain the translated events.
    /// `None` blocks until something arrives. An exiting event loop is
    /// reported as a close request.
    pub fn pump(&mut self, timeout: Option<Duration>) -> Vec<Event> {
        let status = self.event_loop.pump_app_events(timeout, &mut self.handler);
        let mut events: Vec<Event> = self.handler.pending_events.drain(..).collect();
        if let PumpStatus::Exit(_) = status {
            events.push(Event::CloseRequested);
        }
        events
    }

    /// Present the back buffer. Failures are logged and the frame dropped.
    pub fn swap_buffers(&self) {
        if let Err(e) = self.gl_window.surface.swap_buffers(&self.gl_window.context) {
            error!("Failed to swap buffers: {:?}", e);
        }
    }

    /// Keep the surface in step with the window. Zero sizes are skipped.
    pub fn resize_surface(&self, width: u32, height: u32) {
        if let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
            self.gl_window
                .surface
                .resize(&self.gl_window.context, w, h);
        }
    }

    pub fn get_proc_address(&self, name: &CStr) -> *const c_void {
        self.gl_window.context.display().get_proc_address(name)
    }

    /// Inner size in physical pixels
    pub fn window_size(&self) -> (u32, u32) {
        let size = self.gl_window.window.inner_size();
        (size.width, size.height)
    }
}

/// Resize the surface for every resize event in `events`
pub fn resize_surface_for(ctx: &WinitContext, events: &[Event]) {
    for e in events {
        if let Event::Resized { width, height } = *e {
            ctx.resize_surface(width, height);
        }
    }
}

/// Config with the most multisample buffers, the first one on ties.
/// None only for an empty set.
fn most_samples<T>(configs: impl Iterator<Item = T>, samples: impl Fn(&T) -> u8) -> Option<T> {
    configs.reduce(|accum, config| {
        if samples(&config) > samples(&accum) {
            config
        } else {
            accum
        }
    })
}
