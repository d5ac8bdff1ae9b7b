// gl_triangle
// copyright zipxing@hotmail.com 2022～2025

//! # Immediate Mode Pipeline
//!
//! Fixed function rendering, one GL call per vertex. The entry points are
//! not part of the core profile, so they are resolved at runtime from a
//! compatibility context into [`ImmediateFns`].

use crate::config::LegacyConfig;
use crate::error::BootstrapError;
use crate::event::Viewport;
use crate::render::Render;
use std::ffi::{c_void, CStr};

/// A vertex as handed to `glVertex2*`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImmediateVertex {
    /// glVertex2f
    Single([f32; 2]),
    /// glVertex2d
    Double([f64; 2]),
}

/// The immediate mode call surface
pub trait LegacyGl {
    fn clear_color_buffer(&self);
    fn color3f(&self, r: f32, g: f32, b: f32);
    fn begin(&self, mode: u32);
    fn vertex2f(&self, x: f32, y: f32);
    fn vertex2d(&self, x: f64, y: f64);
    fn end(&self);
    fn flush(&self);
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
}

type ClearFn = extern "system" fn(u32);
type Color3fFn = extern "system" fn(f32, f32, f32);
type BeginFn = extern "system" fn(u32);
type Vertex2fFn = extern "system" fn(f32, f32);
type Vertex2dFn = extern "system" fn(f64, f64);
type VoidFn = extern "system" fn();
type ViewportFn = extern "system" fn(i32, i32, i32, i32);

/// Legacy entry points resolved from a compatibility profile context.
///
/// Only valid while the context they were loaded from is current.
#[derive(Clone, Copy)]
pub struct ImmediateFns {
    clear: ClearFn,
    color3f: Color3fFn,
    begin: BeginFn,
    vertex2f: Vertex2fFn,
    vertex2d: Vertex2dFn,
    end: VoidFn,
    flush: VoidFn,
    viewport: ViewportFn,
}

fn resolve<F>(loader: &mut F, name: &CStr) -> Result<*const c_void, BootstrapError>
where
    F: FnMut(&CStr) -> *const c_void,
{
    let p = loader(name);
    if p.is_null() {
        return Err(BootstrapError::Loader(format!(
            "missing entry point {}",
            name.to_string_lossy()
        )));
    }
    Ok(p)
}

impl ImmediateFns {
    /// Resolve every entry point through `loader`, typically the context's
    /// `get_proc_address`. Any null pointer is a loader error.
    pub fn load<F>(mut loader: F) -> Result<Self, BootstrapError>
    where
        F: FnMut(&CStr) -> *const c_void,
    {
        // SAFETY: each pointer is non-null and was resolved for the named GL
        // entry point, whose C signature matches the target fn type.
        unsafe {
            Ok(Self {
                clear: std::mem::transmute::<*const c_void, ClearFn>(resolve(
                    &mut loader,
                    c"glClear",
                )?),
                color3f: std::mem::transmute::<*const c_void, Color3fFn>(resolve(
                    &mut loader,
                    c"glColor3f",
                )?),
                begin: std::mem::transmute::<*const c_void, BeginFn>(resolve(
                    &mut loader,
                    c"glBegin",
                )?),
                vertex2f: std::mem::transmute::<*const c_void, Vertex2fFn>(resolve(
                    &mut loader,
                    c"glVertex2f",
                )?),
                vertex2d: std::mem::transmute::<*const c_void, Vertex2dFn>(resolve(
                    &mut loader,
                    c"glVertex2d",
                )?),
                end: std::mem::transmute::<*const c_void, VoidFn>(resolve(
                    &mut loader,
                    c"glEnd",
                )?),
                flush: std::mem::transmute::<*const c_void, VoidFn>(resolve(
                    &mut loader,
                    c"glFlush",
                )?),
                viewport: std::mem::transmute::<*const c_void, ViewportFn>(resolve(
                    &mut loader,
                    c"glViewport",
                )?),
            })
        }
    }
}

impl LegacyGl for ImmediateFns {
    fn clear_color_buffer(&self) {
        (self.clear)(glow::COLOR_BUFFER_BIT)
    }

    fn color3f(&self, r: f32, g: f32, b: f32) {
        (self.color3f)(r, g, b)
    }

    fn begin(&self, mode: u32) {
        (self.begin)(mode)
    }

    fn vertex2f(&self, x: f32, y: f32) {
        (self.vertex2f)(x, y)
    }

    fn vertex2d(&self, x: f64, y: f64) {
        (self.vertex2d)(x, y)
    }

    fn end(&self) {
        (self.end)()
    }

    fn flush(&self) {
        (self.flush)()
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        (self.viewport)(x, y, width, height)
    }
}

/// The display callback: one immediate mode triangle per call
pub struct ImmediateTriangle<L: LegacyGl> {
    gl: L,
    color: [f32; 3],
    vertices: [ImmediateVertex; 3],
}

impl<L: LegacyGl> ImmediateTriangle<L> {
    pub fn new(gl: L, config: &LegacyConfig) -> Self {
        Self {
            gl,
            color: config.color,
            vertices: config.vertices,
        }
    }

    pub fn gl(&self) -> &L {
        &self.gl
    }
}

impl<L: LegacyGl> Render for ImmediateTriangle<L> {
    fn draw(&mut self) {
        let [r, g, b] = self.color;
        self.gl.clear_color_buffer();
        self.gl.color3f(r, g, b);
        self.gl.begin(glow::TRIANGLES);
        for v in &self.vertices {
            match *v {
                ImmediateVertex::Single([x, y]) => self.gl.vertex2f(x, y),
                ImmediateVertex::Double([x, y]) => self.gl.vertex2d(x, y),
            }
        }
        self.gl.end();
        self.gl.flush();
    }

    fn resize(&mut self, viewport: Viewport) {
        self.gl
            .viewport(viewport.x, viewport.y, viewport.width, viewport.height);
    }
}
