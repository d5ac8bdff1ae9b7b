// gl_triangle
// copyright zipxing@hotmail.com 2022～2025

//! gl_triangle draws a single triangle with OpenGL, twice over.
//!
//! Modern Mode (apps/learnopengl): a 3.3 core-profile context, GLSL shaders
//! compiled from literal sources, a static vertex buffer behind a vertex
//! array object, one `draw_arrays` per frame.
//!
//! Legacy Mode (apps/hello_opengl): a compatibility context and an
//! immediate-mode display callback (begin / vertex / end / flush), repainted
//! whenever the window asks for it.
//!
//! Both programs run through the same [`render::adapter::Adapter`] trait, so
//! the polling loop of the modern program and the callback-style loop of the
//! legacy program share one driver: [`render::adapter::run`].
//!
//! The GPU is reached through two small traits, [`render::gl::CoreGl`] and
//! [`render::legacy::LegacyGl`]. `glow::Context` and the loaded legacy entry
//! points implement them for real windows; tests implement them with
//! recording mocks.

/// window, context and scene configuration values
pub mod config;

/// fatal setup errors
pub mod error;

/// toolkit independent window events and window state
pub mod event;

/// log
pub mod log;

/// Render module.
/// adapter: render loop driver interface (winit polling, winit display callback).
/// gl: modern pipeline, shaders, static geometry and the triangle frame.
/// legacy: immediate mode entry points and the display callback triangle.
pub mod render;

pub use config::{ContextConfig, GlProfile, LegacyConfig, ModernConfig, WindowConfig};
pub use error::BootstrapError;
