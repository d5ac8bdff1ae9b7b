// gl_triangle
// copyright zipxing@hotmail.com 2022～2025

//! Configuration values handed to the adapters and renderers at startup.
//!
//! Nothing here is global: each program builds its config (usually through
//! `Default`) and passes it down explicitly.
//!
//! # Example
//!
//! ```ignore
//! let config = ModernConfig::default();
//! let mut adapter = WinitGlowAdapter::new(&config.window, &config.context)?;
//! let mut triangle = TriangleRender::new(adapter.gl(), &config)?;
//! run(&mut adapter, &mut triangle);
//! ```

use crate::render::gl::shader_source::{TRIANGLE_FRAGMENT_SRC, TRIANGLE_VERTEX_SRC};
use crate::render::legacy::ImmediateVertex;

/// Requested OpenGL profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlProfile {
    /// core profile, fixed function pipeline removed
    Core,
    /// compatibility profile, immediate mode available
    Compatibility,
}

/// Context request: API version and profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextConfig {
    pub major: u8,
    pub minor: u8,
    pub profile: GlProfile,
}

impl ContextConfig {
    pub fn new(major: u8, minor: u8, profile: GlProfile) -> Self {
        Self {
            major,
            minor,
            profile,
        }
    }
}

/// Window request: title, inner size in physical pixels, optional position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub position: Option<(i32, i32)>,
}

impl WindowConfig {
    pub fn new(title: &str, width: u32, height: u32) -> Self {
        Self {
            title: title.to_string(),
            width,
            height,
            position: None,
        }
    }

    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.position = Some((x, y));
        self
    }
}

/// Everything the modern pipeline program needs
#[derive(Debug, Clone)]
pub struct ModernConfig {
    pub window: WindowConfig,
    pub context: ContextConfig,
    pub vertex_source: &'static str,
    pub fragment_source: &'static str,
    /// triangle in normalized device coordinates
    pub vertices: [[f32; 3]; 3],
    pub clear_color: [f32; 4],
    /// draw polygons as outlines
    pub wireframe: bool,
}

impl Default for ModernConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::new("LearnOpenGL", 800, 600),
            context: ContextConfig::new(3, 3, GlProfile::Core),
            vertex_source: TRIANGLE_VERTEX_SRC,
            fragment_source: TRIANGLE_FRAGMENT_SRC,
            vertices: [
                [-0.5, -0.5, 0.0], // left
                [0.5, -0.5, 0.0],  // right
                [0.0, 0.5, 0.0],   // top
            ],
            clear_color: [0.2, 0.3, 0.3, 1.0],
            wireframe: false,
        }
    }
}

/// Everything the legacy immediate mode program needs
#[derive(Debug, Clone)]
pub struct LegacyConfig {
    pub window: WindowConfig,
    pub context: ContextConfig,
    pub color: [f32; 3],
    pub vertices: [ImmediateVertex; 3],
}

impl Default for LegacyConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::new("hello opengl", 720, 720).with_position(1, 1),
            context: ContextConfig::new(2, 1, GlProfile::Compatibility),
            color: [1.0, 0.0, 0.0],
            vertices: [
                ImmediateVertex::Single([-0.5, -0.5]),
                ImmediateVertex::Double([0.5, 0.5]),
                ImmediateVertex::Single([0.0, 0.0]),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modern_defaults() {
        let c = ModernConfig::default();
        assert_eq!(c.window.title, "LearnOpenGL");
        assert_eq!((c.window.width, c.window.height), (800, 600));
        assert_eq!(c.window.position, None);
        assert_eq!(c.context, ContextConfig::new(3, 3, GlProfile::Core));
        assert_eq!(c.vertices.len(), 3);
        assert!(!c.wireframe);
    }

    #[test]
    fn test_legacy_defaults() {
        let c = LegacyConfig::default();
        assert_eq!(c.window.title, "hello opengl");
        assert_eq!((c.window.width, c.window.height), (720, 720));
        assert_eq!(c.window.position, Some((1, 1)));
        assert_eq!(c.context.profile, GlProfile::Compatibility);
        assert_eq!(c.color, [1.0, 0.0, 0.0]);
    }
}
