// gl_triangle
// copyright zipxing@hotmail.com 2022～2025

use crate::config::ModernConfig;
use crate::error::BootstrapError;
use crate::event::Viewport;
use crate::render::gl::{buffer::StaticGeometry, shader::GlShader, CoreGl};
use crate::render::Render;
use log::info;
use std::rc::Rc;

/// Attribute slot the vertex shader reads `aPos` from
pub const POSITION_ATTRIBUTE: u32 = 0;

/// Clears to a flat colour and draws one triangle per frame.
///
/// Drop releases the geometry (VAO, then VBO) before the program.
pub struct TriangleRender<G: CoreGl> {
    gl: Rc<G>,
    geometry: StaticGeometry<G>,
    shader: GlShader<G>,
    clear_color: [f32; 4],
}

impl<G: CoreGl> TriangleRender<G> {
    pub fn new(gl: Rc<G>, config: &ModernConfig) -> Result<Self, BootstrapError> {
        let shader = GlShader::new(gl.clone(), config.vertex_source, config.fragment_source)?;
        let geometry = StaticGeometry::upload(gl.clone(), &config.vertices, POSITION_ATTRIBUTE)?;
        if config.wireframe {
            info!("wireframe mode on");
            gl.wireframe(true);
        }
        Ok(Self {
            gl,
            geometry,
            shader,
            clear_color: config.clear_color,
        })
    }

    pub fn shader(&self) -> &GlShader<G> {
        &self.shader
    }

    pub fn geometry(&self) -> &StaticGeometry<G> {
        &self.geometry
    }
}

impl<G: CoreGl> Render for TriangleRender<G> {
    fn draw(&mut self) {
        self.gl.clear_color(self.clear_color);
        self.gl.clear_color_buffer();
        self.shader.bind();
        self.geometry.bind();
        self.gl.draw_triangles(0, self.geometry.vertex_count());
    }

    fn resize(&mut self, viewport: Viewport) {
        self.gl
            .viewport(viewport.x, viewport.y, viewport.width, viewport.height);
    }
}
