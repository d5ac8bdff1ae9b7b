// gl_triangle
// copyright zipxing@hotmail.com 2022～2025

use crate::error::BootstrapError;
use crate::render::gl::{CoreGl, VertexLayout};
use log::info;
use std::rc::Rc;

/// Owning vertex array object
pub struct VertexArray<G: CoreGl> {
    gl: Rc<G>,
    id: G::VertexArray,
}

impl<G: CoreGl> VertexArray<G> {
    pub fn new(gl: Rc<G>) -> Result<Self, BootstrapError> {
        let id = gl
            .create_vertex_array()
            .map_err(|e| BootstrapError::Resource(format!("vertex array: {}", e)))?;
        Ok(Self { gl, id })
    }

    pub fn bind(&self) {
        self.gl.bind_vertex_array(Some(self.id));
    }
}

impl<G: CoreGl> Drop for VertexArray<G> {
    fn drop(&mut self) {
        self.gl.delete_vertex_array(self.id);
    }
}

/// Owning array buffer, remembers how many bytes were uploaded
pub struct VertexBuffer<G: CoreGl> {
    gl: Rc<G>,
    id: G::Buffer,
    size: usize,
}

impl<G: CoreGl> VertexBuffer<G> {
    pub fn new(gl: Rc<G>) -> Result<Self, BootstrapError> {
        let id = gl
            .create_buffer()
            .map_err(|e| BootstrapError::Resource(format!("vertex buffer: {}", e)))?;
        Ok(Self { gl, id, size: 0 })
    }

    pub fn bind(&self) {
        self.gl.bind_array_buffer(Some(self.id));
    }

    /// Bind and fill with `data`, STATIC_DRAW
    pub fn upload(&mut self, data: &[u8]) {
        self.bind();
        self.gl.array_buffer_data(data);
        self.size = data.len();
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl<G: CoreGl> Drop for VertexBuffer<G> {
    fn drop(&mut self) {
        self.gl.delete_buffer(self.id);
    }
}

/// Vertex positions uploaded once, recorded in a VAO.
///
/// Field order matters: the VAO is released before the buffer.
pub struct StaticGeometry<G: CoreGl> {
    vao: VertexArray<G>,
    vbo: VertexBuffer<G>,
    vertex_count: i32,
}

impl<G: CoreGl> StaticGeometry<G> {
    /// Creates VAO + VBO, uploads `vertices` and describes them as
    /// attribute `attribute` (3 floats, tightly packed). Both bindings are
    /// cleared afterwards, buffer first.
    pub fn upload(
        gl: Rc<G>,
        vertices: &[[f32; 3]],
        attribute: u32,
    ) -> Result<Self, BootstrapError> {
        let vao = VertexArray::new(gl.clone())?;
        let mut vbo = VertexBuffer::new(gl.clone())?;

        vao.bind();
        vbo.upload(bytemuck::cast_slice(vertices));
        gl.vertex_attrib_pointer(attribute, VertexLayout::packed::<3>());
        gl.enable_vertex_attrib_array(attribute);

        // the attribute keeps its buffer reference, the VAO keeps the rest
        gl.bind_array_buffer(None);
        gl.bind_vertex_array(None);

        info!(
            "static geometry: {} vertices, {} bytes",
            vertices.len(),
            vbo.size()
        );
        Ok(Self {
            vao,
            vbo,
            vertex_count: vertices.len() as i32,
        })
    }

    pub fn bind(&self) {
        self.vao.bind();
    }

    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }

    pub fn byte_size(&self) -> usize {
        self.vbo.size()
    }
}
