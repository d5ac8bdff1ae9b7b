// gl_triangle
// copyright zipxing@hotmail.com 2022～2025

//! # OpenGL Core Pipeline
//!
//! Modern, shader based rendering of the hello triangle:
//!
//! ```text
//! ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐
//! │ GlShader         │   │ StaticGeometry   │   │ TriangleRender   │
//! │ compile + link   │──►│ VAO + VBO upload │──►│ clear, draw 3    │
//! └──────────────────┘   └──────────────────┘   └──────────────────┘
//! ```
//!
//! All GL calls go through the [`CoreGl`] trait. It is implemented for
//! `glow::Context`; tests implement it with a recording mock.

/// Shader compilation and program linking
pub mod shader;

/// GLSL shader source code storage
pub mod shader_source;

/// Owning vertex array / vertex buffer handles and the one-shot upload
pub mod buffer;

/// The per-frame triangle renderer
pub mod triangle;

/// Pipeline stage of a shader object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Name used in compile diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            ShaderStage::Vertex => "VERTEX",
            ShaderStage::Fragment => "FRAGMENT",
        }
    }

    pub fn gl_enum(&self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

/// How one float attribute is laid out in the bound array buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    /// floats per vertex for this attribute
    pub components: i32,
    /// bytes between consecutive vertices
    pub stride: i32,
    /// byte offset of the first component
    pub offset: i32,
}

impl VertexLayout {
    /// Tightly packed attribute of `N` floats starting at offset 0
    pub fn packed<const N: usize>() -> Self {
        let stride = (N * std::mem::size_of::<f32>()) as i32;
        Self {
            components: N as i32,
            stride,
            offset: 0,
        }
    }
}

/// The modern pipeline call surface used by this crate.
///
/// Methods mirror the GL entry points one to one. Implementations assume
/// their context is current on the calling thread.
pub trait CoreGl {
    type Shader: Copy;
    type Program: Copy;
    type Buffer: Copy;
    type VertexArray: Copy;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn bind_vertex_array(&self, vao: Option<Self::VertexArray>);
    fn delete_vertex_array(&self, vao: Self::VertexArray);

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>);
    /// Upload `data` into the bound array buffer with STATIC_DRAW usage
    fn array_buffer_data(&self, data: &[u8]);
    fn delete_buffer(&self, buffer: Self::Buffer);

    fn vertex_attrib_pointer(&self, index: u32, layout: VertexLayout);
    fn enable_vertex_attrib_array(&self, index: u32);

    fn clear_color(&self, color: [f32; 4]);
    fn clear_color_buffer(&self);
    fn draw_triangles(&self, first: i32, count: i32);
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    /// Outline (`true`) or filled (`false`) polygons, front and back
    fn wireframe(&self, enabled: bool);

    /// VENDOR, VERSION and SHADING_LANGUAGE_VERSION strings
    fn info_strings(&self) -> [String; 3];
}

impl CoreGl for glow::Context {
    type Shader = glow::Shader;
    type Program = glow::Program;
    type Buffer = glow::Buffer;
    type VertexArray = glow::VertexArray;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String> {
        unsafe { glow::HasContext::create_shader(self, stage.gl_enum()) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { glow::HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { glow::HasContext::compile_shader(self, shader) }
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { glow::HasContext::get_shader_compile_status(self, shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { glow::HasContext::get_shader_info_log(self, shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { glow::HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { glow::HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { glow::HasContext::attach_shader(self, program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { glow::HasContext::link_program(self, program) }
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        unsafe { glow::HasContext::get_program_link_status(self, program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { glow::HasContext::get_program_info_log(self, program) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { glow::HasContext::use_program(self, program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { glow::HasContext::delete_program(self, program) }
    }

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String> {
        unsafe { glow::HasContext::create_vertex_array(self) }
    }

    fn bind_vertex_array(&self, vao: Option<Self::VertexArray>) {
        unsafe { glow::HasContext::bind_vertex_array(self, vao) }
    }

    fn delete_vertex_array(&self, vao: Self::VertexArray) {
        unsafe { glow::HasContext::delete_vertex_array(self, vao) }
    }

    fn create_buffer(&self) -> Result<Self::Buffer, String> {
        unsafe { glow::HasContext::create_buffer(self) }
    }

    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>) {
        unsafe { glow::HasContext::bind_buffer(self, glow::ARRAY_BUFFER, buffer) }
    }

    fn array_buffer_data(&self, data: &[u8]) {
        unsafe {
            glow::HasContext::buffer_data_u8_slice(
                self,
                glow::ARRAY_BUFFER,
                data,
                glow::STATIC_DRAW,
            )
        }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { glow::HasContext::delete_buffer(self, buffer) }
    }

    fn vertex_attrib_pointer(&self, index: u32, layout: VertexLayout) {
        unsafe {
            glow::HasContext::vertex_attrib_pointer_f32(
                self,
                index,
                layout.components,
                glow::FLOAT,
                false,
                layout.stride,
                layout.offset,
            )
        }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { glow::HasContext::enable_vertex_attrib_array(self, index) }
    }

    fn clear_color(&self, color: [f32; 4]) {
        unsafe { glow::HasContext::clear_color(self, color[0], color[1], color[2], color[3]) }
    }

    fn clear_color_buffer(&self) {
        unsafe { glow::HasContext::clear(self, glow::COLOR_BUFFER_BIT) }
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        unsafe { glow::HasContext::draw_arrays(self, glow::TRIANGLES, first, count) }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { glow::HasContext::viewport(self, x, y, width, height) }
    }

    fn wireframe(&self, enabled: bool) {
        let mode = if enabled { glow::LINE } else { glow::FILL };
        unsafe { glow::HasContext::polygon_mode(self, glow::FRONT_AND_BACK, mode) }
    }

    fn info_strings(&self) -> [String; 3] {
        unsafe {
            [
                glow::HasContext::get_parameter_string(self, glow::VENDOR),
                glow::HasContext::get_parameter_string(self, glow::VERSION),
                glow::HasContext::get_parameter_string(self, glow::SHADING_LANGUAGE_VERSION),
            ]
        }
    }
}
