// gl_triangle
// copyright zipxing@hotmail.com 2022～2025

use crate::error::BootstrapError;
use crate::render::gl::{CoreGl, ShaderStage};
use log::{error, info};
use std::rc::Rc;

/// A linked shader program, deleted on drop.
///
/// Compile and link failures do not stop the build: each one is printed,
/// logged and kept in `diagnostics`, and the (possibly unusable) program is
/// returned anyway.
pub struct GlShader<G: CoreGl> {
    gl: Rc<G>,
    program: G::Program,
    diagnostics: Vec<String>,
}

impl<G: CoreGl> GlShader<G> {
    pub fn new(
        gl: Rc<G>,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, BootstrapError> {
        let mut diagnostics = vec![];

        let vertex_shader =
            compile_stage(&*gl, ShaderStage::Vertex, vertex_source, &mut diagnostics)?;
        let fragment_shader =
            match compile_stage(&*gl, ShaderStage::Fragment, fragment_source, &mut diagnostics) {
                Ok(s) => s,
                Err(e) => {
                    gl.delete_shader(vertex_shader);
                    return Err(e);
                }
            };

        let program = match gl.create_program() {
            Ok(p) => p,
            Err(e) => {
                gl.delete_shader(vertex_shader);
                gl.delete_shader(fragment_shader);
                return Err(BootstrapError::Resource(format!("program: {}", e)));
            }
        };
        gl.attach_shader(program, vertex_shader);
        gl.attach_shader(program, fragment_shader);
        gl.link_program(program);
        if !gl.program_link_status(program) {
            report(
                format!(
                    "ERROR::SHADER::PROGRAM::LINKING_FAILED\n{}",
                    gl.program_info_log(program)
                ),
                &mut diagnostics,
            );
        }

        // the program keeps what it needs
        gl.delete_shader(vertex_shader);
        gl.delete_shader(fragment_shader);

        if diagnostics.is_empty() {
            info!("shader program built");
        }

        Ok(Self {
            gl,
            program,
            diagnostics,
        })
    }

    pub fn bind(&self) {
        self.gl.use_program(Some(self.program));
    }

    pub fn get_program(&self) -> G::Program {
        self.program
    }

    /// Compile / link logs collected while building, empty on success
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }
}

impl<G: CoreGl> Drop for GlShader<G> {
    fn drop(&mut self) {
        self.gl.delete_program(self.program);
    }
}

fn compile_stage<G: CoreGl>(
    gl: &G,
    stage: ShaderStage,
    source: &str,
    diagnostics: &mut Vec<String>,
) -> Result<G::Shader, BootstrapError> {
    let shader = gl
        .create_shader(stage)
        .map_err(|e| BootstrapError::Resource(format!("{} shader: {}", stage.label(), e)))?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);
    if !gl.shader_compile_status(shader) {
        report(
            format!(
                "ERROR::SHADER::{}::COMPILATION_FAILED\n{}",
                stage.label(),
                gl.shader_info_log(shader)
            ),
            diagnostics,
        );
    }
    Ok(shader)
}

fn report(msg: String, diagnostics: &mut Vec<String>) {
    println!("{}", msg);
    error!("{}", msg);
    diagnostics.push(msg);
}
