// gl_triangle
// copyright zipxing@hotmail.com 2022～2025

/// Fatal setup errors
///
/// Every variant ends the program: the message goes to stdout and `main`
/// exits with a non-zero status. Shader compile and link failures are not
/// errors, they are diagnostics on `GlShader`.
#[derive(Debug, Clone, PartialEq)]
pub enum BootstrapError {
    /// event loop or window could not be created
    Window(String),
    /// no GL config, context or surface could be created or made current
    Context(String),
    /// GL entry points could not be resolved
    Loader(String),
    /// the GL refused to create an object (shader, program, buffer, vertex array)
    Resource(String),
}

impl std::fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BootstrapError::Window(msg) => write!(f, "Failed to create window: {}", msg),
            BootstrapError::Context(msg) => write!(f, "Failed to create GL context: {}", msg),
            BootstrapError::Loader(msg) => write!(f, "Failed to initialize GL loader: {}", msg),
            BootstrapError::Resource(msg) => write!(f, "Failed to create GL object: {}", msg),
        }
    }
}

impl std::error::Error for BootstrapError {}
