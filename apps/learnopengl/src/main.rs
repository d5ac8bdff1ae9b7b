// gl_triangle
// copyright zipxing@hotmail.com 2022～2025

//! Core profile hello triangle: an 800x600 window, one shader program,
//! one VBO + VAO, redrawn every frame until Escape or the close button.

use gl_triangle::{
    log::init_log,
    render::{
        adapter::{run, winit_glow_adapter::WinitGlowAdapter},
        gl::triangle::TriangleRender,
    },
    BootstrapError, ModernConfig,
};
use log::{error, info};

fn main() {
    if let Err(e) = init_log(log::LevelFilter::Info, "log/learnopengl.log") {
        eprintln!("log disabled: {}", e);
    }

    let config = ModernConfig::default();
    if let Err(e) = start(&config) {
        println!("{}", e);
        error!("{}", e);
        std::process::exit(-1);
    }
}

fn start(config: &ModernConfig) -> Result<(), BootstrapError> {
    let mut adapter = WinitGlowAdapter::new(&config.window, &config.context)?;
    let mut triangle = TriangleRender::new(adapter.gl(), config)?;

    let frames = run(&mut adapter, &mut triangle);
    info!("learnopengl exit after {} frames", frames);

    // GL objects first, then the context they live in
    drop(triangle);
    drop(adapter);
    Ok(())
}
