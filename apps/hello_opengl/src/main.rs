// gl_triangle
// copyright zipxing@hotmail.com 2022～2025

//! Immediate mode hello triangle: a 720x720 window at (1,1) showing a red
//! triangle, repainted whenever the window asks for it.

use gl_triangle::{
    log::init_log,
    render::{
        adapter::{run, winit_display_adapter::WinitDisplayAdapter},
        legacy::ImmediateTriangle,
    },
    BootstrapError, LegacyConfig,
};
use log::{error, info};

fn main() {
    // accepted, never used
    let _args: Vec<String> = std::env::args().collect();

    if let Err(e) = init_log(log::LevelFilter::Info, "log/hello_opengl.log") {
        eprintln!("log disabled: {}", e);
    }

    let config = LegacyConfig::default();
    if let Err(e) = start(&config) {
        println!("{}", e);
        error!("{}", e);
        std::process::exit(1);
    }
}

fn start(config: &LegacyConfig) -> Result<(), BootstrapError> {
    let mut adapter = WinitDisplayAdapter::new(&config.window, &config.context)?;
    let mut triangle = ImmediateTriangle::new(adapter.load_immediate()?, config);

    let frames = run(&mut adapter, &mut triangle);
    info!("hello_opengl exit after {} iterations", frames);
    Ok(())
}
