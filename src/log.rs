// gl_triangle
// copyright zipxing@hotmail.com 2022～2025

//! Log module sets up the log4rs file logger, reference
//! https://docs.rs/log4rs
//!
//! Without the `log4rs` feature the `log` macros stay silent.

use log::LevelFilter;

#[cfg(feature = "log4rs")]
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

/// init logs system
///
/// `file_path` is relative to the working directory; missing parent
/// directories are created. Returns a message when the logger could not be
/// installed, so callers can keep running without logs.
#[cfg(feature = "log4rs")]
pub fn init_log(level: LevelFilter, file_path: &str) -> Result<(), String> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}",
        )))
        .build(file_path)
        .map_err(|e| format!("open log file {}: {}", file_path, e))?;
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .map_err(|e| e.to_string())?;
    log4rs::init_config(config).map_err(|e| e.to_string())?;
    Ok(())
}

#[cfg(not(feature = "log4rs"))]
pub fn init_log(level: LevelFilter, _file_path: &str) -> Result<(), String> {
    log::set_max_level(level);
    Ok(())
}
