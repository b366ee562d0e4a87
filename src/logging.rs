//! Structured logging to a file, so log lines never draw over the TUI.
//! `RECIPEBOX_LOG` takes an `EnvFilter` directive and beats the config level.

use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

use crate::config::Config;

pub const LOG_ENV: &str = "RECIPEBOX_LOG";

pub fn init(config: &Config) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    let file = config.log_path().and_then(|path| {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        OpenOptions::new().create(true).append(true).open(path).ok()
    });

    let builder = fmt().with_env_filter(filter).with_ansi(false);
    let result = match file {
        Some(file) => builder.with_writer(Arc::new(file)).try_init(),
        None => builder.with_writer(io::sink).try_init(),
    };

    if result.is_err() {
        tracing::debug!("Logger already initialised");
    }
}
