#![allow(unexpected_cfgs)] // Silence cfg warnings inside objc macros

#[cfg(target_os = "macos")]
mod macos_main;

use std::process::ExitCode;

use cursor_trail::error::Result;
use tracing::error;

fn main() -> ExitCode {
    cursor_trail::logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "cursor-trail failed to start");
            ExitCode::FAILURE
        }
    }
}

#[cfg(target_os = "macos")]
fn run() -> Result<()> {
    macos_main::run()
}

#[cfg(not(target_os = "macos"))]
fn run() -> Result<()> {
    Err(cursor_trail::error::TrailError::UnsupportedPlatform)
}
