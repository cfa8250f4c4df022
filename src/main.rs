//! audioext CLI
//!
//! An interactive command-line tool for extracting MP3 clips from local
//! video files. All media processing is delegated to an external FFmpeg
//! binary; this program only gathers the inputs, builds the invocation,
//! and relays the encoder's diagnostics.
//!
//! # Usage
//!
//! ```bash
//! audioext
//! audioext --input-dir videos --output-dir clips
//! audioext --encoder /opt/ffmpeg/bin/ffmpeg
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use audioext_cli::cli::commands::{self, RunStatus};
use audioext_cli::cli::Cli;
use audioext_cli::launcher;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; user-facing prompts and relayed encoder lines
    // own stdout, so operational events go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone())),
        )
        .with_writer(std::io::stderr)
        .init();

    // Double-click launches on Windows get a fresh terminal window.
    if launcher::relaunch_in_terminal()? {
        return Ok(());
    }

    info!("Starting audioext");

    let status = commands::run(&cli)?;
    if status == RunStatus::EncoderFailed {
        std::process::exit(1);
    }

    info!("audioext completed");
    Ok(())
}
