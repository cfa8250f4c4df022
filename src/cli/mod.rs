//! CLI module for audioext
//!
//! This module handles command-line argument parsing and the interactive
//! extraction flow.

use std::path::PathBuf;

use clap::Parser;

pub mod commands;

/// audioext — interactive MP3 extraction
///
/// Lists the video files found in the input folder, prompts for a start
/// time, an end time, and an output name, then delegates the trim to an
/// external FFmpeg binary and relays its diagnostics.
#[derive(Parser, Debug)]
#[command(name = "audioext")]
#[command(about = "Extract MP3 clips from video files with FFmpeg")]
#[command(version)]
pub struct Cli {
    /// Folder scanned for candidate video files
    #[arg(long, default_value = "input")]
    pub input_dir: PathBuf,

    /// Folder the extracted MP3 is written to
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,

    /// External encoder executable, resolved via PATH
    #[arg(long, default_value = "ffmpeg", env = "AUDIOEXT_ENCODER")]
    pub encoder: String,

    /// Logging level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
