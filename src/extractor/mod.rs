//! Encoder invocation and output relay
//!
//! All actual media processing happens in an external FFmpeg process.
//! This module builds the argument vector, spawns the encoder, relays
//! its stderr diagnostics line by line, and maps the exit status to an
//! outcome.

use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::error::{ExtractError, ExtractResult};

/// One audio extraction job, fully resolved from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRequest {
    /// Source video file
    pub input_path: PathBuf,
    /// Seek offset before reading, in seconds
    pub start_seconds: u32,
    /// Length of the extracted clip, in seconds
    pub duration_seconds: u32,
    /// Destination MP3 file
    pub output_path: PathBuf,
}

impl ExtractionRequest {
    /// Build a request from parsed start and end times.
    ///
    /// An end at or before the start is rejected here rather than handed
    /// to the encoder as a non-positive duration.
    pub fn new(
        input_path: PathBuf,
        output_path: PathBuf,
        start_seconds: u32,
        end_seconds: u32,
    ) -> ExtractResult<Self> {
        if end_seconds <= start_seconds {
            return Err(ExtractError::InvalidRange {
                start: start_seconds,
                end: end_seconds,
            });
        }

        Ok(Self {
            input_path,
            start_seconds,
            duration_seconds: end_seconds - start_seconds,
            output_path,
        })
    }

    /// Encoder argument vector, fixed order: seek, input, no video,
    /// MP3 encode, duration, output path
    pub fn encoder_args(&self) -> Vec<String> {
        vec![
            "-ss".to_string(),
            self.start_seconds.to_string(),
            "-i".to_string(),
            self.input_path.display().to_string(),
            "-vn".to_string(),
            "-acodec".to_string(),
            "libmp3lame".to_string(),
            "-t".to_string(),
            self.duration_seconds.to_string(),
            self.output_path.display().to_string(),
        ]
    }
}

/// Outcome of one encoder run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// Encoder exited with status 0
    Success,
    /// Encoder exited with any non-zero status
    Failure,
}

/// Run the encoder for `request`, echoing its diagnostic lines to stdout.
///
/// Blocks until the encoder terminates. The stderr relay is the only
/// progress indication the tool offers. A launch failure (encoder not on
/// PATH) is fatal; a non-zero exit is a reported `Failure`, not an error
/// of this program.
pub fn run_extraction(
    encoder: &str,
    request: &ExtractionRequest,
) -> ExtractResult<ExtractionOutcome> {
    let args = request.encoder_args();
    debug!("Encoder command: {} {}", encoder, args.join(" "));

    let mut child = Command::new(encoder)
        .args(&args)
        .stdin(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| ExtractError::EncoderLaunch {
            encoder: encoder.to_string(),
            source,
        })?;

    // FFmpeg logs on stderr. Drain it fully before waiting so the child
    // never blocks on a full pipe; a read error just ends the relay and
    // the wait below still reaps the process.
    if let Some(stderr) = child.stderr.take() {
        let reader = BufReader::new(stderr);
        for line in reader.lines() {
            match line {
                Ok(line) => println!("{}", line),
                Err(_) => break,
            }
        }
    }

    let status = child.wait()?;
    if status.success() {
        info!("Encoder exited cleanly");
        Ok(ExtractionOutcome::Success)
    } else {
        info!("Encoder exited with {}", status);
        Ok(ExtractionOutcome::Failure)
    }
}
