//! Command implementation
//!
//! One pass, no retries: list files, select one, parse the times, invoke
//! the encoder, report the outcome.

use std::io;

use anyhow::Result;
use tracing::info;

use crate::cli::Cli;
use crate::extractor::{run_extraction, ExtractionOutcome, ExtractionRequest};
use crate::prompt::Prompter;
use crate::scanner::{ensure_folder, scan_videos};
use crate::utils::time::parse_time;

/// How one interactive run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Extraction finished and the encoder exited cleanly
    Completed,
    /// The input folder held no recognized video files
    NoFiles,
    /// The encoder ran but exited with a non-zero status
    EncoderFailed,
}

/// Run one interactive extraction pass
pub fn run(cli: &Cli) -> Result<RunStatus> {
    ensure_folder(&cli.input_dir);

    let files = scan_videos(&cli.input_dir)?;
    if files.is_empty() {
        println!("Could not find any video files in the input folder. Please add video files.");
        return Ok(RunStatus::NoFiles);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    prompter.print_files(&files)?;

    let index = prompter.select_file(files.len())?;
    let selected = &files[index];
    info!("Selected '{}'", selected.name);

    let start = prompter.prompt("Start Time: ")?;
    let end = prompter.prompt("End Time: ")?;
    let name = prompter.prompt("Filename: ")?;
    drop(prompter);

    let start_seconds = parse_time(&start)?;
    let end_seconds = parse_time(&end)?;

    ensure_folder(&cli.output_dir);

    let request = ExtractionRequest::new(
        cli.input_dir.join(&selected.name),
        cli.output_dir.join(format!("{}.mp3", name)),
        start_seconds,
        end_seconds,
    )?;
    info!(
        "Extracting {}s from '{}' starting at {}s",
        request.duration_seconds,
        request.input_path.display(),
        request.start_seconds
    );

    match run_extraction(&cli.encoder, &request)? {
        ExtractionOutcome::Success => {
            println!("Audio extraction successful!");
            Ok(RunStatus::Completed)
        }
        ExtractionOutcome::Failure => {
            println!("Audio extraction failed!");
            Ok(RunStatus::EncoderFailed)
        }
    }
}
