//! audioext CLI Library
//!
//! An interactive command-line tool for extracting MP3 clips from local
//! video files by delegating to an external FFmpeg binary.

pub mod cli;
pub mod error;
pub mod extractor;
pub mod launcher;
pub mod prompt;
pub mod scanner;
pub mod utils;

// Re-export commonly used types
pub use error::{ExtractError, ExtractResult};
pub use extractor::{ExtractionOutcome, ExtractionRequest};
pub use scanner::VideoFile;
