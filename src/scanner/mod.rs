//! Input folder scanning and folder initialization

use std::path::Path;

use tracing::warn;
use walkdir::WalkDir;

use crate::error::ExtractResult;

/// Video container extensions recognized in the input folder
pub const ACCEPTED_EXTENSIONS: &[&str] = &[
    ".mp4", ".avi", ".mkv", ".mov", ".wmv", ".flv", ".3gp", ".webm", ".ogg",
];

/// A candidate video file discovered in the input folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFile {
    /// File name relative to the input folder
    pub name: String,
}

/// List video files directly inside `dir`.
///
/// Non-recursive; only regular files whose name ends with one of the
/// accepted extensions (case-insensitive) are returned, sorted by name
/// for a stable display order. A missing directory yields an empty list.
pub fn scan_videos(dir: &Path) -> ExtractResult<Vec<VideoFile>> {
    let mut files: Vec<VideoFile> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            is_accepted(&name).then_some(VideoFile { name })
        })
        .collect();

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

/// Check a file name against the accepted extension list
fn is_accepted(name: &str) -> bool {
    let lower = name.to_lowercase();
    ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Ensure `dir` exists, creating it (and any missing parents) if absent.
///
/// Idempotent. Creation failure is reported but not fatal; a later read
/// or write into the missing path surfaces its own error.
pub fn ensure_folder(dir: &Path) {
    if dir.exists() {
        return;
    }

    match std::fs::create_dir_all(dir) {
        Ok(()) => println!("Created '{}' folder.", dir.display()),
        Err(e) => warn!("Failed to create '{}' folder: {}", dir.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"stub").unwrap();
    }

    #[test]
    fn accepts_every_known_extension() {
        for ext in ACCEPTED_EXTENSIONS {
            assert!(is_accepted(&format!("clip{}", ext)));
            assert!(is_accepted(&format!("clip{}", ext.to_uppercase())));
        }
    }

    #[test]
    fn rejects_other_extensions() {
        assert!(!is_accepted("notes.txt"));
        assert!(!is_accepted("clip.mp3"));
        assert!(!is_accepted("clip"));
    }

    #[test]
    fn scan_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "b.mkv");
        touch(dir.path(), "a.MP4");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "c.webm");

        let files = scan_videos(dir.path()).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.MP4", "b.mkv", "c.webm"]);
    }

    #[test]
    fn scan_ignores_subdirectories() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("nested.mp4")).unwrap();
        touch(&dir.path().join("nested.mp4"), "inner.mp4");

        assert!(scan_videos(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn scan_of_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(scan_videos(&dir.path().join("absent")).unwrap().is_empty());
    }

    #[test]
    fn ensure_folder_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("input");

        ensure_folder(&target);
        assert!(target.is_dir());

        ensure_folder(&target);
        assert!(target.is_dir());
    }
}
