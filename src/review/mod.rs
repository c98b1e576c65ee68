//! Review-status scanning.
//!
//! Walks a source tree and reports which files open with the review marker.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};
use walkdir::WalkDir;

use crate::config::ReviewConfig;
use crate::error::{IoError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub reviewed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReviewReport {
    pub files: Vec<FileRecord>,
    pub reviewed: usize,
    pub total: usize,
}

impl ReviewReport {
    fn push(&mut self, record: FileRecord) {
        self.total += 1;
        if record.reviewed {
            self.reviewed += 1;
        }
        self.files.push(record);
    }
}

/// Prefix check; a marker anywhere past the first byte does not count.
pub fn is_reviewed(content: &str, marker: &str) -> bool {
    content.starts_with(marker)
}

pub fn scan(config: &ReviewConfig) -> Result<ReviewReport> {
    let root = config.root.as_path();
    if !root.exists() {
        return Err(IoError::directory_not_found(root).into());
    }
    if !root.is_dir() {
        return Err(IoError::not_a_directory(root).into());
    }

    info!("Scanning {} for .{} files", root.display(), config.extension);

    let mut report = ReviewReport::default();
    // Link loops surface as walk errors and abort the scan.
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| IoError::walk_error(root, e))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !is_candidate(path, config) {
            trace!("Skipping {}", path.display());
            continue;
        }

        let content = fs::read_to_string(path).map_err(|e| IoError::read_error(path, e))?;
        let reviewed = is_reviewed(&content, &config.marker);
        debug!(reviewed, "Checked {}", path.display());

        report.push(FileRecord {
            path: path.to_path_buf(),
            reviewed,
        });
    }

    info!("Reviewed {}/{} files", report.reviewed, report.total);
    Ok(report)
}

fn is_candidate(path: &Path, config: &ReviewConfig) -> bool {
    // Suffix match, so a file named just `.dart` still counts.
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    let suffix = format!(".{}", config.extension);
    name.ends_with(&suffix) && !config.excluded_files.iter().any(|excluded| excluded == name)
}
