//! Test-suite parity between the original and the ported runtime.
//!
//! The source suite declares tests as tagged methods, the target suite
//! registers them by name. A source test counts as ported when a target test
//! with the same name exists, whatever its tag.

pub mod patterns;
pub mod tag;

use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::config::ParityConfig;
use crate::error::{IoError, ParityError, Result};

pub use patterns::{
    extract_source_tests, extract_target_tests, strip_whitespace, SourceTest,
    SOURCE_TEST_PATTERN, TARGET_TEST_PATTERN,
};
pub use tag::Tag;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParityReport {
    /// Distinct tags in order of first appearance, excluded tag included.
    pub tags: Vec<Tag>,
    /// Unique names of non-excluded source tests.
    pub total: usize,
    /// Source records carrying a resolved tag.
    pub marked: usize,
    /// Unique target names that are also countable source names.
    pub done: usize,
    pub error_tests: Vec<String>,
    pub progress: String,
    #[serde(skip)]
    pub undone: Vec<String>,
}

impl ParityReport {
    pub fn compute(
        source: &[SourceTest],
        target: &[String],
    ) -> std::result::Result<Self, ParityError> {
        let mut tags: Vec<Tag> = Vec::new();
        for test in source {
            if !tags.contains(&test.tag) {
                tags.push(test.tag.clone());
            }
        }

        let countable: HashSet<&str> = source
            .iter()
            .filter(|t| !t.tag.is_excluded())
            .map(|t| t.name.as_str())
            .collect();

        let total = countable.len();
        if total == 0 {
            return Err(ParityError::EmptySourceSuite);
        }

        let marked = source.iter().filter(|t| t.tag.is_resolved()).count();

        let error_tests = source
            .iter()
            .filter(|t| t.tag == Tag::Error)
            .map(|t| t.name.clone())
            .collect();

        let ported: HashSet<&str> = target.iter().map(String::as_str).collect();
        let done = ported.intersection(&countable).count();

        let mut seen = HashSet::new();
        let undone = source
            .iter()
            .filter(|t| !t.tag.is_excluded())
            .filter(|t| !ported.contains(t.name.as_str()))
            .filter(|t| seen.insert(t.name.as_str()))
            .map(|t| t.name.clone())
            .collect();

        Ok(Self {
            tags,
            total,
            marked,
            done,
            error_tests,
            progress: format_progress(done, total),
            undone,
        })
    }

    /// Whole percentage of ported tests, rounded down.
    pub fn percent(&self) -> usize {
        percent(self.done, self.total)
    }
}

fn percent(done: usize, total: usize) -> usize {
    done * 100 / total
}

fn format_progress(done: usize, total: usize) -> String {
    format!("{done} / {total} ({}%)", percent(done, total))
}

pub fn run(config: &ParityConfig) -> Result<ParityReport> {
    let source = read_stripped(&config.source_suite)?;
    let target = read_stripped(&config.target_suite)?;

    let source_tests = extract_source_tests(&source);
    let target_tests = extract_target_tests(&target);
    debug!(
        "Extracted {} source tests from {} and {} target tests from {}",
        source_tests.len(),
        config.source_suite.display(),
        target_tests.len(),
        config.target_suite.display()
    );

    let report = ParityReport::compute(&source_tests, &target_tests)?;
    info!("Ported {}", report.progress);
    Ok(report)
}

fn read_stripped(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| IoError::read_error(path, e))?;
    Ok(strip_whitespace(&content))
}
