//! Run report - per-file outcomes of one rewrite run

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Outcome of processing a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Fixed,
    Unchanged,
    Failed,
}

/// One processed file and what happened to it
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    pub fn fixed(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            status: FileStatus::Fixed,
            error: None,
        }
    }

    pub fn unchanged(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            status: FileStatus::Unchanged,
            error: None,
        }
    }

    pub fn failed(path: &Path, error: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            status: FileStatus::Failed,
            error: Some(error.into()),
        }
    }
}

/// Summary of a full run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Number of files the selector discovered
    pub discovered: usize,
    pub files: Vec<FileReport>,
}

impl RunReport {
    pub fn new(discovered: usize) -> Self {
        Self {
            discovered,
            files: Vec::new(),
        }
    }

    pub fn record(&mut self, report: FileReport) {
        self.files.push(report);
    }

    pub fn fixed_count(&self) -> usize {
        self.count(FileStatus::Fixed)
    }

    pub fn unchanged_count(&self) -> usize {
        self.count(FileStatus::Unchanged)
    }

    pub fn failed_count(&self) -> usize {
        self.count(FileStatus::Failed)
    }

    fn count(&self, status: FileStatus) -> usize {
        self.files.iter().filter(|f| f.status == status).count()
    }
}
