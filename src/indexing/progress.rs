//! Statistics reporting for refresh passes

use serde::Serialize;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Statistics collected during a refresh pass
#[derive(Debug, Default, Serialize)]
pub struct ScanStats {
    /// Resource folders found and registered
    pub folders_scanned: usize,

    /// Directories skipped because their name is not a valid resource folder
    pub folders_skipped: usize,

    /// Folders dropped because they no longer exist
    pub folders_removed: usize,

    /// Files seen for the first time
    pub files_added: usize,

    /// Files whose content changed since the previous pass
    pub files_updated: usize,

    /// Files skipped because their content hash did not change
    pub files_unchanged: usize,

    /// Files dropped because they no longer exist
    pub files_removed: usize,

    /// Number of files that failed to read or parse
    pub files_failed: usize,

    /// Total number of items across the table after the pass
    pub items_total: usize,

    /// Time elapsed during the pass
    #[serde(skip)]
    pub elapsed: Duration,

    /// Errors encountered (limited to first N errors)
    pub errors: Vec<(PathBuf, String)>,

    #[serde(skip)]
    start_time: Option<Instant>,
}

impl ScanStats {
    /// Create new stats and start timing
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// Stop timing and record elapsed time
    pub fn stop_timing(&mut self) {
        if let Some(start) = self.start_time {
            self.elapsed = start.elapsed();
            self.start_time = None;
        }
    }

    /// Add an error (limited to first 100 errors)
    pub fn add_error(&mut self, path: PathBuf, error: String) {
        if self.errors.len() < 100 {
            self.errors.push((path, error));
        }
        self.files_failed += 1;
    }

    /// Files read and registered in this pass
    pub fn files_processed(&self) -> usize {
        self.files_added + self.files_updated
    }

    /// Display the statistics in a human-readable format
    pub fn display(&self) {
        println!("\nScan Complete:");
        println!(
            "  Folders: {} scanned, {} skipped, {} removed",
            self.folders_scanned, self.folders_skipped, self.folders_removed
        );
        println!(
            "  Files: {} added, {} updated, {} unchanged, {} removed, {} failed",
            self.files_added,
            self.files_updated,
            self.files_unchanged,
            self.files_removed,
            self.files_failed
        );
        println!("  Resource items: {}", self.items_total);
        println!("  Time elapsed: {:.2}s", self.elapsed.as_secs_f64());

        if !self.errors.is_empty() {
            println!("\nErrors (showing first {}):", self.errors.len().min(5));
            for (path, error) in &self.errors[..5.min(self.errors.len())] {
                println!("  {}: {}", path.display(), error);
            }
            if self.errors.len() > 5 {
                println!("  ... and {} more errors", self.errors.len() - 5);
            }
        }
    }
}
