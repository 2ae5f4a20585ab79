//! Refresh passes over a `res/` directory.
//!
//! A pass has three phases:
//! 1. walk the directory and register every valid resource folder,
//! 2. read, hash and parse the files on a rayon pool,
//! 3. feed the parsed files into the project table one at a time, then
//!    drop files and folders that disappeared.
//!
//! Only phase 3 touches the table mutably, so duplicate detection in
//! `ProjectResources::register` never races.

use super::{FileInfo, FileWalker, ScanStats};
use crate::error::{ResourceError, ResourceResult};
use crate::kinds::create_kind;
use crate::project::ProjectResources;
use crate::resource::{AbstractFile, FsFile, ResourceFileKind, ResourceFolder};
use crate::types::RefreshOutcome;
use crate::{FileId, FolderId, Settings};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One file to look at during a pass
struct ScanJob {
    folder: Arc<ResourceFolder>,
    path: PathBuf,
    previous: Option<FileInfo>,
}

/// What phase 2 found out about a file
enum ScanResult {
    Unchanged {
        path: PathBuf,
    },
    Parsed {
        folder_id: FolderId,
        handle: FsFile,
        kind: Box<dyn ResourceFileKind>,
        info: FileInfo,
    },
    Failed {
        path: PathBuf,
        error: ResourceError,
    },
}

#[derive(Debug)]
pub struct ResourceScanner {
    settings: Arc<Settings>,
    walker: FileWalker,
}

impl ResourceScanner {
    pub fn new(settings: Arc<Settings>) -> Self {
        let walker = FileWalker::new(settings.clone());
        Self { settings, walker }
    }

    /// Bring `table` in line with the content of `res_dir`.
    ///
    /// Bad folders and files are logged and counted in the returned stats;
    /// only a missing `res_dir` or an unusable thread pool fail the pass.
    #[must_use = "The scan result should be checked for errors"]
    pub fn refresh(
        &self,
        table: &mut ProjectResources,
        res_dir: impl AsRef<Path>,
        framework: bool,
    ) -> ResourceResult<ScanStats> {
        let res_dir = res_dir.as_ref();
        if !res_dir.is_dir() {
            return Err(ResourceError::FileRead {
                path: res_dir.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "resource directory does not exist",
                ),
            });
        }

        info!("Scanning resources in {}", res_dir.display());
        let mut stats = ScanStats::new();

        // Phase 1: folders
        let mut live_folders = HashSet::new();
        let mut jobs = Vec::new();
        for folder_path in self.walker.resource_folders(res_dir) {
            let folder_id = match table.add_folder(&folder_path, framework) {
                Ok(id) => id,
                Err(e) => {
                    debug!("Skipping {}: {e}", folder_path.display());
                    stats.folders_skipped += 1;
                    continue;
                }
            };
            let Some(folder) = table.shared_folder(folder_id) else {
                continue;
            };
            stats.folders_scanned += 1;
            live_folders.insert(folder_id);

            for path in self.walker.resource_files(&folder_path) {
                let previous = table
                    .file_by_path(&path)
                    .and_then(|file| table.file_info(file.id()))
                    .cloned();
                jobs.push(ScanJob {
                    folder: folder.clone(),
                    path,
                    previous,
                });
            }
        }
        let seen: HashSet<PathBuf> = jobs.iter().map(|job| job.path.clone()).collect();

        // Phase 2: read and parse
        let threads = self.settings.scan.parallel_threads.max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| ResourceError::ConfigError {
                reason: format!("cannot start {threads} scan threads: {e}"),
            })?;
        let results: Vec<ScanResult> =
            pool.install(|| jobs.into_par_iter().map(|job| self.process(job)).collect());

        // Phase 3: register
        for result in results {
            match result {
                ScanResult::Unchanged { path } => {
                    table.mark_scanned(&path);
                    stats.files_unchanged += 1;
                }
                ScanResult::Parsed {
                    folder_id,
                    handle,
                    kind,
                    info,
                } => {
                    let path = handle.path().to_path_buf();
                    match table.put_file(folder_id, Box::new(handle), kind, Some(info)) {
                        Ok(RefreshOutcome::Added(_)) => stats.files_added += 1,
                        Ok(RefreshOutcome::Updated(_)) => stats.files_updated += 1,
                        Err(e) => stats.add_error(path, e.to_string()),
                    }
                }
                ScanResult::Failed { path, error } => {
                    warn!("Failed to process {}: {error}", path.display());
                    // A previous version of the file must not outlive its
                    // now-broken content.
                    if let Some(id) = table.file_by_path(&path).map(|file| file.id()) {
                        table.remove_file(id)?;
                    }
                    stats.add_error(path, error.to_string());
                }
            }
        }

        // Removals
        let stale_folders: Vec<FolderId> = table
            .folders()
            .filter(|folder| folder.path().parent() == Some(res_dir))
            .filter(|folder| !live_folders.contains(&folder.id()))
            .map(|folder| folder.id())
            .collect();
        for id in stale_folders {
            stats.files_removed += table.remove_folder(id)?;
            stats.folders_removed += 1;
        }

        let stale_files: Vec<FileId> = table
            .files()
            .filter(|file| file.folder().path().parent() == Some(res_dir))
            .filter(|file| !seen.contains(file.file().path()))
            .map(|file| file.id())
            .collect();
        for id in stale_files {
            debug!("Removing {id}: no longer on disk");
            table.remove_file(id)?;
            stats.files_removed += 1;
        }

        stats.items_total = table.item_count();
        stats.stop_timing();
        info!(
            "Scanned {} folders, {} files processed, {} items in table",
            stats.folders_scanned,
            stats.files_processed(),
            stats.items_total
        );

        Ok(stats)
    }

    /// Refresh the platform resources configured in `framework.res_dir`.
    ///
    /// Returns `None` when no framework directory is configured.
    pub fn refresh_framework(&self, table: &mut ProjectResources) -> ResourceResult<Option<ScanStats>> {
        match &self.settings.framework.res_dir {
            Some(res_dir) => self.refresh(table, res_dir, true).map(Some),
            None => Ok(None),
        }
    }

    fn process(&self, job: ScanJob) -> ScanResult {
        let handle = FsFile::new(&job.path);
        let bytes = match handle.bytes() {
            Ok(bytes) => bytes,
            Err(source) => {
                return ScanResult::Failed {
                    error: ResourceError::FileRead {
                        path: job.path.clone(),
                        source,
                    },
                    path: job.path,
                };
            }
        };

        let unchanged = job
            .previous
            .as_ref()
            .is_some_and(|previous| !previous.has_changed(&bytes));
        if self.settings.scan.skip_unchanged && unchanged {
            return ScanResult::Unchanged { path: job.path };
        }
        let info = FileInfo::new(job.path.clone(), &bytes);

        match create_kind(&job.folder, &handle) {
            Ok(kind) => ScanResult::Parsed {
                folder_id: job.folder.id(),
                handle,
                kind,
                info,
            },
            Err(error) => ScanResult::Failed {
                path: job.path,
                error,
            },
        }
    }
}
