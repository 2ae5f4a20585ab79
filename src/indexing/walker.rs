//! File system walker for discovering resource folders and files
//!
//! A `res/` directory is two levels deep: resource folders directly below
//! it, resource files directly inside those. Anything nested deeper is not
//! a resource and is never visited.
//!
//! The walker supports:
//! - .gitignore rules
//! - `.resdexignore` files with gitignore syntax
//! - Hidden file handling

use crate::Settings;
use crate::configuration::FolderConfiguration;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Name of the custom ignore file honored in resource directories
pub const IGNORE_FILE_NAME: &str = ".resdexignore";

/// Walks resource directories
#[derive(Debug)]
pub struct FileWalker {
    settings: Arc<Settings>,
}

impl FileWalker {
    /// Create a new file walker with the given settings
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    fn builder(&self, root: &Path) -> WalkBuilder {
        let mut builder = WalkBuilder::new(root);

        builder
            .hidden(self.settings.scan.ignore_hidden)
            .git_ignore(true) // Respect .gitignore files
            .git_global(false) // Global excludes are about sources, not resources
            .git_exclude(true) // Respect .git/info/exclude
            .follow_links(self.settings.scan.follow_links)
            .max_depth(Some(1)) // Direct children only
            .require_git(false) // Allow gitignore to work in non-git directories
            .sort_by_file_name(|a, b| a.cmp(b));

        builder.add_custom_ignore_filename(IGNORE_FILE_NAME);
        builder
    }

    /// Directories directly below `res_dir`, in name order.
    ///
    /// Names are not validated here; the project table decides which of
    /// them are resource folders.
    pub fn resource_folders(&self, res_dir: &Path) -> Vec<PathBuf> {
        self.builder(res_dir)
            .build()
            .filter_map(Result::ok) // Skip entries we can't access
            .filter(|entry| entry.depth() == 1)
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_dir()))
            .map(|entry| entry.into_path())
            .collect()
    }

    /// Files directly inside a resource folder, in name order.
    pub fn resource_files(&self, folder: &Path) -> Vec<PathBuf> {
        self.builder(folder)
            .build()
            .filter_map(Result::ok)
            .filter(|entry| entry.depth() == 1)
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .filter(|entry| {
                // Editor swap files and OS metadata are never resources
                !self.settings.scan.ignore_hidden
                    || !entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| name.starts_with('.'))
            })
            .map(|entry| entry.into_path())
            .collect()
    }

    /// Count files that a scan of `res_dir` would look at (useful for dry runs)
    ///
    /// Folders whose names are not valid resource folder names are left out,
    /// the same way a scan skips them.
    pub fn count_files(&self, res_dir: &Path) -> usize {
        self.resource_folders(res_dir)
            .iter()
            .filter(|folder| {
                folder
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| FolderConfiguration::from_folder_name(name).is_some())
            })
            .map(|folder| self.resource_files(folder).len())
            .sum()
    }
}
