//! Abstract file handles.
//!
//! Resource files are read through `AbstractFile` so the same model works
//! for files on disk and for unsaved editor buffers.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

pub trait AbstractFile: fmt::Display + fmt::Debug + Send + Sync {
    /// Location of the file; used as its identity in the project table.
    fn path(&self) -> &Path;

    /// Read the whole file as UTF-8 text.
    fn contents(&self) -> io::Result<String>;

    fn exists(&self) -> bool;

    /// Raw bytes, used for change detection of binary resources.
    fn bytes(&self) -> io::Result<Vec<u8>> {
        self.contents().map(String::into_bytes)
    }

    /// File name including extensions (`icon.9.png`).
    fn name(&self) -> &str {
        self.path()
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }
}

/// A file on the local file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsFile {
    path: PathBuf,
}

impl FsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AbstractFile for FsFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn contents(&self) -> io::Result<String> {
        std::fs::read_to_string(&self.path)
    }

    fn bytes(&self) -> io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl fmt::Display for FsFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// A file whose content lives in memory, such as an unsaved editor buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryFile {
    path: PathBuf,
    content: String,
}

impl MemoryFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

impl AbstractFile for MemoryFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn contents(&self) -> io::Result<String> {
        Ok(self.content.clone())
    }

    fn exists(&self) -> bool {
        true
    }
}

impl fmt::Display for MemoryFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
