//! Error types for the resource model
//!
//! This module provides structured error types using thiserror for better
//! error handling and actionable error messages.

use crate::{FileId, FolderId};
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for resource scanning and table operations
#[derive(Error, Debug)]
pub enum ResourceError {
    /// File system errors
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Content errors
    #[error("Failed to parse resource file '{path}': {source}")]
    Parse { path: PathBuf, source: ParseError },

    #[error("File '{path}' is not a resource of folder type '{folder_type}'")]
    UnsupportedFile { path: PathBuf, folder_type: String },

    #[error("'{name}' is not a valid resource folder name")]
    InvalidFolderName { name: String },

    /// Lookup errors
    #[error("Folder ID {id:?} not found. The folder may have been removed by a refresh.")]
    FolderNotFound { id: FolderId },

    #[error("File ID {id:?} not found. The file may have been removed by a refresh.")]
    FileNotFound { id: FileId },

    /// Table state errors
    #[error("Failed to create ID: maximum file or folder count reached")]
    IdExhausted,

    /// Configuration errors
    #[error("Invalid configuration: {reason}")]
    ConfigError { reason: String },

    /// Failures from outside the resource model (serializers and the like)
    /// that carry only a message
    #[error("{0}")]
    General(String),
}

impl ResourceError {
    /// Get a stable status code for this error type.
    ///
    /// Returns a string identifier that can be used in JSON responses
    /// for programmatic error handling.
    pub fn status_code(&self) -> String {
        match self {
            Self::FileRead { .. } => "FILE_READ_ERROR",
            Self::FileWrite { .. } => "FILE_WRITE_ERROR",
            Self::Parse { .. } => "PARSE_ERROR",
            Self::UnsupportedFile { .. } => "UNSUPPORTED_FILE",
            Self::InvalidFolderName { .. } => "INVALID_FOLDER_NAME",
            Self::FolderNotFound { .. } => "FOLDER_NOT_FOUND",
            Self::FileNotFound { .. } => "FILE_NOT_FOUND",
            Self::IdExhausted => "ID_EXHAUSTED",
            Self::ConfigError { .. } => "CONFIG_ERROR",
            Self::General(_) => "GENERAL_ERROR",
        }
        .to_string()
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::FileRead { .. } => vec![
                "Check that the file exists and you have read permissions",
                "Ensure the file is not locked by another process",
            ],
            Self::Parse { .. } => vec![
                "Fix the XML in the reported file; the rest of the project was still scanned",
                "Values files must have a <resources> root element",
            ],
            Self::InvalidFolderName { .. } => vec![
                "Qualifiers must follow the Android order, e.g. values-en-rUS-land-hdpi-v21",
                "Folders with unknown qualifiers are ignored by the build tools as well",
            ],
            Self::FolderNotFound { .. } | Self::FileNotFound { .. } => {
                vec!["Run 'resdex scan' again to rebuild the table"]
            }
            Self::ConfigError { .. } => {
                vec!["Run 'resdex init --force' to regenerate .resdex/settings.toml"]
            }
            _ => vec![],
        }
    }
}

/// Errors found in resource file content
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed XML attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("Expected <{expected}> root element, found <{found}>")]
    MissingRoot { expected: String, found: String },

    #[error("Found {found} after the <{root}> root element was closed")]
    ContentOutsideRoot { root: String, found: String },

    #[error("<{element}> is missing the '{attribute}' attribute")]
    MissingAttribute { element: String, attribute: String },

    #[error("Unknown resource type '{0}'")]
    UnknownResourceType(String),
}

/// Result type alias for resource operations
pub type ResourceResult<T> = Result<T, ResourceError>;

/// Result type alias for parse operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Helper trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add context with a path
    fn with_path(self, path: &std::path::Path) -> Result<T, ResourceError>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_path(self, path: &std::path::Path) -> Result<T, ResourceError> {
        self.map_err(|e| {
            ResourceError::General(format!("Error processing '{}': {}", path.display(), e))
        })
    }
}
