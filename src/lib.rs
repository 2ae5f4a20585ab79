/// The main library module for resdex

pub mod config;
pub mod configuration;
pub mod error;
pub mod indexing;
pub mod kinds;
pub mod project;
pub mod resource;
pub mod types;

// Explicit exports for better API clarity
pub use config::Settings;
pub use configuration::{FolderConfiguration, Qualifier, QualifierKind};
pub use error::{ErrorContext, ParseError, ParseResult, ResourceError, ResourceResult};
pub use indexing::{ResourceScanner, ScanStats, calculate_hash};
pub use project::{ProjectResources, ProjectSnapshot};
pub use resource::{
    AbstractFile, FsFile, MemoryFile, Resource, ResourceFile, ResourceFileKind, ResourceFolder,
    ResourceItem, ResourceValue,
};
pub use types::{FileId, FolderId, RefreshOutcome, ResourceFolderType, ResourceType};
