//! Resource folders (`res/values-fr`, `res/drawable-hdpi`, ...).

use super::Resource;
use crate::FolderId;
use crate::configuration::FolderConfiguration;
use crate::types::ResourceFolderType;
use std::path::{Path, PathBuf};

/// Immutable description of one resource folder.
///
/// Files refer back to their folder through a shared `Arc<ResourceFolder>`.
/// The descriptor does not own its files; the project table does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFolder {
    id: FolderId,
    path: PathBuf,
    folder_type: ResourceFolderType,
    configuration: FolderConfiguration,
    framework: bool,
}

impl ResourceFolder {
    pub fn new(
        id: FolderId,
        path: impl Into<PathBuf>,
        folder_type: ResourceFolderType,
        configuration: FolderConfiguration,
        framework: bool,
    ) -> Self {
        Self {
            id,
            path: path.into(),
            folder_type,
            configuration,
            framework,
        }
    }

    /// Describe the folder at `path`, deriving type and configuration from
    /// its name. Returns `None` for names that are not resource folders.
    pub fn from_path(id: FolderId, path: impl Into<PathBuf>, framework: bool) -> Option<Self> {
        let path = path.into();
        let name = path.file_name()?.to_str()?;
        let (folder_type, configuration) = FolderConfiguration::from_folder_name(name)?;
        Some(Self::new(id, path, folder_type, configuration, framework))
    }

    pub fn id(&self) -> FolderId {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn folder_type(&self) -> ResourceFolderType {
        self.folder_type
    }

    /// Whether this folder belongs to the platform rather than the project.
    pub fn is_framework(&self) -> bool {
        self.framework
    }
}

impl Resource for ResourceFolder {
    fn configuration(&self) -> &FolderConfiguration {
        &self.configuration
    }
}
