//! Resource files and the contract every file kind implements.
//!
//! A `ResourceFile` pairs an abstract file handle with the folder it lives
//! in. Everything it knows about configuration and framework status comes
//! from that folder. What the file declares is delegated to a
//! `ResourceFileKind`, chosen from the folder type and file extension when
//! the file is created (see `crate::kinds`).

use super::{AbstractFile, Resource, ResourceFolder, ResourceItem, ResourceValue};
use crate::configuration::FolderConfiguration;
use crate::project::ProjectResources;
use crate::types::ResourceType;
use crate::{FileId, FolderId};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// What a file declares. Implemented once per kind of resource file.
pub trait ResourceFileKind: fmt::Debug + Send + Sync {
    /// Resource types declared by the file. May be empty.
    fn resource_types(&self) -> BTreeSet<ResourceType>;

    /// Whether the file declares at least one resource of `resource_type`.
    ///
    /// Overrides must agree with `resource_types()`.
    fn has_resources(&self, resource_type: ResourceType) -> bool {
        self.resource_types().contains(&resource_type)
    }

    /// Names of the resources of `resource_type` declared by the file.
    fn resource_names(&self, resource_type: ResourceType) -> Vec<&str>;

    /// Value of the resource with the given type and name, `None` if the
    /// file does not declare it.
    fn value(&self, resource_type: ResourceType, name: &str) -> Option<ResourceValue>;
}

/// One file under a project's `res/` directory.
#[derive(Debug)]
pub struct ResourceFile {
    id: FileId,
    file: Box<dyn AbstractFile>,
    folder: Arc<ResourceFolder>,
    kind: Box<dyn ResourceFileKind>,
}

impl ResourceFile {
    pub fn new(
        id: FileId,
        file: Box<dyn AbstractFile>,
        folder: Arc<ResourceFolder>,
        kind: Box<dyn ResourceFileKind>,
    ) -> Self {
        Self {
            id,
            file,
            folder,
            kind,
        }
    }

    pub fn id(&self) -> FileId {
        self.id
    }

    pub fn file(&self) -> &dyn AbstractFile {
        self.file.as_ref()
    }

    pub fn folder(&self) -> &ResourceFolder {
        &self.folder
    }

    pub fn folder_id(&self) -> FolderId {
        self.folder.id()
    }

    /// Whether this is a platform resource; same as the owning folder.
    pub fn is_framework(&self) -> bool {
        self.folder.is_framework()
    }

    pub fn kind(&self) -> &dyn ResourceFileKind {
        self.kind.as_ref()
    }

    pub fn resource_types(&self) -> BTreeSet<ResourceType> {
        self.kind.resource_types()
    }

    pub fn has_resources(&self, resource_type: ResourceType) -> bool {
        self.kind.has_resources(resource_type)
    }

    /// Materialize the items of `resource_type` declared by this file.
    ///
    /// Only items `table` does not already have registered for this file are
    /// returned. Registering them is left to `ProjectResources::register`,
    /// which is the single point where the table is mutated.
    pub fn resources(&self, resource_type: ResourceType, table: &ProjectResources) -> Vec<ResourceItem> {
        self.kind
            .resource_names(resource_type)
            .into_iter()
            .filter(|name| !table.is_registered(self.id, resource_type, name))
            .map(|name| ResourceItem::declared_in(resource_type, name, self.id))
            .collect()
    }

    pub fn value(&self, resource_type: ResourceType, name: &str) -> Option<ResourceValue> {
        self.kind.value(resource_type, name)
    }
}

impl Resource for ResourceFile {
    fn configuration(&self) -> &FolderConfiguration {
        self.folder.configuration()
    }
}

impl fmt::Display for ResourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.file, f)
    }
}
