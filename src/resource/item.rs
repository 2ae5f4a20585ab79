use crate::FileId;
use crate::types::ResourceType;
use serde::Serialize;

/// A resource known to the project table, keyed by type and name.
///
/// The same resource is usually declared by several files, one per folder
/// configuration (`values/strings.xml`, `values-fr/strings.xml`). Each of
/// those files is a source of the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceItem {
    resource_type: ResourceType,
    name: String,
    sources: Vec<FileId>,
}

impl ResourceItem {
    pub fn new(resource_type: ResourceType, name: impl Into<String>) -> Self {
        Self {
            resource_type,
            name: name.into(),
            sources: Vec::new(),
        }
    }

    /// An item declared by a single file, as produced by materialization.
    pub fn declared_in(resource_type: ResourceType, name: impl Into<String>, file_id: FileId) -> Self {
        Self {
            resource_type,
            name: name.into(),
            sources: vec![file_id],
        }
    }

    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sources(&self) -> &[FileId] {
        &self.sources
    }

    pub fn has_source(&self, file_id: FileId) -> bool {
        self.sources.contains(&file_id)
    }

    /// Returns false if the file was already a source.
    pub fn add_source(&mut self, file_id: FileId) -> bool {
        if self.has_source(file_id) {
            return false;
        }
        self.sources.push(file_id);
        true
    }

    pub fn remove_source(&mut self, file_id: FileId) -> bool {
        let before = self.sources.len();
        self.sources.retain(|&id| id != file_id);
        self.sources.len() != before
    }

    /// An item without sources is no longer declared anywhere.
    pub fn is_orphaned(&self) -> bool {
        self.sources.is_empty()
    }
}
