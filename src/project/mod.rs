//! Project resource table.
//!
//! `ProjectResources` owns every folder, file and item discovered for a
//! project. Files materialize candidate items against a shared borrow of
//! the table (`ResourceFile::resources`); `register` is the only place
//! items are inserted, and it re-checks for duplicates.

mod snapshot;

pub use snapshot::{ItemSnapshot, ProjectSnapshot, SourceSnapshot};

use crate::configuration::FolderConfiguration;
use crate::error::{ResourceError, ResourceResult};
use crate::indexing::{FileInfo, get_utc_timestamp};
use crate::kinds::create_kind;
use crate::resource::{
    AbstractFile, Resource, ResourceFile, ResourceFileKind, ResourceFolder, ResourceItem,
    ResourceValue,
};
use crate::types::{IdCounter, RefreshOutcome, ResourceType};
use crate::{FileId, FolderId};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct ProjectResources {
    folders: BTreeMap<FolderId, Arc<ResourceFolder>>,
    folder_paths: HashMap<PathBuf, FolderId>,
    files: BTreeMap<FileId, ResourceFile>,
    file_paths: HashMap<PathBuf, FileId>,
    file_infos: HashMap<FileId, FileInfo>,
    items: BTreeMap<ResourceType, BTreeMap<String, ResourceItem>>,
    ids: IdCounter,
}

impl ProjectResources {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- folders ----

    /// Register the folder at `path`, or return the existing id if it is
    /// already known.
    ///
    /// A known folder keeps the framework flag it was registered with; asking
    /// for the other flag is logged and otherwise ignored.
    pub fn add_folder(&mut self, path: impl Into<PathBuf>, framework: bool) -> ResourceResult<FolderId> {
        let path = path.into();
        if let Some(&id) = self.folder_paths.get(&path) {
            if let Some(existing) = self.folder(id).filter(|f| f.is_framework() != framework) {
                warn!(
                    "{} is already registered with framework={}, ignoring framework={framework}",
                    path.display(),
                    existing.is_framework()
                );
            }
            return Ok(id);
        }

        // Validate before taking an id so rejected names do not use one up
        let (folder_type, configuration) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(FolderConfiguration::from_folder_name)
            .ok_or_else(|| ResourceError::InvalidFolderName {
                name: path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
            })?;

        let id = self.ids.next_folder_id().ok_or(ResourceError::IdExhausted)?;
        let folder = ResourceFolder::new(id, &path, folder_type, configuration, framework);

        debug!(
            "Added folder {} ({}, config '{}')",
            path.display(),
            folder.folder_type(),
            folder.configuration()
        );
        self.folder_paths.insert(path, id);
        self.folders.insert(id, Arc::new(folder));
        Ok(id)
    }

    pub fn folder(&self, id: FolderId) -> Option<&ResourceFolder> {
        self.folders.get(&id).map(Arc::as_ref)
    }

    /// Shared handle to a folder, for work that outlives a borrow of the
    /// table (parallel parsing during a refresh).
    pub(crate) fn shared_folder(&self, id: FolderId) -> Option<Arc<ResourceFolder>> {
        self.folders.get(&id).cloned()
    }

    pub fn folder_by_path(&self, path: &Path) -> Option<&ResourceFolder> {
        self.folder_paths.get(path).and_then(|id| self.folder(*id))
    }

    pub fn folders(&self) -> impl Iterator<Item = &ResourceFolder> {
        self.folders.values().map(Arc::as_ref)
    }

    /// Remove a folder and every file in it.
    pub fn remove_folder(&mut self, id: FolderId) -> ResourceResult<usize> {
        let folder = self
            .folders
            .remove(&id)
            .ok_or(ResourceError::FolderNotFound { id })?;
        self.folder_paths.remove(folder.path());

        let contained: Vec<FileId> = self
            .files
            .values()
            .filter(|file| file.folder_id() == id)
            .map(ResourceFile::id)
            .collect();
        for file_id in &contained {
            self.remove_file(*file_id)?;
        }
        Ok(contained.len())
    }

    // ---- files ----

    /// Add the file behind `handle` to a folder, reading it as needed.
    ///
    /// If a file with the same path is already known it is replaced and
    /// keeps its id.
    pub fn add_file(&mut self, folder_id: FolderId, handle: Box<dyn AbstractFile>) -> ResourceResult<FileId> {
        let folder = self
            .folders
            .get(&folder_id)
            .cloned()
            .ok_or(ResourceError::FolderNotFound { id: folder_id })?;
        let kind = create_kind(&folder, handle.as_ref())?;
        let info = handle
            .bytes()
            .ok()
            .map(|bytes| FileInfo::new(handle.path().to_path_buf(), &bytes));

        self.put_file(folder_id, handle, kind, info)
            .map(|outcome| outcome.file_id())
    }

    /// Insert a file whose kind has already been built, replacing any file
    /// with the same path, then register its items.
    pub fn put_file(
        &mut self,
        folder_id: FolderId,
        handle: Box<dyn AbstractFile>,
        kind: Box<dyn ResourceFileKind>,
        info: Option<FileInfo>,
    ) -> ResourceResult<RefreshOutcome> {
        let folder = self
            .folders
            .get(&folder_id)
            .cloned()
            .ok_or(ResourceError::FolderNotFound { id: folder_id })?;
        let path = handle.path().to_path_buf();

        let outcome = match self.file_paths.get(&path).copied() {
            Some(existing) => {
                self.remove_file(existing)?;
                RefreshOutcome::Updated(existing)
            }
            None => RefreshOutcome::Added(self.ids.next_file_id().ok_or(ResourceError::IdExhausted)?),
        };
        let id = outcome.file_id();

        let file = ResourceFile::new(id, handle, folder, kind);
        let candidates: Vec<ResourceItem> = file
            .resource_types()
            .into_iter()
            .flat_map(|ty| file.resources(ty, self))
            .collect();

        self.file_paths.insert(path, id);
        self.files.insert(id, file);
        if let Some(info) = info {
            self.file_infos.insert(id, info);
        }
        let registered = self.register(id, candidates);
        debug!("Registered {registered} items for {id}");

        Ok(outcome)
    }

    /// Remove a file and its contributions. Items left without any source
    /// are dropped.
    pub fn remove_file(&mut self, id: FileId) -> ResourceResult<ResourceFile> {
        let file = self.files.remove(&id).ok_or(ResourceError::FileNotFound { id })?;
        self.file_paths.remove(file.file().path());
        self.file_infos.remove(&id);

        for by_name in self.items.values_mut() {
            by_name.retain(|_, item| {
                item.remove_source(id);
                !item.is_orphaned()
            });
        }
        self.items.retain(|_, by_name| !by_name.is_empty());

        Ok(file)
    }

    pub fn file(&self, id: FileId) -> Option<&ResourceFile> {
        self.files.get(&id)
    }

    pub fn file_by_path(&self, path: &Path) -> Option<&ResourceFile> {
        self.file_paths.get(path).and_then(|id| self.files.get(id))
    }

    pub fn file_info(&self, id: FileId) -> Option<&FileInfo> {
        self.file_infos.get(&id)
    }

    /// Record that the file at `path` was looked at again without changes.
    /// Returns false if the path is not tracked.
    pub fn mark_scanned(&mut self, path: &Path) -> bool {
        let Some(id) = self.file_paths.get(path) else {
            return false;
        };
        match self.file_infos.get_mut(id) {
            Some(info) => {
                info.last_scanned_utc = get_utc_timestamp();
                true
            }
            None => false,
        }
    }

    pub fn files(&self) -> impl Iterator<Item = &ResourceFile> {
        self.files.values()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    // ---- items ----

    /// Insert materialized items on behalf of `file_id`.
    ///
    /// Returns how many (item, file) pairs were new. Registering the same
    /// items again is a no-op.
    pub fn register(&mut self, file_id: FileId, items: impl IntoIterator<Item = ResourceItem>) -> usize {
        let mut added = 0;
        for candidate in items {
            let item = self
                .items
                .entry(candidate.resource_type())
                .or_default()
                .entry(candidate.name().to_string())
                .or_insert_with(|| ResourceItem::new(candidate.resource_type(), candidate.name()));
            if item.add_source(file_id) {
                added += 1;
            }
        }
        added
    }

    /// Whether `file_id` is already a source of the item `type/name`.
    pub fn is_registered(&self, file_id: FileId, resource_type: ResourceType, name: &str) -> bool {
        self.find_resource_item(resource_type, name)
            .is_some_and(|item| item.has_source(file_id))
    }

    pub fn find_resource_item(&self, resource_type: ResourceType, name: &str) -> Option<&ResourceItem> {
        self.items.get(&resource_type)?.get(name)
    }

    /// Items of one type, sorted by name.
    pub fn items_of_type(&self, resource_type: ResourceType) -> impl Iterator<Item = &ResourceItem> {
        self.items
            .get(&resource_type)
            .into_iter()
            .flat_map(|by_name| by_name.values())
    }

    /// Types with at least one item.
    pub fn resource_types(&self) -> BTreeSet<ResourceType> {
        self.items.keys().copied().collect()
    }

    pub fn item_count(&self) -> usize {
        self.items.values().map(BTreeMap::len).sum()
    }

    /// Value of `type/name` as declared by each source file, paired with
    /// that file's configuration. No configuration is preferred over
    /// another; picking the best match is up to the caller.
    pub fn values(&self, resource_type: ResourceType, name: &str) -> Vec<(&FolderConfiguration, ResourceValue)> {
        let Some(item) = self.find_resource_item(resource_type, name) else {
            return Vec::new();
        };

        item.sources()
            .iter()
            .filter_map(|id| self.files.get(id))
            .filter_map(|file| {
                file.value(resource_type, name)
                    .map(|value| (file.configuration(), value))
            })
            .collect()
    }

    pub fn snapshot(&self) -> ProjectSnapshot {
        ProjectSnapshot::from_table(self)
    }
}
