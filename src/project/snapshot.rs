//! Serializable view of the project table, used for `--json` output.

use super::ProjectResources;
use crate::error::{ErrorContext, ResourceError, ResourceResult};
use crate::resource::Resource;
use crate::types::ResourceType;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct ProjectSnapshot {
    pub folders: usize,
    pub files: usize,
    pub items: Vec<ItemSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemSnapshot {
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub name: String,
    /// Declaring files with their qualifier suffix (empty for default).
    pub sources: Vec<SourceSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceSnapshot {
    pub file: String,
    pub configuration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub framework: bool,
    /// Seconds since the epoch when the file was last read from disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scanned_at: Option<u64>,
}

impl ProjectSnapshot {
    pub(super) fn from_table(table: &ProjectResources) -> Self {
        let items = table
            .resource_types()
            .into_iter()
            .flat_map(|ty| table.items_of_type(ty))
            .map(|item| ItemSnapshot {
                resource_type: item.resource_type(),
                name: item.name().to_string(),
                sources: item
                    .sources()
                    .iter()
                    .filter_map(|id| table.file(*id))
                    .map(|file| SourceSnapshot {
                        file: file.to_string(),
                        configuration: file.configuration().to_string(),
                        value: file
                            .value(item.resource_type(), item.name())
                            .and_then(|value| value.value),
                        framework: file.is_framework(),
                        scanned_at: table.file_info(file.id()).map(|info| info.last_scanned_utc),
                    })
                    .collect(),
            })
            .collect();

        Self {
            folders: table.folders().count(),
            files: table.file_count(),
            items,
        }
    }

    /// Write the snapshot as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn write_json(&self, path: &Path) -> ResourceResult<()> {
        let json = serde_json::to_string_pretty(self).with_path(path)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ResourceError::FileWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, json).map_err(|source| ResourceError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}
