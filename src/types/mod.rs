mod folder_type;
mod id_counter;
mod resource_type;

pub use folder_type::ResourceFolderType;
pub use id_counter::IdCounter;
pub use resource_type::ResourceType;

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FileId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FolderId(pub u32);

/// Outcome of feeding one file into the project table during a refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// File was seen for the first time
    Added(FileId),
    /// File was already known and has been replaced
    Updated(FileId),
}

impl RefreshOutcome {
    pub fn file_id(&self) -> FileId {
        match self {
            RefreshOutcome::Added(id) | RefreshOutcome::Updated(id) => *id,
        }
    }
}

impl FileId {
    pub fn new(value: u32) -> Option<Self> {
        if value == 0 { None } else { Some(Self(value)) }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl FolderId {
    pub fn new(value: u32) -> Option<Self> {
        if value == 0 { None } else { Some(Self(value)) }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file#{}", self.0)
    }
}

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "folder#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_id_creation() {
        assert!(FileId::new(0).is_none());

        let id = FileId::new(100).unwrap();
        assert_eq!(id.value(), 100);
    }

    #[test]
    fn test_folder_id_creation() {
        assert!(FolderId::new(0).is_none());
        assert_eq!(FolderId::new(7).unwrap().to_string(), "folder#7");
    }

    #[test]
    fn test_refresh_outcome() {
        let id = FileId::new(3).unwrap();
        assert_eq!(RefreshOutcome::Added(id).file_id(), id);
        assert_eq!(RefreshOutcome::Updated(id).file_id(), id);
    }

    #[test]
    fn test_id_equality_and_hash() {
        let id1 = FileId::new(42).unwrap();
        let id2 = FileId::new(42).unwrap();
        let id3 = FileId::new(43).unwrap();

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);

        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(id1);
        assert!(set.contains(&id2));
        assert!(!set.contains(&id3));
    }
}
