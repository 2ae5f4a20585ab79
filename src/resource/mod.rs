//! Resource model: folders, files, items and values.

mod file;
mod folder;
mod handle;
mod item;
mod value;

pub use file::{ResourceFile, ResourceFileKind};
pub use folder::ResourceFolder;
pub use handle::{AbstractFile, FsFile, MemoryFile};
pub use item::ResourceItem;
pub use value::ResourceValue;

use crate::configuration::FolderConfiguration;

/// Anything that lives under a qualified resource folder.
pub trait Resource {
    fn configuration(&self) -> &FolderConfiguration;
}
