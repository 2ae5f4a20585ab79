//! Folder configuration: the qualifier set attached to a resource folder.
//!
//! A configuration is parsed from the segments following the folder type in
//! a folder name (`values-en-rUS-land` has `en`, `rUS` and `land`).
//! Qualifiers must follow the canonical order and each kind may appear at
//! most once; anything else makes the folder name invalid.

mod qualifier;

pub use qualifier::{Qualifier, QualifierKind};

use crate::types::ResourceFolderType;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderConfiguration {
    qualifiers: BTreeMap<QualifierKind, Qualifier>,
}

impl FolderConfiguration {
    /// Build a configuration from folder-name segments.
    ///
    /// Returns `None` if a segment is not a known qualifier or appears out
    /// of order.
    pub fn from_qualifiers(segments: &[&str]) -> Option<Self> {
        let mut config = Self::default();
        let mut next_kind = 0;

        for segment in segments {
            let (index, qualifier) = QualifierKind::ALL[next_kind..]
                .iter()
                .enumerate()
                .find_map(|(offset, kind)| kind.parse(segment).map(|q| (next_kind + offset, q)))?;

            config.qualifiers.insert(qualifier.kind(), qualifier);
            next_kind = index + 1;
        }

        Some(config)
    }

    /// Parse a full folder name such as `drawable-hdpi`.
    pub fn from_folder_name(folder_name: &str) -> Option<(ResourceFolderType, Self)> {
        let (folder_type, segments) = ResourceFolderType::split_folder_name(folder_name)?;
        let config = Self::from_qualifiers(&segments)?;
        Some((folder_type, config))
    }

    pub fn qualifier(&self, kind: QualifierKind) -> Option<&Qualifier> {
        self.qualifiers.get(&kind)
    }

    /// Set or replace the qualifier of the same kind.
    pub fn set_qualifier(&mut self, qualifier: Qualifier) {
        self.qualifiers.insert(qualifier.kind(), qualifier);
    }

    pub fn remove_qualifier(&mut self, kind: QualifierKind) -> Option<Qualifier> {
        self.qualifiers.remove(&kind)
    }

    /// Qualifiers in canonical order.
    pub fn qualifiers(&self) -> impl Iterator<Item = &Qualifier> {
        self.qualifiers.values()
    }

    /// True for an unqualified folder (`values`, `layout`, ...).
    pub fn is_default(&self) -> bool {
        self.qualifiers.is_empty()
    }

    pub fn folder_name(&self, folder_type: ResourceFolderType) -> String {
        if self.is_default() {
            folder_type.name().to_string()
        } else {
            format!("{}-{}", folder_type.name(), self)
        }
    }
}

/// Qualifier suffix joined with `-`; empty for the default configuration.
impl fmt::Display for FolderConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for qualifier in self.qualifiers.values() {
            if !first {
                f.write_str("-")?;
            }
            write!(f, "{qualifier}")?;
            first = false;
        }
        Ok(())
    }
}
