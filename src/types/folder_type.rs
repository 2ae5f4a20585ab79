//! Resource folder types and the resource types each folder can produce.

use super::ResourceType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceFolderType {
    Anim,
    Animator,
    Color,
    Drawable,
    Font,
    Interpolator,
    Layout,
    Menu,
    Mipmap,
    Raw,
    Transition,
    Values,
    Xml,
}

impl ResourceFolderType {
    pub const ALL: [ResourceFolderType; 13] = [
        ResourceFolderType::Anim,
        ResourceFolderType::Animator,
        ResourceFolderType::Color,
        ResourceFolderType::Drawable,
        ResourceFolderType::Font,
        ResourceFolderType::Interpolator,
        ResourceFolderType::Layout,
        ResourceFolderType::Menu,
        ResourceFolderType::Mipmap,
        ResourceFolderType::Raw,
        ResourceFolderType::Transition,
        ResourceFolderType::Values,
        ResourceFolderType::Xml,
    ];

    /// Folder name without qualifiers (`layout` for `layout-land`).
    pub fn name(&self) -> &'static str {
        match self {
            ResourceFolderType::Anim => "anim",
            ResourceFolderType::Animator => "animator",
            ResourceFolderType::Color => "color",
            ResourceFolderType::Drawable => "drawable",
            ResourceFolderType::Font => "font",
            ResourceFolderType::Interpolator => "interpolator",
            ResourceFolderType::Layout => "layout",
            ResourceFolderType::Menu => "menu",
            ResourceFolderType::Mipmap => "mipmap",
            ResourceFolderType::Raw => "raw",
            ResourceFolderType::Transition => "transition",
            ResourceFolderType::Values => "values",
            ResourceFolderType::Xml => "xml",
        }
    }

    /// Splits a folder name into its type and the qualifier segments.
    ///
    /// Returns `None` when the first segment is not a resource folder type.
    pub fn split_folder_name(folder_name: &str) -> Option<(Self, Vec<&str>)> {
        let mut segments = folder_name.split('-');
        let folder_type = segments.next()?.parse().ok()?;
        Some((folder_type, segments.collect()))
    }

    /// The resource type a whole file in this folder stands for.
    ///
    /// `values` has none: each declaration in a values file is its own
    /// resource.
    pub fn file_resource_type(&self) -> Option<ResourceType> {
        match self {
            ResourceFolderType::Anim => Some(ResourceType::Anim),
            ResourceFolderType::Animator => Some(ResourceType::Animator),
            ResourceFolderType::Color => Some(ResourceType::Color),
            ResourceFolderType::Drawable => Some(ResourceType::Drawable),
            ResourceFolderType::Font => Some(ResourceType::Font),
            ResourceFolderType::Interpolator => Some(ResourceType::Interpolator),
            ResourceFolderType::Layout => Some(ResourceType::Layout),
            ResourceFolderType::Menu => Some(ResourceType::Menu),
            ResourceFolderType::Mipmap => Some(ResourceType::Mipmap),
            ResourceFolderType::Raw => Some(ResourceType::Raw),
            ResourceFolderType::Transition => Some(ResourceType::Transition),
            ResourceFolderType::Values => None,
            ResourceFolderType::Xml => Some(ResourceType::Xml),
        }
    }

    /// Whether XML files in this folder can declare `@+id/` resources.
    pub fn generates_ids(&self) -> bool {
        matches!(
            self,
            ResourceFolderType::Layout | ResourceFolderType::Menu | ResourceFolderType::Xml
        )
    }

    /// All resource types files in this folder can produce.
    pub fn related_resource_types(&self) -> Vec<ResourceType> {
        match self {
            ResourceFolderType::Values => vec![
                ResourceType::Array,
                ResourceType::Attr,
                ResourceType::Bool,
                ResourceType::Color,
                ResourceType::DeclareStyleable,
                ResourceType::Dimen,
                ResourceType::Drawable,
                ResourceType::Fraction,
                ResourceType::Id,
                ResourceType::Integer,
                ResourceType::Plurals,
                ResourceType::String,
                ResourceType::Style,
            ],
            other => {
                let mut types: Vec<ResourceType> = other.file_resource_type().into_iter().collect();
                if other.generates_ids() {
                    types.push(ResourceType::Id);
                }
                types
            }
        }
    }
}

impl fmt::Display for ResourceFolderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResourceFolderType {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceFolderType::ALL
            .iter()
            .copied()
            .find(|ty| ty.name() == s)
            .ok_or("Unknown resource folder type")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_folder_name() {
        let (ty, qualifiers) = ResourceFolderType::split_folder_name("values-en-rUS").unwrap();
        assert_eq!(ty, ResourceFolderType::Values);
        assert_eq!(qualifiers, vec!["en", "rUS"]);

        let (ty, qualifiers) = ResourceFolderType::split_folder_name("layout").unwrap();
        assert_eq!(ty, ResourceFolderType::Layout);
        assert!(qualifiers.is_empty());

        assert!(ResourceFolderType::split_folder_name("assets").is_none());
        assert!(ResourceFolderType::split_folder_name("Layout").is_none());
    }

    #[test]
    fn test_related_types() {
        assert_eq!(
            ResourceFolderType::Layout.related_resource_types(),
            vec![ResourceType::Layout, ResourceType::Id]
        );
        assert_eq!(
            ResourceFolderType::Drawable.related_resource_types(),
            vec![ResourceType::Drawable]
        );
        assert!(
            ResourceFolderType::Values
                .related_resource_types()
                .contains(&ResourceType::String)
        );
        assert!(ResourceFolderType::Values.file_resource_type().is_none());
    }
}
