//! Files that are one resource each: drawables, mipmaps, raw files,
//! animations, fonts and the like.

use crate::resource::{ResourceFileKind, ResourceValue};
use crate::types::ResourceType;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct SingleResourceFile {
    value: ResourceValue,
}

impl SingleResourceFile {
    /// `path` becomes the value: rendering code loads the file from there.
    pub fn new(resource_type: ResourceType, name: &str, path: &str, is_framework: bool) -> Self {
        Self {
            value: ResourceValue::new(resource_type, name, Some(path.to_string()), is_framework),
        }
    }

    pub fn resource_type(&self) -> ResourceType {
        self.value.resource_type
    }

    pub fn name(&self) -> &str {
        &self.value.name
    }
}

impl ResourceFileKind for SingleResourceFile {
    fn resource_types(&self) -> BTreeSet<ResourceType> {
        BTreeSet::from([self.value.resource_type])
    }

    fn has_resources(&self, resource_type: ResourceType) -> bool {
        self.value.resource_type == resource_type
    }

    fn resource_names(&self, resource_type: ResourceType) -> Vec<&str> {
        if self.has_resources(resource_type) {
            vec![self.name()]
        } else {
            Vec::new()
        }
    }

    fn value(&self, resource_type: ResourceType, name: &str) -> Option<ResourceValue> {
        (self.has_resources(resource_type) && self.value.name == name).then(|| self.value.clone())
    }
}
