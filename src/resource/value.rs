use crate::types::ResourceType;
use serde::{Deserialize, Serialize};

/// Value of a single resource as declared in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceValue {
    pub resource_type: ResourceType,
    pub name: String,
    /// Text value for simple declarations, the file path for file-based
    /// resources, `None` for compound declarations and ids.
    pub value: Option<String>,
    pub is_framework: bool,
}

impl ResourceValue {
    pub fn new(
        resource_type: ResourceType,
        name: impl Into<String>,
        value: Option<String>,
        is_framework: bool,
    ) -> Self {
        Self {
            resource_type,
            name: name.into(),
            value,
            is_framework,
        }
    }

    /// `@type/name`, or `@android:type/name` for framework resources.
    pub fn reference(&self) -> String {
        let prefix = if self.is_framework { "@android:" } else { "@" };
        format!("{prefix}{}/{}", self.resource_type, self.name)
    }
}
