//! Layout, menu and xml files.
//!
//! Besides the file resource itself (`@layout/main`), these files create
//! an `id` resource for each `@+id/name` attribute value they contain.

use crate::error::ParseResult;
use crate::resource::{ResourceFileKind, ResourceValue};
use crate::types::ResourceType;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::BTreeSet;

const NEW_ID_PREFIX: &str = "@+id/";

#[derive(Debug, Clone)]
pub struct IdGeneratingFile {
    file_value: ResourceValue,
    ids: BTreeSet<String>,
}

impl IdGeneratingFile {
    pub fn parse(
        resource_type: ResourceType,
        name: &str,
        path: &str,
        content: &str,
        is_framework: bool,
    ) -> ParseResult<Self> {
        let mut reader = Reader::from_str(content);
        let mut ids = BTreeSet::new();

        loop {
            match reader.read_event()? {
                Event::Start(element) | Event::Empty(element) => {
                    for attribute in element.attributes() {
                        let attribute = attribute?;
                        let value = attribute.unescape_value()?;
                        if let Some(id) = value.strip_prefix(NEW_ID_PREFIX) {
                            if !id.is_empty() {
                                ids.insert(id.to_string());
                            }
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(Self {
            file_value: ResourceValue::new(resource_type, name, Some(path.to_string()), is_framework),
            ids,
        })
    }

    /// Ids declared with `@+id/`, sorted.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl ResourceFileKind for IdGeneratingFile {
    fn resource_types(&self) -> BTreeSet<ResourceType> {
        let mut types = BTreeSet::from([self.file_value.resource_type]);
        if !self.ids.is_empty() {
            types.insert(ResourceType::Id);
        }
        types
    }

    fn has_resources(&self, resource_type: ResourceType) -> bool {
        resource_type == self.file_value.resource_type
            || (resource_type == ResourceType::Id && !self.ids.is_empty())
    }

    fn resource_names(&self, resource_type: ResourceType) -> Vec<&str> {
        if resource_type == self.file_value.resource_type {
            vec![self.file_value.name.as_str()]
        } else if resource_type == ResourceType::Id {
            self.ids().collect()
        } else {
            Vec::new()
        }
    }

    fn value(&self, resource_type: ResourceType, name: &str) -> Option<ResourceValue> {
        if resource_type == self.file_value.resource_type && self.file_value.name == name {
            return Some(self.file_value.clone());
        }
        if resource_type == ResourceType::Id && self.ids.contains(name) {
            return Some(ResourceValue::new(
                ResourceType::Id,
                name,
                None,
                self.file_value.is_framework,
            ));
        }
        None
    }
}
