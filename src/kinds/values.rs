//! Values files (`res/values*/*.xml`).
//!
//! A values file declares many resources of many types under a single
//! `<resources>` root:
//!
//! ```xml
//! <resources>
//!     <string name="app_name">Demo</string>
//!     <color name="accent">#ff4081</color>
//!     <item type="id" name="toolbar"/>
//!     <declare-styleable name="Chip">
//!         <attr name="chipIcon" format="reference"/>
//!     </declare-styleable>
//! </resources>
//! ```

use crate::error::{ParseError, ParseResult};
use crate::resource::{ResourceFileKind, ResourceValue};
use crate::types::ResourceType;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

const ROOT_ELEMENT: &str = "resources";

/// Declarations that are valid in a values file but define no resource.
const IGNORED_ELEMENTS: &[&str] = &["eat-comment", "skip", "public", "java-symbol", "add-resource"];

#[derive(Debug, Default)]
pub struct ValuesFile {
    declarations: BTreeMap<ResourceType, BTreeMap<String, ResourceValue>>,
}

/// A top-level declaration whose text is still being collected.
struct Pending {
    resource_type: ResourceType,
    name: String,
    depth: usize,
    text: String,
}

impl ValuesFile {
    pub fn parse(content: &str, is_framework: bool) -> ParseResult<Self> {
        // Whitespace inside a value is kept; only the ends are trimmed once
        // the declaration is complete.
        let mut reader = Reader::from_str(content);

        let mut values = Self::default();
        let mut depth = 0usize;
        let mut seen_root = false;
        let mut root_closed = false;
        let mut pending: Option<Pending> = None;
        // Depth of the open <declare-styleable>, whose <attr> children are
        // declarations of their own.
        let mut styleable_depth: Option<usize> = None;

        loop {
            let event = reader.read_event()?;
            let is_empty = matches!(event, Event::Empty(_));

            match event {
                Event::Start(ref element) | Event::Empty(ref element) => {
                    let tag = element_name(element);

                    if root_closed {
                        return Err(ParseError::ContentOutsideRoot {
                            root: ROOT_ELEMENT.to_string(),
                            found: format!("<{tag}>"),
                        });
                    }
                    if !seen_root {
                        if tag != ROOT_ELEMENT {
                            return Err(ParseError::MissingRoot {
                                expected: ROOT_ELEMENT.to_string(),
                                found: tag,
                            });
                        }
                        seen_root = true;
                        root_closed = is_empty;
                    } else if depth == 1 {
                        if let Some(resource_type) = declared_type(element, &tag)? {
                            let name = required_attribute(element, &tag, "name")?;
                            if resource_type == ResourceType::DeclareStyleable && !is_empty {
                                styleable_depth = Some(depth);
                            }
                            let declaration = Pending {
                                resource_type,
                                name,
                                depth,
                                text: String::new(),
                            };
                            if is_empty {
                                values.insert(declaration, is_framework);
                            } else {
                                pending = Some(declaration);
                            }
                        }
                    } else if depth > 1 && styleable_depth == Some(depth - 1) && tag == "attr" {
                        let name = required_attribute(element, &tag, "name")?;
                        // Platform attributes are only referenced here.
                        if !name.starts_with("android:") {
                            values.insert(
                                Pending {
                                    resource_type: ResourceType::Attr,
                                    name,
                                    depth,
                                    text: String::new(),
                                },
                                is_framework,
                            );
                        }
                    }

                    if !is_empty {
                        depth += 1;
                    }
                }
                Event::Text(ref text) => {
                    if root_closed && !text.iter().all(u8::is_ascii_whitespace) {
                        return Err(ParseError::ContentOutsideRoot {
                            root: ROOT_ELEMENT.to_string(),
                            found: "text".to_string(),
                        });
                    }
                    if let Some(declaration) = pending.as_mut() {
                        declaration.text.push_str(&text.unescape()?);
                    }
                }
                Event::CData(ref data) => {
                    if let Some(declaration) = pending.as_mut() {
                        declaration.text.push_str(&String::from_utf8_lossy(data));
                    }
                }
                Event::End(_) => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        root_closed = true;
                    }
                    if pending.as_ref().is_some_and(|p| p.depth == depth) {
                        if let Some(declaration) = pending.take() {
                            values.insert(declaration, is_framework);
                        }
                    }
                    if styleable_depth == Some(depth) {
                        styleable_depth = None;
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !seen_root {
            return Err(ParseError::MissingRoot {
                expected: ROOT_ELEMENT.to_string(),
                found: "nothing".to_string(),
            });
        }

        Ok(values)
    }

    fn insert(&mut self, declaration: Pending, is_framework: bool) {
        let Pending {
            resource_type,
            name,
            text,
            ..
        } = declaration;

        let value = resource_type
            .has_simple_value()
            .then(|| text.trim().to_string());

        let by_name = self.declarations.entry(resource_type).or_default();
        if by_name.contains_key(&name) {
            warn!("Duplicate declaration of @{resource_type}/{name}, keeping the first one");
            return;
        }
        by_name.insert(
            name.clone(),
            ResourceValue::new(resource_type, name, value, is_framework),
        );
    }

    /// Number of declarations across all types.
    pub fn len(&self) -> usize {
        self.declarations.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl ResourceFileKind for ValuesFile {
    fn resource_types(&self) -> BTreeSet<ResourceType> {
        self.declarations.keys().copied().collect()
    }

    fn has_resources(&self, resource_type: ResourceType) -> bool {
        self.declarations.contains_key(&resource_type)
    }

    fn resource_names(&self, resource_type: ResourceType) -> Vec<&str> {
        self.declarations
            .get(&resource_type)
            .map(|by_name| by_name.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    fn value(&self, resource_type: ResourceType, name: &str) -> Option<ResourceValue> {
        self.declarations.get(&resource_type)?.get(name).cloned()
    }
}

fn element_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.name().as_ref()).into_owned()
}

/// Resource type declared by a top-level element, `None` for elements that
/// declare nothing.
fn declared_type(element: &BytesStart<'_>, tag: &str) -> ParseResult<Option<ResourceType>> {
    let resource_type = match tag {
        "string" => ResourceType::String,
        "color" => ResourceType::Color,
        "dimen" => ResourceType::Dimen,
        "bool" => ResourceType::Bool,
        "integer" => ResourceType::Integer,
        "fraction" => ResourceType::Fraction,
        "drawable" => ResourceType::Drawable,
        "string-array" | "integer-array" | "array" => ResourceType::Array,
        "plurals" => ResourceType::Plurals,
        "style" => ResourceType::Style,
        "attr" => ResourceType::Attr,
        "declare-styleable" => ResourceType::DeclareStyleable,
        "item" => {
            let type_name = required_attribute(element, tag, "type")?;
            type_name
                .parse()
                .map_err(|_| ParseError::UnknownResourceType(type_name))?
        }
        other => {
            if !IGNORED_ELEMENTS.contains(&other) {
                debug!("Ignoring unknown values element <{other}>");
            }
            return Ok(None);
        }
    };
    Ok(Some(resource_type))
}

fn required_attribute(element: &BytesStart<'_>, tag: &str, key: &str) -> ParseResult<String> {
    for attribute in element.attributes() {
        let attribute = attribute?;
        if attribute.key.as_ref() == key.as_bytes() {
            return Ok(attribute.unescape_value()?.into_owned());
        }
    }
    Err(ParseError::MissingAttribute {
        element: tag.to_string(),
        attribute: key.to_string(),
    })
}
