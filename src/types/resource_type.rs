//! Resource type tags.
//!
//! The XML name of each type is what appears in `R.<type>.<name>`, in
//! `@<type>/<name>` references and in `<item type="...">` declarations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceType {
    Anim,
    Animator,
    Array,
    Attr,
    Bool,
    Color,
    DeclareStyleable,
    Dimen,
    Drawable,
    Font,
    Fraction,
    Id,
    Integer,
    Interpolator,
    Layout,
    Menu,
    Mipmap,
    Plurals,
    Raw,
    String,
    Style,
    Styleable,
    Transition,
    Xml,
}

impl ResourceType {
    pub const ALL: [ResourceType; 24] = [
        ResourceType::Anim,
        ResourceType::Animator,
        ResourceType::Array,
        ResourceType::Attr,
        ResourceType::Bool,
        ResourceType::Color,
        ResourceType::DeclareStyleable,
        ResourceType::Dimen,
        ResourceType::Drawable,
        ResourceType::Font,
        ResourceType::Fraction,
        ResourceType::Id,
        ResourceType::Integer,
        ResourceType::Interpolator,
        ResourceType::Layout,
        ResourceType::Menu,
        ResourceType::Mipmap,
        ResourceType::Plurals,
        ResourceType::Raw,
        ResourceType::String,
        ResourceType::Style,
        ResourceType::Styleable,
        ResourceType::Transition,
        ResourceType::Xml,
    ];

    /// Name used in XML and in `R` class references.
    pub fn xml_name(&self) -> &'static str {
        match self {
            ResourceType::Anim => "anim",
            ResourceType::Animator => "animator",
            ResourceType::Array => "array",
            ResourceType::Attr => "attr",
            ResourceType::Bool => "bool",
            ResourceType::Color => "color",
            ResourceType::DeclareStyleable => "declare-styleable",
            ResourceType::Dimen => "dimen",
            ResourceType::Drawable => "drawable",
            ResourceType::Font => "font",
            ResourceType::Fraction => "fraction",
            ResourceType::Id => "id",
            ResourceType::Integer => "integer",
            ResourceType::Interpolator => "interpolator",
            ResourceType::Layout => "layout",
            ResourceType::Menu => "menu",
            ResourceType::Mipmap => "mipmap",
            ResourceType::Plurals => "plurals",
            ResourceType::Raw => "raw",
            ResourceType::String => "string",
            ResourceType::Style => "style",
            ResourceType::Styleable => "styleable",
            ResourceType::Transition => "transition",
            ResourceType::Xml => "xml",
        }
    }

    /// Human-readable name for UI and reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceType::Anim => "Animation",
            ResourceType::Animator => "Animator",
            ResourceType::Array => "Array",
            ResourceType::Attr => "Attr",
            ResourceType::Bool => "Boolean",
            ResourceType::Color => "Color",
            ResourceType::DeclareStyleable => "Declare Styleable",
            ResourceType::Dimen => "Dimension",
            ResourceType::Drawable => "Drawable",
            ResourceType::Font => "Font",
            ResourceType::Fraction => "Fraction",
            ResourceType::Id => "ID",
            ResourceType::Integer => "Integer",
            ResourceType::Interpolator => "Interpolator",
            ResourceType::Layout => "Layout",
            ResourceType::Menu => "Menu",
            ResourceType::Mipmap => "Mip Map",
            ResourceType::Plurals => "Plurals",
            ResourceType::Raw => "Raw",
            ResourceType::String => "String",
            ResourceType::Style => "Style",
            ResourceType::Styleable => "Styleable",
            ResourceType::Transition => "Transition",
            ResourceType::Xml => "XML",
        }
    }

    /// Whether values of this type carry a single text value.
    ///
    /// Compound declarations (arrays, plurals, styles) are tracked by name
    /// only; their children are not flattened into a string.
    pub fn has_simple_value(&self) -> bool {
        matches!(
            self,
            ResourceType::Bool
                | ResourceType::Color
                | ResourceType::Dimen
                | ResourceType::Drawable
                | ResourceType::Fraction
                | ResourceType::Integer
                | ResourceType::String
        )
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.xml_name())
    }
}

impl FromStr for ResourceType {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::ALL
            .iter()
            .copied()
            .find(|ty| ty.xml_name() == s)
            .ok_or("Unknown resource type")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_name_round_trip() {
        for ty in ResourceType::ALL {
            assert_eq!(ty.xml_name().parse::<ResourceType>(), Ok(ty));
        }
    }

    #[test]
    fn test_unknown_type() {
        assert!("strings".parse::<ResourceType>().is_err());
        assert!("".parse::<ResourceType>().is_err());
    }

    #[test]
    fn test_display_uses_xml_name() {
        assert_eq!(ResourceType::DeclareStyleable.to_string(), "declare-styleable");
        assert_eq!(ResourceType::Id.display_name(), "ID");
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&ResourceType::DeclareStyleable).unwrap();
        assert_eq!(json, "\"declare-styleable\"");
    }
}
