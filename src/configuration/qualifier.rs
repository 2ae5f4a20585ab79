//! Folder name qualifiers.
//!
//! `QualifierKind` is declared in the order qualifiers must appear in a
//! folder name; the derived `Ord` is that order.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QualifierKind {
    Mcc,
    Mnc,
    Language,
    Region,
    LayoutDirection,
    SmallestWidth,
    ScreenWidth,
    ScreenHeight,
    ScreenSize,
    ScreenRatio,
    ScreenOrientation,
    UiMode,
    NightMode,
    Density,
    Touchscreen,
    KeyboardState,
    TextInput,
    NavigationState,
    NavigationMethod,
    Version,
}

impl QualifierKind {
    pub const ALL: [QualifierKind; 20] = [
        QualifierKind::Mcc,
        QualifierKind::Mnc,
        QualifierKind::Language,
        QualifierKind::Region,
        QualifierKind::LayoutDirection,
        QualifierKind::SmallestWidth,
        QualifierKind::ScreenWidth,
        QualifierKind::ScreenHeight,
        QualifierKind::ScreenSize,
        QualifierKind::ScreenRatio,
        QualifierKind::ScreenOrientation,
        QualifierKind::UiMode,
        QualifierKind::NightMode,
        QualifierKind::Density,
        QualifierKind::Touchscreen,
        QualifierKind::KeyboardState,
        QualifierKind::TextInput,
        QualifierKind::NavigationState,
        QualifierKind::NavigationMethod,
        QualifierKind::Version,
    ];

    /// Accepted values for keyword qualifiers; empty for numeric or
    /// free-form ones.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            QualifierKind::LayoutDirection => &["ldltr", "ldrtl"],
            QualifierKind::ScreenSize => &["small", "normal", "large", "xlarge"],
            QualifierKind::ScreenRatio => &["long", "notlong"],
            QualifierKind::ScreenOrientation => &["port", "land", "square"],
            QualifierKind::UiMode => &["car", "desk", "television", "appliance", "watch", "vrheadset"],
            QualifierKind::NightMode => &["night", "notnight"],
            QualifierKind::Density => &[
                "ldpi", "mdpi", "tvdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi", "nodpi", "anydpi",
            ],
            QualifierKind::Touchscreen => &["notouch", "stylus", "finger"],
            QualifierKind::KeyboardState => &["keysexposed", "keyshidden", "keyssoft"],
            QualifierKind::TextInput => &["nokeys", "qwerty", "12key"],
            QualifierKind::NavigationState => &["navexposed", "navhidden"],
            QualifierKind::NavigationMethod => &["nonav", "dpad", "trackball", "wheel"],
            _ => &[],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            QualifierKind::Mcc => "Mobile Country Code",
            QualifierKind::Mnc => "Mobile Network Code",
            QualifierKind::Language => "Language",
            QualifierKind::Region => "Region",
            QualifierKind::LayoutDirection => "Layout Direction",
            QualifierKind::SmallestWidth => "Smallest Screen Width",
            QualifierKind::ScreenWidth => "Screen Width",
            QualifierKind::ScreenHeight => "Screen Height",
            QualifierKind::ScreenSize => "Size",
            QualifierKind::ScreenRatio => "Ratio",
            QualifierKind::ScreenOrientation => "Orientation",
            QualifierKind::UiMode => "UI Mode",
            QualifierKind::NightMode => "Night Mode",
            QualifierKind::Density => "Density",
            QualifierKind::Touchscreen => "Touch Screen",
            QualifierKind::KeyboardState => "Keyboard",
            QualifierKind::TextInput => "Text Input",
            QualifierKind::NavigationState => "Navigation State",
            QualifierKind::NavigationMethod => "Navigation Method",
            QualifierKind::Version => "Platform Version",
        }
    }

    /// Try to read `segment` as a qualifier of this kind.
    pub fn parse(&self, segment: &str) -> Option<Qualifier> {
        match self {
            QualifierKind::Mcc => prefixed_digits(segment, "mcc", 3)
                .map(|code| Qualifier::Mcc(code.to_string())),
            QualifierKind::Mnc => prefixed_digits(segment, "mnc", 3)
                .map(|code| Qualifier::Mnc(code.to_string())),
            QualifierKind::Language => {
                let valid = segment.len() == 2 && segment.bytes().all(|b| b.is_ascii_lowercase());
                valid.then(|| Qualifier::Language(segment.to_string()))
            }
            QualifierKind::Region => {
                let code = segment.strip_prefix('r')?;
                let valid = code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase());
                valid.then(|| Qualifier::Region(code.to_string()))
            }
            QualifierKind::SmallestWidth => {
                prefixed_number(segment, "sw", "dp").map(Qualifier::SmallestWidth)
            }
            QualifierKind::ScreenWidth => prefixed_number(segment, "w", "dp").map(Qualifier::ScreenWidth),
            QualifierKind::ScreenHeight => {
                prefixed_number(segment, "h", "dp").map(Qualifier::ScreenHeight)
            }
            QualifierKind::Version => prefixed_number(segment, "v", "").map(Qualifier::Version),
            keyword_kind => {
                let lowered = segment.to_ascii_lowercase();
                keyword_kind
                    .keywords()
                    .iter()
                    .find(|kw| **kw == lowered)
                    .map(|kw| Qualifier::Keyword(*keyword_kind, kw))
            }
        }
    }
}

/// Digits of `<prefix><digits>`, at most `max_len` of them. Leading zeros
/// are significant in network codes, so the text is kept as written.
fn prefixed_digits<'a>(segment: &'a str, prefix: &str, max_len: usize) -> Option<&'a str> {
    let digits = segment.strip_prefix(prefix)?;
    let valid = !digits.is_empty()
        && digits.len() <= max_len
        && digits.bytes().all(|b| b.is_ascii_digit());
    valid.then_some(digits)
}

/// Parses `<prefix><digits><suffix>`.
fn prefixed_number(segment: &str, prefix: &str, suffix: &str) -> Option<u32> {
    let digits = segment.strip_prefix(prefix)?.strip_suffix(suffix)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// One parsed folder-name segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Qualifier {
    Mcc(String),
    Mnc(String),
    Language(String),
    Region(String),
    SmallestWidth(u32),
    ScreenWidth(u32),
    ScreenHeight(u32),
    Version(u32),
    Keyword(QualifierKind, &'static str),
}

impl Qualifier {
    pub fn kind(&self) -> QualifierKind {
        match self {
            Qualifier::Mcc(_) => QualifierKind::Mcc,
            Qualifier::Mnc(_) => QualifierKind::Mnc,
            Qualifier::Language(_) => QualifierKind::Language,
            Qualifier::Region(_) => QualifierKind::Region,
            Qualifier::SmallestWidth(_) => QualifierKind::SmallestWidth,
            Qualifier::ScreenWidth(_) => QualifierKind::ScreenWidth,
            Qualifier::ScreenHeight(_) => QualifierKind::ScreenHeight,
            Qualifier::Version(_) => QualifierKind::Version,
            Qualifier::Keyword(kind, _) => *kind,
        }
    }
}

/// Renders the qualifier the way it appears in a folder name.
impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Qualifier::Mcc(code) => write!(f, "mcc{code}"),
            Qualifier::Mnc(code) => write!(f, "mnc{code}"),
            Qualifier::Language(lang) => f.write_str(lang),
            Qualifier::Region(region) => write!(f, "r{region}"),
            Qualifier::SmallestWidth(dp) => write!(f, "sw{dp}dp"),
            Qualifier::ScreenWidth(dp) => write!(f, "w{dp}dp"),
            Qualifier::ScreenHeight(dp) => write!(f, "h{dp}dp"),
            Qualifier::Version(api) => write!(f, "v{api}"),
            Qualifier::Keyword(_, keyword) => f.write_str(keyword),
        }
    }
}
