//! Design-token classifiers for CSS property values
//!
//! Architectural Principle: Static Dispatch - property names map to classifier families through a fixed table
//! - Each family is a pure function from a raw value to a token
//! - Numeric families are interval ladders, categorical families are lookup tables
//! - A value the family cannot interpret yields no token rather than an error

pub mod box_model;
pub mod color;
pub mod ladder;
pub mod typography;

pub use crate::domain::findings::NO_SUGGESTION;
pub use ladder::Ladder;

use serde::Serialize;
use std::fmt;

/// Marker that identifies a value already expressed with design tokens
pub const MIGRATED_MARKER: &str = "ddd";

/// Groups of CSS properties that share a classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyFamily {
    Color,
    Spacing,
    Radius,
    BorderShorthand,
    BorderThickness,
    BoxShadow,
    FontFamily,
    FontSize,
    FontWeight,
    LetterSpacing,
    LineHeight,
}

/// Every audited property and the family that classifies it
pub const AUDITED_PROPERTIES: &[(&str, PropertyFamily)] = &[
    ("color", PropertyFamily::Color),
    ("background-color", PropertyFamily::Color),
    ("background", PropertyFamily::Color),
    ("border-color", PropertyFamily::Color),
    ("outline-color", PropertyFamily::Color),
    ("fill", PropertyFamily::Color),
    ("stroke", PropertyFamily::Color),
    ("text-decoration-color", PropertyFamily::Color),
    ("caret-color", PropertyFamily::Color),
    ("accent-color", PropertyFamily::Color),
    ("margin", PropertyFamily::Spacing),
    ("margin-top", PropertyFamily::Spacing),
    ("margin-right", PropertyFamily::Spacing),
    ("margin-bottom", PropertyFamily::Spacing),
    ("margin-left", PropertyFamily::Spacing),
    ("margin-block", PropertyFamily::Spacing),
    ("margin-inline", PropertyFamily::Spacing),
    ("padding", PropertyFamily::Spacing),
    ("padding-top", PropertyFamily::Spacing),
    ("padding-right", PropertyFamily::Spacing),
    ("padding-bottom", PropertyFamily::Spacing),
    ("padding-left", PropertyFamily::Spacing),
    ("padding-block", PropertyFamily::Spacing),
    ("padding-inline", PropertyFamily::Spacing),
    ("gap", PropertyFamily::Spacing),
    ("row-gap", PropertyFamily::Spacing),
    ("column-gap", PropertyFamily::Spacing),
    ("border-radius", PropertyFamily::Radius),
    ("border-top-left-radius", PropertyFamily::Radius),
    ("border-top-right-radius", PropertyFamily::Radius),
    ("border-bottom-left-radius", PropertyFamily::Radius),
    ("border-bottom-right-radius", PropertyFamily::Radius),
    ("border", PropertyFamily::BorderShorthand),
    ("border-top", PropertyFamily::BorderShorthand),
    ("border-right", PropertyFamily::BorderShorthand),
    ("border-bottom", PropertyFamily::BorderShorthand),
    ("border-left", PropertyFamily::BorderShorthand),
    ("outline", PropertyFamily::BorderShorthand),
    ("border-width", PropertyFamily::BorderThickness),
    ("border-top-width", PropertyFamily::BorderThickness),
    ("border-right-width", PropertyFamily::BorderThickness),
    ("border-bottom-width", PropertyFamily::BorderThickness),
    ("border-left-width", PropertyFamily::BorderThickness),
    ("outline-width", PropertyFamily::BorderThickness),
    ("box-shadow", PropertyFamily::BoxShadow),
    ("font-family", PropertyFamily::FontFamily),
    ("font-size", PropertyFamily::FontSize),
    ("font-weight", PropertyFamily::FontWeight),
    ("letter-spacing", PropertyFamily::LetterSpacing),
    ("line-height", PropertyFamily::LineHeight),
];

impl PropertyFamily {
    pub const ALL: [PropertyFamily; 11] = [
        Self::Color,
        Self::Spacing,
        Self::Radius,
        Self::BorderShorthand,
        Self::BorderThickness,
        Self::BoxShadow,
        Self::FontFamily,
        Self::FontSize,
        Self::FontWeight,
        Self::LetterSpacing,
        Self::LineHeight,
    ];

    /// Family for a lower-cased property name, if the property is audited
    pub fn for_property(property: &str) -> Option<Self> {
        AUDITED_PROPERTIES
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, family)| *family)
    }

    /// Properties handled by this family
    pub fn properties(self) -> impl Iterator<Item = &'static str> {
        AUDITED_PROPERTIES
            .iter()
            .filter(move |(_, family)| *family == self)
            .map(|(name, _)| *name)
    }

    /// Classify a raw value; `None` means the family has no token for it
    pub fn classify(self, value: &str) -> Option<&'static str> {
        match self {
            Self::Color => color::color(value),
            Self::Spacing => box_model::spacing(value),
            Self::Radius => box_model::radius(value),
            Self::BorderShorthand => box_model::border(value),
            Self::BorderThickness => box_model::border_thickness(value),
            Self::BoxShadow => box_model::box_shadow(value),
            Self::FontFamily => typography::font_family(value),
            Self::FontSize => typography::font_size(value),
            Self::FontWeight => typography::font_weight(value),
            Self::LetterSpacing => typography::letter_spacing(value),
            Self::LineHeight => typography::line_height(value),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Spacing => "spacing",
            Self::Radius => "radius",
            Self::BorderShorthand => "border",
            Self::BorderThickness => "border-thickness",
            Self::BoxShadow => "box-shadow",
            Self::FontFamily => "font-family",
            Self::FontSize => "font-size",
            Self::FontWeight => "font-weight",
            Self::LetterSpacing => "letter-spacing",
            Self::LineHeight => "line-height",
        }
    }
}

impl fmt::Display for PropertyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a value already references design tokens
pub fn is_migrated(value: &str) -> bool {
    value.contains(MIGRATED_MARKER)
}

/// Suggestion for one declaration.
///
/// Returns `None` when the property is not audited or the value is already
/// migrated; otherwise a token, or [`NO_SUGGESTION`] when nothing fits.
pub fn suggest(property: &str, value: &str) -> Option<&'static str> {
    let family = PropertyFamily::for_property(property)?;
    if is_migrated(value) {
        return None;
    }
    Some(family.classify(value).unwrap_or(NO_SUGGESTION))
}
