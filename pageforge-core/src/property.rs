//! Typed property dispatch for element edits.
//!
//! The editor form edits elements through a closed set of named properties
//! rather than arbitrary field access. Numeric and closed-choice values are
//! parsed from their UI string form; a value that does not parse rejects the
//! edit and leaves the element exactly as it was, so a half-typed number in
//! a form field never destroys valid state.

use std::str::FromStr;

use crate::element::Element;
use crate::error::{BuilderError, BuilderResult};
use crate::style::{FontStyle, FontWeight, TextAlign};

/// The closed set of editable element properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Text content.
    Text,
    /// Box width in pixels.
    Width,
    /// Box height in pixels.
    Height,
    /// Background color.
    Background,
    /// Text color.
    TextColor,
    /// Font family name.
    FontFamily,
    /// Font size in pixels.
    FontSize,
    /// Font weight keyword.
    FontWeight,
    /// Font style keyword.
    FontStyle,
    /// Text alignment keyword.
    TextAlign,
    /// Border width in pixels.
    BorderWidth,
    /// Border color.
    BorderColor,
    /// Border corner radius in pixels.
    BorderRadius,
    /// Inner padding in pixels.
    Padding,
    /// Outer margin in pixels.
    Margin,
}

impl Property {
    /// All properties, in editor-form order.
    pub const ALL: [Self; 15] = [
        Self::Text,
        Self::Width,
        Self::Height,
        Self::Background,
        Self::TextColor,
        Self::FontFamily,
        Self::FontSize,
        Self::FontWeight,
        Self::FontStyle,
        Self::TextAlign,
        Self::BorderWidth,
        Self::BorderColor,
        Self::BorderRadius,
        Self::Padding,
        Self::Margin,
    ];

    /// The snake_case name used at the UI boundary.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Width => "width",
            Self::Height => "height",
            Self::Background => "background",
            Self::TextColor => "text_color",
            Self::FontFamily => "font_family",
            Self::FontSize => "font_size",
            Self::FontWeight => "font_weight",
            Self::FontStyle => "font_style",
            Self::TextAlign => "text_align",
            Self::BorderWidth => "border_width",
            Self::BorderColor => "border_color",
            Self::BorderRadius => "border_radius",
            Self::Padding => "padding",
            Self::Margin => "margin",
        }
    }
}

impl FromStr for Property {
    type Err = BuilderError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|property| property.name() == name)
            .ok_or_else(|| BuilderError::InvalidPropertyValue {
                property: name.to_string(),
                value: String::new(),
            })
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Apply a property edit to an element, parsing `value` from its UI string
/// form.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidPropertyValue`] when a numeric property
/// receives non-numeric or negative input, a dimension or font size would
/// drop below one pixel, or a closed-choice property receives an unknown
/// keyword. The element is untouched in every error case.
pub fn apply(element: &mut Element, property: Property, value: &str) -> BuilderResult<()> {
    match property {
        Property::Text => element.text = value.to_string(),
        Property::Width => element.width = parse_dimension(property, value)?,
        Property::Height => element.height = parse_dimension(property, value)?,
        Property::Background => element.style.background = value.to_string(),
        Property::TextColor => element.style.text_color = value.to_string(),
        Property::FontFamily => element.style.font_family = value.to_string(),
        Property::FontSize => element.style.font_size = parse_dimension(property, value)?,
        Property::FontWeight => {
            element.style.font_weight =
                FontWeight::parse(value).ok_or_else(|| invalid(property, value))?;
        }
        Property::FontStyle => {
            element.style.font_style =
                FontStyle::parse(value).ok_or_else(|| invalid(property, value))?;
        }
        Property::TextAlign => {
            element.style.text_align =
                TextAlign::parse(value).ok_or_else(|| invalid(property, value))?;
        }
        Property::BorderWidth => element.style.border_width = parse_count(property, value)?,
        Property::BorderColor => element.style.border_color = value.to_string(),
        Property::BorderRadius => element.style.border_radius = parse_count(property, value)?,
        Property::Padding => element.style.padding = parse_count(property, value)?,
        Property::Margin => element.style.margin = parse_count(property, value)?,
    }
    Ok(())
}

/// Parse a non-negative pixel count.
fn parse_count(property: Property, value: &str) -> BuilderResult<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(property, value))
}

/// Parse a pixel count that must stay at least 1 (widths, heights, font
/// sizes).
fn parse_dimension(property: Property, value: &str) -> BuilderResult<u32> {
    match parse_count(property, value)? {
        0 => Err(invalid(property, value)),
        n => Ok(n),
    }
}

fn invalid(property: Property, value: &str) -> BuilderError {
    BuilderError::InvalidPropertyValue {
        property: property.name().to_string(),
        value: value.to_string(),
    }
}
