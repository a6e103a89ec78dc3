//! Styling attributes for elements.
//!
//! Color fields are free-form strings: the builder accepts whatever the user
//! typed and the generated CSS carries it verbatim, so an invalid color is
//! tolerated here and simply renders wrong in a browser. The closed-choice
//! attributes (weight, style, alignment) are enums spelled the way CSS
//! spells them.

use serde::{Deserialize, Serialize};

/// Font weight of an element's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Regular weight.
    Normal,
    /// Bold weight.
    Bold,
}

impl FontWeight {
    /// The CSS keyword for this weight.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }

    /// Parse a CSS keyword, `None` for anything unrecognized.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "normal" => Some(Self::Normal),
            "bold" => Some(Self::Bold),
            _ => None,
        }
    }
}

impl std::fmt::Display for FontWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Font style of an element's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Upright glyphs.
    Normal,
    /// Italic glyphs.
    Italic,
}

impl FontStyle {
    /// The CSS keyword for this style.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
        }
    }

    /// Parse a CSS keyword, `None` for anything unrecognized.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "normal" => Some(Self::Normal),
            "italic" => Some(Self::Italic),
            _ => None,
        }
    }
}

impl std::fmt::Display for FontStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Horizontal alignment of an element's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Left-aligned.
    Left,
    /// Centered.
    Center,
    /// Right-aligned.
    Right,
}

impl TextAlign {
    /// The CSS keyword for this alignment.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    /// Parse a CSS keyword, `None` for anything unrecognized.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for TextAlign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Visual styling attributes for one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    /// Background color as a hex string.
    pub background: String,
    /// Text color as a hex string.
    pub text_color: String,
    /// Font family name.
    pub font_family: String,
    /// Font size in pixels, always at least 1.
    pub font_size: u32,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Font style.
    pub font_style: FontStyle,
    /// Horizontal text alignment.
    pub text_align: TextAlign,
    /// Border width in pixels.
    pub border_width: u32,
    /// Border color as a hex string.
    pub border_color: String,
    /// Border corner radius in pixels.
    pub border_radius: u32,
    /// Inner padding in pixels.
    pub padding: u32,
    /// Outer margin in pixels.
    pub margin: u32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text_color: "#000000".to_string(),
            font_family: "Arial".to_string(),
            font_size: 14,
            font_weight: FontWeight::Normal,
            font_style: FontStyle::Normal,
            text_align: TextAlign::Left,
            border_width: 1,
            border_color: "#cccccc".to_string(),
            border_radius: 0,
            padding: 10,
            margin: 0,
        }
    }
}
