//! Webpage elements - the building blocks of a document.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::style::Style;

/// Default width of a newly placed element, in pixels.
pub const DEFAULT_WIDTH: u32 = 150;

/// Default height of a newly placed element, in pixels.
pub const DEFAULT_HEIGHT: u32 = 40;

/// Unique identifier for an element.
///
/// An `ElementId` is a handle: a lookup key into a document's owned element
/// sequence, never an owning reference. Removing the element makes every
/// outstanding copy of its handle stale, and stale handles simply fail to
/// resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl ElementId {
    /// Create a new unique element ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point in canvas coordinates.
///
/// Coordinates are signed: an element dragged past the canvas origin keeps
/// its negative position, nothing clamps it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// Pixels from the canvas left edge.
    pub x: i32,
    /// Pixels from the canvas top edge.
    pub y: i32,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The kind of content an element renders as.
///
/// Fixed at creation; determines the default text and the HTML tag the
/// element is emitted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// A top-level heading (`<h1>`).
    Heading,
    /// A paragraph of body text (`<p>`).
    Paragraph,
    /// A clickable button (`<button>`).
    Button,
    /// A generic block container (`<div>`).
    Container,
}

impl ElementKind {
    /// The HTML tag this kind is emitted as.
    #[must_use]
    pub const fn html_tag(self) -> &'static str {
        match self {
            Self::Heading => "h1",
            Self::Paragraph => "p",
            Self::Button => "button",
            Self::Container => "div",
        }
    }

    /// Placeholder text a freshly placed element starts with.
    #[must_use]
    pub const fn default_text(self) -> &'static str {
        match self {
            Self::Heading => "Heading Text",
            Self::Paragraph => "Paragraph text goes here. Click to edit.",
            Self::Button => "Button",
            Self::Container => "Container",
        }
    }
}

/// One placed, styled rectangular content block.
///
/// Elements belong to exactly one [`Document`](crate::Document) and are
/// mutated through its operations; insertion order there is paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique handle for this element.
    pub id: ElementId,
    /// Content kind. Fixed at creation.
    pub kind: ElementKind,
    /// Top-left corner in canvas coordinates.
    pub position: Point,
    /// Width in pixels, always at least 1.
    pub width: u32,
    /// Height in pixels, always at least 1.
    pub height: u32,
    /// Text content, carried verbatim into generated markup.
    pub text: String,
    /// Visual styling attributes.
    pub style: Style,
}

impl Element {
    /// Create an element of the given kind at a position, with kind-specific
    /// default text and the default size and styling.
    #[must_use]
    pub fn new(kind: ElementKind, position: Point) -> Self {
        Self {
            id: ElementId::new(),
            kind,
            position,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            text: kind.default_text().to_string(),
            style: Style::default(),
        }
    }

    /// Check whether a canvas point lies within this element's box.
    ///
    /// Both edges are inclusive: a point exactly on the right or bottom
    /// border still hits.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn contains_point(&self, point: Point) -> bool {
        let right = self.position.x + self.width as i32;
        let bottom = self.position.y + self.height as i32;
        point.x >= self.position.x
            && point.x <= right
            && point.y >= self.position.y
            && point.y <= bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maps_to_tag() {
        assert_eq!(ElementKind::Heading.html_tag(), "h1");
        assert_eq!(ElementKind::Paragraph.html_tag(), "p");
        assert_eq!(ElementKind::Button.html_tag(), "button");
        assert_eq!(ElementKind::Container.html_tag(), "div");
    }

    #[test]
    fn new_element_has_kind_defaults() {
        let element = Element::new(ElementKind::Heading, Point::new(10, 20));
        assert_eq!(element.text, "Heading Text");
        assert_eq!(element.width, DEFAULT_WIDTH);
        assert_eq!(element.height, DEFAULT_HEIGHT);
        assert_eq!(element.position, Point::new(10, 20));
    }

    #[test]
    fn contains_point_edges_are_inclusive() {
        let element = Element::new(ElementKind::Button, Point::new(100, 100));

        assert!(element.contains_point(Point::new(100, 100)));
        assert!(element.contains_point(Point::new(250, 140)));
        assert!(element.contains_point(Point::new(175, 120)));

        assert!(!element.contains_point(Point::new(99, 100)));
        assert!(!element.contains_point(Point::new(251, 140)));
        assert!(!element.contains_point(Point::new(175, 141)));
    }

    #[test]
    fn contains_point_with_negative_position() {
        let mut element = Element::new(ElementKind::Container, Point::new(-50, -50));
        element.width = 60;
        element.height = 60;

        assert!(element.contains_point(Point::new(-10, -10)));
        assert!(element.contains_point(Point::new(0, 0)));
        assert!(!element.contains_point(Point::new(20, 20)));
    }
}
