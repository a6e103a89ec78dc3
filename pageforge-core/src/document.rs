//! The document: an ordered collection of elements plus canvas dimensions.

use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementId, ElementKind, Point};
use crate::error::{BuilderError, BuilderResult};
use crate::property::{self, Property};

/// Default declared canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 800;

/// Default declared canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;

/// An ordered collection of elements plus the declared canvas size.
///
/// Insertion order is paint order is markup emission order; there is no
/// explicit reorder operation. The document also owns the single-element
/// selection, which is cleared whenever the selected element is removed so a
/// handle held by the UI can never dangle. Elements are not clipped to the
/// declared canvas bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    elements: Vec<Element>,
    selected: Option<ElementId>,
    canvas_width: u32,
    canvas_height: u32,
}

impl Document {
    /// Create an empty document with the default 800x600 canvas.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            selected: None,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
        }
    }

    /// Append a newly created element of the given kind and return its
    /// handle. There is no upper bound on element count.
    pub fn add(&mut self, kind: ElementKind, position: Point) -> ElementId {
        let element = Element::new(kind, position);
        let id = element.id;
        tracing::debug!(%id, ?kind, x = position.x, y = position.y, "element added");
        self.elements.push(element);
        id
    }

    /// Where the palette drops the next element: new elements cascade down
    /// the canvas so they do not stack on top of each other.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn spawn_position(&self) -> Point {
        Point::new(100, 100 + 60 * self.elements.len() as i32)
    }

    /// Remove an element. A stale or foreign handle is a no-op, reported by
    /// the `false` return. Removing the selected element clears the
    /// selection.
    pub fn remove(&mut self, id: ElementId) -> bool {
        let before = self.elements.len();
        self.elements.retain(|element| element.id != id);
        let removed = self.elements.len() != before;
        if removed {
            if self.selected == Some(id) {
                self.selected = None;
            }
            tracing::debug!(%id, "element removed");
        }
        removed
    }

    /// Remove all elements and clear the selection. Any confirmation prompt
    /// is the UI layer's concern; calling this clears unconditionally.
    pub fn clear(&mut self) {
        tracing::debug!(count = self.elements.len(), "document cleared");
        self.elements.clear();
        self.selected = None;
    }

    /// The elements in insertion order, front-to-back = bottom-to-top paint
    /// order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Resolve a handle to its element.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|element| element.id == id)
    }

    /// Resolve a handle to its element, mutably.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|element| element.id == id)
    }

    /// The element's position in the sequence, which is also its generated
    /// class index.
    #[must_use]
    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|element| element.id == id)
    }

    /// Find the topmost element whose box contains the point.
    ///
    /// Scans in reverse insertion order so the most recently added of any
    /// overlapping elements wins; box edges are inclusive. O(n) per call.
    /// Callers working in device coordinates (scrolled or transformed views)
    /// must convert to canvas coordinates first.
    #[must_use]
    pub fn element_at(&self, point: Point) -> Option<ElementId> {
        self.elements
            .iter()
            .rev()
            .find(|element| element.contains_point(point))
            .map(|element| element.id)
    }

    /// Set the current selection. Selecting does not mutate the element;
    /// `None` (a click on empty canvas) clears any current selection, as
    /// does a handle that no longer resolves.
    pub fn select(&mut self, id: Option<ElementId>) {
        self.selected = id.filter(|&id| self.get(id).is_some());
    }

    /// The currently selected element's handle, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    /// The currently selected element, if any.
    #[must_use]
    pub fn selected_element(&self) -> Option<&Element> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Apply a named property edit to an element.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::ElementNotFound`] for a stale handle, or
    /// [`BuilderError::InvalidPropertyValue`] when the value does not parse;
    /// in both cases nothing changes.
    pub fn set_property(
        &mut self,
        id: ElementId,
        property: Property,
        value: &str,
    ) -> BuilderResult<()> {
        let element = self
            .get_mut(id)
            .ok_or(BuilderError::ElementNotFound(id))?;
        property::apply(element, property, value)
    }

    /// Set the declared canvas dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidDimension`] if either value is not
    /// positive; the prior dimensions are retained.
    #[allow(clippy::cast_sign_loss)]
    pub fn resize_canvas(&mut self, width: i32, height: i32) -> BuilderResult<()> {
        if width <= 0 || height <= 0 {
            return Err(BuilderError::InvalidDimension {
                width: width.to_string(),
                height: height.to_string(),
            });
        }
        self.canvas_width = width as u32;
        self.canvas_height = height as u32;
        tracing::debug!(width, height, "canvas resized");
        Ok(())
    }

    /// Declared canvas width in pixels.
    #[must_use]
    pub const fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    /// Declared canvas height in pixels.
    #[must_use]
    pub const fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    /// Number of elements in the document.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Whether the document has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
