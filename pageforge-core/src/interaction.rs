//! Pointer-driven drag interaction.
//!
//! A two-state machine: Idle until a press hits an element, Dragging until
//! the matching release. The grab offset recorded at press time keeps the
//! element pinned under the pointer where it was grabbed, rather than
//! snapping its top-left corner to the pointer.

use crate::document::Document;
use crate::element::{ElementId, Point};

/// Progress of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    Idle,
    /// An element is being dragged.
    Dragging {
        /// Handle of the dragged element.
        element: ElementId,
        /// Offset from the element's top-left corner to the press point.
        grab_offset: Point,
    },
}

/// Translates pointer events into selection changes and element moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Create an idle controller.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Handle a pointer press in canvas coordinates.
    ///
    /// Hit-tests the document: a hit selects the element and starts a drag
    /// with the grab offset recorded; a miss clears the selection and leaves
    /// the controller idle. Returns the hit, if any.
    pub fn pointer_down(&mut self, document: &mut Document, point: Point) -> Option<ElementId> {
        let hit = document.element_at(point);
        document.select(hit);
        self.state = hit
            .and_then(|id| document.get(id))
            .map_or(DragState::Idle, |element| DragState::Dragging {
                element: element.id,
                grab_offset: Point::new(
                    point.x - element.position.x,
                    point.y - element.position.y,
                ),
            });
        hit
    }

    /// Handle pointer motion in canvas coordinates.
    ///
    /// While dragging, moves the element so the grabbed point stays under
    /// the pointer; positions are never clamped and may go negative.
    /// Repeating the same point is idempotent. If the dragged element has
    /// been removed from under the drag, moves are no-ops and the next
    /// release ends the gesture normally.
    pub fn pointer_move(&mut self, document: &mut Document, point: Point) {
        if let DragState::Dragging {
            element,
            grab_offset,
        } = self.state
        {
            if let Some(dragged) = document.get_mut(element) {
                dragged.position = Point::new(point.x - grab_offset.x, point.y - grab_offset.y);
            }
        }
    }

    /// Handle a pointer release: unconditionally back to idle, regardless of
    /// where the release happened. No drop validation, snapping, or
    /// collision resolution.
    pub fn pointer_up(&mut self) {
        if self.is_dragging() {
            tracing::debug!("drag ended");
        }
        self.state = DragState::Idle;
    }

    /// The current drag state.
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;

    #[test]
    fn press_on_element_selects_and_starts_drag() {
        let mut doc = Document::new();
        let id = doc.add(ElementKind::Heading, Point::new(100, 100));
        let mut drag = DragController::new();

        let hit = drag.pointer_down(&mut doc, Point::new(110, 110));
        assert_eq!(hit, Some(id));
        assert_eq!(doc.selected(), Some(id));
        assert_eq!(
            drag.state(),
            DragState::Dragging {
                element: id,
                grab_offset: Point::new(10, 10),
            }
        );
    }

    #[test]
    fn press_on_empty_canvas_clears_selection() {
        let mut doc = Document::new();
        let id = doc.add(ElementKind::Heading, Point::new(100, 100));
        doc.select(Some(id));
        let mut drag = DragController::new();

        let hit = drag.pointer_down(&mut doc, Point::new(500, 500));
        assert_eq!(hit, None);
        assert_eq!(doc.selected(), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn drag_preserves_grab_offset() {
        let mut doc = Document::new();
        let id = doc.add(ElementKind::Heading, Point::new(100, 100));
        let mut drag = DragController::new();

        drag.pointer_down(&mut doc, Point::new(110, 110));
        drag.pointer_move(&mut doc, Point::new(300, 300));
        drag.pointer_up();

        assert_eq!(doc.get(id).expect("element").position, Point::new(290, 290));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn drag_is_translation_invariant_over_intermediate_points() {
        let mut doc = Document::new();
        let id = doc.add(ElementKind::Container, Point::new(40, 60));
        let mut drag = DragController::new();

        drag.pointer_down(&mut doc, Point::new(50, 70));
        for point in [
            Point::new(0, 0),
            Point::new(-200, 500),
            Point::new(123, -456),
            Point::new(75, 95),
        ] {
            drag.pointer_move(&mut doc, point);
        }
        drag.pointer_up();

        // Final position depends only on the last point and the grab offset.
        assert_eq!(doc.get(id).expect("element").position, Point::new(65, 85));
    }

    #[test]
    fn repeated_moves_to_same_point_are_idempotent() {
        let mut doc = Document::new();
        let id = doc.add(ElementKind::Button, Point::new(0, 0));
        let mut drag = DragController::new();

        drag.pointer_down(&mut doc, Point::new(5, 5));
        drag.pointer_move(&mut doc, Point::new(50, 50));
        let once = doc.get(id).expect("element").position;
        drag.pointer_move(&mut doc, Point::new(50, 50));
        assert_eq!(doc.get(id).expect("element").position, once);
    }

    #[test]
    fn unclamped_drag_allows_negative_positions() {
        let mut doc = Document::new();
        let id = doc.add(ElementKind::Paragraph, Point::new(10, 10));
        let mut drag = DragController::new();

        drag.pointer_down(&mut doc, Point::new(15, 15));
        drag.pointer_move(&mut doc, Point::new(-100, -100));

        assert_eq!(
            doc.get(id).expect("element").position,
            Point::new(-105, -105)
        );
    }

    #[test]
    fn moves_after_element_removal_are_no_ops() {
        let mut doc = Document::new();
        let id = doc.add(ElementKind::Heading, Point::new(100, 100));
        let mut drag = DragController::new();

        drag.pointer_down(&mut doc, Point::new(110, 110));
        doc.remove(id);

        drag.pointer_move(&mut doc, Point::new(300, 300));
        assert!(drag.is_dragging(), "state persists until release");

        drag.pointer_up();
        assert!(!drag.is_dragging());
    }

    #[test]
    fn release_without_drag_is_harmless() {
        let mut drag = DragController::new();
        drag.pointer_up();
        assert!(!drag.is_dragging());
    }
}
