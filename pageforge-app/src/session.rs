//! The single-threaded editor session driven by UI events.

use std::collections::VecDeque;
use std::path::Path;

use pageforge_core::{
    BuilderError, BuilderResult, Document, DragController, EditorEvent, Element, ElementId,
    ElementKind, Point, Property,
};
use pageforge_export::{write_page, ExportError, ExportPaths, ExportResult, DEFAULT_TITLE};

/// One editing session: the document being built, the in-flight drag, and
/// the notifications the UI has not yet drained.
///
/// Every operation runs to completion on the caller's thread before the next
/// input event; the UI is expected to call [`EditorSession::drain_events`]
/// after each inbound call and redraw on [`EditorEvent::DocumentChanged`].
#[derive(Debug, Default)]
pub struct EditorSession {
    document: Document,
    drag: DragController,
    events: VecDeque<EditorEvent>,
}

impl EditorSession {
    /// Create a session over an empty document with the default canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The document being edited.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// The currently selected element, if any.
    #[must_use]
    pub fn selected_element(&self) -> Option<&Element> {
        self.document.selected_element()
    }

    /// The selected element's property values as JSON, ready for binding
    /// into an editor form. `None` when nothing is selected.
    #[must_use]
    pub fn selection_form(&self) -> Option<serde_json::Value> {
        self.selected_element()
            .and_then(|element| serde_json::to_value(element).ok())
    }

    /// Drain all notifications queued since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<EditorEvent> {
        self.events.drain(..).collect()
    }

    /// Add a palette element. New elements cascade down the canvas so they
    /// do not stack on each other.
    pub fn add_element(&mut self, kind: ElementKind) -> ElementId {
        let position = self.document.spawn_position();
        let id = self.document.add(kind, position);
        self.events.push_back(EditorEvent::DocumentChanged);
        id
    }

    /// Pointer press in canvas coordinates: selects the topmost element
    /// under the pointer (or clears the selection on empty canvas) and may
    /// begin a drag.
    pub fn pointer_down(&mut self, point: Point) {
        let before = self.document.selected();
        self.drag.pointer_down(&mut self.document, point);
        // Redraw either way: the selection highlight moved or vanished.
        self.events.push_back(EditorEvent::DocumentChanged);
        if self.document.selected() != before {
            self.push_selection_changed();
        }
    }

    /// Pointer motion in canvas coordinates: moves the dragged element.
    pub fn pointer_move(&mut self, point: Point) {
        if self.drag.is_dragging() {
            self.drag.pointer_move(&mut self.document, point);
            self.events.push_back(EditorEvent::DocumentChanged);
        }
    }

    /// Pointer release: ends any drag, wherever it happened.
    pub fn pointer_up(&mut self) {
        self.drag.pointer_up();
    }

    /// Apply a property edit from the editor form.
    ///
    /// A value the property cannot accept (non-numeric text in a numeric
    /// field, an unknown keyword, a stale handle) drops the edit and keeps
    /// the previous value; a debug line is the only trace. Valid state is
    /// never destroyed by a bad keystroke.
    pub fn set_property(&mut self, id: ElementId, name: &str, value: &str) {
        let outcome = name
            .parse::<Property>()
            .and_then(|property| self.document.set_property(id, property, value));
        match outcome {
            Ok(()) => self.events.push_back(EditorEvent::DocumentChanged),
            Err(error) => {
                tracing::debug!(%error, name, value, "property edit rejected");
            }
        }
    }

    /// Remove an element. A stale handle is a quiet no-op.
    pub fn remove(&mut self, id: ElementId) {
        let was_selected = self.document.selected() == Some(id);
        if self.document.remove(id) {
            self.events.push_back(EditorEvent::DocumentChanged);
            if was_selected {
                self.events.push_back(EditorEvent::SelectionChanged(None));
            }
        }
    }

    /// Remove the selected element, if any. This is the Delete-key path.
    pub fn remove_selected(&mut self) {
        if let Some(id) = self.document.selected() {
            self.remove(id);
        }
    }

    /// Remove every element. Any "are you sure" prompt is the UI's concern;
    /// calling this clears unconditionally.
    pub fn clear(&mut self) {
        let had_selection = self.document.selected().is_some();
        self.document.clear();
        self.events.push_back(EditorEvent::DocumentChanged);
        if had_selection {
            self.events.push_back(EditorEvent::SelectionChanged(None));
        }
    }

    /// Set the declared canvas dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidDimension`] if either value is not
    /// positive. The document keeps its prior dimensions; the UI should
    /// report the error and keep showing them.
    pub fn resize_canvas(&mut self, width: i32, height: i32) -> BuilderResult<()> {
        self.document.resize_canvas(width, height)?;
        self.events.push_back(EditorEvent::DocumentChanged);
        Ok(())
    }

    /// Set the canvas dimensions from raw toolbar text.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidDimension`] if either field is not a
    /// positive integer.
    pub fn resize_canvas_input(&mut self, width: &str, height: &str) -> BuilderResult<()> {
        match (width.trim().parse::<i32>(), height.trim().parse::<i32>()) {
            (Ok(w), Ok(h)) => self.resize_canvas(w, h),
            _ => Err(BuilderError::InvalidDimension {
                width: width.to_string(),
                height: height.to_string(),
            }),
        }
    }

    /// Export the document as a markup/stylesheet file pair.
    ///
    /// `markup_path` of `None` means the user cancelled the save dialog:
    /// nothing is written and `Ok(None)` comes back without an error.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::EmptyDocument`] when there is nothing to
    /// export (checked before the dialog outcome is honored), or the I/O
    /// error from writing the pair.
    pub fn export_code(&self, markup_path: Option<&Path>) -> ExportResult<Option<ExportPaths>> {
        if self.document.is_empty() {
            return Err(ExportError::EmptyDocument);
        }
        match markup_path {
            Some(path) => write_page(&self.document, path, DEFAULT_TITLE).map(Some),
            None => {
                tracing::debug!("export cancelled by user");
                Ok(None)
            }
        }
    }

    fn push_selection_changed(&mut self) {
        let payload = self.document.selected_element().cloned();
        self.events
            .push_back(EditorEvent::SelectionChanged(payload));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_queues_a_redraw() {
        let mut session = EditorSession::new();
        session.add_element(ElementKind::Heading);
        assert_eq!(
            session.drain_events(),
            vec![EditorEvent::DocumentChanged]
        );
        assert!(session.drain_events().is_empty(), "drain empties the queue");
    }

    #[test]
    fn press_on_element_reports_selection_with_payload() {
        let mut session = EditorSession::new();
        let id = session.add_element(ElementKind::Button);
        session.drain_events();

        session.pointer_down(Point::new(110, 110));
        let events = session.drain_events();
        assert_eq!(events[0], EditorEvent::DocumentChanged);
        match &events[1] {
            EditorEvent::SelectionChanged(Some(element)) => assert_eq!(element.id, id),
            other => panic!("expected selection payload, got {other:?}"),
        }
    }

    #[test]
    fn invalid_property_edit_is_swallowed() {
        let mut session = EditorSession::new();
        let id = session.add_element(ElementKind::Paragraph);
        session.drain_events();

        session.set_property(id, "width", "lots");
        assert!(session.drain_events().is_empty(), "no redraw for a rejected edit");
        assert_eq!(
            session.document().get(id).expect("element").width,
            pageforge_core::DEFAULT_WIDTH
        );
    }
}
