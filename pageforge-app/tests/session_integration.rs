//! Editor Session Integration Tests
//!
//! Drives a session the way a host UI would: palette adds, pointer
//! gestures, property form edits, canvas resizing, and export, checking the
//! notification stream the UI drains along the way.

use std::fs;

use pageforge_app::EditorSession;
use pageforge_core::{EditorEvent, ElementKind, Point};
use pageforge_export::ExportError;

#[test]
fn place_style_drag_and_export_workflow() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut session = EditorSession::new();

    // Palette: a heading, then a button; the second cascades lower.
    let heading = session.add_element(ElementKind::Heading);
    let button = session.add_element(ElementKind::Button);
    assert_eq!(
        session.document().get(heading).expect("heading").position,
        Point::new(100, 100)
    );
    assert_eq!(
        session.document().get(button).expect("button").position,
        Point::new(100, 160)
    );

    // Style the button from the property form.
    session.set_property(button, "text", "Get Started");
    session.set_property(button, "background", "#2266ff");
    session.set_property(button, "width", "200");

    // Drag the button to the right-hand side.
    session.pointer_down(Point::new(110, 170));
    session.pointer_move(Point::new(510, 370));
    session.pointer_up();
    assert_eq!(
        session.document().get(button).expect("button").position,
        Point::new(500, 360)
    );

    // Export and inspect the artifacts.
    let markup_path = dir.path().join("landing.html");
    let paths = session
        .export_code(Some(&markup_path))
        .expect("export")
        .expect("path was chosen");

    let markup = fs::read_to_string(&paths.markup).expect("markup");
    let stylesheet = fs::read_to_string(&paths.stylesheet).expect("stylesheet");
    assert!(markup.contains("<button class=\"element-1\">Get Started</button>"));
    assert!(stylesheet.contains("    left: 500px;"));
    assert!(stylesheet.contains("    top: 360px;"));
    assert!(stylesheet.contains("    width: 200px;"));
    assert!(stylesheet.contains("    background-color: #2266ff;"));
}

#[test]
fn selection_notifications_follow_the_pointer() {
    let mut session = EditorSession::new();
    let id = session.add_element(ElementKind::Container);
    session.drain_events();

    // Hit: selection payload carries the element.
    session.pointer_down(Point::new(120, 120));
    session.pointer_up();
    let events = session.drain_events();
    assert!(events.contains(&EditorEvent::DocumentChanged));
    assert!(events.iter().any(|event| matches!(
        event,
        EditorEvent::SelectionChanged(Some(element)) if element.id == id
    )));
    assert!(session.selection_form().is_some());

    // Pressing the same element again does not re-announce the selection.
    session.pointer_down(Point::new(130, 130));
    session.pointer_up();
    let events = session.drain_events();
    assert!(!events
        .iter()
        .any(|event| matches!(event, EditorEvent::SelectionChanged(_))));

    // Miss: selection clears.
    session.pointer_down(Point::new(700, 500));
    session.pointer_up();
    let events = session.drain_events();
    assert!(events.contains(&EditorEvent::SelectionChanged(None)));
    assert!(session.selection_form().is_none());
}

#[test]
fn removing_the_selected_element_announces_the_cleared_selection() {
    let mut session = EditorSession::new();
    let keep = session.add_element(ElementKind::Heading);
    let doomed = session.add_element(ElementKind::Paragraph);
    session.pointer_down(Point::new(110, 170));
    session.pointer_up();
    session.drain_events();

    // Removing an unselected element leaves the selection alone.
    session.remove(keep);
    let events = session.drain_events();
    assert_eq!(events, vec![EditorEvent::DocumentChanged]);
    assert_eq!(session.document().selected(), Some(doomed));

    session.remove_selected();
    let events = session.drain_events();
    assert!(events.contains(&EditorEvent::SelectionChanged(None)));
    assert!(session.document().is_empty());

    // Stale handle: quiet no-op, no notifications.
    session.remove(doomed);
    assert!(session.drain_events().is_empty());
}

#[test]
fn clear_resets_document_and_selection() {
    let mut session = EditorSession::new();
    session.add_element(ElementKind::Heading);
    session.pointer_down(Point::new(110, 110));
    session.pointer_up();
    session.drain_events();

    session.clear();
    let events = session.drain_events();
    assert!(events.contains(&EditorEvent::DocumentChanged));
    assert!(events.contains(&EditorEvent::SelectionChanged(None)));
    assert!(session.document().is_empty());
}

#[test]
fn toolbar_resize_accepts_text_and_rejects_junk() {
    let mut session = EditorSession::new();

    session.resize_canvas_input("1024", " 768 ").expect("resize");
    assert_eq!(session.document().canvas_width(), 1024);
    assert_eq!(session.document().canvas_height(), 768);
    session.drain_events();

    assert!(session.resize_canvas_input("wide", "768").is_err());
    assert!(session.resize_canvas_input("-5", "600").is_err());
    assert_eq!(session.document().canvas_width(), 1024, "prior width kept");
    assert!(session.drain_events().is_empty(), "no redraw on rejection");
}

#[test]
fn export_rejects_empty_document_before_any_dialog() {
    let session = EditorSession::new();
    assert!(matches!(
        session.export_code(None),
        Err(ExportError::EmptyDocument)
    ));
}

#[test]
fn cancelled_export_writes_nothing() {
    let mut session = EditorSession::new();
    session.add_element(ElementKind::Heading);

    let outcome = session.export_code(None).expect("cancel is not an error");
    assert!(outcome.is_none());
}
