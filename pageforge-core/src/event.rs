//! Outbound notifications from the editor to its UI layer.

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// A notification emitted after editor operations, for the UI layer to act
/// on. Redraws are not debounced or batched: every mutation produces a
/// [`EditorEvent::DocumentChanged`] and the canvas must reflect the exact
/// current state, including the selection highlight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum EditorEvent {
    /// The document changed; the canvas must redraw from current state.
    DocumentChanged,
    /// The selection changed. Carries a copy of the selected element's
    /// current property values for the editor form, or `None` when the
    /// selection was cleared.
    SelectionChanged(Option<Element>),
}
