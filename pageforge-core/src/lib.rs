//! # PageForge Core
//!
//! Core editing model for the PageForge visual webpage builder: the element
//! and document data model, point-to-element hit-testing, the single-element
//! selection, and the pointer-driven drag interaction.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               pageforge-core                │
//! ├─────────────────────────────────────────────┤
//! │  Document        │  DragController          │
//! │  - Elements      │  - Idle / Dragging       │
//! │  - Canvas size   │  - Grab offset           │
//! │  - Hit-testing   │  - Selection updates     │
//! ├─────────────────────────────────────────────┤
//! │  Element / Style │  Property dispatch       │
//! │  - Kind, box     │  - Closed name set       │
//! │  - Text, colors  │  - Reject bad values     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Everything is single-threaded and synchronous: the UI layer calls in, the
//! document mutates, and an [`EditorEvent`] tells the UI to redraw.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod interaction;
pub mod property;
pub mod style;

pub use document::{Document, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
pub use element::{Element, ElementId, ElementKind, Point, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use error::{BuilderError, BuilderResult};
pub use event::EditorEvent;
pub use interaction::{DragController, DragState};
pub use property::Property;
pub use style::{FontStyle, FontWeight, Style, TextAlign};

/// Core crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
