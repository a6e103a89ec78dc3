//! # PageForge App
//!
//! The editor session facade a UI layer drives: one [`EditorSession`] owns
//! the document, the in-flight drag, and the queue of outbound notifications
//! the host UI drains to know when to redraw or refresh its property form.
//!
//! The host stays responsible for everything visual (widgets, dialogs,
//! actual canvas painting); this crate only turns its events into document
//! mutations and notifications.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod session;

pub use session::EditorSession;

/// Initialize tracing for a PageForge binary.
///
/// Respects `RUST_LOG`; falls back to `info` when unset. Safe to call more
/// than once; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
