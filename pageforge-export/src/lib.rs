//! # PageForge Export
//!
//! Turns a [`pageforge_core::Document`] into static webpage code: a markup
//! file and a companion stylesheet, generated together in one pass so the
//! `element-<index>` class names agree between the two artifacts, plus the
//! file-pair writer with timestamped default filenames.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod codegen;
pub mod error;
pub mod writer;

pub use codegen::{CodegenConfig, GeneratedPage, PageGenerator, DEFAULT_TITLE};
pub use error::{ExportError, ExportResult};
pub use writer::{default_basename, write_page, ExportPaths};
