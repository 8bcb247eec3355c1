//! Emitters for generated icon components.
//!
//! This crate turns normalized `<svg>` elements into framework component
//! source files and renders the barrel file that re-exports them.

pub mod format;
pub mod react;
pub mod templates;
pub mod traits;

pub use format::{check_syntax, format_source, FormatError};
pub use react::ReactTarget;
pub use templates::{ExportEntry, TemplateEngine};
pub use traits::{ComponentTarget, EmitContext, EmitError, RenderedFile, ENTRY_STEM};
