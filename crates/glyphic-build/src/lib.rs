//! Icon component generation pipeline.
//!
//! Discovers SVG icons in a source directory, renders one component per icon
//! plus a barrel file, and commits the result to a freshly emptied output
//! directory.

pub mod builder;
pub mod discover;
pub mod output;

pub use builder::{check_names, BuildConfig, BuildError, BuildResult, IconBuilder};
pub use discover::{discover_icons, SourceIcon};
