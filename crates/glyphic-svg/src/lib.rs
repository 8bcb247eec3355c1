//! SVG icon handling for glyphic.
//!
//! This crate derives component identifiers from icon file names and rewrites
//! the root `<svg>` element of an icon into the sizing and color conventions
//! used by generated components.

pub mod element;
pub mod name;
pub mod normalize;

pub use element::SvgElement;
pub use name::{is_valid_identifier, to_pascal_case, IconName};
pub use normalize::{normalize, parse_svg, SvgError};
