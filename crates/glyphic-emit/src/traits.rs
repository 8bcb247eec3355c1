//! Trait definitions for component targets.

use glyphic_svg::{IconName, SvgElement};

use crate::format::FormatError;

/// File stem of the barrel file.
pub const ENTRY_STEM: &str = "index";

/// Settings shared by every generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitContext {
    /// Module path of the shared prop type, relative to the output directory
    pub props_import: String,

    /// Name of the shared prop type
    pub props_type: String,

    /// Module path of the wrapper component, relative to the output directory
    pub wrapper_import: String,

    /// Local name of the wrapper component
    pub wrapper_name: String,

    /// Extension of generated component files
    pub component_ext: String,

    /// Extension of the barrel file
    pub entry_ext: String,
}

impl Default for EmitContext {
    fn default() -> Self {
        Self {
            props_import: "../icon/type".to_string(),
            props_type: "IconProps".to_string(),
            wrapper_import: "../icon".to_string(),
            wrapper_name: "Icon".to_string(),
            component_ext: "tsx".to_string(),
            entry_ext: "ts".to_string(),
        }
    }
}

impl EmitContext {
    /// Output file name for a component.
    pub fn component_file(&self, name: &IconName) -> String {
        format!("{}.{}", name.filename, self.component_ext)
    }

    /// Output file name for the barrel file.
    pub fn entry_file(&self) -> String {
        format!("{}.{}", ENTRY_STEM, self.entry_ext)
    }

    /// Identifiers already bound by the component preamble.
    pub fn reserved_names(&self) -> [&str; 2] {
        [self.wrapper_name.as_str(), self.props_type.as_str()]
    }
}

/// A generated file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// File name inside the output directory
    pub file_name: String,

    /// Formatted source text
    pub contents: String,
}

/// Errors that can occur while rendering a file.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("Template error: {0}")]
    Template(String),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),
}

/// A UI framework that icon components are generated for.
pub trait ComponentTarget: Send + Sync {
    /// Framework identifier (e.g., "react")
    fn name(&self) -> &'static str;

    /// Render one component wrapping a normalized `<svg>` element.
    fn render_component(
        &self,
        name: &IconName,
        svg: &SvgElement,
        ctx: &EmitContext,
    ) -> Result<RenderedFile, EmitError>;

    /// Render the barrel file re-exporting every component, in order.
    fn render_entry(&self, names: &[IconName], ctx: &EmitContext)
        -> Result<RenderedFile, EmitError>;
}
