//! React/TSX target.

use glyphic_svg::{IconName, SvgElement};
use oxc_span::SourceType;

use crate::format::{check_syntax, format_source};
use crate::templates::{ComponentContext, ExportEntry, TemplateEngine};
use crate::traits::{ComponentTarget, EmitContext, EmitError, RenderedFile};

/// Barrel contents when there is nothing to re-export.
const EMPTY_MODULE: &str = "export {}\n";

/// Generates typed `React.FC` components around a shared wrapper.
#[derive(Default)]
pub struct ReactTarget {
    templates: TemplateEngine,
}

impl ReactTarget {
    /// Create a new React target.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ComponentTarget for ReactTarget {
    fn name(&self) -> &'static str {
        "react"
    }

    fn render_component(
        &self,
        name: &IconName,
        svg: &SvgElement,
        ctx: &EmitContext,
    ) -> Result<RenderedFile, EmitError> {
        let markup = svg.outer_html();
        let source = self
            .templates
            .render_component(
                "react/component.tsx",
                &ComponentContext {
                    component_name: &name.component_name,
                    markup: &markup,
                    props_import: &ctx.props_import,
                    props_type: &ctx.props_type,
                    wrapper_import: &ctx.wrapper_import,
                    wrapper_name: &ctx.wrapper_name,
                },
            )
            .map_err(|e| EmitError::Template(e.to_string()))?;

        let contents = format_source(&source)?;
        check_syntax(&contents, SourceType::tsx())?;

        Ok(RenderedFile {
            file_name: ctx.component_file(name),
            contents,
        })
    }

    fn render_entry(
        &self,
        names: &[IconName],
        ctx: &EmitContext,
    ) -> Result<RenderedFile, EmitError> {
        let exports: Vec<ExportEntry> = names
            .iter()
            .map(|n| ExportEntry {
                component_name: n.component_name.clone(),
                filename: n.filename.clone(),
            })
            .collect();

        let source = self
            .templates
            .render_entry("react/entry.ts", &exports)
            .map_err(|e| EmitError::Template(e.to_string()))?;

        let mut contents = format_source(&source)?;
        if contents.is_empty() {
            contents = EMPTY_MODULE.to_string();
        }
        check_syntax(&contents, SourceType::ts())?;

        Ok(RenderedFile {
            file_name: ctx.entry_file(),
            contents,
        })
    }
}
